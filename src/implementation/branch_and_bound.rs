// Copyright 2025 the knapsack-solvers developers
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the branch-and-bound solver: the same decision
//! tree as backtracking, but explored best-first and pruned with a
//! fractional relaxation upper bound over density-ranked items.

use std::cmp::Ordering;

use crate::{Frontier, Instance, Item, Node, Solution, SolveError, Solver};

/// An item re-ranked by value density, remembering its original input
/// index so that completed nodes report positions in the caller's order.
#[derive(Debug, Clone, Copy)]
struct Ranked {
    weight: usize,
    value: usize,
    index: usize,
}

/// Solves the knapsack problem by best-first branch-and-bound.
///
/// The algorithm adds two ingredients to plain backtracking:
///
/// * the items are ranked once, before the search, by decreasing value
///   density (value per unit of weight). The ranking is stable: ties keep
///   their input order, and zero-weight items rank first (their density
///   is infinite -- they never worsen feasibility, so every optimal
///   subset contains them when their value is positive);
/// * before a branch is opened, an upper bound on the best value
///   reachable from it is computed by fractional relaxation: remaining
///   ranked items are greedily packed whole while they fit, and the first
///   one that does not fit contributes the fraction of its value that the
///   residual capacity can pay for. Any branch whose bound does not beat
///   the incumbent is pruned, both when it would be pushed and (because
///   the incumbent may have improved in the meantime) when it pops.
///
/// Open branches live on a max-heap popping the greatest bound first, so
/// the search always extends the most promising node. The reported value
/// is identical to the other solvers; only the number of visited nodes
/// differs (worst case remains exponential, typical case prunes most of
/// the tree). All bound arithmetic is exact integer arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct BranchAndBound;

impl Solver for BranchAndBound {
    fn name(&self) -> &'static str {
        "Branch and Bound"
    }

    fn solve(&self, instance: &Instance) -> Result<Solution, SolveError> {
        let n = instance.nb_items();
        let capacity = instance.capacity;
        let ranked = rank_by_density(&instance.items);

        // The empty subset is always feasible, so it is the initial incumbent.
        let mut best_value = 0_usize;
        let mut best_taken = vec![];

        let mut frontier = Frontier::new();
        frontier.push(Node {
            depth: 0,
            weight: 0,
            value: 0,
            bound: upper_bound(&ranked, capacity, 0, 0, 0),
            taken: vec![],
        });

        while let Some(node) = frontier.pop() {
            // The incumbent may have improved since this node was pushed.
            if node.bound <= best_value {
                continue;
            }
            if node.depth == n {
                if node.value > best_value {
                    best_value = node.value;
                    best_taken = node.taken;
                }
                continue;
            }

            let item = ranked[node.depth];

            if item.weight <= capacity - node.weight {
                let weight = node.weight + item.weight;
                let value = node.value + item.value;
                let bound = upper_bound(&ranked, capacity, node.depth + 1, weight, value);
                if bound > best_value {
                    let mut taken = node.taken.clone();
                    taken.push(item.index);
                    frontier.push(Node { depth: node.depth + 1, weight, value, bound, taken });
                }
            }

            let bound = upper_bound(&ranked, capacity, node.depth + 1, node.weight, node.value);
            if bound > best_value {
                frontier.push(Node {
                    depth: node.depth + 1,
                    weight: node.weight,
                    value: node.value,
                    bound,
                    taken: node.taken,
                });
            }
        }

        best_taken.sort_unstable();
        Ok(Solution { best_value, items: Some(best_taken) })
    }
}

/// Ranks the items by decreasing value density, remembering original
/// positions. The sort is stable so that equal densities keep their input
/// order, which makes the search (and its tie-breaking) reproducible.
fn rank_by_density(items: &[Item]) -> Vec<Ranked> {
    let mut ranked = items
        .iter()
        .enumerate()
        .map(|(index, item)| Ranked { weight: item.weight, value: item.value, index })
        .collect::<Vec<_>>();
    ranked.sort_by(|a, b| cmp_density(b, a));
    ranked
}

/// Compares two items by value density using exact integer cross
/// multiplication (no floating point, hence no rounding hazard). A
/// zero-weight item has infinite density and compares greater than any
/// weighted one.
fn cmp_density(a: &Ranked, b: &Ranked) -> Ordering {
    match (a.weight, b.weight) {
        (0, 0) => Ordering::Equal,
        (0, _) => Ordering::Greater,
        (_, 0) => Ordering::Less,
        (wa, wb) => (a.value as u128 * wb as u128).cmp(&(b.value as u128 * wa as u128)),
    }
}

/// Computes the fractional relaxation bound for the node whose first
/// `depth` ranked items are decided: the committed value, plus the whole
/// remaining items while they fit, plus the floored fractional
/// contribution of the first item that does not fit. Flooring keeps the
/// bound integral and still valid, since every completion has an integral
/// value. Zero-weight items always fit whole, so the division below never
/// sees a zero weight.
fn upper_bound(
    ranked: &[Ranked],
    capacity: usize,
    depth: usize,
    weight: usize,
    value: usize,
) -> usize {
    let mut bound = value;
    let mut room = capacity - weight;

    for item in &ranked[depth..] {
        if item.weight <= room {
            room -= item.weight;
            bound += item.value;
        } else {
            bound += (room as u128 * item.value as u128 / item.weight as u128) as usize;
            break;
        }
    }
    bound
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
