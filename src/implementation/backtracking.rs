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

//! This module provides the plain backtracking solver: an exhaustive
//! depth-first exploration of the include/exclude decision tree.

use crate::{Instance, Solution, SolveError, Solver};

/// One pending subtree of the depth-first traversal: the partial decision
/// over the first `next` items, with the accumulated weight and value of
/// the items taken so far.
#[derive(Debug, Clone)]
struct Frame {
    next: usize,
    weight: usize,
    value: usize,
    taken: Vec<usize>,
}

/// Solves the knapsack problem by exhaustive depth-first recursion over
/// the items in input order: at each item, the "include" branch (only
/// when the remaining capacity allows it) and the "exclude" branch are
/// both explored; a leaf where all items have been decided is compared
/// against the best subset found so far.
///
/// Capacity feasibility is the *only* pruning this solver performs.
/// Deliberately so: it is the `O(2^n)` reference point that exhibits the
/// cost of unpruned search, which the upper bound pruning of
/// [`crate::BranchAndBound`] is measured against. The engine never
/// truncates the search depth on its own; keeping `n` small enough for
/// this solver to finish is the caller's policy.
///
/// The traversal is iterative over an explicit stack, so the recursion
/// depth never depends on `n` and large instances cannot exhaust the call
/// stack. The include branch of an item is explored before its exclude
/// branch and the incumbent is only replaced on strict improvement, which
/// makes the reported subset deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct Backtracking;

impl Solver for Backtracking {
    fn name(&self) -> &'static str {
        "Backtracking"
    }

    fn solve(&self, instance: &Instance) -> Result<Solution, SolveError> {
        let n = instance.nb_items();
        let capacity = instance.capacity;

        // The empty subset is always feasible, so it is the initial incumbent.
        let mut best_value = 0_usize;
        let mut best_taken = vec![];

        let mut stack = vec![Frame { next: 0, weight: 0, value: 0, taken: vec![] }];
        while let Some(frame) = stack.pop() {
            if frame.next == n {
                if frame.value > best_value {
                    best_value = frame.value;
                    best_taken = frame.taken;
                }
                continue;
            }

            let item = instance.items[frame.next];
            let Frame { next, weight, value, taken } = frame;

            if item.weight <= capacity - weight {
                let mut with_item = taken.clone();
                with_item.push(next);
                // Pushed exclude-first so that the include branch pops first.
                stack.push(Frame { next: next + 1, weight, value, taken });
                stack.push(Frame {
                    next: next + 1,
                    weight: weight + item.weight,
                    value: value + item.value,
                    taken: with_item,
                });
            } else {
                stack.push(Frame { next: next + 1, weight, value, taken });
            }
        }

        Ok(Solution { best_value, items: Some(best_taken) })
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_backtracking {
    use crate::*;

    #[test]
    fn it_finds_the_documented_optimum() {
        let instance = Instance::new(7, vec![
            Item { weight: 2, value: 3 },
            Item { weight: 3, value: 4 },
            Item { weight: 4, value: 5 },
            Item { weight: 5, value: 6 },
        ]);
        let solution = Backtracking.solve(&instance).unwrap();
        assert_eq!(9, solution.best_value);
        // Two subsets achieve 9; include-first traversal with strict
        // improvement lands on {0, 3} first and keeps it.
        assert_eq!(Some(vec![0, 3]), solution.items);
    }

    #[test]
    fn an_empty_instance_yields_zero() {
        let solution = Backtracking.solve(&Instance::new(4, vec![])).unwrap();
        assert_eq!(0, solution.best_value);
        assert_eq!(Some(vec![]), solution.items);
    }

    #[test]
    fn nothing_fits_in_a_zero_capacity_sack() {
        let instance = Instance::new(0, vec![
            Item { weight: 3, value: 10 },
            Item { weight: 1, value: 10 },
            Item { weight: 2, value: 10 },
        ]);
        let solution = Backtracking.solve(&instance).unwrap();
        assert_eq!(0, solution.best_value);
        assert_eq!(Some(vec![]), solution.items);
    }

    #[test]
    fn a_weightless_item_fits_even_in_a_zero_capacity_sack() {
        let instance = Instance::new(0, vec![Item { weight: 0, value: 5 }]);
        let solution = Backtracking.solve(&instance).unwrap();
        assert_eq!(5, solution.best_value);
        assert_eq!(Some(vec![0]), solution.items);
    }

    #[test]
    fn the_reported_subset_is_feasible_and_consistent() {
        let instance = Instance::new(11, vec![
            Item { weight: 5, value: 4 },
            Item { weight: 4, value: 6 },
            Item { weight: 6, value: 8 },
            Item { weight: 3, value: 3 },
            Item { weight: 2, value: 1 },
        ]);
        let solution = Backtracking.solve(&instance).unwrap();
        let chosen = solution.items.unwrap();

        let weight: usize = chosen.iter().map(|&i| instance.items[i].weight).sum();
        let value: usize = chosen.iter().map(|&i| instance.items[i].value).sum();
        assert!(weight <= instance.capacity);
        assert_eq!(solution.best_value, value);
    }

    #[test]
    fn it_agrees_with_the_tabulation_oracle() {
        let instance = Instance::new(15, vec![
            Item { weight: 1, value: 2 },
            Item { weight: 12, value: 17 },
            Item { weight: 5, value: 9 },
            Item { weight: 7, value: 11 },
            Item { weight: 4, value: 4 },
            Item { weight: 3, value: 5 },
        ]);
        let oracle = DynamicProgramming.solve(&instance).unwrap();
        let solution = Backtracking.solve(&instance).unwrap();
        assert_eq!(oracle.best_value, solution.best_value);
    }
}
