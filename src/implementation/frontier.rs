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

//! This module provides the frontier of the branch-and-bound solver: the
//! priority queue which stores all the nodes remaining to explore, and
//! pops them in descending upper bound order.

use std::cmp::Ordering;

use binary_heap_plus::BinaryHeap;
use compare::Compare;

/// One open node of the branch-and-bound search tree. The node stands for
/// a partial decision over the first `depth` items **in density order**
/// (the branch-and-bound solver re-ranks the items before searching);
/// `taken` however records *original* input indices, so a completed node
/// can be reported as-is.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Node {
    /// How many density-ranked items have been decided.
    pub depth: usize,
    /// The accumulated weight of the items taken so far.
    pub weight: usize,
    /// The accumulated value of the items taken so far.
    pub value: usize,
    /// An upper bound on the value of any completion of this node.
    pub bound: usize,
    /// The original indices of the items taken so far.
    pub taken: Vec<usize>,
}

/// The comparator ranking open nodes in best-first order: the node with
/// the greatest upper bound wins, and among equal bounds the one with the
/// greatest accumulated value (the deepest committed profit) is preferred.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxBound;

impl Compare<Node> for MaxBound {
    fn compare(&self, l: &Node, r: &Node) -> Ordering {
        l.bound.cmp(&r.bound).then(l.value.cmp(&r.value))
    }
}

/// The branch-and-bound frontier: a max-heap of open nodes ordered by
/// [`MaxBound`]. The solver relies on the guarantee that nodes pop in
/// descending upper bound order, which is what lets it prune every node
/// whose bound no longer beats the incumbent.
pub struct Frontier {
    heap: BinaryHeap<Node, MaxBound>,
}

impl Frontier {
    /// Creates a new, empty frontier.
    pub fn new() -> Self {
        Self { heap: BinaryHeap::from_vec_cmp(vec![], MaxBound) }
    }

    /// This is how you push a node onto the frontier.
    pub fn push(&mut self, node: Node) {
        self.heap.push(node)
    }

    /// This method yields the open node with the greatest upper bound.
    pub fn pop(&mut self) -> Option<Node> {
        self.heap.pop()
    }

    /// Yields the number of open nodes.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true iff the frontier is empty (len == 0).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Frontier {
    fn default() -> Self {
        Self::new()
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
