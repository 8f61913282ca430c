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

//! This module defines the most basic data types that are used throughout
//! all the code of the engine: the items a knapsack instance is made of,
//! and the solution produced by a solver invocation.

// ----------------------------------------------------------------------------
// --- ITEM -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// One item of a knapsack instance. An item carries no identity of its
/// own: it is identified by its position in the input order, which is
/// what makes the traversal order of the search based solvers (and hence
/// their tie-breaking) reproducible.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Item {
    /// How much of the knapsack capacity this item consumes when taken.
    pub weight: usize,
    /// The profit collected when this item is taken.
    pub value: usize,
}

// ----------------------------------------------------------------------------
// --- SOLUTION ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The outcome of one solver invocation.
///
/// All three solvers are exact: `best_value` is the maximum total value of
/// any subset of items whose total weight does not exceed the capacity,
/// never an approximation. When a solver reconstructs the subset achieving
/// that value, `items` holds the original (0-based) item indices in
/// ascending order; solvers that only compute the scalar leave it `None`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Solution {
    /// The optimal value.
    pub best_value: usize,
    /// The indices of the items making up an optimal subset, if the
    /// solver reconstructed one.
    pub items: Option<Vec<usize>>,
}

impl Solution {
    /// Creates a solution carrying only the optimal value.
    pub fn value_only(best_value: usize) -> Self {
        Self { best_value, items: None }
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_solution {
    use crate::Solution;

    #[test]
    fn value_only_carries_no_item_set() {
        let solution = Solution::value_only(42);
        assert_eq!(42, solution.best_value);
        assert!(solution.items.is_none());
    }
}
