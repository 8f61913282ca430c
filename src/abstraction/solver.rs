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

//! This module defines the `Solver` trait.

use crate::{Instance, Solution};

/// This enumeration groups the errors a solver invocation itself can
/// produce. Search based solvers never fail on a well formed instance,
/// but the tabulation based solver must refuse to allocate a table whose
/// footprint would exhaust memory: failing fast with a clear diagnostic
/// beats an ambiguous crash halfway through the allocation.
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    /// The dp table the instance calls for is larger than the engine is
    /// willing to allocate
    #[error("dp table of {cells} cells exceeds the maximum of {limit}")]
    TableTooLarge { cells: u128, limit: usize },
}

/// This is the solver abstraction. It is implemented by every structure
/// standing for one of the algorithms able to solve a knapsack instance
/// to optimality. Each invocation is a pure function of its input: a
/// solver holds no mutable state across calls, processes exactly one
/// instance to completion on a single thread, and performs no io during
/// the search itself.
pub trait Solver {
    /// The human readable name of the algorithm, as reported on the
    /// `Algoritmo:` line of the executables' output.
    fn name(&self) -> &'static str;

    /// This method orders the solver to search for the optimal solution
    /// of the given instance. All implementations are exact: on success,
    /// the returned solution carries the true maximum value achievable
    /// within the instance capacity (and possibly the subset of item
    /// indices achieving it). Every implementation must report the same
    /// `best_value` as the others for the same instance; this agreement
    /// is the primary correctness oracle of the test suite.
    fn solve(&self, instance: &Instance) -> Result<Solution, SolveError>;
}
