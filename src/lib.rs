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

//! # Knapsack solvers
//! This crate provides three exact solvers for the 0/1 knapsack problem,
//! all operating on one shared problem representation:
//!
//! * **Dynamic programming**: bottom-up tabulation over
//!   (item index, residual capacity). Pseudo-polynomial `O(n·W)` time and
//!   space; this is the guaranteed-fast path and serves as the ground
//!   truth oracle in the test suite.
//! * **Backtracking**: plain depth-first inclusion/exclusion of the items
//!   in input order, with no pruning besides capacity feasibility. It is
//!   the `O(2^n)` reference point against which the pruned search is
//!   measured.
//! * **Branch-and-bound**: best-first search over the same decision tree,
//!   pruned with a fractional-relaxation upper bound over items ordered
//!   by decreasing value density.
//!
//! The three solvers always report the same optimal value for the same
//! instance; they differ only in how much of the search space they visit.
//!
//! ## Quick example
//! ```
//! use knapsack::*;
//!
//! let instance = Instance::new(7, vec![
//!     Item { weight: 2, value: 3 },
//!     Item { weight: 3, value: 4 },
//!     Item { weight: 4, value: 5 },
//!     Item { weight: 5, value: 6 },
//! ]);
//!
//! let solution = DynamicProgramming.solve(&instance).unwrap();
//! assert_eq!(9, solution.best_value);
//! ```
//!
//! ## Executables
//! The crate ships one executable per algorithm
//! (`run_dynamic_programming`, `run_backtracking`, `run_branch_and_bound`).
//! Each takes the path to an instance file as its single argument and
//! prints, among other lines, `Valor máximo: <integer>` on stdout. That
//! line is the contract relied upon by the external orchestration layer
//! and must never change shape.

mod common;
mod instance;
mod abstraction;
mod implementation;
pub mod cli;

pub use common::*;
pub use instance::*;
pub use abstraction::*;
pub use implementation::*;
