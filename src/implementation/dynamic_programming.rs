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

//! This module provides the tabulation based solvers: the classic 2-d
//! dynamic program with item reconstruction, and a memory compressed
//! variant that keeps a single rolling row and only reports the scalar
//! optimum.

use crate::{Instance, Solution, SolveError, Solver};

/// The largest number of table cells either tabulation solver is willing
/// to allocate. The check happens ahead of the allocation so that an
/// oversized `n·W` product yields a clean [`SolveError::TableTooLarge`]
/// instead of an ambiguous abort inside the allocator.
pub const MAX_TABLE_CELLS: usize = 1 << 31;

/// Solves the knapsack problem by bottom-up tabulation over
/// (item index, residual capacity).
///
/// The table cell `T[i][w]` holds the best value achievable using only
/// the first `i` items within a capacity budget of `w`:
///
/// * `T[0][w] = 0` for every `w`;
/// * `T[i][w] = T[i-1][w]` when item `i-1` does not fit in `w`;
/// * `T[i][w] = max(T[i-1][w], T[i-1][w - weight] + value)` otherwise.
///
/// `T[n][W]` is the optimum, and a backward traceback comparing `T[i][w]`
/// against `T[i-1][w]` recovers one optimal subset. Time and space are
/// both `O(n·W)`: pseudo polynomial, and the guaranteed fast path among
/// the three algorithms. All arithmetic is exact integer arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicProgramming;

impl Solver for DynamicProgramming {
    fn name(&self) -> &'static str {
        "Programação Dinâmica"
    }

    fn solve(&self, instance: &Instance) -> Result<Solution, SolveError> {
        let n = instance.nb_items();
        let capacity = instance.capacity;
        let cols = table_width(n as u128 + 1, capacity)?;

        let mut table = vec![0_usize; (n + 1) * cols];
        for (i, item) in instance.items.iter().enumerate() {
            let (prev, curr) = table.split_at_mut((i + 1) * cols);
            let prev = &prev[i * cols..];
            let curr = &mut curr[..cols];

            for w in 0..cols {
                let mut best = prev[w];
                if item.weight <= w {
                    best = best.max(prev[w - item.weight] + item.value);
                }
                curr[w] = best;
            }
        }

        // Backward traceback: a cell differing from the one right above
        // it means the corresponding item was taken.
        let mut chosen = vec![];
        let mut w = capacity;
        for i in (1..=n).rev() {
            if table[i * cols + w] != table[(i - 1) * cols + w] {
                chosen.push(i - 1);
                w -= instance.items[i - 1].weight;
            }
        }
        chosen.reverse();

        Ok(Solution { best_value: table[n * cols + capacity], items: Some(chosen) })
    }
}

/// The memory compressed tabulation variant: a single row of `W+1` cells
/// is updated right-to-left for each item (right-to-left so that one item
/// is never counted twice within the same pass). It reports the same
/// optimum as [`DynamicProgramming`] but keeps no traceback information,
/// hence a true `O(W)` space footprint and no reconstructed subset.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompressedDynamicProgramming;

impl Solver for CompressedDynamicProgramming {
    fn name(&self) -> &'static str {
        "Programação Dinâmica Otimizada"
    }

    fn solve(&self, instance: &Instance) -> Result<Solution, SolveError> {
        let cols = table_width(1, instance.capacity)?;

        let mut row = vec![0_usize; cols];
        for item in instance.items.iter() {
            for w in (item.weight..cols).rev() {
                row[w] = row[w].max(row[w - item.weight] + item.value);
            }
        }

        Ok(Solution::value_only(row[instance.capacity]))
    }
}

/// Checks the table footprint ahead of the allocation and returns the
/// number of columns (`W+1`) when it fits under [`MAX_TABLE_CELLS`].
fn table_width(rows: u128, capacity: usize) -> Result<usize, SolveError> {
    let cells = rows * (capacity as u128 + 1);
    if cells > MAX_TABLE_CELLS as u128 {
        Err(SolveError::TableTooLarge { cells, limit: MAX_TABLE_CELLS })
    } else {
        Ok(capacity + 1)
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
