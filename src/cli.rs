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

//! This module provides the command line adapter shared by the three
//! solver executables. Each executable embodies exactly one algorithm
//! (there is no runtime solver switching within a process): it loads the
//! instance named on the command line, runs its solver once, and prints
//! the result block on stdout.
//!
//! The `Valor máximo: <integer>` line of that block is the contract the
//! external orchestration layer greps for; its label text and number
//! format must be preserved bit-exact. On failure, nothing is printed on
//! stdout -- the error goes to stderr and the process exits non-zero, so
//! that downstream aggregation can never mistake a failure for an answer.

use std::fmt::Write;
use std::time::{Duration, Instant};

use clap::Parser;

use crate::{Instance, ParseError, Solution, SolveError, Solver};

/// The command line arguments accepted by every solver executable.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The path to the knapsack instance file that needs to be solved.
    pub instance: String,
}

/// Everything that can go wrong between argv and the printed result.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Parse(#[from] ParseError),
    #[error("{0}")]
    Solve(#[from] SolveError),
}

/// Loads the instance, runs the given solver on it once, and prints the
/// result block on stdout.
pub fn run(solver: &dyn Solver, args: &Args) -> Result<(), Error> {
    let instance = Instance::from_file(&args.instance)?;

    let start = Instant::now();
    let solution = solver.solve(&instance)?;
    let elapsed = start.elapsed();

    print!("{}", report(solver.name(), &solution, elapsed));
    Ok(())
}

/// Parses argv, delegates to [`run`], and turns any failure into a
/// message on stderr and a non-zero exit code. This is the whole body of
/// the three executables.
pub fn execute(solver: &dyn Solver) {
    let args = Args::parse();
    if let Err(e) = run(solver, &args) {
        eprintln!("Erro: {e}");
        std::process::exit(1);
    }
}

/// Formats the result block. The selected items are displayed 1-based,
/// in ascending order, matching the convention of the instance files'
/// human readers; solvers that do not reconstruct a subset simply omit
/// that line.
pub fn report(algorithm: &str, solution: &Solution, elapsed: Duration) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Algoritmo: {algorithm}");
    let _ = writeln!(out, "Valor máximo: {}", solution.best_value);
    if let Some(items) = &solution.items {
        let items = items.iter().map(|i| (i + 1).to_string()).collect::<Vec<_>>();
        let _ = writeln!(out, "Itens selecionados: {}", items.join(" "));
    }
    let _ = writeln!(out, "Tempo de execução: {:.6} segundos", elapsed.as_secs_f64());
    out
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
