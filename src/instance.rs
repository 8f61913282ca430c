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

//! This module contains everything that is necessary to parse a knapsack
//! instance file and turn it into a structure usable by the solvers.
//!
//! The expected format is plain text: the first line holds two integers
//! `n` (the number of items) and `W` (the knapsack capacity); each of the
//! following `n` lines holds the `weight` and `value` of one item, in
//! item order. Blank lines are ignored.

use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    num::ParseIntError,
    path::Path,
};

use crate::Item;

/// This enumeration groups the kinds of errors that might occur when
/// parsing a knapsack instance from file. There can be io errors (file
/// unavailable ?), integer parse errors (the parser expected a number but
/// got ... something else), or structural errors: a header or item line
/// with the wrong number of tokens, a declared item count that does not
/// match the actual item lines, or a negative field (capacities, weights
/// and values must all be non negative).
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// There was an io related error
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    /// The parser expected to read an integer but got some garbage
    #[error("parse int {0}")]
    ParseInt(#[from] ParseIntError),
    /// The first line did not hold exactly an item count and a capacity
    #[error("ill formed header")]
    Header,
    /// An item line did not hold exactly a weight and a value
    #[error("ill formed item on line {line}")]
    ItemLine {
        /// 1-based line number in the input file
        line: usize,
    },
    /// The declared item count does not match the item lines in the file
    #[error("header declares {expected} items but the file holds {found}")]
    ItemCount { expected: usize, found: usize },
    /// A field that must be non negative was negative
    #[error("negative {what} on line {line}")]
    Negative { what: &'static str, line: usize },
}

/// This structure represents one knapsack instance: a capacity and the
/// ordered collection of candidate items. It is constructed once (either
/// programmatically or by parsing an instance file), is immutable
/// thereafter, and is consumed by exactly one solver invocation.
#[derive(Debug, Clone)]
pub struct Instance {
    /// The total weight the knapsack can hold.
    pub capacity: usize,
    /// The candidate items, in input order.
    pub items: Vec<Item>,
}

impl Instance {
    /// Creates an instance from its parts.
    pub fn new(capacity: usize, items: Vec<Item>) -> Self {
        Self { capacity, items }
    }

    /// The number of candidate items.
    pub fn nb_items(&self) -> usize {
        self.items.len()
    }

    /// Reads an instance from the file at the given location. It returns
    /// either the parsed instance if everything went on well, or an error
    /// describing the problem.
    pub fn from_file<P: AsRef<Path>>(fname: P) -> Result<Instance, ParseError> {
        Self::from_read(File::open(fname)?)
    }

    /// Reads an instance from any source of bytes in the documented
    /// format (useful to parse in-memory text in the tests).
    pub fn from_read<R: Read>(source: R) -> Result<Instance, ParseError> {
        let mut declared = 0_usize;
        let mut capacity = 0_usize;
        let mut items = vec![];
        let mut header_seen = false;

        for (lc, line) in BufReader::new(source).lines().enumerate() {
            let line = line?;
            let line = line.trim();
            let lineno = lc + 1;

            if line.is_empty() {
                continue;
            }

            let fields = line.split_whitespace().collect::<Vec<_>>();

            // The first non blank line is the 'n W' header
            if !header_seen {
                if fields.len() != 2 {
                    return Err(ParseError::Header);
                }
                declared = non_negative(fields[0], "item count", lineno)?;
                capacity = non_negative(fields[1], "capacity", lineno)?;
                items.reserve_exact(declared);
                header_seen = true;
                continue;
            }

            // All the remaining lines are 'weight value' items
            if fields.len() != 2 {
                return Err(ParseError::ItemLine { line: lineno });
            }
            let weight = non_negative(fields[0], "weight", lineno)?;
            let value = non_negative(fields[1], "value", lineno)?;
            items.push(Item { weight, value });
        }

        if !header_seen {
            return Err(ParseError::Header);
        }
        if items.len() != declared {
            return Err(ParseError::ItemCount { expected: declared, found: items.len() });
        }

        Ok(Instance { capacity, items })
    }
}

/// Parses one integer token, rejecting negative inputs with a dedicated
/// error rather than the bare integer-parse failure an unsigned parse
/// would produce.
fn non_negative(token: &str, what: &'static str, line: usize) -> Result<usize, ParseError> {
    let parsed = token.parse::<i64>()?;
    if parsed < 0 {
        Err(ParseError::Negative { what, line })
    } else {
        Ok(parsed as usize)
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
