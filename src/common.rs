// Copyright 2020 Xavier Gillard
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

//! This module defines the most basic data types that are used throughout all
//! the code of this crate (both at the abstraction and implementation levels).
//! These are also the types your client code is likely to work with.

use std::fmt;

// ----------------------------------------------------------------------------
// --- TERM --------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A `Term` is an atomic predicate over a corpus word. The index maps each
/// term to the bitset of corpus positions that satisfy it.
///
/// # Examples:
/// ```
/// # use hangman_solver::Term;
/// assert_eq!(Term::Length(4), Term::Length(4));
/// assert_ne!(Term::Position(0, 'C'), Term::Position(0, 'A'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// Matches every word whose length is exactly `n`.
    Length(usize),
    /// Matches every word whose character at position `i` is `c`.
    Position(usize, char),
}

// ----------------------------------------------------------------------------
// --- GUESS -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The outcome of a call to [`crate::Strategy::next_guess`]: either a single
/// letter or a complete word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess {
    /// Guess that the secret word contains (or doesn't contain) this letter.
    Letter(char),
    /// Guess that the secret word is exactly this word.
    Word(String),
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Guess::Letter(c) => write!(f, "letter '{c}'"),
            Guess::Word(w) => write!(f, "word \"{w}\""),
        }
    }
}

// ----------------------------------------------------------------------------
// --- STATUS ------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The status of a game as reported by a [`crate::Referee`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The secret word has been fully revealed before the try budget ran out.
    Won,
    /// The try budget was exhausted before the secret word was revealed.
    Lost,
    /// Neither won nor lost yet: the referee is still accepting guesses.
    KeepGuessing,
}

/// The well-known sentinel returned by [`crate::Referee::guessed_so_far`] in
/// place of any position that has not yet been revealed.
pub const MYSTERY: char = '_';

// ----------------------------------------------------------------------------
// --- STRATEGY CONFIGURATION ---------------------------------------------------
// ----------------------------------------------------------------------------
/// All the tunable options of the guessing strategy (see `next_guess`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyConfig {
    /// The maximum number of candidate words inspected per move.
    pub sample_size: usize,
    /// The capacity of the least-used frequency cache.
    pub cache_size: usize,
    /// The target fraction (in `[0, 1]`) of the sampled candidate set that
    /// the chosen character should occur in.
    pub target_char_p: f64,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        StrategyConfig {
            sample_size: 65536,
            cache_size: 512,
            target_char_p: 0.7,
        }
    }
}

impl StrategyConfig {
    /// Checks that this configuration is usable, returning the first
    /// violated constraint as a [`CoreError::InvalidConfig`].
    ///
    /// # Examples:
    /// ```
    /// # use hangman_solver::StrategyConfig;
    /// let cfg = StrategyConfig { sample_size: 10, cache_size: 10, target_char_p: 0.5 };
    /// assert!(cfg.validate().is_ok());
    ///
    /// let bad = StrategyConfig { sample_size: 0, ..cfg };
    /// assert!(bad.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), crate::CoreError> {
        if self.sample_size < 1 {
            return Err(crate::CoreError::InvalidConfig("sample_size must be >= 1".into()));
        }
        if self.cache_size < 1 {
            return Err(crate::CoreError::InvalidConfig("cache_size must be >= 1".into()));
        }
        if !(0.0..=1.0).contains(&self.target_char_p) {
            return Err(crate::CoreError::InvalidConfig("target_char_p must be within [0, 1]".into()));
        }
        Ok(())
    }
}

// ----------------------------------------------------------------------------
// --- ERRORS --------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The errors that the core (index, set algebra, strategy, parallel driver)
/// can raise. I/O and CLI-level errors are defined separately at the edges
/// that actually perform I/O (see the `hangman` binary).
#[derive(Debug, Clone, thiserror::Error)]
pub enum CoreError {
    /// Two bitsets of differing capacities were combined with a set operation.
    #[error("bitset capacity mismatch: {left} vs {right}")]
    CapacityMismatch {
        /// Capacity of the left-hand operand.
        left: usize,
        /// Capacity of the right-hand operand.
        right: usize,
    },
    /// The evaluator reached a node it cannot execute (typically a residual
    /// `Complement` that optimization failed to eliminate).
    #[error("evaluator reached an unexecutable operator")]
    UnknownOperator,
    /// A `StrategyConfig` violates one of its invariants.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// A worker thread building the index panicked or returned an error.
    #[error("index build failed: {0}")]
    IndexBuildFailure(String),
}
