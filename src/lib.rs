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


//! # hangman-solver
//! `hangman-solver` plays Hangman by treating each move as a set-algebra
//! query against a bitset inverted index built over a fixed corpus.
//!
//! Every corpus word contributes a `Length(n)` term and one `Position(i, c)`
//! term per character; the [`Index`] maps each term to the bitset of word
//! positions that satisfy it. A move's visible state — the secret word's
//! length, the positions already revealed, and the letters already ruled out
//! — compiles into a [`SetExpr`] (see `build_query`): the intersection of
//! the length term, every revealed position term, and the complement of
//! every excluded letter's positions. [`evaluate`] normalizes and optimizes
//! that expression (De Morgan, absorption, domination, complement-to-
//! subtraction) before folding it against the index, so the candidate set is
//! recomputed cheaply on every guess.
//!
//! [`FrequencyStrategy`] samples the candidate set and picks the unguessed
//! letter whose document frequency is closest to a configurable target
//! fraction, falling back to guessing the word outright once only one
//! candidate remains; a [`LuCache`] memoizes the sampled distribution per
//! distinct game state so repeated states (a draw folding back to the same
//! fingerprint) are not resampled. [`Referee`] is the trait this crate plays
//! against; [`LocalReferee`] is a bundled in-process judge used by the
//! `hangman` binary and by the test suite.
//!
//! ## Quick example
//! ```
//! use hangman_solver::{FrequencyStrategy, Index, LocalReferee, Referee, Status, Strategy, StrategyConfig};
//!
//! let corpus: Vec<String> = ["CAB", "CAR", "CAT", "CUT", "CATS", "CROW", "CROWN"]
//!     .iter().map(|w| w.to_string()).collect();
//! let index = Index::build(&corpus, 2).unwrap();
//! let config = StrategyConfig { sample_size: 1000, cache_size: 16, target_char_p: 0.5 };
//! let strategy = FrequencyStrategy::with_seed(&index, &corpus, config, 0);
//!
//! let mut referee = LocalReferee::new("CAT", 6);
//! while referee.status() == Status::KeepGuessing {
//!     let guess = strategy.next_guess(&referee);
//!     referee.make_guess(guess);
//! }
//! assert_eq!(Status::Won, referee.status());
//! ```

mod common;
mod abstraction;
mod implementation;

pub use common::*;
pub use abstraction::*;
pub use implementation::*;