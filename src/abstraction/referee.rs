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

//! This module defines the `Referee` trait. A client willing to play against
//! a networked or otherwise external judge should implement this trait; this
//! crate also ships one concrete in-process implementation
//! (`implementation::referee::LocalReferee`) so that the CLI and the test
//! suite can play complete games without any external process.

use std::collections::HashSet;

use crate::{Guess, Status};

/// The capabilities the strategy needs from whatever judges a game of
/// Hangman: revealing what has been guessed so far, accepting new guesses,
/// and reporting the running status and score.
pub trait Referee {
    /// The length of the secret word.
    fn secret_word_length(&self) -> usize;
    /// The secret word as currently revealed: one character per position,
    /// using [`crate::MYSTERY`] for positions not yet revealed.
    fn guessed_so_far(&self) -> Vec<char>;
    /// The set of letters that have been guessed and were wrong.
    fn incorrectly_guessed_letters(&self) -> HashSet<char>;
    /// The set of whole words that have been guessed and were wrong.
    fn incorrectly_guessed_words(&self) -> HashSet<String>;
    /// Every letter that has been guessed so far, correct or not.
    fn all_guessed_letters(&self) -> HashSet<char>;
    /// Submits a guess, mutating the referee's internal state.
    fn make_guess(&mut self, guess: Guess);
    /// The current status of the game.
    fn status(&self) -> Status;
    /// The current score (higher is worse).
    fn current_score(&self) -> i64;
}
