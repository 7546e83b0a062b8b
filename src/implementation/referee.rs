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

//! This module provides `LocalReferee`, the bundled in-process `Referee`
//! implementation: it holds the secret word and a wrong-guess budget, and
//! derives every method of the trait from that state. It lets the CLI
//! (and the test suite) play complete games without a networked judge; see
//! §6 of the design for how this fits alongside a future, real referee.

use std::collections::HashSet;

use crate::{Guess, Referee, Status, MYSTERY};

/// A self-contained, in-process Hangman judge. Scores a letter guess as
/// one point, and a wrong letter or wrong word guess as an extra point of
/// penalty, matching §1's "roughly, letters + penalties for wrong guesses"
/// (the exact scoring formula is left to the referee, which the design
/// treats as an external collaborator; this is this crate's own stand-in).
pub struct LocalReferee {
    secret: Vec<char>,
    max_wrong_guesses: usize,
    wrong_guesses: usize,
    guessed_letters: HashSet<char>,
    incorrect_letters: HashSet<char>,
    incorrect_words: HashSet<String>,
    word_guessed_correctly: bool,
}

impl LocalReferee {
    /// Starts a fresh game for `secret_word` (already upper-cased, as every
    /// corpus word is) with a budget of `max_wrong_guesses` wrong guesses.
    pub fn new(secret_word: &str, max_wrong_guesses: usize) -> Self {
        LocalReferee {
            secret: secret_word.chars().collect(),
            max_wrong_guesses,
            wrong_guesses: 0,
            guessed_letters: HashSet::new(),
            incorrect_letters: HashSet::new(),
            incorrect_words: HashSet::new(),
            word_guessed_correctly: false,
        }
    }

    fn is_fully_revealed(&self) -> bool {
        self.secret.iter().all(|c| self.guessed_letters.contains(c))
    }
}

impl Referee for LocalReferee {
    fn secret_word_length(&self) -> usize {
        self.secret.len()
    }

    fn guessed_so_far(&self) -> Vec<char> {
        self.secret
            .iter()
            .map(|&c| if self.guessed_letters.contains(&c) { c } else { MYSTERY })
            .collect()
    }

    fn incorrectly_guessed_letters(&self) -> HashSet<char> {
        self.incorrect_letters.clone()
    }

    fn incorrectly_guessed_words(&self) -> HashSet<String> {
        self.incorrect_words.clone()
    }

    fn all_guessed_letters(&self) -> HashSet<char> {
        self.guessed_letters.clone()
    }

    fn make_guess(&mut self, guess: Guess) {
        match guess {
            Guess::Letter(c) => {
                let first_time = self.guessed_letters.insert(c);
                if first_time && !self.secret.contains(&c) {
                    self.incorrect_letters.insert(c);
                    self.wrong_guesses += 1;
                }
            }
            Guess::Word(word) => {
                let candidate: Vec<char> = word.chars().collect();
                if candidate == self.secret {
                    self.word_guessed_correctly = true;
                    self.guessed_letters.extend(self.secret.iter().copied());
                } else {
                    self.incorrect_words.insert(word);
                    self.wrong_guesses += 1;
                }
            }
        }
    }

    fn status(&self) -> Status {
        if self.word_guessed_correctly || self.is_fully_revealed() {
            Status::Won
        } else if self.wrong_guesses >= self.max_wrong_guesses {
            Status::Lost
        } else {
            Status::KeepGuessing
        }
    }

    fn current_score(&self) -> i64 {
        let letters_guessed = self.guessed_letters.len() as i64;
        let wrong_penalty = (self.incorrect_letters.len() + self.incorrect_words.len()) as i64;
        letters_guessed + wrong_penalty
    }
}
