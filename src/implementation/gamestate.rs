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

//! This module adapts a [`Referee`]'s visible state into the two things the
//! strategy needs: a canonical cache-key string (`fingerprint`) and a
//! [`SetExpr`] query that the evaluator can fold against the index
//! (`build_query`).

use crate::{Referee, SetExpr, Term, MYSTERY};

/// Field separator: starts every field of the fingerprint grammar.
const FS: char = '\u{FFFE}';
/// Record separator: ends every field of the fingerprint grammar.
const RS: char = '\u{FFFF}';

/// Renders the referee's visible state into the canonical cache key
/// described in the design's fingerprint grammar:
/// `FS length RS FS excluded-letters(sorted) RS FS (FS i RS FS c RS)* RS`,
/// where the `(i, c)` pairs are the revealed positions in ascending order
/// of `i`. Two game states that imply the same `(length, excluded letters,
/// revealed positions)` always render to the same string, and vice versa.
pub fn fingerprint(referee: &dyn Referee) -> String {
    let length = referee.secret_word_length();

    let mut excluded: Vec<char> = referee.incorrectly_guessed_letters().into_iter().collect();
    excluded.sort_unstable();

    let revealed = referee.guessed_so_far();
    let mut known: Vec<(usize, char)> = revealed
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c != MYSTERY)
        .map(|(i, &c)| (i, c))
        .collect();
    known.sort_unstable_by_key(|&(i, _)| i);

    let mut out = String::new();
    out.push(FS);
    out.push_str(&length.to_string());
    out.push(RS);

    out.push(FS);
    for c in &excluded {
        out.push(*c);
    }
    out.push(RS);

    out.push(FS);
    for (i, c) in &known {
        out.push(FS);
        out.push_str(&i.to_string());
        out.push(RS);
        out.push(FS);
        out.push(*c);
        out.push(RS);
    }
    out.push(RS);

    out
}

/// Builds the candidate-set query for the referee's current state:
/// `Length(L)` intersected with a `Position(i, c)` term for every revealed
/// position, intersected with the complement of the union of
/// `Position(i, x)` for every excluded letter `x` at every position `i` in
/// `[0, L)` (i.e. "none of the excluded letters appear anywhere"). The
/// nested intersections in the design's pseudocode are flattened here since
/// `optimize` would flatten them anyway.
pub fn build_query(referee: &dyn Referee) -> SetExpr {
    let length = referee.secret_word_length();
    let revealed = referee.guessed_so_far();

    let mut excluded: Vec<char> = referee.incorrectly_guessed_letters().into_iter().collect();
    excluded.sort_unstable();

    let mut children = vec![SetExpr::term(Term::Length(length))];
    for (i, &c) in revealed.iter().enumerate() {
        if c != MYSTERY {
            children.push(SetExpr::term(Term::Position(i, c)));
        }
    }

    if !excluded.is_empty() {
        let mut excluded_positions = Vec::with_capacity(length * excluded.len());
        for i in 0..length {
            for &x in &excluded {
                excluded_positions.push(SetExpr::term(Term::Position(i, x)));
            }
        }
        children.push(SetExpr::Union(excluded_positions).complement());
    }

    SetExpr::Intersect(children)
}

#[cfg(test)]
mod test_gamestate {
    use super::*;
    use crate::{Guess, Status};
    use std::collections::HashSet;

    /// A minimal, hand-constructed `Referee` stand-in used only to probe
    /// `fingerprint`/`build_query` in isolation from the full local
    /// simulator.
    struct FixedState {
        length: usize,
        revealed: Vec<char>,
        excluded_letters: HashSet<char>,
    }

    impl Referee for FixedState {
        fn secret_word_length(&self) -> usize {
            self.length
        }
        fn guessed_so_far(&self) -> Vec<char> {
            self.revealed.clone()
        }
        fn incorrectly_guessed_letters(&self) -> HashSet<char> {
            self.excluded_letters.clone()
        }
        fn incorrectly_guessed_words(&self) -> HashSet<String> {
            HashSet::new()
        }
        fn all_guessed_letters(&self) -> HashSet<char> {
            self.excluded_letters.clone()
        }
        fn make_guess(&mut self, _guess: Guess) {}
        fn status(&self) -> Status {
            Status::KeepGuessing
        }
        fn current_score(&self) -> i64 {
            0
        }
    }

    #[test]
    fn fingerprint_is_stable_for_equal_states() {
        let a = FixedState { length: 3, revealed: vec![MYSTERY, 'A', MYSTERY], excluded_letters: ['Z'].into() };
        let b = FixedState { length: 3, revealed: vec![MYSTERY, 'A', MYSTERY], excluded_letters: ['Z'].into() };
        assert_eq!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn fingerprint_differs_on_length() {
        let a = FixedState { length: 3, revealed: vec![MYSTERY; 3], excluded_letters: HashSet::new() };
        let b = FixedState { length: 4, revealed: vec![MYSTERY; 4], excluded_letters: HashSet::new() };
        assert_ne!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn fingerprint_differs_on_excluded_letters() {
        let a = FixedState { length: 3, revealed: vec![MYSTERY; 3], excluded_letters: ['X'].into() };
        let b = FixedState { length: 3, revealed: vec![MYSTERY; 3], excluded_letters: ['Y'].into() };
        assert_ne!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn fingerprint_differs_on_revealed_positions() {
        let a = FixedState { length: 3, revealed: vec!['A', MYSTERY, MYSTERY], excluded_letters: HashSet::new() };
        let b = FixedState { length: 3, revealed: vec![MYSTERY, 'A', MYSTERY], excluded_letters: HashSet::new() };
        assert_ne!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn fingerprint_is_insensitive_to_excluded_letter_insertion_order() {
        let a = FixedState { length: 3, revealed: vec![MYSTERY; 3], excluded_letters: ['X', 'Y'].into() };
        let b = FixedState { length: 3, revealed: vec![MYSTERY; 3], excluded_letters: ['Y', 'X'].into() };
        assert_eq!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn build_query_matches_only_words_of_the_right_length_and_letters() {
        use crate::{evaluate, Index};

        let corpus: Vec<String> = ["CAB", "CAR", "CAT", "CUT", "CATS", "CROW", "CROWN"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let index = Index::build(&corpus, 2).unwrap();

        let state = FixedState { length: 3, revealed: vec!['C', MYSTERY, 'T'], excluded_letters: ['B'].into() };
        let query = build_query(&state);
        let candidates = evaluate(query, &index).unwrap();
        let words: Vec<&str> = candidates.iter().map(|i| corpus[i].as_str()).collect();
        assert_eq!(vec!["CAT"], words);
    }
}
