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

//! This module builds and holds the `Term -> Bitset` inverted index over a
//! corpus. Building is parallel (see `implementation::parallel`); once
//! `Index::build` returns, the index is read-only and needs no further
//! synchronization.

use std::time::Instant;

use dashmap::DashMap;
use fxhash::{FxBuildHasher, FxHashMap};

use crate::{peach_indexed, Bitset, BitSetLike, CoreError, Term};

/// A read-only, parallel-built mapping from [`Term`] to the bitset of
/// corpus positions matching it. Every bitset in the index has capacity
/// `|corpus|`.
pub struct Index {
    capacity: usize,
    terms: FxHashMap<Term, Bitset>,
}

impl Index {
    /// Builds an index over `corpus`, partitioning the `[0, corpus.len())`
    /// range across `threads` worker threads (clamped to `corpus.len()`, and
    /// to at least 1 so an empty corpus still produces an empty index rather
    /// than panicking on division). Each worker emits `Length(|w|)` and
    /// `Position(j, w[j])` for every character of its assigned words and
    /// sets the corresponding bit in a lazily-created, shared bitset; the
    /// underlying `DashMap` serializes concurrent writers per shard, which
    /// is sufficient because distinct words racing to set bits in the same
    /// term's bitset always set *different* bits (writes commute).
    ///
    /// Fails with [`CoreError::IndexBuildFailure`] if a worker thread
    /// panics while indexing.
    pub fn build(corpus: &[String], threads: usize) -> Result<Self, CoreError> {
        let capacity = corpus.len();
        let shared: DashMap<Term, Bitset, FxBuildHasher> = DashMap::default();
        let threads = threads.max(1).min(capacity.max(1));

        let started = Instant::now();
        peach_indexed(corpus, threads, |position, word| {
            index_one_word(&shared, capacity, position, word);
        })?;
        let terms: FxHashMap<Term, Bitset> = shared.into_iter().collect();
        log::info!(
            "indexed {} words into {} terms across {} thread(s) in {:?}",
            capacity,
            terms.len(),
            threads,
            started.elapsed()
        );

        Ok(Index { capacity, terms })
    }

    /// The capacity (`|corpus|`) shared by every bitset this index holds.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Looks up the bitset of corpus positions matching `term`, if any word
    /// matched it at all.
    pub fn get(&self, term: &Term) -> Option<&Bitset> {
        self.terms.get(term)
    }
}

fn index_one_word(terms: &DashMap<Term, Bitset, FxBuildHasher>, capacity: usize, position: usize, word: &str) {
    let len = word.chars().count();
    set_bit(terms, Term::Length(len), capacity, position);
    for (i, c) in word.chars().enumerate() {
        set_bit(terms, Term::Position(i, c), capacity, position);
    }
}

fn set_bit(terms: &DashMap<Term, Bitset, FxBuildHasher>, term: Term, capacity: usize, position: usize) {
    terms
        .entry(term)
        .or_insert_with(|| Bitset::new(capacity))
        .set(position);
}

#[cfg(test)]
mod test_index {
    use super::*;

    fn corpus(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn build_is_sound_for_length_terms() {
        let c = corpus(&["CAT", "DOG", "CATS"]);
        let idx = Index::build(&c, 2).unwrap();
        assert_eq!(vec![0, 1], idx.get(&Term::Length(3)).unwrap().iter().collect::<Vec<_>>());
        assert_eq!(vec![2], idx.get(&Term::Length(4)).unwrap().iter().collect::<Vec<_>>());
        assert!(idx.get(&Term::Length(99)).is_none());
    }

    #[test]
    fn build_is_sound_for_position_terms() {
        let c = corpus(&["CAT", "CAR", "COT"]);
        let idx = Index::build(&c, 4).unwrap();
        assert_eq!(vec![0, 1, 2], idx.get(&Term::Position(0, 'C')).unwrap().iter().collect::<Vec<_>>());
        assert_eq!(vec![0, 1], idx.get(&Term::Position(1, 'A')).unwrap().iter().collect::<Vec<_>>());
        assert_eq!(vec![2], idx.get(&Term::Position(1, 'O')).unwrap().iter().collect::<Vec<_>>());
        assert_eq!(vec![1], idx.get(&Term::Position(2, 'R')).unwrap().iter().collect::<Vec<_>>());
    }

    #[test]
    fn every_bitset_has_corpus_capacity() {
        let c = corpus(&["A", "BB", "CCC"]);
        let idx = Index::build(&c, 3).unwrap();
        assert_eq!(3, idx.capacity());
        assert_eq!(3, idx.get(&Term::Length(1)).unwrap().capacity());
    }

    #[test]
    fn build_on_empty_corpus_does_not_panic() {
        let idx = Index::build(&[], 4).unwrap();
        assert_eq!(0, idx.capacity());
        assert!(idx.get(&Term::Length(3)).is_none());
    }

    #[test]
    fn sequential_and_parallel_builds_agree() {
        let c = corpus(&["CAB", "CAR", "CAT", "CUT", "CATS", "CROW", "CROWN"]);
        let sequential = Index::build(&c, 1).unwrap();
        let parallel = Index::build(&c, 4).unwrap();
        for term in [Term::Length(3), Term::Length(4), Term::Position(0, 'C'), Term::Position(2, 'T')] {
            let a = sequential.get(&term).map(|b| b.iter().collect::<Vec<_>>());
            let b = parallel.get(&term).map(|b| b.iter().collect::<Vec<_>>());
            assert_eq!(a, b);
        }
    }
}
