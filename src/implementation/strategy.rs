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

//! This module provides `FrequencyStrategy`, the bundled [`Strategy`]
//! implementation: it narrows the corpus down to the candidates consistent
//! with the referee's visible state, samples them, and picks whichever
//! letter's frequency among the sample is closest to `target_char_p`, or
//! guesses the remaining word outright once only one candidate is left.

use std::collections::BTreeMap;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{
    build_query, character_occurrences, evaluate, fingerprint, uniform_sample, BitSetLike, Guess,
    Index, LuCache, Referee, Strategy, StrategyConfig,
};

/// A cached-and-memoized `(count of sampled candidates, per-letter document
/// frequency across that sample)` pair, keyed by the game-state fingerprint.
type FrequencyEntry = (usize, BTreeMap<char, usize>);

/// Picks guesses by intersecting `Length`/`Position` terms in the index to
/// find the candidate words still consistent with the game so far, sampling
/// them, and choosing the letter whose sample frequency is closest to
/// `target_char_p` of the sample size — falling back to guessing the word
/// outright once the candidate set narrows down to one word.
pub struct FrequencyStrategy<'a> {
    index: &'a Index,
    corpus: &'a [String],
    config: StrategyConfig,
    cache: LuCache<FrequencyEntry>,
    rng: Mutex<StdRng>,
}

impl<'a> FrequencyStrategy<'a> {
    /// Builds a strategy over `index` (built from `corpus`) with the given
    /// `config`. `corpus` must be the same word list `index` was built from,
    /// in the same order, since candidate bitsets carry corpus positions.
    pub fn new(index: &'a Index, corpus: &'a [String], config: StrategyConfig) -> Self {
        FrequencyStrategy {
            index,
            corpus,
            cache: LuCache::new(config.cache_size),
            rng: Mutex::new(StdRng::from_entropy()),
            config,
        }
    }

    /// Same as [`FrequencyStrategy::new`], but seeds the internal RNG
    /// deterministically, which is what every reproducible test uses.
    pub fn with_seed(index: &'a Index, corpus: &'a [String], config: StrategyConfig, seed: u64) -> Self {
        FrequencyStrategy {
            index,
            corpus,
            cache: LuCache::new(config.cache_size),
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            config,
        }
    }

    fn candidate_positions(&self, referee: &dyn Referee) -> Vec<usize> {
        let query = build_query(referee);
        match evaluate(query, self.index) {
            Ok(bits) => bits.iter().collect(),
            Err(err) => {
                log::warn!("candidate query evaluation failed, falling back to the full corpus: {err}");
                (0..self.corpus.len()).collect()
            }
        }
    }

    fn frequency_entry(&self, key: &str, candidates: &[usize]) -> FrequencyEntry {
        if let Some(entry) = self.cache.fetch(key) {
            return entry;
        }
        let sample: Vec<usize> = {
            let mut rng = self.rng.lock();
            uniform_sample(self.config.sample_size, candidates.len(), candidates.iter().copied(), &mut rng)
        };
        let words: Vec<&str> = sample.iter().map(|&i| self.corpus[i].as_str()).collect();
        let dist = character_occurrences(&words);
        let entry = (sample.len(), dist);
        self.cache.store(key.to_string(), entry.clone());
        entry
    }

    /// Among candidate letters not yet guessed, picks the one whose sampled
    /// occurrence count is closest to `target_char_p * count_sampled`.
    /// Scans `dist` in ascending `char` order and replaces the running best
    /// on a `<=` comparison (not `<`): among exactly-tied distances, the
    /// lexicographically greater letter wins. This is deliberate, not an
    /// oversight — see the design notes on the canonical worked example.
    fn closest_to_target(&self, dist: &BTreeMap<char, usize>, count_sampled: usize, already_guessed: &std::collections::HashSet<char>) -> Option<char> {
        let target = self.config.target_char_p * count_sampled as f64;
        let mut best: Option<(char, f64)> = None;
        for (&c, &count) in dist {
            if already_guessed.contains(&c) {
                continue;
            }
            let distance = (count as f64 - target).abs();
            let replace = match best {
                None => true,
                Some((_, best_distance)) => distance <= best_distance,
            };
            if replace {
                best = Some((c, distance));
            }
        }
        best.map(|(c, _)| c)
    }

    /// The first candidate (in ascending corpus-position order) whose word
    /// has not already been guessed and rejected as a whole word.
    fn first_unguessed_word(&self, candidates: &[usize], already_guessed_words: &std::collections::HashSet<String>) -> Option<String> {
        candidates
            .iter()
            .map(|&i| self.corpus[i].as_str())
            .find(|w| !already_guessed_words.contains(*w))
            .map(str::to_string)
    }

    /// Falls back to the smallest-index corpus word not already guessed and
    /// rejected as a whole word, for the case described in §4.9's failure
    /// modes: an empty or exhausted candidate set (corpus/game mismatch).
    fn any_unguessed_word(&self, candidates: &[usize], already_guessed_words: &std::collections::HashSet<String>) -> Option<String> {
        self.first_unguessed_word(candidates, already_guessed_words).or_else(|| {
            self.corpus
                .iter()
                .find(|w| !already_guessed_words.contains(w.as_str()))
                .cloned()
        })
    }
}

impl<'a> Strategy for FrequencyStrategy<'a> {
    fn next_guess(&self, referee: &dyn Referee) -> Guess {
        let key = fingerprint(referee);
        let candidates = self.candidate_positions(referee);
        let (count_sampled, dist) = self.frequency_entry(&key, &candidates);
        let already_guessed_words = referee.incorrectly_guessed_words();

        if count_sampled == 1 {
            if let Some(word) = self.first_unguessed_word(&candidates, &already_guessed_words) {
                log::debug!("only one candidate left, guessing the word \"{word}\"");
                return Guess::Word(word);
            }
            log::warn!("the sole remaining candidate was already rejected as a wrong word, falling back");
            return self
                .any_unguessed_word(&candidates, &already_guessed_words)
                .map(Guess::Word)
                .unwrap_or_else(|| Guess::Word(self.corpus[0].clone()));
        }

        let already_guessed_letters = referee.all_guessed_letters();
        match self.closest_to_target(&dist, count_sampled, &already_guessed_letters) {
            Some(c) => {
                log::debug!("{} candidates sampled, guessing letter '{}'", count_sampled, c);
                Guess::Letter(c)
            }
            None => {
                log::warn!("no unguessed letter found among candidates, falling back to a candidate word");
                self.any_unguessed_word(&candidates, &already_guessed_words)
                    .map(Guess::Word)
                    .unwrap_or_else(|| Guess::Word(self.corpus[0].clone()))
            }
        }
    }
}
