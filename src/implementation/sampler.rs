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

//! This module provides `uniform_sample`, a single-pass reservoir-style
//! sampler over a sequence of known maximum length, and
//! `character_occurrences`, the per-character document-frequency count the
//! strategy uses to pick its next letter.

use std::collections::BTreeMap;

use rand::Rng;

/// Draws at most `n` elements from `seq` (whose length must not exceed
/// `total`), preserving input order, in one linear pass. At each remaining
/// element, draws a uniform integer in `[0, total)`; if it is `< needed`
/// (the number of slots still to fill), the element is emitted and `needed`
/// is decremented. Either way `total` is decremented for the next draw.
/// This can return fewer than `n` elements only if `seq` itself has fewer
/// than `n` items; callers must tolerate that (see §9 of the design).
pub fn uniform_sample<T, I, R>(n: usize, mut total: usize, seq: I, rng: &mut R) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    R: Rng + ?Sized,
{
    let mut needed = n;
    let mut out = Vec::with_capacity(n.min(total));
    for item in seq {
        if needed == 0 || total == 0 {
            break;
        }
        if rng.gen_range(0..total) < needed {
            out.push(item);
            needed -= 1;
        }
        total -= 1;
    }
    out
}

/// For each word, counts the distinct characters it contains and
/// increments each one's tally by one. Equivalent to `Σ_w 1[c ∈ set(w)]`:
/// a word containing `'A'` three times still contributes 1 to `'A'`'s
/// count. Returned as a `BTreeMap` (ascending `char` order) so that
/// downstream consumers — notably the strategy's closest-to-target pick —
/// get a stable, reproducible iteration order instead of one that depends
/// on hasher state.
pub fn character_occurrences<S: AsRef<str>>(words: &[S]) -> BTreeMap<char, usize> {
    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    for word in words {
        let mut seen: Vec<char> = word.as_ref().chars().collect();
        seen.sort_unstable();
        seen.dedup();
        for c in seen {
            *counts.entry(c).or_insert(0) += 1;
        }
    }
    counts
}
