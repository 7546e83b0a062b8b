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

//! This module provides `Bitset`, the fixed-capacity bit vector that backs
//! the inverted index and the set-algebra evaluator. It is a thin wrapper
//! around `bit_set::BitSet` that pins down a logical capacity and exposes
//! the destructive, word-at-a-time set operations the evaluator relies on.

use std::fmt;

use bit_set::BitSet as InnerBitSet;
use bit_vec::BitVec;

use crate::BitSetLike;

/// A fixed-capacity bit vector. Two `Bitset`s are only ever combined by a
/// set operation when they share the same `capacity`; the index guarantees
/// this by building every term's bitset at `|corpus|` capacity, and the
/// evaluator double-checks it before folding (see `setalgebra::eval`).
#[derive(Clone, PartialEq, Eq)]
pub struct Bitset {
    capacity: usize,
    bits: InnerBitSet,
}

impl Bitset {
    /// Creates a bitset of the given capacity with every bit cleared.
    pub fn new(capacity: usize) -> Self {
        Bitset { capacity, bits: InnerBitSet::from_bit_vec(BitVec::from_elem(capacity, false)) }
    }
}

impl BitSetLike for Bitset {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn set(&mut self, i: usize) {
        debug_assert!(i < self.capacity, "bit index {i} out of bounds for capacity {}", self.capacity);
        self.bits.insert(i);
    }

    fn test(&self, i: usize) -> bool {
        self.bits.contains(i)
    }

    fn and(&mut self, other: &Self) -> &mut Self {
        debug_assert_eq!(self.capacity, other.capacity, "and() requires matching capacities");
        self.bits.intersect_with(&other.bits);
        self
    }

    fn or(&mut self, other: &Self) -> &mut Self {
        debug_assert_eq!(self.capacity, other.capacity, "or() requires matching capacities");
        self.bits.union_with(&other.bits);
        self
    }

    fn and_not(&mut self, other: &Self) -> &mut Self {
        debug_assert_eq!(self.capacity, other.capacity, "and_not() requires matching capacities");
        self.bits.difference_with(&other.bits);
        self
    }

    fn flip_all(&mut self) -> &mut Self {
        self.bits.get_mut().negate();
        self
    }

    fn cardinality(&self) -> usize {
        self.bits.len()
    }

    fn empty(capacity: usize) -> Self {
        Bitset::new(capacity)
    }

    fn universe(capacity: usize) -> Self {
        Bitset { capacity, bits: InnerBitSet::from_bit_vec(BitVec::from_elem(capacity, true)) }
    }

    fn iter(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.bits.iter())
    }
}

impl fmt::Debug for Bitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitset")
            .field("capacity", &self.capacity)
            .field("cardinality", &self.cardinality())
            .finish()
    }
}
