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

//! This module defines the `BitSetLike` capability: the minimal interface
//! the set-algebra evaluator needs from whatever type stands for "a set of
//! corpus positions". The production implementation ([`crate::Bitset`]) is a
//! fixed-capacity bit vector, but any type satisfying this trait (say, a
//! hash-set based test double) can be plugged into `evaluate` instead.

/// The capability required of a set representation for it to be usable by
/// the set-algebra evaluator (see `implementation::setalgebra::eval`).
///
/// All mutating operations act on `self` and return `self` so that folds
/// read naturally: `acc.and(&rhs).and(&other)`.
pub trait BitSetLike: Clone {
    /// The number of elements this bitset can represent (its fixed capacity).
    fn capacity(&self) -> usize;
    /// Sets the bit at index `i`. `i` must be `< capacity()`.
    fn set(&mut self, i: usize);
    /// Returns whether the bit at index `i` is set.
    fn test(&self, i: usize) -> bool;
    /// Intersects `self` with `other` in place, returning `self`.
    fn and(&mut self, other: &Self) -> &mut Self;
    /// Unions `self` with `other` in place, returning `self`.
    fn or(&mut self, other: &Self) -> &mut Self;
    /// Removes every bit of `other` from `self` in place, returning `self`.
    fn and_not(&mut self, other: &Self) -> &mut Self;
    /// Complements `self` in place (within its capacity), returning `self`.
    fn flip_all(&mut self) -> &mut Self;
    /// The number of set bits (popcount).
    fn cardinality(&self) -> usize;
    /// An empty bitset of the given capacity.
    fn empty(capacity: usize) -> Self;
    /// A fully-set bitset of the given capacity.
    fn universe(capacity: usize) -> Self;
    /// Iterates the indices of set bits in ascending order. This is a
    /// snapshot view: behavior under concurrent mutation is undefined.
    fn iter(&self) -> Box<dyn Iterator<Item = usize> + '_>;
}
