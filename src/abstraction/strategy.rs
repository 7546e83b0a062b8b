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

//! This module defines the `Strategy` trait.

use crate::{Guess, Referee};

/// A `Strategy` inspects a [`Referee`] and produces the next guess to submit
/// to it. The library ships a single implementation
/// (`implementation::strategy::FrequencyStrategy`) built around the bitset
/// index and set-algebra query engine, but the trait is kept separate from
/// that implementation so tests and alternative strategies can stand in for
/// it.
pub trait Strategy {
    /// Produces the next guess given the current, referee-visible game
    /// state. Never inspects anything beyond what `referee` exposes.
    fn next_guess(&self, referee: &dyn Referee) -> Guess;
}
