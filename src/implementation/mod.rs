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

//! This module (and its submodules) provide the concrete implementations of
//! the abstractions declared in `abstraction`: the bitset, the set-algebra
//! AST/optimizer/evaluator, the inverted index, the sampler and character
//! statistics, the least-used cache, the game-state fingerprint/query
//! adapter, the parallel indexing driver, the frequency-based strategy, and
//! the local in-process referee used by the CLI and the test suite.

mod bitset;
mod cache;
mod gamestate;
mod index;
mod parallel;
mod referee;
mod sampler;
mod setalgebra;
mod strategy;

pub use bitset::*;
pub use cache::*;
pub use gamestate::*;
pub use index::*;
pub use parallel::*;
pub use referee::*;
pub use sampler::*;
pub use setalgebra::*;
pub use strategy::*;
