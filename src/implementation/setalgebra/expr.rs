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

//! This module defines `SetExpr`, the recursive expression AST that the
//! query optimizer and evaluator operate on. An expression is built from the
//! leaves (a concrete bitset, a term the index will resolve, or one of the
//! `Universe`/`Empty` sentinels) and the n-ary/unary combinators
//! (`Intersect`, `Union`, `Subtract`, `Complement`).

use std::fmt;

use crate::{Bitset, BitSetLike, Term};

/// A leaf of a [`SetExpr`]: something that denotes a concrete set without
/// needing further combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Leaf {
    /// The sentinel denoting "every corpus position".
    Universe,
    /// The sentinel denoting "no corpus position".
    Empty,
    /// A term to be resolved against the index at evaluation time.
    Term(Term),
    /// A symbolic placeholder, mostly useful for tests that reason about
    /// the optimizer algebraically (e.g. `:a`, `:b`) without binding to a
    /// concrete bitset.
    Named(String),
    /// A concrete, already-materialized bitset.
    Bits(Bitset),
}

/// The set-algebra expression AST. See the module documentation and
/// `implementation::setalgebra::optimize` for the rewrite rules that apply
/// to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetExpr {
    /// A leaf node (see [`Leaf`]).
    Leaf(Leaf),
    /// The intersection of one or more sub-expressions.
    Intersect(Vec<SetExpr>),
    /// The union of one or more sub-expressions.
    Union(Vec<SetExpr>),
    /// The minuend with zero or more subtrahends removed, left to right.
    Subtract(Box<SetExpr>, Vec<SetExpr>),
    /// The complement (within the index's capacity) of a sub-expression.
    Complement(Box<SetExpr>),
}

impl SetExpr {
    /// Shorthand for `SetExpr::Leaf(Leaf::Universe)`.
    pub fn universe() -> Self {
        SetExpr::Leaf(Leaf::Universe)
    }

    /// Shorthand for `SetExpr::Leaf(Leaf::Empty)`.
    pub fn empty() -> Self {
        SetExpr::Leaf(Leaf::Empty)
    }

    /// Shorthand for `SetExpr::Leaf(Leaf::Term(term))`.
    pub fn term(term: Term) -> Self {
        SetExpr::Leaf(Leaf::Term(term))
    }

    /// Shorthand for `SetExpr::Leaf(Leaf::Named(name.into()))`.
    pub fn named<S: Into<String>>(name: S) -> Self {
        SetExpr::Leaf(Leaf::Named(name.into()))
    }

    /// Shorthand for `SetExpr::Leaf(Leaf::Bits(bits))`.
    pub fn bits(bits: Bitset) -> Self {
        SetExpr::Leaf(Leaf::Bits(bits))
    }

    /// Shorthand for `SetExpr::Complement(Box::new(self))`.
    pub fn complement(self) -> Self {
        SetExpr::Complement(Box::new(self))
    }

    /// The rank used by normalization to sort siblings: `Empty=0,
    /// Universe=1, Intersect=10, Union=11, Subtract=12, Complement=13,
    /// other leaves=100`. Sorting by this key alone (with a *stable* sort)
    /// is what the spec calls "ties broken by natural leaf ordering" —
    /// nodes that share a rank simply keep their relative input order.
    pub(crate) fn rank(&self) -> u8 {
        match self {
            SetExpr::Leaf(Leaf::Empty) => 0,
            SetExpr::Leaf(Leaf::Universe) => 1,
            SetExpr::Intersect(_) => 10,
            SetExpr::Union(_) => 11,
            SetExpr::Subtract(_, _) => 12,
            SetExpr::Complement(_) => 13,
            SetExpr::Leaf(_) => 100,
        }
    }

    /// A canonical, deterministic textual rendering of the expression. Not
    /// meant to be parsed back; used for debug logging of built queries.
    pub(crate) fn render(&self) -> String {
        match self {
            SetExpr::Leaf(Leaf::Empty) => "\u{2205}".to_string(),
            SetExpr::Leaf(Leaf::Universe) => "U".to_string(),
            SetExpr::Leaf(Leaf::Term(Term::Length(n))) => format!("T.len({n})"),
            SetExpr::Leaf(Leaf::Term(Term::Position(i, c))) => format!("T.pos({i},{c})"),
            SetExpr::Leaf(Leaf::Named(name)) => format!("N({name})"),
            SetExpr::Leaf(Leaf::Bits(bits)) => {
                let idx: Vec<String> = bits.iter().map(|i| i.to_string()).collect();
                format!("B({})", idx.join(","))
            }
            SetExpr::Intersect(children) => {
                let parts: Vec<String> = children.iter().map(SetExpr::render).collect();
                format!("I({})", parts.join(";"))
            }
            SetExpr::Union(children) => {
                let parts: Vec<String> = children.iter().map(SetExpr::render).collect();
                format!("Un({})", parts.join(";"))
            }
            SetExpr::Subtract(minuend, subtrahends) => {
                let parts: Vec<String> = subtrahends.iter().map(SetExpr::render).collect();
                format!("Sub({};{})", minuend.render(), parts.join(";"))
            }
            SetExpr::Complement(child) => format!("C({})", child.render()),
        }
    }
}

impl fmt::Display for SetExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
