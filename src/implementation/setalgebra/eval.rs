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

//! This module implements `evaluate`: folding an optimized [`SetExpr`]
//! against an [`crate::Index`] into a concrete [`Bitset`]. See the module
//! documentation of `setalgebra` and §4.5 of the design for the exact
//! algorithm: optimize first, then a post-order walk that clones only the
//! first operand of every internal node and folds the rest in place.

use std::borrow::Cow;

use super::expr::{Leaf, SetExpr};
use super::optimize::optimize;
use crate::{Bitset, BitSetLike, CoreError, Index};

/// Optimizes `expr` and folds it against `index`, returning the bitset of
/// corpus positions it denotes. The returned bitset may alias bitsets owned
/// by `index` (when the expression reduces to a bare `Term` leaf) and must
/// be treated as read-only unless the caller clones it first.
///
/// Fails with [`CoreError::UnknownOperator`] if a residual `Complement` or
/// an unresolvable symbolic leaf reaches the fold step; under a correct
/// optimizer this only happens for expressions built from `SetExpr::named`,
/// which are a test-only device and never appear in queries built by
/// `implementation::gamestate`.
pub fn evaluate(expr: SetExpr, index: &Index) -> Result<Bitset, CoreError> {
    let optimized = optimize(expr);
    Ok(eval_node(&optimized, index)?.into_owned())
}

fn eval_node<'a>(expr: &'a SetExpr, index: &'a Index) -> Result<Cow<'a, Bitset>, CoreError> {
    match expr {
        SetExpr::Leaf(Leaf::Universe) => Ok(Cow::Owned(Bitset::universe(index.capacity()))),
        SetExpr::Leaf(Leaf::Empty) => Ok(Cow::Owned(Bitset::empty(index.capacity()))),
        SetExpr::Leaf(Leaf::Term(term)) => match index.get(term) {
            Some(bits) => Ok(Cow::Borrowed(bits)),
            None => Ok(Cow::Owned(Bitset::empty(index.capacity()))),
        },
        SetExpr::Leaf(Leaf::Bits(bits)) => Ok(Cow::Borrowed(bits)),
        SetExpr::Leaf(Leaf::Named(_)) => Err(CoreError::UnknownOperator),
        SetExpr::Complement(_) => Err(CoreError::UnknownOperator),
        SetExpr::Intersect(children) => fold(children, index, BitSetLike::and),
        SetExpr::Union(children) => fold(children, index, BitSetLike::or),
        SetExpr::Subtract(minuend, subtrahends) => {
            let mut acc = eval_node(minuend, index)?.into_owned();
            for subtrahend in subtrahends {
                let rhs = eval_node(subtrahend, index)?;
                acc.and_not(rhs.as_ref());
            }
            Ok(Cow::Owned(acc))
        }
    }
}

fn fold<'a>(
    children: &'a [SetExpr],
    index: &'a Index,
    op: fn(&mut Bitset, &Bitset) -> &mut Bitset,
) -> Result<Cow<'a, Bitset>, CoreError> {
    let mut iter = children.iter();
    let first = iter.next().ok_or(CoreError::UnknownOperator)?;
    let mut acc = eval_node(first, index)?.into_owned();
    for child in iter {
        let rhs = eval_node(child, index)?;
        op(&mut acc, rhs.as_ref());
    }
    Ok(Cow::Owned(acc))
}

#[cfg(test)]
mod test_eval {
    use super::*;
    use crate::Term;

    fn index_of(words: &[&str]) -> Index {
        let corpus: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        Index::build(&corpus, 1).unwrap()
    }

    fn bits(capacity: usize, idxs: &[usize]) -> Bitset {
        let mut b = Bitset::new(capacity);
        for &i in idxs {
            b.set(i);
        }
        b
    }

    #[test]
    fn union_of_bits_leaves() {
        let index = index_of(&["A", "B", "C", "D"]);
        let cap = index.capacity();
        let expr = SetExpr::Union(vec![
            SetExpr::bits(bits(cap, &[0])),
            SetExpr::bits(bits(cap, &[1])),
            SetExpr::bits(bits(cap, &[2])),
        ]);
        let result = evaluate(expr, &index).unwrap();
        assert_eq!(vec![0, 1, 2], result.iter().collect::<Vec<_>>());
    }

    #[test]
    fn intersect_of_bits_leaves() {
        let index = index_of(&["A", "B", "C", "D", "E", "F", "G", "H"]);
        let cap = index.capacity();
        let expr = SetExpr::Intersect(vec![
            SetExpr::bits(bits(cap, &[1])),
            SetExpr::bits(bits(cap, &[1, 2])),
            SetExpr::bits(bits(cap, &[1, 6, 7])),
        ]);
        let result = evaluate(expr, &index).unwrap();
        assert_eq!(vec![1], result.iter().collect::<Vec<_>>());
    }

    #[test]
    fn subtract_of_bits_leaves() {
        let index = index_of(&["A", "B", "C", "D", "E", "F", "G", "H"]);
        let cap = index.capacity();
        let expr = SetExpr::Subtract(
            Box::new(SetExpr::bits(bits(cap, &[4, 5, 6]))),
            vec![
                SetExpr::bits(bits(cap, &[5])),
                SetExpr::bits(bits(cap, &[5, 7])),
            ],
        );
        let result = evaluate(expr, &index).unwrap();
        assert_eq!(vec![4, 6], result.iter().collect::<Vec<_>>());
    }

    #[test]
    fn intersect_with_complemented_union_resolves_via_subtraction() {
        let index = index_of(&["A", "B", "C", "D", "E"]);
        let cap = index.capacity();
        let expr = SetExpr::Intersect(vec![
            SetExpr::bits(bits(cap, &[0, 1, 2, 3])),
            SetExpr::bits(bits(cap, &[1, 2, 3, 4])),
            SetExpr::Union(vec![
                SetExpr::bits(bits(cap, &[0])),
                SetExpr::bits(bits(cap, &[1])),
            ])
            .complement(),
        ]);
        let result = evaluate(expr, &index).unwrap();
        assert_eq!(vec![2, 3], result.iter().collect::<Vec<_>>());
    }

    #[test]
    fn term_leaf_is_resolved_against_index() {
        let index = index_of(&["CAT", "CAR", "DOG"]);
        let expr = SetExpr::term(Term::Position(0, 'C'));
        let result = evaluate(expr, &index).unwrap();
        assert_eq!(vec![0, 1], result.iter().collect::<Vec<_>>());
    }

    #[test]
    fn unmatched_term_resolves_to_empty() {
        let index = index_of(&["CAT", "CAR", "DOG"]);
        let expr = SetExpr::term(Term::Length(9));
        let result = evaluate(expr, &index).unwrap();
        assert_eq!(0, result.cardinality());
    }

    #[test]
    fn denotational_equivalence_with_optimize() {
        let index = index_of(&["CAT", "CAR", "DOG", "COT"]);
        let expr = SetExpr::Intersect(vec![
            SetExpr::term(Term::Position(0, 'C')),
            SetExpr::term(Term::Position(0, 'C')).complement().complement(),
        ]);
        let direct = evaluate(expr.clone(), &index).unwrap();
        let via_optimize = evaluate(optimize(expr), &index).unwrap();
        assert_eq!(direct.iter().collect::<Vec<_>>(), via_optimize.iter().collect::<Vec<_>>());
    }
}
