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

//! This module rewrites a [`SetExpr`] into an equivalent form the evaluator
//! can fold directly against the index, without ever producing a residual
//! `Complement` at the top unless the expression really is a bare
//! complement (which the evaluator then rejects). `optimize` applies
//! `optimize_pass` up to five times, stopping as soon as a pass is a
//! no-op.

use super::expr::{Leaf, SetExpr};
use super::normalize::normalize;

const MAX_PASSES: usize = 5;

/// Rewrites `expr` into a form with as few `Complement` nodes as possible,
/// applying [`optimize_pass`] until it reaches a fixed point or five passes
/// have run, whichever comes first.
pub fn optimize(expr: SetExpr) -> SetExpr {
    let mut current = expr;
    for _ in 0..MAX_PASSES {
        let next = optimize_pass(current.clone());
        if next == current {
            return next;
        }
        current = next;
    }
    current
}

/// A single optimization pass: normalize, apply the complement laws, apply
/// the complement-to-subtraction rewrite, then pattern-match the remaining
/// shapes. Each step operates on the (possibly rewritten) output of the
/// previous one.
fn optimize_pass(expr: SetExpr) -> SetExpr {
    let expr = normalize(expr);
    let expr = apply_complement_laws(expr);
    let expr = complement_to_subtraction(expr);
    pattern_match(expr)
}

/// `Complement(Universe) = Empty`, `Complement(Empty) = Universe`,
/// `Intersect` containing both `x` and `Complement(x)` collapses to
/// `Empty`, `Union` containing both collapses to `Universe`.
fn apply_complement_laws(expr: SetExpr) -> SetExpr {
    match expr {
        SetExpr::Complement(inner) => match *inner {
            SetExpr::Leaf(Leaf::Universe) => SetExpr::empty(),
            SetExpr::Leaf(Leaf::Empty) => SetExpr::universe(),
            other => SetExpr::Complement(Box::new(other)),
        },
        SetExpr::Intersect(children) => {
            if has_complement_pair(&children) {
                SetExpr::empty()
            } else {
                SetExpr::Intersect(children)
            }
        }
        SetExpr::Union(children) => {
            if has_complement_pair(&children) {
                SetExpr::universe()
            } else {
                SetExpr::Union(children)
            }
        }
        other => other,
    }
}

fn has_complement_pair(children: &[SetExpr]) -> bool {
    children.iter().any(|c| match c {
        SetExpr::Complement(inner) => children.iter().any(|d| d == inner.as_ref()),
        _ => false,
    })
}

/// If an `Intersect` node has at least one `Complement`ed child and at
/// least one non-complemented child, rewrites it to
/// `Subtract(Intersect(non-complemented...), inner-of-complemented...)`.
/// `Union` has no equivalent rule: a mixed-complement `Union` is left
/// alone (it may still collapse later if every child turns out to be a
/// `Complement`, via the De Morgan rule in `pattern_match`).
fn complement_to_subtraction(expr: SetExpr) -> SetExpr {
    let children = match &expr {
        SetExpr::Intersect(children) => children,
        _ => return expr,
    };

    let mut complemented = Vec::new();
    let mut non_complemented = Vec::new();
    for child in children {
        match child {
            SetExpr::Complement(inner) => complemented.push((**inner).clone()),
            other => non_complemented.push(other.clone()),
        }
    }

    if complemented.is_empty() || non_complemented.is_empty() {
        return expr;
    }

    let minuend = if non_complemented.len() == 1 {
        non_complemented.into_iter().next().unwrap()
    } else {
        SetExpr::Intersect(non_complemented)
    };
    SetExpr::Subtract(Box::new(minuend), complemented)
}

fn pattern_match(expr: SetExpr) -> SetExpr {
    match expr {
        SetExpr::Complement(inner) => match *inner {
            SetExpr::Complement(x) => optimize_pass(*x),
            other => SetExpr::Complement(Box::new(optimize_pass(other))),
        },
        SetExpr::Union(children) => optimize_union(children),
        SetExpr::Intersect(children) => optimize_intersect(children),
        SetExpr::Subtract(minuend, subtrahends) => optimize_subtract(*minuend, subtrahends),
        other => other,
    }
}

fn optimize_union(mut children: Vec<SetExpr>) -> SetExpr {
    if children.len() == 1 {
        return optimize_pass(children.pop().unwrap());
    }
    if children.iter().any(|c| matches!(c, SetExpr::Union(_))) {
        return optimize_pass(SetExpr::Union(flatten(children, unwrap_union)));
    }
    if matches!(children.first(), Some(SetExpr::Leaf(Leaf::Empty))) {
        children.remove(0);
        return optimize_pass(SetExpr::Union(children));
    }
    if matches!(children.first(), Some(SetExpr::Leaf(Leaf::Universe))) {
        return SetExpr::universe();
    }
    if children.len() == 2 {
        if let Some(absorbed) = try_absorb(&children, unwrap_intersect_ref) {
            return absorbed;
        }
    }
    if !children.is_empty() && children.iter().all(|c| matches!(c, SetExpr::Complement(_))) {
        return SetExpr::Complement(Box::new(SetExpr::Intersect(unwrap_complements(children))));
    }
    SetExpr::Union(children)
}

fn optimize_intersect(mut children: Vec<SetExpr>) -> SetExpr {
    if children.len() == 1 {
        return optimize_pass(children.pop().unwrap());
    }
    if children.iter().any(|c| matches!(c, SetExpr::Intersect(_))) {
        return optimize_pass(SetExpr::Intersect(flatten(children, unwrap_intersect)));
    }
    if matches!(children.first(), Some(SetExpr::Leaf(Leaf::Universe))) {
        children.remove(0);
        return optimize_pass(SetExpr::Intersect(children));
    }
    if matches!(children.first(), Some(SetExpr::Leaf(Leaf::Empty))) {
        return SetExpr::empty();
    }
    if children.len() == 2 {
        if let Some(absorbed) = try_absorb(&children, unwrap_union_ref) {
            return absorbed;
        }
    }
    if !children.is_empty() && children.iter().all(|c| matches!(c, SetExpr::Complement(_))) {
        return SetExpr::Complement(Box::new(SetExpr::Union(unwrap_complements(children))));
    }
    SetExpr::Intersect(children)
}

fn flatten(children: Vec<SetExpr>, unwrap: fn(SetExpr) -> Vec<SetExpr>) -> Vec<SetExpr> {
    let mut out = Vec::with_capacity(children.len());
    for child in children {
        out.extend(unwrap(child));
    }
    out
}

fn unwrap_union(expr: SetExpr) -> Vec<SetExpr> {
    match expr {
        SetExpr::Union(xs) => xs,
        other => vec![other],
    }
}

fn unwrap_intersect(expr: SetExpr) -> Vec<SetExpr> {
    match expr {
        SetExpr::Intersect(xs) => xs,
        other => vec![other],
    }
}

fn unwrap_complements(children: Vec<SetExpr>) -> Vec<SetExpr> {
    children
        .into_iter()
        .map(|c| match c {
            SetExpr::Complement(x) => *x,
            other => other,
        })
        .collect()
}

/// Absorption: given exactly two children `a, b`, if one of them is a
/// combinator (extracted by `inner_of`) whose immediate children contain
/// the other, the whole expression collapses to that other child.
fn try_absorb(children: &[SetExpr], inner_of: fn(&SetExpr) -> Option<&Vec<SetExpr>>) -> Option<SetExpr> {
    let (a, b) = (&children[0], &children[1]);
    if let Some(inner) = inner_of(a) {
        if inner.contains(b) {
            return Some(b.clone());
        }
    }
    if let Some(inner) = inner_of(b) {
        if inner.contains(a) {
            return Some(a.clone());
        }
    }
    None
}

fn unwrap_intersect_ref(expr: &SetExpr) -> Option<&Vec<SetExpr>> {
    match expr {
        SetExpr::Intersect(xs) => Some(xs),
        _ => None,
    }
}

fn unwrap_union_ref(expr: &SetExpr) -> Option<&Vec<SetExpr>> {
    match expr {
        SetExpr::Union(xs) => Some(xs),
        _ => None,
    }
}

/// Simplifies a `Subtract(minuend, subtrahends)` node per the rules in
/// order: drop `Empty` subtrahends; an empty subtrahend list returns the
/// minuend untouched; an `Empty` minuend stays `Empty`; if the minuend is
/// an `Intersect` and any of its children is also a subtrahend, or if the
/// minuend itself or `Universe` appears among the subtrahends, the result
/// is `Empty`; otherwise `Union` subtrahends are flattened into their
/// siblings and the minuend and every subtrahend are recursively
/// optimized.
fn optimize_subtract(minuend: SetExpr, subtrahends: Vec<SetExpr>) -> SetExpr {
    let mut subtrahends: Vec<SetExpr> = subtrahends
        .into_iter()
        .filter(|s| !matches!(s, SetExpr::Leaf(Leaf::Empty)))
        .collect();

    if subtrahends.is_empty() {
        return minuend;
    }
    if matches!(minuend, SetExpr::Leaf(Leaf::Empty)) {
        return SetExpr::empty();
    }
    if let SetExpr::Intersect(ref children) = minuend {
        if children.iter().any(|c| subtrahends.contains(c)) {
            return SetExpr::empty();
        }
    }
    if subtrahends.contains(&minuend) || subtrahends.iter().any(|s| matches!(s, SetExpr::Leaf(Leaf::Universe))) {
        return SetExpr::empty();
    }

    let mut flattened = Vec::with_capacity(subtrahends.len());
    for s in subtrahends.drain(..) {
        match s {
            SetExpr::Union(xs) => flattened.extend(xs),
            other => flattened.push(other),
        }
    }

    let minuend = optimize_pass(minuend);
    let flattened: Vec<SetExpr> = flattened.into_iter().map(optimize_pass).collect();
    SetExpr::Subtract(Box::new(minuend), flattened)
}

#[cfg(test)]
mod test_optimize {
    use super::*;

    #[test]
    fn double_complement_cancels() {
        let e = SetExpr::named("x").complement().complement();
        assert_eq!(optimize(e), SetExpr::named("x"));
    }

    #[test]
    fn singleton_intersect_and_union_unwrap() {
        assert_eq!(optimize(SetExpr::Intersect(vec![SetExpr::named("a")])), SetExpr::named("a"));
        assert_eq!(optimize(SetExpr::Union(vec![SetExpr::named("a")])), SetExpr::named("a"));
    }

    #[test]
    fn empty_is_identity_for_union() {
        let e = SetExpr::Union(vec![SetExpr::named("a"), SetExpr::empty(), SetExpr::named("b")]);
        assert_eq!(optimize(e), SetExpr::Union(vec![SetExpr::named("a"), SetExpr::named("b")]));
    }

    #[test]
    fn universe_is_identity_for_intersect() {
        let e = SetExpr::Intersect(vec![SetExpr::named("a"), SetExpr::universe(), SetExpr::named("b")]);
        assert_eq!(optimize(e), SetExpr::Intersect(vec![SetExpr::named("a"), SetExpr::named("b")]));
    }

    #[test]
    fn universe_dominates_union() {
        let e = SetExpr::Union(vec![SetExpr::named("a"), SetExpr::universe(), SetExpr::named("b")]);
        assert_eq!(optimize(e), SetExpr::universe());
    }

    #[test]
    fn empty_dominates_intersect() {
        let e = SetExpr::Intersect(vec![SetExpr::named("a"), SetExpr::empty(), SetExpr::named("b")]);
        assert_eq!(optimize(e), SetExpr::empty());
    }

    #[test]
    fn intersect_with_complement_pair_is_empty() {
        let e = SetExpr::Intersect(vec![SetExpr::named("a"), SetExpr::named("a").complement()]);
        assert_eq!(optimize(e), SetExpr::empty());
    }

    #[test]
    fn union_with_complement_pair_is_universe() {
        let e = SetExpr::Union(vec![SetExpr::named("a"), SetExpr::named("a").complement()]);
        assert_eq!(optimize(e), SetExpr::universe());
    }

    #[test]
    fn intersect_absorbs_union_containing_sibling() {
        let e = SetExpr::Intersect(vec![
            SetExpr::named("a"),
            SetExpr::Union(vec![SetExpr::named("b"), SetExpr::named("c"), SetExpr::named("a")]),
        ]);
        assert_eq!(optimize(e), SetExpr::named("a"));
    }

    #[test]
    fn union_absorbs_intersect_containing_sibling() {
        let e = SetExpr::Union(vec![
            SetExpr::named("a"),
            SetExpr::Intersect(vec![SetExpr::named("b"), SetExpr::named("c"), SetExpr::named("a")]),
        ]);
        assert_eq!(optimize(e), SetExpr::named("a"));
    }

    #[test]
    fn de_morgan_requires_every_child_complemented() {
        let e = SetExpr::Intersect(vec![
            SetExpr::named("a").complement(),
            SetExpr::named("b").complement(),
        ]);
        assert_eq!(
            optimize(e),
            SetExpr::Complement(Box::new(SetExpr::Union(vec![
                SetExpr::named("a"),
                SetExpr::named("b"),
            ])))
        );
    }

    #[test]
    fn single_complemented_child_becomes_subtraction() {
        let e = SetExpr::Intersect(vec![SetExpr::named("x"), SetExpr::named("y").complement()]);
        assert_eq!(
            optimize(e),
            SetExpr::Subtract(Box::new(SetExpr::named("x")), vec![SetExpr::named("y")])
        );
    }

    #[test]
    fn nested_intersect_and_complemented_union_becomes_subtraction() {
        let e = SetExpr::Intersect(vec![
            SetExpr::named("a"),
            SetExpr::Intersect(vec![SetExpr::named("b"), SetExpr::named("c")]),
            SetExpr::Union(vec![SetExpr::named("d"), SetExpr::named("e"), SetExpr::named("f")]).complement(),
        ]);
        assert_eq!(
            optimize(e),
            SetExpr::Subtract(
                Box::new(SetExpr::Intersect(vec![
                    SetExpr::named("b"),
                    SetExpr::named("c"),
                    SetExpr::named("a"),
                ])),
                vec![SetExpr::named("d"), SetExpr::named("e"), SetExpr::named("f")],
            )
        );
    }

    #[test]
    fn subtracting_universe_is_empty() {
        let e = SetExpr::Subtract(Box::new(SetExpr::named("x")), vec![SetExpr::universe()]);
        assert_eq!(optimize(e), SetExpr::empty());
    }

    #[test]
    fn subtracting_nothing_returns_minuend() {
        let e = SetExpr::Subtract(Box::new(SetExpr::named("x")), vec![SetExpr::empty()]);
        assert_eq!(optimize(e), SetExpr::named("x"));
    }

    #[test]
    fn subtracting_a_member_of_an_intersect_minuend_is_empty() {
        let e = SetExpr::Subtract(
            Box::new(SetExpr::Intersect(vec![SetExpr::named("a"), SetExpr::named("b")])),
            vec![SetExpr::named("a")],
        );
        assert_eq!(optimize(e), SetExpr::empty());
    }

    #[test]
    fn optimize_is_idempotent() {
        let e = SetExpr::Intersect(vec![
            SetExpr::named("a"),
            SetExpr::Intersect(vec![SetExpr::named("b"), SetExpr::named("c")]),
            SetExpr::Union(vec![SetExpr::named("d"), SetExpr::named("e")]).complement(),
        ]);
        let once = optimize(e);
        let twice = optimize(once.clone());
        assert_eq!(once, twice);
    }
}
