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

//! This module implements `normalize`: the syntactic canonicalization pass
//! that every `optimize_pass` starts from. It does not change the meaning of
//! an expression, only its shape, so that subsequent structural comparisons
//! (dedup, absorption, complement-law checks) are reliable.

use super::expr::SetExpr;

/// Puts `expr` into canonical form: children of `Intersect`/`Union` are
/// deduplicated (keeping the first occurrence) and then stably sorted by
/// rank (see `SetExpr::rank`), so nodes that share a rank keep their
/// relative input order; `Subtract` keeps its minuend first and normalizes
/// its subtrahends the same way; `Complement`'s child and plain leaves are
/// left untouched (recursion into them is the job of `optimize_pass`, not
/// `normalize`).
pub fn normalize(expr: SetExpr) -> SetExpr {
    match expr {
        SetExpr::Intersect(children) => SetExpr::Intersect(dedup_sorted(children)),
        SetExpr::Union(children) => SetExpr::Union(dedup_sorted(children)),
        SetExpr::Subtract(minuend, subtrahends) => {
            SetExpr::Subtract(minuend, dedup_sorted(subtrahends))
        }
        other => other,
    }
}

fn dedup_sorted(children: Vec<SetExpr>) -> Vec<SetExpr> {
    let mut deduped: Vec<SetExpr> = Vec::with_capacity(children.len());
    for child in children {
        if !deduped.contains(&child) {
            deduped.push(child);
        }
    }
    deduped.sort_by_key(SetExpr::rank);
    deduped
}
