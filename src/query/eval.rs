// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Evaluating an RPN program over sorted doc_id lists.
//!
//! The evaluator never raises an error: stack underflow on `and`/`or`
//! is a no-op (the operator is simply skipped), an unknown term
//! contributes an empty list, and `not` with nothing to its left
//! substitutes the universe of non-hole documents. A malformed or
//! degenerate query always produces *some* result, possibly empty.

use std::cmp::Ordering;

use super::parser::Rpn;
use crate::analyzer;
use crate::index::Index;

/// Evaluate a parsed query, returning the matching doc_ids ascending.
pub fn evaluate(index: &Index, rpn: &[Rpn]) -> Vec<u32> {
    let mut stack: Vec<Vec<u32>> = Vec::new();

    for op in rpn {
        match op {
            Rpn::Term(raw) => {
                let ids = analyzer::analyze_query_term(raw)
                    .map(|stem| index.doc_ids_for(&stem))
                    .unwrap_or_default();
                stack.push(ids);
            }
            Rpn::And => {
                if stack.len() >= 2 {
                    let b = stack.pop().unwrap();
                    let a = stack.pop().unwrap();
                    stack.push(intersect(&a, &b));
                }
            }
            Rpn::Or => {
                if stack.len() >= 2 {
                    let b = stack.pop().unwrap();
                    let a = stack.pop().unwrap();
                    stack.push(union(&a, &b));
                }
            }
            Rpn::Not => {
                if let Some(right) = stack.pop() {
                    let left = stack.pop().unwrap_or_else(|| index.universe());
                    stack.push(difference(&left, &right));
                }
                // No `right` at all: nothing to negate, no-op.
            }
        }
    }

    stack.pop().unwrap_or_default()
}

/// Every distinct stem used for scoring: one entry per literal query
/// term that would actually have survived indexing, in first-seen
/// order. Terms that normalize away (stop words, too short) are
/// dropped - they can never appear in a posting list, so they can never
/// score anything.
pub fn scoring_terms(rpn: &[Rpn]) -> Vec<String> {
    let mut out = Vec::new();
    for op in rpn {
        if let Rpn::Term(raw) = op {
            if let Some(stem) = analyzer::analyze_query_term(raw) {
                if !out.contains(&stem) {
                    out.push(stem);
                }
            }
        }
    }
    out
}

pub(crate) fn is_sorted(xs: &[u32]) -> bool {
    xs.windows(2).all(|w| w[0] < w[1])
}

pub(crate) fn intersect(a: &[u32], b: &[u32]) -> Vec<u32> {
    debug_assert!(is_sorted(a), "intersect operand not sorted ascending");
    debug_assert!(is_sorted(b), "intersect operand not sorted ascending");
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}

pub(crate) fn union(a: &[u32], b: &[u32]) -> Vec<u32> {
    debug_assert!(is_sorted(a), "union operand not sorted ascending");
    debug_assert!(is_sorted(b), "union operand not sorted ascending");
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => {
                out.push(a[i]);
                i += 1;
            }
            Ordering::Greater => {
                out.push(b[j]);
                j += 1;
            }
            Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}

pub(crate) fn difference(a: &[u32], b: &[u32]) -> Vec<u32> {
    debug_assert!(is_sorted(a), "difference operand not sorted ascending");
    debug_assert!(is_sorted(b), "difference operand not sorted ascending");
    let mut out = Vec::with_capacity(a.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() {
        if j >= b.len() || a[i] < b[j] {
            out.push(a[i]);
            i += 1;
        } else if a[i] > b[j] {
            j += 1;
        } else {
            i += 1;
            j += 1;
        }
    }
    out
}
