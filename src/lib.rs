// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `ibex` is a boolean full-text search engine: a shared tokenizer and
//! Porter stemmer feed an inverted index builder and a boolean query
//! engine (precedence-parsed to RPN, evaluated as sorted-list set
//! operations, ranked by a tf-idf-style score).
//!
//! The crate is organized the way the data flows:
//!
//! - [`analyzer`] / [`stemmer`] - the linguistic pipeline shared by
//!   indexing and querying.
//! - [`build`] - turns a documents stream into an in-memory index.
//! - [`binary`] - the four-file on-disk format.
//! - [`index`] - loads those four files back into a queryable [`index::Index`].
//! - [`query`] - lexes, parses, evaluates, and ranks a query string.
//! - [`scoring`] - the ranking function `query` calls.
//! - [`zipf`] - the informational term-frequency report.
//! - [`error`] - the fatal configuration/IO error type.
//! - [`cli`] - the `ibex` binary's argument surface.

pub mod analyzer;
pub mod binary;
pub mod build;
pub mod cli;
pub mod error;
pub mod index;
pub mod query;
pub mod scoring;
pub mod stemmer;
pub mod types;
pub mod zipf;

#[cfg(test)]
pub mod testing;

pub use error::{IndexError, Result};
pub use index::Index;
pub use types::{DocumentRecord, Posting, PostingList, SearchResult, Stats};


#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;

    use crate::query::eval;
    use crate::query::parser::Rpn;

    fn rpn_term_strategy() -> impl Strategy<Value = Rpn> {
        "[a-z]{2,8}".prop_map(Rpn::Term)
    }

    fn rpn_op_strategy() -> impl Strategy<Value = Rpn> {
        prop_oneof![Just(Rpn::And), Just(Rpn::Or), Just(Rpn::Not)]
    }

    proptest! {
        /// Invariant: any RPN program, however ill-formed, evaluates
        /// without panicking, against an index with no documents at all.
        #[test]
        fn rpn_never_crashes_on_empty_index(
            program in proptest::collection::vec(
                prop_oneof![rpn_term_strategy(), rpn_op_strategy()],
                0..20,
            )
        ) {
            let index = crate::index::Index::default();
            let _ = eval::evaluate(&index, &program);
        }

        /// Invariant: set operations over arbitrary sorted, deduplicated
        /// doc_id lists stay sorted, and every element they produce
        /// really does come from one of the two inputs.
        #[test]
        fn set_ops_stay_sorted_and_correct(
            mut a in proptest::collection::vec(0u32..200, 0..30),
            mut b in proptest::collection::vec(0u32..200, 0..30),
        ) {
            a.sort();
            a.dedup();
            b.sort();
            b.dedup();

            let intersection = eval::intersect(&a, &b);
            let merged = eval::union(&a, &b);
            let subtracted = eval::difference(&a, &b);

            prop_assert!(eval::is_sorted(&intersection) || intersection.len() < 2);
            prop_assert!(eval::is_sorted(&merged) || merged.len() < 2);
            prop_assert!(eval::is_sorted(&subtracted) || subtracted.len() < 2);

            for &x in &intersection {
                prop_assert!(a.contains(&x) && b.contains(&x));
            }
            for &x in &subtracted {
                prop_assert!(a.contains(&x) && !b.contains(&x));
            }
            for &x in &a {
                prop_assert!(merged.contains(&x));
            }
            for &x in &b {
                prop_assert!(merged.contains(&x));
            }
        }
    }
}
