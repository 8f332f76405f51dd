// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

#![doc(hidden)]
//! Test-only corpus builders, shared by the unit tests in this crate
//! and available to integration tests under `tests/`.

use crate::build::IndexBuilder;
use crate::index::Index;

/// The three-document Fallout-flavored corpus used throughout the
/// query-engine tests: a vault-dweller document, a Nuka-Cola document,
/// and a raiders document that mentions both a vault and running.
pub fn make_corpus() -> Index {
    let mut b = IndexBuilder::new();
    b.add_document(
        0,
        "http://vault111.example/tour",
        "Vault 111 Cryo Tour",
        "the vault dweller wakes inside vault 111 after two centuries of frozen cryo sleep and steps into the wasteland",
    );
    b.add_document(
        1,
        "http://nukacola.example/history",
        "Nuka-Cola Bottling History",
        "nuka cola was the signature soft drink bottled before the war and still found in vending machines across the wasteland",
    );
    b.add_document(
        2,
        "http://raiders.example/camps",
        "Raider Camps Near the Vault",
        "raiders running wild set up camps near the vault entrance and scavenge the wasteland for nuka cola bottles",
    );

    let dir = tempfile::tempdir().expect("tempdir");
    b.save(dir.path()).expect("save");
    Index::load(dir.path()).expect("load")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corpus_has_three_documents() {
        assert_eq!(make_corpus().doc_count(), 3);
    }
}
