// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The shared text analysis pipeline: tokenize, drop stop words, stem.
//!
//! Both the index builder and the query parser call [`analyze`] - never
//! their own ad hoc tokenizer - so a term looked up at query time can
//! never diverge from how it was indexed.

use std::sync::LazyLock;

use std::collections::HashSet;

use crate::stemmer;

/// A single analyzed token: the lowercased surface form as it appeared in
/// the text, and its Porter stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
    pub stem: String,
}

/// Tokenize and stem `text`, dropping stop words and anything shorter
/// than two characters.
///
/// A token is a maximal run of ASCII letters, optionally continuing
/// through an apostrophe as long as the run so far is non-empty (so a
/// leading apostrophe is just a separator, but `don't` stays one token).
/// Everything else - digits, punctuation, whitespace, non-ASCII bytes -
/// terminates the current run.
pub fn analyze(text: &str) -> Vec<Token> {
    surface_tokens(text)
        .into_iter()
        .filter(|t| t.len() >= 2 && !is_stop_word(t))
        .map(|surface| {
            let stem = stemmer::stem(&surface);
            Token { surface, stem }
        })
        .collect()
}

/// Tokenize `text` without filtering. The building block [`analyze`] and
/// [`analyze_query_term`] both apply the stop-word/length filter to.
pub fn surface_tokens(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut cur = String::new();
    for b in text.bytes() {
        let c = b as char;
        if c.is_ascii_alphabetic() {
            cur.push(c.to_ascii_lowercase());
        } else if c == '\'' && !cur.is_empty() {
            cur.push(c);
        } else if !cur.is_empty() {
            tokens.push(std::mem::take(&mut cur));
        }
    }
    if !cur.is_empty() {
        tokens.push(cur);
    }
    tokens
}

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is",
        "it", "its", "of", "on", "that", "the", "to", "was", "were", "will", "with", "this",
        "but", "they", "have", "had", "what", "when", "where", "who", "which", "why", "how",
        "all", "each", "every", "both", "few", "more", "most", "other", "some", "such", "no",
        "nor", "not", "only", "own", "same", "so", "than", "too", "very", "can", "just",
        "should", "now", "you", "your", "we", "our", "us", "or", "if", "do", "did", "does",
        "about", "up", "out", "would", "could", "may", "might", "been", "also", "into", "over",
        "after", "before", "through", "between", "her", "him", "his", "she", "them", "their",
        "my", "me", "any", "there", "then", "these", "those", "am", "being", "here", "while",
        "during", "under", "again", "once",
    ]
    .into_iter()
    .collect()
});

/// Is `word` in the closed stop-word list?
///
/// `not` and `or` are in this list - they are also reserved query
/// operators - so they are removed from indexed term positions exactly
/// as any other stop word would be, on both the indexing and query side.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Run a single already-lexed query term through the same filter+stem
/// pipeline the indexer uses on every document. Returns `None` if the
/// term could never have been indexed in the first place (it isn't a
/// clean letter run, it's shorter than two characters, or it's a stop
/// word) - the query evaluator treats that exactly like an unknown term.
pub fn analyze_query_term(raw: &str) -> Option<String> {
    let toks = surface_tokens(raw);
    if toks.len() != 1 || toks[0] != raw {
        return None;
    }
    let word = &toks[0];
    if word.len() < 2 || is_stop_word(word) {
        return None;
    }
    Some(stemmer::stem(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_letters_and_apostrophes() {
        let toks = surface_tokens("Don't stop believing!");
        assert_eq!(toks, vec!["don't", "stop", "believing"]);
    }

    #[test]
    fn leading_apostrophe_is_a_separator() {
        let toks = surface_tokens("'tis the season");
        assert_eq!(toks, vec!["tis", "the", "season"]);
    }

    #[test]
    fn drops_stop_words_and_short_tokens() {
        let analyzed = analyze("The vault is a safe place to run and hide");
        let surfaces: Vec<_> = analyzed.iter().map(|t| t.surface.as_str()).collect();
        assert!(!surfaces.contains(&"the"));
        assert!(!surfaces.contains(&"is"));
        assert!(!surfaces.contains(&"a"));
        assert!(!surfaces.contains(&"and"));
        assert!(surfaces.contains(&"vault"));
        assert!(surfaces.contains(&"safe"));
        assert!(surfaces.contains(&"run"));
        assert!(surfaces.contains(&"hide"));
    }

    #[test]
    fn not_and_or_are_removed_as_stop_words_too() {
        assert!(is_stop_word("not"));
        assert!(is_stop_word("or"));
    }

    #[test]
    fn running_and_runs_both_stem_to_run() {
        let run = |s: &str| analyze(s).into_iter().map(|t| t.stem).collect::<Vec<_>>();
        assert_eq!(run("running"), vec!["run"]);
        assert_eq!(run("runs"), vec!["run"]);
    }
}
