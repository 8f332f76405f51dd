// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lexing a raw query string into normalized tokens.
//!
//! Parentheses are surrounded with spaces first so they always split
//! off as their own tokens, then every whitespace-delimited piece is
//! normalized: lowercased, trimmed of any leading/trailing character
//! that isn't alphanumeric or an apostrophe, and dropped if that leaves
//! it empty. Parentheses themselves are never run through
//! normalization - `(` and `)` pass straight through.

/// A lexed query token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tok {
    LParen,
    RParen,
    And,
    Or,
    Not,
    Term(String),
}

pub fn lex(query: &str) -> Vec<Tok> {
    let spaced = query.replace('(', " ( ").replace(')', " ) ");
    spaced
        .split_whitespace()
        .filter_map(|raw| {
            if raw == "(" {
                return Some(Tok::LParen);
            }
            if raw == ")" {
                return Some(Tok::RParen);
            }
            let lowered = raw.to_lowercase();
            let trimmed = lowered
                .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .to_string();
            if trimmed.is_empty() {
                return None;
            }
            Some(match trimmed.as_str() {
                "and" => Tok::And,
                "or" => Tok::Or,
                "not" => Tok::Not,
                _ => Tok::Term(trimmed),
            })
        })
        .collect()
}
