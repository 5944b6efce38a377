// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled patterns for callers that reuse one pattern many times.

use regex::bytes::Regex;

use crate::error::PatternError;

/// A pattern compiled once, usable on bytes and strings.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
}

impl CompiledPattern {
    /// Compile `pattern`.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// The source pattern.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Test `input` against the pattern.
    pub fn is_match(&self, input: &[u8]) -> bool {
        self.regex.is_match(input)
    }

    /// String form of [`is_match`](Self::is_match).
    pub fn is_match_str(&self, input: &str) -> bool {
        self.is_match(input.as_bytes())
    }

    /// Replace every non-overlapping match, expanding capture references
    /// in `replacement`.
    pub fn replace_all(&self, input: &[u8], replacement: &[u8]) -> Vec<u8> {
        self.regex.replace_all(input, replacement).into_owned()
    }

    /// String form of [`replace_all`](Self::replace_all).
    pub fn replace_all_str(&self, input: &str, replacement: &str) -> String {
        into_string(self.replace_all(input.as_bytes(), replacement.as_bytes()))
    }
}

/// Bytes produced by replacing within valid UTF-8.
///
/// Only a pattern with Unicode disabled (`(?-u)`) can split a code point;
/// such bytes are replaced with U+FFFD.
pub(super) fn into_string(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
