// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Regex match and replace helpers.
//!
//! The free functions compile their pattern on every call. A pattern that
//! fails to compile is "no match" for [`is_match`] but an error for
//! [`replace`], which hands the input back untouched inside the error.
//!
//! String variants run over the byte variants on the UTF-8 encoding and
//! behave identically. Replacement text expands `$1`, `${name}` and `$$`.

pub mod matcher;

pub use matcher::CompiledPattern;

use crate::error::ReplaceError;

/// Test `input` against `pattern`. An invalid pattern never matches.
pub fn is_match(pattern: &str, input: &[u8]) -> bool {
    match CompiledPattern::new(pattern) {
        Ok(re) => re.is_match(input),
        Err(err) => {
            tracing::debug!("treating invalid pattern {:?} as no match: {}", pattern, err);
            false
        }
    }
}

/// String form of [`is_match`].
pub fn is_match_str(pattern: &str, input: &str) -> bool {
    is_match(pattern, input.as_bytes())
}

/// Replace every non-overlapping match of `pattern` in `input`.
pub fn replace(
    pattern: &str,
    input: &[u8],
    replacement: &[u8],
) -> Result<Vec<u8>, ReplaceError<Vec<u8>>> {
    match CompiledPattern::new(pattern) {
        Ok(re) => Ok(re.replace_all(input, replacement)),
        Err(err) => {
            tracing::debug!("cannot replace with invalid pattern {:?}: {}", pattern, err);
            Err(ReplaceError {
                input: input.to_vec(),
                source: err.0,
            })
        }
    }
}

/// String form of [`replace`].
pub fn replace_str(
    pattern: &str,
    input: &str,
    replacement: &str,
) -> Result<String, ReplaceError<String>> {
    match replace(pattern, input.as_bytes(), replacement.as_bytes()) {
        Ok(out) => Ok(matcher::into_string(out)),
        Err(err) => Err(ReplaceError {
            input: input.to_string(),
            source: err.source,
        }),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
