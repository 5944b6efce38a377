// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types.

use std::path::PathBuf;

use thiserror::Error;

/// A pattern that failed to compile.
#[derive(Debug, Error)]
#[error("invalid pattern: {0}")]
pub struct PatternError(#[from] pub regex::Error);

/// A replacement whose pattern failed to compile.
///
/// Carries the input back to the caller unmodified, so a failed replace
/// can still be told apart from one that matched nothing.
#[derive(Debug, Error)]
#[error("invalid pattern: {source}")]
pub struct ReplaceError<T> {
    pub input: T,
    #[source]
    pub source: regex::Error,
}

impl<T> ReplaceError<T> {
    /// Take back the unmodified input.
    pub fn into_input(self) -> T {
        self.input
    }
}

/// Failure while loading map configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
