// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Small shared utilities.
//!
//! - [`map`]: a string-keyed map guarded by a single reader/writer lock.
//! - [`pattern`]: regex match and replace helpers that swallow compile
//!   errors on the boolean path.

pub mod config;
pub mod error;
pub mod map;
pub mod pattern;

pub use config::MapConfig;
pub use error::{ConfigError, PatternError, ReplaceError};
pub use map::{BatchWrite, ConcurrentMap, StringAnyMap, StringMap};
pub use pattern::{CompiledPattern, is_match, is_match_str, replace, replace_str};
