// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Map configuration loaded from TOML.
//!
//! Accepts either a bare table or a `[map]` section:
//!
//! ```toml
//! [map]
//! capacity = 1024
//! batch_write = "always"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::map::BatchWrite;

const KNOWN_KEYS: &[&str] = &["capacity", "batch_write"];

/// Construction settings for [`ConcurrentMap`](crate::map::ConcurrentMap).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MapConfig {
    /// Initial capacity of the underlying storage (default: 0).
    #[serde(default)]
    pub capacity: usize,

    /// Policy for `batch_set` (default: "skip-unchanged").
    #[serde(default)]
    pub batch_write: BatchWrite,
}

/// Load configuration from a file, warning about unknown keys.
pub fn load(path: &Path) -> Result<MapConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content)
}

/// Parse configuration from TOML text, warning about unknown keys.
pub fn parse(content: &str) -> Result<MapConfig, ConfigError> {
    let root: toml::Table = toml::from_str(content)?;
    let (table, ignored) = split_map_section(root)?;

    for key in &ignored {
        tracing::warn!("unrecognized config key: {}", key);
    }

    let config: MapConfig = toml::Value::Table(table).try_into()?;
    Ok(config)
}

/// Select the table holding map settings and list the keys that will be
/// ignored.
///
/// With a `[map]` section every other root key is ignored, including known
/// setting names.
fn split_map_section(mut root: toml::Table) -> Result<(toml::Table, Vec<String>), ConfigError> {
    let (table, mut ignored) = match root.remove("map") {
        Some(toml::Value::Table(t)) => (t, root.keys().cloned().collect::<Vec<_>>()),
        Some(other) => {
            return Err(ConfigError::Invalid(format!(
                "`map` must be a table, found {}",
                other.type_str()
            )));
        }
        None => (root, Vec::new()),
    };

    ignored.extend(
        table
            .keys()
            .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
            .cloned(),
    );
    Ok((table, ignored))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
