// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Concurrent map guarded by a single reader/writer lock.
//!
//! Every operation takes the lock exactly once, in shared mode for reads and
//! exclusive mode for writes, so callers never observe a half-applied
//! update. The one exception is [`ConcurrentMap::batch_set`] under
//! [`BatchWrite::SkipUnchanged`], which checks under the shared lock and
//! writes under the exclusive lock.
//!
//! Enumeration ([`keys`](ConcurrentMap::keys), [`values`](ConcurrentMap::values),
//! [`snapshot`](ConcurrentMap::snapshot)) returns disconnected copies in no
//! particular order. The order can differ between two calls on an unchanged
//! map.

use std::any::Any;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Deserialize;

use crate::config::MapConfig;

/// Map keyed by owned strings.
pub type StringMap<V> = ConcurrentMap<String, V>;

/// String-keyed map holding values of any type.
///
/// Values have no `PartialEq`, so use
/// [`batch_set_with`](ConcurrentMap::batch_set_with) with `Arc::ptr_eq` to
/// skip rewriting the same handle.
pub type StringAnyMap = StringMap<Arc<dyn Any + Send + Sync>>;

/// Write policy for [`ConcurrentMap::batch_set`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BatchWrite {
    /// Drop entries equal to the stored value under the shared lock, then
    /// write the rest under the exclusive lock. The check can go stale
    /// before the write; skipping is best-effort.
    #[default]
    SkipUnchanged,
    /// Write every entry under one exclusive acquisition.
    Always,
}

/// Map shared between threads behind one `RwLock`.
pub struct ConcurrentMap<K, V> {
    inner: RwLock<HashMap<K, V>>,
    batch_write: BatchWrite,
}

impl<K, V> ConcurrentMap<K, V> {
    /// Create an empty map with the default batch write policy.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
            batch_write: BatchWrite::default(),
        }
    }

    /// Create an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(HashMap::with_capacity(capacity)),
            batch_write: BatchWrite::default(),
        }
    }

    /// Build an empty map from loaded configuration.
    pub fn from_config(config: &MapConfig) -> Self {
        Self::with_capacity(config.capacity).batch_write(config.batch_write)
    }

    /// Set the [`BatchWrite`] policy.
    pub fn batch_write(mut self, policy: BatchWrite) -> Self {
        self.batch_write = policy;
        self
    }

    /// Current [`BatchWrite`] policy.
    pub fn batch_write_policy(&self) -> BatchWrite {
        self.batch_write
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Drop every entry.
    ///
    /// The storage is swapped for a fresh map rather than emptied key by key.
    pub fn clear(&self) {
        let old = std::mem::take(&mut *self.write());
        tracing::trace!(dropped = old.len(), "cleared map");
    }

    // A panic while holding the lock cannot leave the HashMap itself in a
    // broken state, so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<K, V>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<K, V>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K: Eq + Hash, V> ConcurrentMap<K, V> {
    /// Insert or overwrite `key`.
    pub fn set(&self, key: K, value: V) {
        self.write().insert(key, value);
    }

    /// Delete `key` if present.
    pub fn remove<Q>(&self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.write().remove(key);
    }

    /// Delete every listed key under one exclusive acquisition.
    ///
    /// Keys that are not present are ignored.
    pub fn batch_remove<'a, I, Q>(&self, keys: I)
    where
        I: IntoIterator<Item = &'a Q>,
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized + 'a,
    {
        let mut map = self.write();
        for key in keys {
            map.remove(key);
        }
    }

    /// Remove `key` and return what it held.
    ///
    /// The read and the delete happen under the same exclusive lock.
    pub fn get_and_remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.write().remove(key)
    }

    /// Check if `key` is present.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.read().contains_key(key)
    }

    /// Write `entries`, skipping those for which `eq(stored, new)` holds
    /// when the policy is [`BatchWrite::SkipUnchanged`].
    ///
    /// A key listed more than once keeps its last value.
    pub fn batch_set_with<I, F>(&self, entries: I, eq: F)
    where
        I: IntoIterator<Item = (K, V)>,
        F: Fn(&V, &V) -> bool,
    {
        let entries: HashMap<K, V> = entries.into_iter().collect();
        if entries.is_empty() {
            return;
        }

        let todo = match self.batch_write {
            BatchWrite::Always => entries.into_iter().collect(),
            BatchWrite::SkipUnchanged => {
                let total = entries.len();
                let map = self.read();
                let todo: Vec<(K, V)> = entries
                    .into_iter()
                    .filter(|(k, v)| !map.get(k).is_some_and(|old| eq(old, v)))
                    .collect();
                drop(map);
                tracing::trace!(skipped = total - todo.len(), "batch set check");
                todo
            }
        };

        if todo.is_empty() {
            return;
        }

        let mut map = self.write();
        let written = todo.len();
        map.extend(todo);
        tracing::trace!(written, "batch set applied");
    }
}

impl<K: Eq + Hash, V: PartialEq> ConcurrentMap<K, V> {
    /// Write `entries`, skipping those equal to the stored value.
    ///
    /// See [`BatchWrite`] for how the skip interacts with concurrent writers.
    pub fn batch_set<I>(&self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.batch_set_with(entries, V::eq);
    }
}

impl<K: Eq + Hash, V: Clone> ConcurrentMap<K, V> {
    /// Clone of the value stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.read().get(key).cloned()
    }

    /// Stored value, or `V::default()` when `key` is absent.
    ///
    /// An absent key and a stored default look the same here; use
    /// [`contains`](Self::contains) to tell them apart.
    pub fn get_or_default<Q>(&self, key: &Q) -> V
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
        V: Default,
    {
        self.get(key).unwrap_or_default()
    }

    /// Unordered copy of all values.
    pub fn values(&self) -> Vec<V> {
        self.read().values().cloned().collect()
    }
}

impl<K: Clone, V> ConcurrentMap<K, V> {
    /// Unordered copy of all keys.
    pub fn keys(&self) -> Vec<K> {
        self.read().keys().cloned().collect()
    }
}

impl<K: Clone + Eq + Hash, V: Clone> ConcurrentMap<K, V> {
    /// Shallow copy of every entry.
    ///
    /// Values are cloned, not deep-copied; `Arc` values stay shared.
    pub fn snapshot(&self) -> HashMap<K, V> {
        HashMap::clone(&self.read())
    }
}

impl<K, V> Default for ConcurrentMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Eq + Hash, V: Clone> Clone for ConcurrentMap<K, V> {
    /// Independent map with its own lock, filled from a snapshot.
    fn clone(&self) -> Self {
        Self {
            inner: RwLock::new(self.snapshot()),
            batch_write: self.batch_write,
        }
    }
}

impl<K, V> From<HashMap<K, V>> for ConcurrentMap<K, V> {
    fn from(map: HashMap<K, V>) -> Self {
        Self {
            inner: RwLock::new(map),
            batch_write: BatchWrite::default(),
        }
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for ConcurrentMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<HashMap<K, V>>())
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ConcurrentMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcurrentMap")
            .field("entries", &*self.read())
            .field("batch_write", &self.batch_write)
            .finish()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
