// ABOUTME: Key-value persistence port with an in-memory backend
// ABOUTME: Process-wide state with init-on-load, write-on-mutate lifecycle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealTrack

//! Persistence port
//!
//! Profile and day-log state live behind a small key-value port so the core
//! stays decoupled from whatever backs it on-device. Values are JSON
//! strings; the typed helpers below handle the (de)serialization. The
//! in-memory store backs tests and fresh sessions.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::warn;

use crate::errors::{AppError, AppResult};

/// Key-value persistence port
///
/// Mirrors the string-to-string contract of on-device storage: `get`
/// returns `None` for missing keys, `set` overwrites unconditionally.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, overwriting any previous value
    fn set(&self, key: &str, value: String);
    /// Delete the value stored under `key`, if any
    fn remove(&self, key: &str);
}

/// In-memory store for tests and fresh sessions
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.entries.read() {
            Ok(entries) => entries.get(key).cloned(),
            Err(_) => None,
        }
    }

    fn set(&self, key: &str, value: String) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_owned(), value);
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(key);
        }
    }
}

/// Load and deserialize a JSON value from the store
///
/// Missing keys and corrupt payloads both yield `None`; a corrupt payload
/// is logged and treated as absent rather than failing the caller.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key, error = %err, "stored value is corrupt, ignoring");
            None
        }
    }
}

/// Serialize and store a JSON value
///
/// # Errors
///
/// Returns a serialization error when `value` cannot be encoded.
pub fn store_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> AppResult<()> {
    let raw = serde_json::to_string(value).map_err(AppError::from)?;
    store.set(key, raw);
    Ok(())
}
