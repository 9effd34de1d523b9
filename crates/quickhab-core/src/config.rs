// ── Persisted settings ──
//
// Two string values survive restarts: the server address and the filter
// tag. Core owns the contract and validation; the file-backed store lives
// in `quickhab-config`. Nothing here touches the network.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::CoreError;

pub const SERVER_KEY: &str = "server";
pub const QUERY_TAG_KEY: &str = "queryTag";
pub const DEFAULT_SERVER: &str = "http://localhost:8080";
pub const DEFAULT_QUERY_TAG: &str = "QuickHAB";

/// User-scoped key/value persistence.
pub trait PreferenceStore: Send + Sync + 'static {
    /// The stored value for `key`, or `default` when unset.
    fn load(&self, key: &str, default: &str) -> String;

    /// Store `value` under `key` and persist it immediately.
    fn save(&self, key: &str, value: &str) -> Result<(), CoreError>;
}

/// The settings the controller runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base address, optionally with `user:pass@` userinfo.
    pub server: String,
    /// Tag an item needs to appear as a top-level action. Never blank.
    pub query_tag: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.into(),
            query_tag: DEFAULT_QUERY_TAG.into(),
        }
    }
}

/// Validated get/set access to the persisted settings.
#[derive(Clone)]
pub struct ConfigAccessor {
    store: Arc<dyn PreferenceStore>,
}

impl ConfigAccessor {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// Load both values. A blank stored value falls back to its default.
    pub fn load(&self) -> Settings {
        Settings {
            server: self.server(),
            query_tag: self.query_tag(),
        }
    }

    pub fn server(&self) -> String {
        self.load_non_blank(SERVER_KEY, DEFAULT_SERVER)
    }

    pub fn query_tag(&self) -> String {
        self.load_non_blank(QUERY_TAG_KEY, DEFAULT_QUERY_TAG)
    }

    /// Validate and persist a new server address. Returns the stored value.
    pub fn set_server(&self, address: &str) -> Result<String, CoreError> {
        let address = validate(SERVER_KEY, address)?;
        self.store.save(SERVER_KEY, &address)?;
        Ok(address)
    }

    /// Validate and persist a new filter tag. Returns the stored value.
    pub fn set_query_tag(&self, tag: &str) -> Result<String, CoreError> {
        let tag = validate(QUERY_TAG_KEY, tag)?;
        self.store.save(QUERY_TAG_KEY, &tag)?;
        Ok(tag)
    }

    fn load_non_blank(&self, key: &str, default: &str) -> String {
        let value = self.store.load(key, default);
        if value.trim().is_empty() {
            tracing::warn!(key, "stored value is blank, using default");
            return default.to_owned();
        }
        value
    }
}

/// Trim `value` and reject it when nothing is left.
pub fn validate(field: &str, value: &str) -> Result<String, CoreError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CoreError::Validation {
            field: field.into(),
            reason: "must not be blank".into(),
        });
    }
    Ok(value.to_owned())
}

// ── In-memory store ──────────────────────────────────────────────────

/// A [`PreferenceStore`] that forgets everything on exit.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a value.
    pub fn with(self, key: &str, value: &str) -> Self {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
        self
    }

    /// The raw stored value, if any.
    pub fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_owned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), CoreError> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
        Ok(())
    }
}
