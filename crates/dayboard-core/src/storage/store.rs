//! Generic persisted-value store.
//!
//! One JSON blob per logical key under the data directory. Every blob is a
//! versioned envelope `{version, data}` where `data` is the direct
//! serialization of the collection. Reads tolerate missing, corrupt, or
//! outdated blobs by falling back to the type's default; writes overwrite
//! the blob immediately (operations are user-paced, so no batching).

use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::StoreError;

/// A collection that lives under one store key.
///
/// `VERSION` is bumped whenever the serialized shape changes; `migrate`
/// upgrades an older envelope payload to the current shape, or returns
/// `None` when no upgrade path exists (the caller then falls back to the
/// default, which is the documented recovery behavior).
pub trait Persisted: Default + Serialize + DeserializeOwned {
    const KEY: &'static str;
    const VERSION: u32;

    fn migrate(from: u32, raw: serde_json::Value) -> Option<serde_json::Value> {
        let _ = (from, raw);
        None
    }
}

#[derive(Serialize, Deserialize)]
struct Envelope {
    version: u32,
    data: serde_json::Value,
}

/// Handle on the blob directory. One instance serves every key.
#[derive(Debug, Clone)]
pub struct KvStore {
    root: PathBuf,
}

impl KvStore {
    /// Open the store at the default data directory.
    pub fn open() -> Result<Self, StoreError> {
        Ok(Self { root: data_dir()? })
    }

    /// Open the store at an explicit directory (tests, tooling).
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Load the collection, or `None` if no blob exists yet.
    ///
    /// # Errors
    /// Returns an error if the blob exists but cannot be read, parsed, or
    /// migrated to the current version.
    pub fn try_load<T: Persisted>(&self) -> Result<Option<T>, StoreError> {
        let path = self.blob_path(T::KEY);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::ReadFailed { path, source }),
        };

        let envelope: Envelope = serde_json::from_str(&text).map_err(|e| StoreError::Corrupt {
            key: T::KEY,
            message: e.to_string(),
        })?;

        let raw = if envelope.version == T::VERSION {
            envelope.data
        } else {
            T::migrate(envelope.version, envelope.data).ok_or(StoreError::VersionMismatch {
                key: T::KEY,
                found: envelope.version,
                expected: T::VERSION,
            })?
        };

        let value = serde_json::from_value(raw).map_err(|e| StoreError::Corrupt {
            key: T::KEY,
            message: e.to_string(),
        })?;
        Ok(Some(value))
    }

    /// Persist the collection, overwriting any existing blob.
    ///
    /// # Errors
    /// Returns an error if the blob directory or file cannot be written.
    pub fn try_save<T: Persisted>(&self, value: &T) -> Result<(), StoreError> {
        let envelope = Envelope {
            version: T::VERSION,
            data: serde_json::to_value(value).map_err(|e| StoreError::Corrupt {
                key: T::KEY,
                message: e.to_string(),
            })?,
        };
        let text = serde_json::to_string_pretty(&envelope).map_err(|e| StoreError::Corrupt {
            key: T::KEY,
            message: e.to_string(),
        })?;

        let path = self.blob_path(T::KEY);
        fs::create_dir_all(&self.root).map_err(|source| StoreError::WriteFailed {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, text).map_err(|source| StoreError::WriteFailed { path, source })?;
        Ok(())
    }

    /// Load the collection, falling back to the default on any failure.
    /// Recoveries are logged, never surfaced.
    pub fn load<T: Persisted>(&self) -> T {
        match self.try_load::<T>() {
            Ok(Some(value)) => value,
            Ok(None) => T::default(),
            Err(e) => {
                eprintln!("Warning: using default for '{}': {e}", T::KEY);
                T::default()
            }
        }
    }

    /// Persist the collection; a failed write logs a warning and is a
    /// no-op (in-memory state stands for the rest of the session).
    pub fn save<T: Persisted>(&self, value: &T) {
        if let Err(e) = self.try_save(value) {
            eprintln!("Warning: could not persist '{}': {e}", T::KEY);
        }
    }
}
