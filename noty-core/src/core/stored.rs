//! A typed value mirrored to one [`Storage`] key.

use crate::{Result, Storage};
use serde::{de::DeserializeOwned, Serialize};

/// A value of type `T` kept in memory and written through to `key` as JSON.
///
/// Reads never fail: a missing key, an unreadable store, or JSON that does not
/// parse as `T` all fall back to the initial value. Every [`set`](Self::set)
/// reserializes the whole value.
#[derive(Debug)]
pub struct StoredValue<T> {
    key: String,
    value: T,
}

impl<T> StoredValue<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn load(storage: &Storage, key: impl Into<String>, initial: T) -> Self {
        let key = key.into();
        let value = match storage.get_item(&key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    log::warn!("discarding unreadable value under {key}: {e}");
                    initial
                }
            },
            Ok(None) => initial,
            Err(e) => {
                log::warn!("could not read {key}: {e}");
                initial
            }
        };
        Self { key, value }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replaces the value and writes it to `storage`.
    ///
    /// The in-memory value is updated even when the write fails.
    ///
    /// # Errors
    ///
    /// Returns [`crate::NotyError::Json`] or [`crate::NotyError::Database`] if
    /// the value could not be written.
    pub fn set(&mut self, storage: &Storage, value: T) -> Result<()> {
        self.value = value;
        self.persist(storage)
    }

    fn persist(&self, storage: &Storage) -> Result<()> {
        let result = serde_json::to_string(&self.value)
            .map_err(Into::into)
            .and_then(|json| storage.set_item(&self.key, &json));
        if let Err(ref e) = result {
            log::error!("failed to write {}: {e}", self.key);
        }
        result
    }
}
