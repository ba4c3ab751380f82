//! # Key/value storage: the client's only durable state
//!
//! The restaurant client persists exactly two string values between page loads:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] | The raw bearer JWT as issued by the backend |
//! | [`USER_KEY`] | A JSON object `{"email": ..., "role": ...}` |
//!
//! Everything goes through the [`KeyValueStore`] trait so the session logic can
//! run against browser `localStorage` ([`crate::LocalStorageStore`], wasm only)
//! or against an in-memory map ([`crate::MemoryStore`]) in tests and on native
//! targets.
//!
//! Reads never fail: an unavailable backend reads as "nothing stored". Writes
//! report [`StorageError`] so callers can log them, but the session layer treats
//! a failed write the same as being logged out.

use thiserror::Error;

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";

/// Storage key holding the JSON-serialised session user.
pub const USER_KEY: &str = "user";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to write key {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Synchronous string key/value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}
