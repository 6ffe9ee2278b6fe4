//! Verity Storage Library
//!
//! This crate provides the storage abstraction for uploaded images and its
//! local filesystem implementation.
//!
//! # Storage key format
//!
//! Keys are generated, never taken from the client: `{file_id}.{ext}` where
//! `ext` is a sanitized copy of the client filename's extension, or just
//! `{file_id}` when there is none. Keys are a single path segment and must not
//! contain `..` or separators. Key generation is centralized in the `keys`
//! module.

pub mod keys;
pub mod local;
pub mod traits;

// Re-export commonly used types
pub use keys::{generate_storage_key, validate_storage_key};
pub use local::LocalStorage;
pub use traits::{Storage, StorageError, StorageResult};
