//! Shared key generation for storage backends.
//!
//! Key format: `{file_id}.{ext}`, or `{file_id}` when the client filename has
//! no usable extension.

use crate::traits::{StorageError, StorageResult};
use uuid::Uuid;

const MAX_EXTENSION_LEN: usize = 10;

/// Generate the storage key for an upload.
///
/// Only the extension of `filename` is used, lower-cased and restricted to
/// ASCII alphanumerics, so a crafted name cannot influence where the file is
/// written.
pub fn generate_storage_key(file_id: Uuid, filename: &str) -> String {
    match storage_extension(filename) {
        Some(ext) => format!("{}.{}", file_id, ext),
        None => file_id.to_string(),
    }
}

/// Extension of the last path segment of `filename`, if it is short and
/// purely alphanumeric.
pub fn storage_extension(filename: &str) -> Option<String> {
    let last_segment = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    let (stem, ext) = last_segment.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() || ext.len() > MAX_EXTENSION_LEN {
        return None;
    }
    if !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Reject keys that could resolve outside the storage root.
pub fn validate_storage_key(storage_key: &str) -> StorageResult<()> {
    if storage_key.is_empty()
        || storage_key.contains("..")
        || storage_key.contains('/')
        || storage_key.contains('\\')
        || storage_key.contains('\0')
    {
        return Err(StorageError::InvalidKey(
            "Storage key contains invalid characters".to_string(),
        ));
    }
    Ok(())
}
