//! Upload policy validation
//!
//! Pure allow/deny decisions for uploads: extension allow-set, size limit,
//! and storage-kind classification. No I/O; deterministic given inputs.

use crate::constants::MAX_FILE_SIZE_BYTES;
use crate::models::StorageKind;

/// Extensions accepted for upload.
pub const ALLOWED_EXTENSIONS: [&str; 9] = [
    "pdf", "png", "jpg", "jpeg", "txt", "docx", "doc", "pptx", "xlsx",
];

/// Allowed extensions that classify as `Binary`; the remaining allowed
/// extensions classify as `Media`. The remote store handles document-like and
/// image-like payloads on different paths.
pub const BINARY_EXTENSIONS: [&str; 6] = ["txt", "pdf", "doc", "docx", "pptx", "xlsx"];

/// Policy rejection reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    #[error("File type not allowed")]
    DisallowedType,

    #[error("File too large (max 10MB)")]
    TooLarge,
}

/// Lowercased extension of `filename`, if it has one.
fn extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
}

/// Decide whether an upload is allowed and classify its storage kind.
///
/// The extension check runs before the size check, so a file that violates
/// both policies reports the type rejection.
pub fn validate_upload(filename: &str, declared_size: u64) -> Result<StorageKind, PolicyError> {
    let ext = extension(filename).ok_or(PolicyError::DisallowedType)?;
    if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(PolicyError::DisallowedType);
    }
    if declared_size > MAX_FILE_SIZE_BYTES {
        return Err(PolicyError::TooLarge);
    }
    if BINARY_EXTENSIONS.contains(&ext.as_str()) {
        Ok(StorageKind::Binary)
    } else {
        Ok(StorageKind::Media)
    }
}
