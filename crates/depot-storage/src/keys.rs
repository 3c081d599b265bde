//! Storage key generation
//!
//! Key format: `{prefix}/{8-char token}_{sanitized filename}`. The token
//! makes colliding uploads of the same filename distinct; sanitization keeps
//! the base name readable while stripping anything path-like.

use uuid::Uuid;

/// Strip path separators and unsafe characters from an uploader-supplied
/// filename, preserving the base name. Falls back to `"file"` when nothing
/// safe remains.
pub fn sanitize_filename(filename: &str) -> String {
    // Only the final path segment counts; uploaders may send full paths.
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);

    let mut sanitized: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    // A leading dot would hide the file or fake a traversal segment.
    while sanitized.starts_with('.') {
        sanitized.remove(0);
    }

    if sanitized.is_empty() {
        "file".to_string()
    } else {
        sanitized
    }
}

/// Generate a collision-resistant storage key for one upload.
pub fn generate_upload_key(prefix: &str, filename: &str) -> String {
    let token: String = Uuid::new_v4().simple().to_string()[..8].to_string();
    format!("{}/{}_{}", prefix, token, sanitize_filename(filename))
}
