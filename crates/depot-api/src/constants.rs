//! API constants.

/// API base path prefix.
pub const API_PREFIX: &str = "/api";

/// Transport-level request body cap. Sits above the 10 MiB upload policy so
/// multipart framing overhead never trips it; the policy check in
/// `depot-core` stays the authoritative limit.
pub const MAX_REQUEST_BODY_BYTES: usize = 12 * 1024 * 1024;
