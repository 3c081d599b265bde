//! Gateway-wide constants.

/// Logical namespace under which every gateway upload lives in the remote store.
pub const DEFAULT_UPLOAD_PREFIX: &str = "cloud-storage/uploads";

/// Maximum accepted file size in bytes (10 MiB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Cap on the number of assets returned by a single listing call.
pub const MAX_LIST_RESULTS: usize = 500;
