//! Cross-crate constants.

/// Maximum number of file parts accepted in a single upload request.
pub const MAX_FILES_PER_UPLOAD: usize = 10;

/// Default per-file size ceiling in megabytes.
pub const DEFAULT_MAX_FILE_MB: usize = 500;

/// Guest names are truncated to this many characters before use in filenames.
pub const MAX_GUEST_NAME_LENGTH: usize = 60;

/// Fallback guest name when the submitted name sanitizes to nothing.
pub const DEFAULT_GUEST_NAME: &str = "Guest";
