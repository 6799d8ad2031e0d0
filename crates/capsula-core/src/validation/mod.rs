//! Guest-name sanitization and stored-filename derivation.

use crate::constants::{DEFAULT_GUEST_NAME, MAX_GUEST_NAME_LENGTH};

/// Sanitize a guest display name for use in stored filenames.
///
/// Allow-list: alphanumeric characters plus space, `-` and `_`. Spaces are
/// mapped to `_`, everything else is dropped. The result is truncated to
/// [`MAX_GUEST_NAME_LENGTH`] characters; an empty result falls back to
/// [`DEFAULT_GUEST_NAME`].
pub fn sanitize_guest_name(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '-' || *c == '_')
        .take(MAX_GUEST_NAME_LENGTH)
        .map(|c| if c == ' ' { '_' } else { c })
        .collect();

    let sanitized = sanitized.trim_matches('_').to_string();

    if sanitized.is_empty() {
        DEFAULT_GUEST_NAME.to_string()
    } else {
        sanitized
    }
}

/// Derive the stored filename for the part at 1-based position `sequence`.
///
/// The sequence number guarantees no name collision within one request even
/// when a guest uploads files with identical original names.
pub fn stored_filename(safe_guest_name: &str, sequence: usize, extension: &str) -> String {
    format!("{}_{}.{}", safe_guest_name, sequence, extension)
}

/// Lowercased extension of a filename, if it has one.
pub fn file_extension(filename: &str) -> Option<String> {
    std::path::Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_maps_spaces_to_underscores() {
        assert_eq!(sanitize_guest_name("Ana Silva"), "Ana_Silva");
    }

    #[test]
    fn sanitize_strips_disallowed_characters() {
        assert_eq!(sanitize_guest_name("a/b\\c:d?.e"), "abcde");
        assert_eq!(sanitize_guest_name("<script>"), "script");
    }

    #[test]
    fn sanitize_keeps_unicode_letters() {
        assert_eq!(sanitize_guest_name("José Müller"), "José_Müller");
    }

    #[test]
    fn sanitize_falls_back_when_nothing_survives() {
        assert_eq!(sanitize_guest_name(""), "Guest");
        assert_eq!(sanitize_guest_name("!!!"), "Guest");
        assert_eq!(sanitize_guest_name("   "), "Guest");
    }

    #[test]
    fn sanitize_truncates_long_names() {
        let long = "a".repeat(200);
        assert_eq!(sanitize_guest_name(&long).len(), MAX_GUEST_NAME_LENGTH);
    }

    #[test]
    fn stored_filename_is_sequence_numbered() {
        assert_eq!(stored_filename("Ana_Silva", 1, "jpg"), "Ana_Silva_1.jpg");
        assert_eq!(stored_filename("Ana_Silva", 2, "mp4"), "Ana_Silva_2.mp4");
    }

    #[test]
    fn file_extension_is_lowercased() {
        assert_eq!(file_extension("photo.JPG").as_deref(), Some("jpg"));
        assert_eq!(file_extension("archive.tar.gz").as_deref(), Some("gz"));
        assert_eq!(file_extension("noext"), None);
    }
}
