//! Validation utilities for upload handlers

use std::path::Path;

/// Normalize MIME type by stripping parameters (e.g. "image/jpeg; charset=utf-8" -> "image/jpeg").
fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}

/// Validate content type against the allowlist. Compares the normalized MIME
/// type only (no parameter bypass).
pub fn validate_content_type(content_type: &str, allowed_types: &[String]) -> Result<(), String> {
    let normalized = normalize_mime_type(content_type).to_lowercase();
    if !allowed_types.iter().any(|ct| normalized == ct.to_lowercase()) {
        return Err(format!(
            "Content type '{}' is not in the accepted set",
            content_type
        ));
    }
    Ok(())
}

/// Validate file extension against the allowlist; returns the lowercased
/// extension on success.
pub fn validate_file_extension(
    filename: &str,
    allowed_extensions: &[String],
) -> Result<String, String> {
    let extension = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    if extension.is_empty() {
        return Err("File must have an extension".to_string());
    }

    if !allowed_extensions.contains(&extension) {
        return Err(format!(
            "Extension '{}' is not in the accepted set",
            extension
        ));
    }

    Ok(extension)
}

/// Validate that Content-Type matches the file extension
/// This prevents Content-Type spoofing attacks where malicious files
/// are uploaded with legitimate Content-Types.
pub fn validate_extension_content_type_match(
    filename: &str,
    content_type: &str,
) -> Result<(), String> {
    let extension = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    if extension.is_empty() {
        return Err("File must have an extension".to_string());
    }

    let normalized_content_type = normalize_mime_type(content_type).to_lowercase();

    // Map common extensions to expected Content-Types
    let expected_content_types: Vec<&str> = match extension.as_str() {
        // Images
        "jpg" | "jpeg" => vec!["image/jpeg"],
        "png" => vec!["image/png"],
        "gif" => vec!["image/gif"],
        "webp" => vec!["image/webp"],
        "bmp" => vec!["image/bmp"],
        // Videos (some browsers report the legacy video/<ext> form)
        "mp4" => vec!["video/mp4"],
        "mov" => vec!["video/quicktime", "video/mov"],
        "avi" => vec!["video/x-msvideo", "video/avi"],
        "wmv" => vec!["video/x-ms-wmv", "video/wmv"],
        // Documents
        "pdf" => vec!["application/pdf"],
        "txt" => vec!["text/plain"],
        "zip" => vec!["application/zip"],
        _ => {
            // For unknown extensions, skip cross-validation; extension and
            // content type are still validated individually
            tracing::debug!(
                extension = %extension,
                content_type = %content_type,
                "Unknown extension, skipping Content-Type/extension cross-validation"
            );
            return Ok(());
        }
    };

    if !expected_content_types
        .iter()
        .any(|ct| normalized_content_type == *ct)
    {
        return Err(format!(
            "Content type '{}' does not match extension '{}'",
            content_type, extension
        ));
    }

    Ok(())
}
