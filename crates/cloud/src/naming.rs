//! Object keys and content types for uploads.

use std::sync::LazyLock;

use regex::Regex;
use uuid::Uuid;

/// Fallback when a filename has nothing usable left after sanitizing.
const FALLBACK_NAME: &str = "archivo";

const OCTET_STREAM: &str = "application/octet-stream";

static UNSAFE_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9._-]+").expect("valid regex"));

/// Keep the last path component, replace anything outside `[A-Za-z0-9._-]`
/// with `_`.
pub fn sanitize_filename(filename: &str) -> String {
    let base = filename.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned = UNSAFE_CHARS_RE.replace_all(base, "_");
    let cleaned = cleaned.trim_matches(|c| c == '_' || c == '.');
    if cleaned.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        cleaned.to_string()
    }
}

/// `<folder>/<uuid>-<sanitized filename>`.
pub fn object_key(folder: &str, filename: &str) -> String {
    format!("{folder}/{}-{}", Uuid::new_v4(), sanitize_filename(filename))
}

/// MIME type sniffed from the leading bytes.
pub fn content_type(bytes: &[u8]) -> &'static str {
    image::guess_format(bytes)
        .map(|format| format.to_mime_type())
        .unwrap_or(OCTET_STREAM)
}
