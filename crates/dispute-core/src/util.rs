//! Shared utility functions used across multiple modules.

const KIB_BYTES: u64 = 1024;
const MIB_BYTES: u64 = KIB_BYTES * 1024;
const GIB_BYTES: u64 = MIB_BYTES * 1024;

/// Normalize optional text by trimming whitespace and removing empties.
///
/// Returns `None` when the input is `None` or the trimmed value is empty.
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Check if a string starts with `http://` or `https://`.
pub fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Truncate text to at most 180 characters for error messages.
pub fn compact_text(value: &str) -> String {
    value.trim().chars().take(180).collect()
}

/// Render a byte count the way the attachment label shows it.
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    if bytes >= GIB_BYTES {
        format!("{:.1} GB", bytes as f64 / GIB_BYTES as f64)
    } else if bytes >= MIB_BYTES {
        format!("{:.1} MB", bytes as f64 / MIB_BYTES as f64)
    } else if bytes >= KIB_BYTES {
        format!("{:.1} KB", bytes as f64 / KIB_BYTES as f64)
    } else {
        format!("{bytes} B")
    }
}
