//! Human-readable byte count formatting.

/// Format a byte count with a unit chosen by magnitude.
///
/// `< 1024` bytes renders the raw count, kilobytes and megabytes render with
/// one decimal place. Total function, no error path.
///
/// # Example
/// ```
/// use photometa_core::format::format_file_size;
///
/// assert_eq!(format_file_size(500), "500 bytes");
/// assert_eq!(format_file_size(2048), "2.0 KB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes < KB {
        format!("{} bytes", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}
