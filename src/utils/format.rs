//! Rendering of file sizes and modification dates as stored in the index

use std::time::SystemTime;

use chrono::{DateTime, Local};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Date format used in index entries: `DD-MM-YYYY`
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Formats a byte count as megabytes rounded to two decimal places
///
/// Exact halves round to the even hundredth. The value keeps at least one
/// fractional digit and no trailing zero padding.
///
/// # Examples
///
/// ```
/// use files_indexer::utils::format_size_mb;
///
/// assert_eq!(format_size_mb(0), "0.0MB");
/// assert_eq!(format_size_mb(1_048_576), "1.0MB");
/// assert_eq!(format_size_mb(1_572_864), "1.5MB");
/// ```
pub fn format_size_mb(bytes: u64) -> String {
    let megabytes = (bytes as f64 / BYTES_PER_MB * 100.0).round_ties_even() / 100.0;
    // Debug formatting is the shortest round-trip form and always keeps ".0"
    format!("{:?}MB", megabytes)
}

/// Formats a modification time as a local calendar date (`DD-MM-YYYY`)
pub fn format_local_date(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format(DATE_FORMAT).to_string()
}
