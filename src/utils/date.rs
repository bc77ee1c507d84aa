use chrono::Local;

/// Timestamp used in export file names, second precision.
pub fn file_timestamp() -> String {
    Local::now().format("%Y-%m-%d_%H-%M-%S").to_string()
}
