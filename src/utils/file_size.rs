pub struct FileSizeUtils;

impl FileSizeUtils {
    /// Human-readable byte count: base-1024 scaling across Bytes/KB/MB/GB,
    /// two decimal places with trailing zeros trimmed.
    pub fn format_size(size: u64) -> String {
        const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

        if size == 0 {
            return "0 Bytes".to_string();
        }

        let mut scaled = size as f64;
        let mut unit_index = 0;
        while scaled >= 1024.0 && unit_index < UNITS.len() - 1 {
            scaled /= 1024.0;
            unit_index += 1;
        }

        let mut value = format!("{:.2}", scaled);
        if value.contains('.') {
            value = value
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string();
        }

        format!("{} {}", value, UNITS[unit_index])
    }
}
