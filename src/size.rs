/// Format a byte count for display.
///
/// Binary scaling (1024-based), one decimal place, units B through PB.
/// Examples:
/// - 700        -> "700.0 B"
/// - 1536       -> "1.5 KB"
/// - 1073741824 -> "1.0 GB"
pub fn format_size(num_bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    let mut size = num_bytes as f64;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{:.1} {}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.1} PB", size)
}

/// Parse a size token as reported by `docker system df` to bytes.
///
/// Docker prints decimal units: B, kB, MB, GB, TB with 1000-based
/// multipliers (NOT 1024). Examples:
/// - "1.2GB" -> 1_200_000_000
/// - "450kB" -> 450_000
/// - "0B"    -> 0
///
/// Returns `None` for tokens with no leading number or an unknown unit;
/// callers skip such tokens rather than failing the whole report.
pub fn parse_engine_size(s: &str) -> Option<u64> {
    let s = s.trim();

    // Find where the number ends and the unit begins
    let mut num_end = s.len();
    for (i, c) in s.char_indices() {
        if !c.is_ascii_digit() && c != '.' {
            num_end = i;
            break;
        }
    }

    if num_end == 0 {
        // Starts with a non-digit, not a size token
        return None;
    }

    let num: f64 = s[..num_end].parse().ok()?;

    let multiplier: u64 = match s[num_end..].trim() {
        "" | "B" => 1,
        "kB" => 1_000,
        "MB" => 1_000_000,
        "GB" => 1_000_000_000,
        "TB" => 1_000_000_000_000,
        _ => return None,
    };

    Some((num * multiplier as f64) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_units() {
        assert_eq!(format_size(0), "0.0 B");
        assert_eq!(format_size(700), "700.0 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_size(1024 * 1024 * 1024), "1.0 GB");
        assert_eq!(format_size(2_199_023_255_552), "2.0 TB");
    }

    #[test]
    fn test_format_size_binary_scaling() {
        // 1023 stays in bytes, 1024 rolls over
        assert_eq!(format_size(1023), "1023.0 B");
        assert_eq!(format_size(1024), "1.0 KB");
    }

    #[test]
    fn test_parse_engine_size() {
        assert_eq!(parse_engine_size("0B"), Some(0));
        assert_eq!(parse_engine_size("512B"), Some(512));
        assert_eq!(parse_engine_size("450kB"), Some(450_000));
        assert_eq!(parse_engine_size("1.2GB"), Some(1_200_000_000));
        assert_eq!(parse_engine_size("3MB"), Some(3_000_000));
        assert_eq!(parse_engine_size("2TB"), Some(2_000_000_000_000));
    }

    #[test]
    fn test_parse_engine_size_decimal_multipliers() {
        // Docker units are 1000-based, not 1024-based
        assert_eq!(parse_engine_size("1kB"), Some(1_000));
        assert_eq!(parse_engine_size("1GB"), Some(1_000_000_000));
    }

    #[test]
    fn test_parse_engine_size_rejects_garbage() {
        assert_eq!(parse_engine_size(""), None);
        assert_eq!(parse_engine_size("GB"), None);
        assert_eq!(parse_engine_size("n/a"), None);
        assert_eq!(parse_engine_size("12XB"), None);
    }
}
