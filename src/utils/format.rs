//! Formatting utilities for file sizes, dates, and counters.

/// Format file size for display (e.g., "1.2K", "3.4M").
pub fn format_size(size: Option<u64>) -> String {
    match size {
        None => "-".to_string(),
        Some(bytes) if bytes >= 1_000_000_000 => format!("{:.1}G", bytes as f64 / 1_000_000_000.0),
        Some(bytes) if bytes >= 1_000_000 => format!("{:.1}M", bytes as f64 / 1_000_000.0),
        Some(bytes) if bytes >= 1_000 => format!("{:.1}K", bytes as f64 / 1_000.0),
        Some(bytes) => format!("{}B", bytes),
    }
}

/// Date part of an ISO-8601 timestamp ("2024-03-01T10:00:00Z" -> "2024-03-01").
pub fn format_date(timestamp: Option<&str>) -> String {
    match timestamp {
        Some(ts) if !ts.is_empty() => ts.split('T').next().unwrap_or(ts).to_string(),
        _ => "-".to_string(),
    }
}

/// Loaded-of-total counter for the toolbar ("50 of 1,234 items").
pub fn format_item_count(loaded: usize, total: usize) -> String {
    let noun = if total == 1 { "item" } else { "items" };
    if loaded >= total {
        format!("{} {}", group_thousands(total), noun)
    } else {
        format!("{} of {} {}", group_thousands(loaded), group_thousands(total), noun)
    }
}

fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Size Tests
    // =========================================================================

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(None), "-");
        assert_eq!(format_size(Some(512)), "512B");
        assert_eq!(format_size(Some(1_500)), "1.5K");
        assert_eq!(format_size(Some(2_340_000)), "2.3M");
        assert_eq!(format_size(Some(5_000_000_000)), "5.0G");
    }

    // =========================================================================
    // Date Tests
    // =========================================================================

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some("2024-03-01T10:00:00Z")), "2024-03-01");
        assert_eq!(format_date(Some("2024-03-01")), "2024-03-01");
        assert_eq!(format_date(Some("")), "-");
        assert_eq!(format_date(None), "-");
    }

    // =========================================================================
    // Counter Tests
    // =========================================================================

    #[test]
    fn test_format_item_count() {
        assert_eq!(format_item_count(50, 1234), "50 of 1,234 items");
        assert_eq!(format_item_count(1234, 1234), "1,234 items");
        assert_eq!(format_item_count(1, 1), "1 item");
        assert_eq!(format_item_count(0, 0), "0 items");
        assert_eq!(group_thousands(1_000_000), "1,000,000");
        assert_eq!(group_thousands(999), "999");
    }
}
