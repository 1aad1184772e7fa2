//! Time formatting for presence lines

/// Format a position as `HH:MM:SS`.
///
/// Hours are not capped, so very long items may show three or more hour
/// digits. Negative and non-finite inputs format as zero.
pub fn format_duration(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };

    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Format the "elapsed / total" state line.
pub fn progress_line(elapsed: f64, total: f64) -> String {
    format!("{} / {}", format_duration(elapsed), format_duration(total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "00:00:00");
        assert_eq!(format_duration(59.0), "00:00:59");
        assert_eq!(format_duration(3661.0), "01:01:01");
        assert_eq!(format_duration(36000.0), "10:00:00");
    }

    #[test]
    fn test_fractional_seconds_are_floored() {
        assert_eq!(format_duration(100.99), "00:01:40");
    }

    #[test]
    fn test_hours_are_not_capped() {
        assert_eq!(format_duration(360_000.0 + 61.0), "100:01:01");
    }

    #[test]
    fn test_invalid_input_formats_as_zero() {
        assert_eq!(format_duration(-5.0), "00:00:00");
        assert_eq!(format_duration(f64::NAN), "00:00:00");
    }

    #[test]
    fn test_progress_line() {
        assert_eq!(progress_line(100.0, 1000.0), "00:01:40 / 00:16:40");
    }
}
