//! Formatting utilities for terminal output

use std::time::Duration;

/// Width of separators and banners
pub const LINE_WIDTH: usize = 60;

/// Horizontal rule made of `ch`
#[must_use]
pub fn separator(ch: char) -> String {
    ch.to_string().repeat(LINE_WIDTH)
}

/// Format a duration as milliseconds with two decimals
#[must_use]
pub fn format_millis(duration: Duration) -> String {
    format!("{:.2} ms", duration.as_secs_f64() * 1000.0)
}

/// Number suggestions for display, starting at 1
#[must_use]
pub fn numbered_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("  {}. {item}", i + 1))
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Percentage of `part` in `total`, zero when `total` is zero
#[must_use]
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_has_line_width() {
        assert_eq!(separator('-').chars().count(), LINE_WIDTH);
        assert_eq!(separator('=').chars().count(), LINE_WIDTH);
    }

    #[test]
    fn millis_two_decimals() {
        assert_eq!(format_millis(Duration::from_micros(1500)), "1.50 ms");
        assert_eq!(format_millis(Duration::ZERO), "0.00 ms");
    }

    #[test]
    fn numbered_list_starts_at_one() {
        let items = vec!["apple".to_string(), "apply".to_string()];
        assert_eq!(numbered_list(&items), ["  1. apple", "  2. apply"]);
    }

    #[test]
    fn numbered_list_empty() {
        assert!(numbered_list(&[]).is_empty());
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(5.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }

    #[test]
    fn percentage_handles_zero_total() {
        assert!((percentage(0, 0)).abs() < f64::EPSILON);
        assert!((percentage(1, 4) - 25.0).abs() < f64::EPSILON);
    }
}
