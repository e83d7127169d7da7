//! Shared utility functions for the rigup CLI.
//!
//! This module contains common formatting helpers used across multiple
//! commands to avoid code duplication.

use std::borrow::Cow;

/// Formats a duration in seconds into a human-readable string.
///
/// # Examples
///
/// ```
/// use rigup::utils::format_duration;
///
/// assert_eq!(format_duration(3661), "1h 1m 1s");
/// assert_eq!(format_duration(61), "1m 1s");
/// assert_eq!(format_duration(30), "30s");
/// ```
pub fn format_duration(seconds: i64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    match (hours, minutes) {
        (0, 0) => format!("{}s", secs),
        (0, _) => format!("{}m {}s", minutes, secs),
        _ => format!("{}h {}m {}s", hours, minutes, secs),
    }
}

/// Renders an argv as a copy-pasteable shell line.
///
/// Arguments are joined with single spaces; package names and manager flags
/// never contain whitespace, so no quoting is needed.
///
/// # Examples
///
/// ```
/// use rigup::utils::render_command;
///
/// let argv = vec!["brew".to_string(), "install".to_string(), "node".to_string()];
/// assert_eq!(render_command(&argv), "brew install node");
/// ```
pub fn render_command(argv: &[String]) -> String {
    argv.join(" ")
}

/// Truncates a string to at most `max_len` bytes, appending "..." if
/// truncated.
///
/// Returns a `Cow<str>` to avoid allocation when no truncation is needed.
/// The cut never splits a multi-byte character; localized package manager
/// diagnostics pass through here, so the index backs up to a boundary.
///
/// # Examples
///
/// ```
/// use rigup::utils::truncate;
///
/// assert_eq!(truncate("hello", 10), "hello");
/// assert_eq!(truncate("hello world", 8), "hello...");
/// assert_eq!(truncate("héllo wörld", 8), "héll...");
/// ```
pub fn truncate(s: &str, max_len: usize) -> Cow<'_, str> {
    if s.len() <= max_len {
        Cow::Borrowed(s)
    } else if max_len <= 3 {
        Cow::Borrowed(&s[..floor_char_boundary(s, max_len)])
    } else {
        Cow::Owned(format!("{}...", &s[..floor_char_boundary(s, max_len - 3)]))
    }
}

/// Largest index no greater than `at` that lies on a char boundary of `s`.
fn floor_char_boundary(s: &str, mut at: usize) -> usize {
    while !s.is_char_boundary(at) {
        at -= 1;
    }
    at
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_seconds_only() {
        assert_eq!(format_duration(0), "0s");
        assert_eq!(format_duration(30), "30s");
        assert_eq!(format_duration(59), "59s");
    }

    #[test]
    fn test_format_duration_minutes_and_seconds() {
        assert_eq!(format_duration(60), "1m 0s");
        assert_eq!(format_duration(61), "1m 1s");
        assert_eq!(format_duration(3599), "59m 59s");
    }

    #[test]
    fn test_format_duration_with_hours() {
        assert_eq!(format_duration(3600), "1h 0m 0s");
        assert_eq!(format_duration(3661), "1h 1m 1s");
        assert_eq!(format_duration(86400), "24h 0m 0s");
    }

    #[test]
    fn test_render_command() {
        let argv: Vec<String> = ["sudo", "apt", "install", "-y", "cmake"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(render_command(&argv), "sudo apt install -y cmake");
    }

    #[test]
    fn test_render_command_single_word() {
        assert_eq!(render_command(&["winget".to_string()]), "winget");
    }

    #[test]
    fn test_truncate_no_truncation_needed() {
        let result = truncate("hello", 10);
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, "hello");
    }

    #[test]
    fn test_truncate_exact_length() {
        let result = truncate("hello", 5);
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, "hello");
    }

    #[test]
    fn test_truncate_with_ellipsis() {
        let result = truncate("hello world", 8);
        assert!(matches!(result, Cow::Owned(_)));
        assert_eq!(result, "hello...");
    }

    #[test]
    fn test_truncate_very_short_max() {
        assert_eq!(truncate("hello", 3), "hel");
        assert_eq!(truncate("hello", 2), "he");
    }

    #[test]
    fn test_truncate_multibyte_backs_up_to_boundary() {
        let result = truncate("héllo wörld", 8);
        assert!(matches!(result, Cow::Owned(_)));
        assert_eq!(result, "héll...");
    }

    #[test]
    fn test_truncate_long_multibyte_diagnostic() {
        // 200 bytes of two-byte characters; a raw cut at 157 would land
        // mid-character.
        let s = "é".repeat(100);
        let result = truncate(&s, 160);
        assert_eq!(result, format!("{}...", "é".repeat(78)));
        assert!(result.len() <= 160);
    }

    #[test]
    fn test_truncate_very_short_max_multibyte() {
        assert_eq!(truncate("日本語", 3), "日");
        assert_eq!(truncate("日本語", 2), "");
    }
}
