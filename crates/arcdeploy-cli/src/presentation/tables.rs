//! Table formatting utilities for CLI output.

/// Truncates a string to a maximum length, adding "..." if needed.
///
/// # Examples
///
/// ```rust
/// use arcdeploy_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
#[must_use]
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_short() {
        assert_eq!(truncate_string("short", 10), "short");
    }

    #[test]
    fn test_truncate_string_exact() {
        assert_eq!(truncate_string("exactly_10", 10), "exactly_10");
    }

    #[test]
    fn test_truncate_string_long() {
        assert_eq!(
            truncate_string("this is a very long description", 14),
            "this is a v..."
        );
    }

    #[test]
    fn test_truncate_string_multibyte() {
        // Cutting must respect character boundaries
        assert_eq!(truncate_string("héllo wörld désc", 8), "héllo...");
    }
}
