//! # Shared Utility Functions
//!
//! Amount formatting helpers used across the engine and any UI shell.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_derived_amount, format_token_amount};
//!
//! assert_eq!(format_token_amount(100000.0), "100000");
//! assert_eq!(format_derived_amount(58.0), "58.000000");
//! ```

/// Format an on-hand token amount for use as typed input.
///
/// Renders with up to six decimal places, trimming trailing zeros so whole
/// holdings read naturally (`100000`, not `100000.000000`).
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_token_amount;
///
/// assert_eq!(format_token_amount(100000.0), "100000");
/// assert_eq!(format_token_amount(0.5), "0.5");
/// assert_eq!(format_token_amount(12.345678), "12.345678");
/// assert_eq!(format_token_amount(0.0), "0");
/// ```
pub fn format_token_amount(amount: f64) -> String {
    let text = format!("{:.6}", amount);
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Format a derived conversion amount to a fixed six decimal places.
///
/// Derived amounts keep their trailing zeros so the output width is stable
/// while the user types (`58.000000` rather than `58`).
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_derived_amount;
///
/// assert_eq!(format_derived_amount(58.0), "58.000000");
/// assert_eq!(format_derived_amount(0.0579999994), "0.058000");
/// ```
pub fn format_derived_amount(amount: f64) -> String {
    format!("{:.6}", amount)
}

/// Format a unix-millisecond timestamp for display (UTC).
///
/// Out-of-range timestamps render as `"-"` rather than failing.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_timestamp;
///
/// assert_eq!(format_timestamp(0), "1970-01-01 00:00:00");
/// ```
pub fn format_timestamp(ms: i64) -> String {
    match chrono::DateTime::from_timestamp_millis(ms) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_token_amount() {
        assert_eq!(format_token_amount(100000.0), "100000");
        assert_eq!(format_token_amount(50000.0), "50000");
        assert_eq!(format_token_amount(1234.56), "1234.56");
        assert_eq!(format_token_amount(0.000001), "0.000001");
        assert_eq!(format_token_amount(0.0), "0");
    }

    #[test]
    fn test_format_derived_amount() {
        assert_eq!(format_derived_amount(58.0), "58.000000");
        assert_eq!(format_derived_amount(1000.0), "1000.000000");
        assert_eq!(format_derived_amount(17.241379), "17.241379");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(1_700_000_000_000), "2023-11-14 22:13:20");
        assert_eq!(format_timestamp(i64::MAX), "-");
    }
}
