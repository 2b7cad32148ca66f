//! Price display formatting.
//!
//! Prices are stored as plain digit strings; grouping is display-side only.

/// Remove every non-digit character.
pub fn strip_grouping(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Group a digit string with a space every three digits from the right.
///
/// Non-digit characters are stripped first, so already-grouped input
/// round-trips: `strip_grouping(format_price(s)) == strip_grouping(s)`.
pub fn format_price(value: &str) -> String {
    let digits = strip_grouping(value);
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_every_three_digits() {
        assert_eq!(format_price("25000"), "25 000");
        assert_eq!(format_price("1234567"), "1 234 567");
        assert_eq!(format_price("999"), "999");
        assert_eq!(format_price("1000"), "1 000");
    }

    #[test]
    fn test_short_and_empty_input() {
        assert_eq!(format_price(""), "");
        assert_eq!(format_price("7"), "7");
        assert_eq!(format_price("42"), "42");
    }

    #[test]
    fn test_strips_non_digits_before_grouping() {
        assert_eq!(format_price("25 000"), "25 000");
        assert_eq!(format_price("$1,234,567"), "1 234 567");
        assert_eq!(strip_grouping("25 000"), "25000");
        assert_eq!(strip_grouping("abc"), "");
    }

    #[test]
    fn test_idempotent_through_strip() {
        for s in ["25000", "1234567", "1 000", "007", ""] {
            assert_eq!(strip_grouping(&format_price(s)), strip_grouping(s));
        }
        // Formatting already-formatted output changes nothing
        let once = format_price("9876543");
        assert_eq!(format_price(&once), once);
    }
}
