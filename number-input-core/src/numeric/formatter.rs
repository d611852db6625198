use tracing::debug;

use super::{GROUP_SEPARATOR, NumberFormatError, NumericString, strip_separators};

/// Inserts a [`GROUP_SEPARATOR`] every three digits, counting from the least
/// significant digit. A leading `-` stays in front of the first group and
/// leading zeros are grouped like any other digit.
///
/// # Examples
///
/// ```
/// use number_input_core::{NumericString, group_digits};
///
/// let n = NumericString::parse("-900000").unwrap();
/// assert_eq!(group_digits(&n), "-900,000");
/// ```
pub fn group_digits(numeric: &NumericString) -> String {
    let digits = numeric.digits();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if numeric.is_negative() {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

/// Validates `raw` as a [`NumericString`] and groups it.
///
/// Fails on anything outside `[0-9-]`, including separators that are
/// already present.
pub fn format_grouped(raw: &str) -> Result<String, NumberFormatError> {
    NumericString::parse(raw).map(|n| group_digits(&n))
}

/// Groups the canonical decimal text of `value`.
pub fn format_value(value: i64) -> String {
    group_digits(&NumericString::from(value))
}

/// Produces the view-mode string for whatever the field currently holds.
///
/// Existing separators are stripped first, so an already grouped string comes
/// back unchanged. Text that still is not a valid integer is returned as-is.
pub fn format_for_display(raw: &str) -> String {
    match format_grouped(&strip_separators(raw)) {
        Ok(grouped) => grouped,
        Err(e) => {
            debug!(input = %raw, "showing text unformatted: {}", e);
            raw.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn group(s: &str) -> String {
        group_digits(&NumericString::parse(s).unwrap())
    }

    // =========================================================================
    // group_digits tests
    // =========================================================================

    #[test]
    fn group_digits_six_digits() {
        assert_eq!(group("900000"), "900,000");
    }

    #[test]
    fn group_digits_seven_digits() {
        assert_eq!(group("1000000"), "1,000,000");
    }

    #[test]
    fn group_digits_negative_keeps_sign_before_first_group() {
        assert_eq!(group("-900000"), "-900,000");
        assert_eq!(group("-1234"), "-1,234");
    }

    #[test]
    fn group_digits_short_values_untouched() {
        assert_eq!(group("0"), "0");
        assert_eq!(group("12"), "12");
        assert_eq!(group("-999"), "-999");
    }

    #[test]
    fn group_digits_keeps_leading_zeros() {
        assert_eq!(group("000000"), "000,000");
        assert_eq!(group("0012345"), "0,012,345");
    }

    // =========================================================================
    // format_grouped tests
    // =========================================================================

    #[test]
    fn format_grouped_rejects_invalid_text() {
        assert_eq!(
            format_grouped("12a"),
            Err(NumberFormatError::InvalidFormat("12a".to_string()))
        );
        assert_eq!(format_grouped(""), Err(NumberFormatError::Empty));
    }

    #[test]
    fn format_grouped_rejects_already_grouped_text() {
        assert!(format_grouped("1,000").is_err());
    }

    // =========================================================================
    // format_value tests
    // =========================================================================

    #[test]
    fn format_value_handles_extremes() {
        assert_eq!(format_value(i64::MAX), "9,223,372,036,854,775,807");
        assert_eq!(format_value(i64::MIN), "-9,223,372,036,854,775,808");
    }

    // =========================================================================
    // format_for_display tests
    // =========================================================================

    #[test]
    fn format_for_display_regroups_grouped_text() {
        assert_eq!(format_for_display("1,000,000"), "1,000,000");
        assert_eq!(format_for_display("10,00"), "1,000");
    }

    #[test]
    fn format_for_display_passes_through_malformed_text() {
        assert_eq!(format_for_display("12ab"), "12ab");
        assert_eq!(format_for_display("-"), "-");
        assert_eq!(format_for_display(""), "");
    }
}
