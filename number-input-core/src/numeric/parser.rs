use tracing::debug;

use super::{NumberFormatError, NumericString};

/// The thousands separator used for display.
pub const GROUP_SEPARATOR: char = ',';

/// Trims surrounding whitespace and removes every [`GROUP_SEPARATOR`].
///
/// The result is the raw digit string re-displayed while editing. It is not
/// validated.
pub fn strip_separators(s: &str) -> String {
    s.trim().replace(GROUP_SEPARATOR, "")
}

/// Parses display or raw text into an integer.
///
/// Separators are ignored wherever they appear (e.g. `"1,000,000"`), and
/// leading zeros are allowed, so `"000000"` is `0`.
pub fn parse_value(s: &str) -> Result<i64, NumberFormatError> {
    let numeric = NumericString::parse(&strip_separators(s)).map_err(|e| match e {
        NumberFormatError::InvalidFormat(_) => NumberFormatError::InvalidFormat(s.to_string()),
        other => other,
    })?;
    numeric
        .as_str()
        .parse()
        .map_err(|_| NumberFormatError::OutOfRange(s.to_string()))
}

/// Parses `s`, returning `None` when it is not (yet) an integer.
///
/// Intermediate text such as `"-"` or `""` is routine while a user is typing,
/// so rejections are only logged at debug level.
pub fn parse_optional_value(s: &str) -> Option<i64> {
    parse_value(s).map_or_else(
        |e| {
            debug!(input = %s, "no numeric value: {}", e);
            None
        },
        Some,
    )
}
