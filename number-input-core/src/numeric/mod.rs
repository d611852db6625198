//! Conversions between raw digit strings, grouped display strings and
//! integer values.
//!
//! Every function here is pure. Malformed text is reported through
//! [`NumberFormatError`] or, for the display and callback paths, passed
//! through unchanged so a user in the middle of typing is never blocked.

mod formatter;
mod numeric_string;
mod parser;

pub use formatter::{format_for_display, format_grouped, format_value, group_digits};
pub use numeric_string::{NumberFormatError, NumericString};
pub use parser::{GROUP_SEPARATOR, parse_optional_value, parse_value, strip_separators};
