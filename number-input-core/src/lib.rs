//! Editing and display rules for a comma-grouped integer input field.
//!
//! The crate has no rendering of its own. A host supplies a
//! [`FieldRenderer`] and forwards focus, change and blur notifications to a
//! [`NumberInput`], which decides what string the field shows and which
//! consumer callbacks fire.

pub mod numeric;
pub mod widget;

pub use numeric::{
    GROUP_SEPARATOR, NumberFormatError, NumericString, format_for_display, format_grouped,
    format_value, group_digits, parse_optional_value, parse_value, strip_separators,
};
pub use widget::{
    Callback, ComponentState, FieldMode, FieldRenderer, FieldView, NumberInput, NumberInputProps,
};
