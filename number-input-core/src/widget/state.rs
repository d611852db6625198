use std::fmt;

use crate::numeric::format_for_display;

/// Which representation the field shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldMode {
    /// Not focused; the grouped string is shown.
    #[default]
    Viewing,
    /// Focused or being typed into; the raw text is shown verbatim.
    Editing,
}

impl FieldMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Viewing => "viewing",
            Self::Editing => "editing",
        }
    }
}

impl fmt::Display for FieldMode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transient state owned by one widget instance.
///
/// `raw` holds exactly what the user last typed, so it may be an incomplete
/// or malformed number while editing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComponentState {
    pub raw: String,
    pub mode: FieldMode,
}

impl ComponentState {
    /// Initial view-mode state for an external value.
    pub fn viewing(value: i64) -> Self {
        Self {
            raw: value.to_string(),
            mode: FieldMode::Viewing,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.mode == FieldMode::Editing
    }

    /// The string the field should show right now.
    pub fn displayed(&self) -> String {
        match self.mode {
            FieldMode::Editing => self.raw.clone(),
            FieldMode::Viewing => format_for_display(&self.raw),
        }
    }
}
