//! Line-oriented event scripts.
//!
//! ```text
//! # comments and blank lines are skipped
//! focus
//! change -900000
//! blur
//! set 42
//! ```

use std::io::BufRead;

use thiserror::Error;

/// One notification delivered to the widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Focus,
    /// Text typed by the user, taken verbatim.
    Change(String),
    Blur,
    /// The host supplies a new external value.
    Set(i64),
}

impl Event {
    /// Parses a single non-comment line.
    pub fn parse(line: &str) -> Result<Self, ScriptErrorKind> {
        let (keyword, rest) = match line.split_once(' ') {
            Some((keyword, rest)) => (keyword, Some(rest)),
            None => (line, None),
        };

        match (keyword, rest) {
            ("focus", None) => Ok(Self::Focus),
            ("blur", None) => Ok(Self::Blur),
            ("change", text) => Ok(Self::Change(text.unwrap_or_default().to_string())),
            ("set", Some(value)) => value
                .trim()
                .parse()
                .map(Self::Set)
                .map_err(|_| ScriptErrorKind::InvalidValue(value.to_string())),
            ("set", None) => Err(ScriptErrorKind::MissingValue),
            ("focus" | "blur", Some(_)) => Err(ScriptErrorKind::UnexpectedArgument(
                keyword.to_string(),
            )),
            _ => Err(ScriptErrorKind::UnknownEvent(keyword.to_string())),
        }
    }
}

/// What was wrong with a script line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptErrorKind {
    #[error("unknown event '{0}'")]
    UnknownEvent(String),

    #[error("'{0}' takes no argument")]
    UnexpectedArgument(String),

    #[error("'set' needs an integer value")]
    MissingValue,

    #[error("'{0}' is not an integer")]
    InvalidValue(String),
}

/// Errors from reading an event script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: {kind}")]
    Line { line: usize, kind: ScriptErrorKind },

    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),
}

/// Parses every event in `reader`, failing on the first bad line.
pub fn parse_script<R: BufRead>(reader: R) -> Result<Vec<Event>, ScriptError> {
    let mut events = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        let event = Event::parse(line.trim_start()).map_err(|kind| ScriptError::Line {
            line: index + 1,
            kind,
        })?;
        events.push(event);
    }

    Ok(events)
}
