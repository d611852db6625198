//! Widget configuration read from an optional TOML file.

use std::{fmt, fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

/// Error returned when the widget configuration file cannot be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// The props a session mounts its widget with.
///
/// ```toml
/// value = 900000
/// id = "amount"
/// class = "wide"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetConfig {
    pub value: i64,
    pub id: Option<String>,
    pub class: Option<String>,
}

impl WidgetConfig {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Applies command-line overrides on top of this configuration.
    pub fn with_overrides(
        mut self,
        value: Option<i64>,
        id: Option<String>,
        class: Option<String>,
    ) -> Self {
        if let Some(value) = value {
            self.value = value;
        }
        if id.is_some() {
            self.id = id;
        }
        if class.is_some() {
            self.class = class;
        }
        self
    }
}

impl fmt::Display for WidgetConfig {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Value: {}", self.value)?;
        writeln!(f, "Id:    {}", self.id.as_deref().unwrap_or("—"))?;
        writeln!(f, "Class: {}", self.class.as_deref().unwrap_or("—"))
    }
}
