//! Severity level value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::LevelParseError;

/// Notification severity.
///
/// Controls presentation only (icon, urgency hint), never routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    #[default]
    Info,
    Warning,
    Error,
}

impl Level {
    /// Decode the wire-level integer (0=INFO, 1=WARNING, 2=ERROR).
    ///
    /// An unrecognized value decodes as `Info` rather than failing the call.
    pub const fn from_wire(value: i32) -> Self {
        match value {
            1 => Self::Warning,
            2 => Self::Error,
            // 0, plus anything a client invents
            _ => Self::Info,
        }
    }

    /// Encode as the wire-level integer
    pub const fn as_wire(&self) -> i32 {
        match self {
            Self::Info => 0,
            Self::Warning => 1,
            Self::Error => 2,
        }
    }

    /// Get the display name
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Level {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err(LevelParseError {
                input: s.to_string(),
            }),
        }
    }
}
