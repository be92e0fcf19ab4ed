//! Event categories declared by the bench and the severities they display as.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EventParseError;

/// Named server-sent event categories published on the log stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamEventKind {
    /// Verbose diagnostic chatter.
    Debug,
    /// Regular progress messages.
    Log,
    /// Failures reported by the bench.
    Error,
    /// Conditions that need attention but did not fail.
    Warning,
}

impl StreamEventKind {
    /// Every category a consumer subscribes to, in registration order.
    pub const ALL: [Self; 4] = [Self::Debug, Self::Log, Self::Error, Self::Warning];

    /// Event name as it appears in the `event:` field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Log => "log",
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }

    /// Display severity for this category.
    ///
    /// `debug` and `log` collapse onto [`Severity::Info`].
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::Debug | Self::Log => Severity::Info,
            Self::Error => Severity::Error,
            Self::Warning => Severity::Warning,
        }
    }
}

impl Display for StreamEventKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StreamEventKind {
    type Err = EventParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| EventParseError::UnknownKind {
                name: value.to_string(),
            })
    }
}

/// Display severity of a rendered log line.
///
/// The lower-case name doubles as the CSS class and the bracketed annotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational line.
    Info,
    /// Warning line.
    Warning,
    /// Error line.
    Error,
}

impl Severity {
    /// Lower-case label used for styling and annotation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
