//! Page-level console configuration.
//!
//! # Design
//! - Compiled defaults reproduce the bench's stock pages.
//! - Pages may override single values through `data-*` attributes on
//!   `<body>`; each override is validated on its own so one bad attribute
//!   does not discard the rest.

use thiserror::Error;
use wattbench_events::EVENTS_PATH;

use crate::core::banner::{BANNER_ELEMENT_ID, DISMISS_DELAY_MS};
use crate::core::buffer::DEFAULT_MAX_LINES;

/// Id of the element the log console renders into.
pub const LOG_ELEMENT_ID: &str = "log";

/// `dataset` key overriding [`ConsoleConfig::events_url`].
pub const EVENTS_URL_KEY: &str = "eventsUrl";
/// `dataset` key overriding [`ConsoleConfig::banner_id`].
pub const BANNER_ID_KEY: &str = "bannerId";
/// `dataset` key overriding [`ConsoleConfig::log_id`].
pub const LOG_ID_KEY: &str = "logId";
/// `dataset` key overriding [`ConsoleConfig::banner_delay_ms`].
pub const BANNER_DELAY_KEY: &str = "bannerDelayMs";
/// `dataset` key overriding [`ConsoleConfig::max_lines`].
pub const LOG_LIMIT_KEY: &str = "logLimit";

/// Every key consulted when loading overrides.
pub const OVERRIDE_KEYS: [&str; 5] = [
    EVENTS_URL_KEY,
    BANNER_ID_KEY,
    LOG_ID_KEY,
    BANNER_DELAY_KEY,
    LOG_LIMIT_KEY,
];

/// Invalid override value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Override was blank.
    #[error("`{key}` must not be empty")]
    Empty {
        /// Offending key.
        key: &'static str,
    },
    /// Override was not a usable number.
    #[error("`{key}` expects a positive integer, got `{value}`")]
    InvalidNumber {
        /// Offending key.
        key: &'static str,
        /// Raw value supplied.
        value: String,
    },
}

/// Resolved settings for both page behaviours.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Event-stream endpoint, usually relative to the page.
    pub events_url: String,
    /// Id of the notice banner element.
    pub banner_id: String,
    /// Id of the log container element.
    pub log_id: String,
    /// Delay before the banner hides.
    pub banner_delay_ms: u32,
    /// Number of lines the console retains.
    pub max_lines: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            events_url: EVENTS_PATH.to_string(),
            banner_id: BANNER_ELEMENT_ID.to_string(),
            log_id: LOG_ELEMENT_ID.to_string(),
            banner_delay_ms: DISMISS_DELAY_MS,
            max_lines: DEFAULT_MAX_LINES,
        }
    }
}

impl ConsoleConfig {
    /// Apply one `dataset` override. Unknown keys are ignored.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the value is blank or not a valid number;
    /// the current value is left untouched in that case.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            EVENTS_URL_KEY => self.events_url = non_empty(EVENTS_URL_KEY, value)?,
            BANNER_ID_KEY => self.banner_id = non_empty(BANNER_ID_KEY, value)?,
            LOG_ID_KEY => self.log_id = non_empty(LOG_ID_KEY, value)?,
            BANNER_DELAY_KEY => {
                self.banner_delay_ms = parse_number(BANNER_DELAY_KEY, value)?;
            }
            LOG_LIMIT_KEY => {
                let limit: usize = parse_number(LOG_LIMIT_KEY, value)?;
                if limit == 0 {
                    return Err(ConfigError::InvalidNumber {
                        key: LOG_LIMIT_KEY,
                        value: value.to_string(),
                    });
                }
                self.max_lines = limit;
            }
            _ => {}
        }
        Ok(())
    }

    /// Start from defaults and apply each override in turn.
    ///
    /// Rejected overrides are returned alongside the resolved config so the
    /// caller can report them.
    #[must_use]
    pub fn resolve<'a, I>(overrides: I) -> (Self, Vec<ConfigError>)
    where
        I: IntoIterator<Item = (&'a str, String)>,
    {
        let mut config = Self::default();
        let errors = overrides
            .into_iter()
            .filter_map(|(key, value)| config.apply_override(key, &value).err())
            .collect();
        (config, errors)
    }
}

fn non_empty(key: &'static str, value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty { key });
    }
    Ok(trimmed.to_string())
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidNumber {
            key,
            value: value.to_string(),
        })
}
