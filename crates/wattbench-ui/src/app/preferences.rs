//! Page configuration loader.

use crate::core::config::{ConsoleConfig, OVERRIDE_KEYS};
use gloo::console;
use gloo::utils::document;

/// Resolve the console config from defaults plus `<body data-*>` overrides.
pub(crate) fn load_config() -> ConsoleConfig {
    let (config, errors) = ConsoleConfig::resolve(body_overrides());
    for err in errors {
        console::warn!("ignoring console override", err.to_string());
    }
    config
}

fn body_overrides() -> Vec<(&'static str, String)> {
    let Some(body) = document().body() else {
        return Vec::new();
    };
    let dataset = body.dataset();
    OVERRIDE_KEYS
        .into_iter()
        .filter_map(|key| dataset.get(key).map(|value| (key, value)))
        .collect()
}
