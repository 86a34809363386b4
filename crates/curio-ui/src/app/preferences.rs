//! Persistence helpers for listing preferences.

use crate::core::config::UiConfig;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};

pub(crate) const UI_CONFIG_KEY: &str = "curio.ui_config";

/// Load stored listing preferences, falling back to defaults on any failure.
pub(crate) fn load_ui_config() -> UiConfig {
    let raw = match LocalStorage::raw().get_item(UI_CONFIG_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return UiConfig::default(),
        Err(err) => {
            console::error!("storage operation failed", "get", UI_CONFIG_KEY, err);
            return UiConfig::default();
        }
    };
    match UiConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            console::error!("stored ui config ignored", err.to_string());
            UiConfig::default()
        }
    }
}

pub(crate) fn save_ui_config(config: &UiConfig) {
    if let Err(err) = LocalStorage::set(UI_CONFIG_KEY, config) {
        console::error!("storage operation failed", "set", UI_CONFIG_KEY, err.to_string());
    }
}
