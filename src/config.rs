//! Client configuration.
//!
//! Resolved in layers, lowest priority first: compiled-in defaults, an
//! optional `window.__COMMIT_COMPOSER_CONFIG__` object injected by the
//! deployment, then settings the user saved to `localStorage`.

use std::num::NonZeroU32;

use leptos::prelude::RwSignal;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;
use crate::theme::Theme;

pub const STORAGE_KEY: &str = "commit-composer.config";
pub const WINDOW_CONFIG_KEY: &str = "__COMMIT_COMPOSER_CONFIG__";
pub const DEFAULT_HISTORY_LIMIT: u32 = 5;

pub fn default_api_base_url() -> &'static str {
    option_env!("COMMIT_COMPOSER_API_URL").unwrap_or("http://localhost:8000/")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    pub api_base_url: String,
    pub history_limit: u32,
    pub theme: Theme,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url().to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            theme: Theme::System,
        }
    }
}

/// Partial config. Accepts both the saved (snake_case) and the injected
/// (camelCase) spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigOverrides {
    #[serde(default, alias = "apiBaseUrl")]
    pub api_base_url: Option<String>,
    #[serde(default, alias = "historyLimit")]
    pub history_limit: Option<u32>,
    #[serde(default)]
    pub theme: Option<Theme>,
}

impl ComposerConfig {
    /// Backend base URL, normalized to end with `/` so joined endpoints
    /// keep any path prefix.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: self.api_base_url.clone(),
            reason,
        };
        let mut url = Url::parse(self.api_base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    pub fn limit(&self) -> Result<NonZeroU32, ConfigError> {
        NonZeroU32::new(self.history_limit)
            .ok_or(ConfigError::NonPositiveHistoryLimit(self.history_limit))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.base_url()?;
        self.limit()?;
        Ok(())
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(url) = overrides.api_base_url {
            self.api_base_url = url;
        }
        if let Some(limit) = overrides.history_limit {
            self.history_limit = limit;
        }
        if let Some(theme) = overrides.theme {
            self.theme = theme;
        }
        self
    }

    /// Replace each invalid field with its default.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if let Err(e) = self.base_url() {
            log::warn!("{}; using {}", e, defaults.api_base_url);
            self.api_base_url = defaults.api_base_url;
        }
        if let Err(e) = self.limit() {
            log::warn!("{}; using {}", e, defaults.history_limit);
            self.history_limit = defaults.history_limit;
        }
        self
    }

    /// Effective configuration for this page load.
    pub fn load() -> Self {
        let mut config = Self::default();
        if let Some(overrides) = read_deployment_overrides() {
            config = config.with_overrides(overrides);
        }
        if let Some(saved) = read_saved() {
            config = config.with_overrides(saved);
        }
        config.sanitized()
    }
}

/// Shared, reactive configuration provided at the app root.
#[derive(Clone, Copy)]
pub struct ConfigContext {
    pub config: RwSignal<ComposerConfig>,
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn read_deployment_overrides() -> Option<ConfigOverrides> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &WINDOW_CONFIG_KEY.into()).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    match serde_wasm_bindgen::from_value(value) {
        Ok(overrides) => Some(overrides),
        Err(e) => {
            log::warn!("Ignoring malformed window.{}: {}", WINDOW_CONFIG_KEY, e);
            None
        }
    }
}

fn read_saved() -> Option<ConfigOverrides> {
    let raw = local_storage()?.get_item(STORAGE_KEY).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(saved) => Some(saved),
        Err(e) => {
            log::warn!("Ignoring malformed saved settings: {}", e);
            None
        }
    }
}

/// Validate and persist user settings.
pub fn save(config: &ComposerConfig) -> Result<(), String> {
    config.validate()?;
    let raw = serde_json::to_string(config).map_err(|e| e.to_string())?;
    let storage = local_storage().ok_or_else(|| "Browser storage is unavailable".to_string())?;
    storage
        .set_item(STORAGE_KEY, &raw)
        .map_err(|e| e.as_string().unwrap_or_else(|| "Failed to write settings".to_string()))
}

/// Forget saved user settings.
pub fn clear_saved() -> Result<(), String> {
    let storage = local_storage().ok_or_else(|| "Browser storage is unavailable".to_string())?;
    storage
        .remove_item(STORAGE_KEY)
        .map_err(|e| e.as_string().unwrap_or_else(|| "Failed to clear settings".to_string()))
}
