//! Runtime site configuration.
//!
//! Defaults are compiled in; `site-config.json` next to the page may override
//! any subset of fields.

use crate::api;
use folio_contact::EmailSettings;
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_URL: &str = "site-config.json";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub email: EmailSettings,
    pub theme_storage_key: String,
    pub back_to_top_threshold_px: f64,
    pub status_dismiss_ms: u32,
    pub skill_bar_threshold: f64,
    pub header_selector: String,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            email: EmailSettings::default(),
            theme_storage_key: folio_prefs::DEFAULT_THEME_KEY.to_owned(),
            back_to_top_threshold_px: 300.0,
            status_dismiss_ms: 5_000,
            skill_bar_threshold: 0.5,
            header_selector: ".header".to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not fetch {url}: {reason}")]
    Fetch { url: String, reason: String },
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Fetch and parse the site config. Callers fall back to defaults on error.
pub async fn load(url: &str) -> Result<SiteConfig, ConfigError> {
    let text = api::fetch_text(url).await.map_err(|reason| ConfigError::Fetch {
        url: url.to_owned(),
        reason,
    })?;
    SiteConfig::from_json(&text)
}
