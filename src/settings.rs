//! User settings stored as settings.json in the app data directory

use crate::constants::DEFAULT_API_URL;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Backend
    pub api_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// Backend base URL with surrounding whitespace and trailing slashes
    /// stripped; falls back to the default when the field is emptied.
    pub fn api_url_or_default(&self) -> String {
        let trimmed = self.api_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            DEFAULT_API_URL.to_string()
        } else {
            trimmed.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_api_url_falls_back_to_default() {
        let settings = Settings {
            api_url: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.api_url_or_default(), DEFAULT_API_URL);
    }

    #[test]
    fn api_url_is_normalized() {
        let settings = Settings {
            api_url: " http://10.0.0.5:9000/ ".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.api_url_or_default(), "http://10.0.0.5:9000");
    }
}
