use std::env;

use serde::{Deserialize, Serialize};

use self::audio::AudioConfig;
use self::network::NetworkConfig;
use self::ui::UiConfig;

pub mod audio;
pub mod network;
pub mod ui;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub ui: UiConfig,
    pub audio: AudioConfig,
}

impl Config {
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Apply `LEXIS_*` overrides from any variable source
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(api_base) = var("LEXIS_API_BASE") {
            self.network.api_base = api_base;
        }

        if let Some(origin) = var("LEXIS_AUDIO_ORIGIN") {
            self.network.audio_origin = origin;
        }

        if let Some(timeout_ms) = var("LEXIS_TIMEOUT_MS").and_then(|v| v.parse().ok()) {
            // 0 switches the timeout off again
            self.network.timeout_ms = (timeout_ms > 0).then_some(timeout_ms);
        }

        if let Some(term) = var("LEXIS_DEFAULT_TERM").filter(|t| !t.trim().is_empty()) {
            self.ui.default_term = term;
        }
    }
}
