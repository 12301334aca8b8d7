use lexis_types::Font;
use serde::{Deserialize, Serialize};

fn default_term() -> String {
    "keyboard".to_string()
}

fn default_title() -> String {
    "Dictionary".to_string()
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_scroll_step() -> u16 {
    3
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    /// Word looked up on startup
    #[serde(default = "default_term")]
    pub default_term: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub font: Font,
    /// Redraw interval driving the throbber
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_scroll_step")]
    pub scroll_step: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_term: default_term(),
            title: default_title(),
            font: Font::default(),
            tick_rate_ms: default_tick_rate_ms(),
            scroll_step: default_scroll_step(),
        }
    }
}
