use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://api.dictionaryapi.dev";

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_user_agent() -> String {
    concat!("lexis/", env!("CARGO_PKG_VERSION")).to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct NetworkConfig {
    /// Dictionary service base, entries live under `/api/v2/entries/en/`
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Origin prepended to relative pronunciation references
    #[serde(default = "default_api_base")]
    pub audio_origin: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// No timeout when unset, a hung lookup keeps loading
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            audio_origin: default_api_base(),
            user_agent: default_user_agent(),
            timeout_ms: None,
        }
    }
}
