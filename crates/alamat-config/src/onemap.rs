use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_base_url() -> String {
    "https://developers.onemap.sg".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OneMapConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Base endpoint of the OneMap API
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for OneMapConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            base_url: default_base_url(),
        }
    }
}
