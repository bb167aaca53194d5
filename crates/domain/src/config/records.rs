use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordsConfig {
    #[serde(default = "default_ttl")]
    pub default_ttl: u32,

    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            default_ttl: default_ttl(),
            enabled: default_enabled(),
        }
    }
}

fn default_ttl() -> u32 {
    300
}

fn default_enabled() -> bool {
    true
}
