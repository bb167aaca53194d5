use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Prefix of the record-management endpoints, without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    pub fn rrset_url(&self, zone: &str, name: &str, record_type: &str) -> String {
        format!(
            "{}/v2/zones/{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            zone,
            name,
            record_type
        )
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}
