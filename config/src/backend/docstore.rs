use std::time::Duration;

use serde::Deserialize;

#[derive(Deserialize)]
pub struct BackendDocStoreConfig {
    app_id: String,
    base_url: String,
    auth_token: Option<String>,
    #[serde(deserialize_with = "duration_str::deserialize_duration")]
    poll_interval: Duration,
}

impl BackendDocStoreConfig {
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn auth_token(&self) -> &Option<String> {
        &self.auth_token
    }

    pub fn poll_interval(&self) -> &Duration {
        &self.poll_interval
    }
}
