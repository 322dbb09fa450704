use serde::Deserialize;

#[derive(Deserialize)]
pub struct BackendWebhookConfig {
    url: String,
}

impl BackendWebhookConfig {
    pub fn url(&self) -> &str {
        &self.url
    }
}
