use serde::Deserialize;

#[derive(Deserialize)]
pub struct BackendRestConfig {
    base_url: String,
}

impl BackendRestConfig {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
