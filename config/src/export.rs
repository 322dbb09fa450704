use std::time::Duration;

use serde::Deserialize;

#[derive(Deserialize)]
pub struct ExportConfig {
    path: String,
    #[serde(deserialize_with = "duration_str::deserialize_duration")]
    every: Duration,
}

impl ExportConfig {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn every(&self) -> &Duration {
        &self.every
    }
}
