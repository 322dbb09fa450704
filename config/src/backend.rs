use serde::Deserialize;

use self::{
    docstore::BackendDocStoreConfig, rest::BackendRestConfig, webhook::BackendWebhookConfig,
};

pub mod docstore;
pub mod rest;
pub mod webhook;

#[derive(Deserialize)]
pub struct BackendConfig {
    rest: Option<BackendRestConfig>,
    webhook: Option<BackendWebhookConfig>,
    docstore: Option<BackendDocStoreConfig>,
}

impl BackendConfig {
    pub fn rest(&self) -> &Option<BackendRestConfig> {
        &self.rest
    }

    pub fn webhook(&self) -> &Option<BackendWebhookConfig> {
        &self.webhook
    }

    pub fn docstore(&self) -> &Option<BackendDocStoreConfig> {
        &self.docstore
    }
}
