use anyhow::{bail, Result};
use reqwest::{Client, RequestBuilder};

use crate::model::{InsertRegistrationReqJson, RegistrationResJson};

pub struct DocStoreClient {
    base_url: String,
    app_id: String,
    auth_token: Option<String>,
    client: Client,
}

impl DocStoreClient {
    pub fn new(base_url: &str, app_id: &str, auth_token: &Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            app_id: app_id.to_owned(),
            auth_token: auth_token.clone(),
            client: Client::new(),
        }
    }

    fn collection_url(&self) -> String {
        format!(
            "{}/artifacts/{}/public/data/registrations",
            &self.base_url, &self.app_id
        )
    }

    fn with_auth(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.auth_token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    pub async fn insert_one(&self, doc: &InsertRegistrationReqJson) -> Result<()> {
        let res = self
            .with_auth(self.client.post(self.collection_url()).json(doc))
            .send()
            .await?;
        if !res.status().is_success() {
            bail!(
                "Registration collection insert responded with status {}",
                res.status()
            );
        }
        Ok(())
    }

    pub async fn find_many(&self) -> Result<Vec<RegistrationResJson>> {
        let res = self
            .with_auth(self.client.get(self.collection_url()))
            .send()
            .await?;
        if !res.status().is_success() {
            bail!(
                "Registration collection query responded with status {}",
                res.status()
            );
        }
        Ok(res.json().await?)
    }
}
