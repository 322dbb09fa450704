use anyhow::Result;
use reqwest::Client;
use serde::Serialize;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRegistrationReqJson {
    name: String,
    qualification: String,
    mobile: String,
    email: String,
    working: String,
    transaction_id: String,
    payment_screenshot: String,
}

impl WebhookRegistrationReqJson {
    pub fn new(
        name: &str,
        qualification: &str,
        mobile: &str,
        email: &str,
        working: &str,
        transaction_id: &str,
        payment_screenshot: &str,
    ) -> Self {
        Self {
            name: name.to_owned(),
            qualification: qualification.to_owned(),
            mobile: mobile.to_owned(),
            email: email.to_owned(),
            working: working.to_owned(),
            transaction_id: transaction_id.to_owned(),
            payment_screenshot: payment_screenshot.to_owned(),
        }
    }
}

pub struct WebhookBackend {
    url: String,
    client: Client,
}

impl WebhookBackend {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_owned(),
            client: Client::new(),
        }
    }

    // The remote endpoint gives nothing back that can be trusted, so the
    // response status is never inspected. Issuing the request is the success.
    pub async fn dispatch(&self, payload: &WebhookRegistrationReqJson) -> Result<()> {
        let _ = self.client.post(&self.url).json(payload).send().await?;
        Ok(())
    }
}
