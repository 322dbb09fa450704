use anyhow::{bail, Result};
use mime::Mime;
use reqwest::{
    multipart::{Form, Part},
    Client,
};

pub struct RestRegistrationReqForm {
    name: String,
    qualification: String,
    mobile: String,
    email: String,
    working: String,
    transaction_id: String,
    payment_screenshot: Option<ScreenshotPart>,
}

pub struct ScreenshotPart {
    file_name: String,
    content_type: Mime,
    bytes: Vec<u8>,
}

impl ScreenshotPart {
    pub fn new(file_name: &str, content_type: &Mime, bytes: &[u8]) -> Self {
        Self {
            file_name: file_name.to_owned(),
            content_type: content_type.clone(),
            bytes: bytes.to_vec(),
        }
    }
}

impl RestRegistrationReqForm {
    pub fn new(
        name: &str,
        qualification: &str,
        mobile: &str,
        email: &str,
        working: &str,
        transaction_id: &str,
        payment_screenshot: Option<ScreenshotPart>,
    ) -> Self {
        Self {
            name: name.to_owned(),
            qualification: qualification.to_owned(),
            mobile: mobile.to_owned(),
            email: email.to_owned(),
            working: working.to_owned(),
            transaction_id: transaction_id.to_owned(),
            payment_screenshot,
        }
    }

    fn into_multipart(self) -> Result<Form> {
        let mut form = Form::new()
            .text("name", self.name)
            .text("qualification", self.qualification)
            .text("mobile", self.mobile)
            .text("email", self.email)
            .text("working", self.working)
            .text("transactionId", self.transaction_id);
        if let Some(screenshot) = self.payment_screenshot {
            form = form.part(
                "paymentScreenshot",
                Part::bytes(screenshot.bytes)
                    .file_name(screenshot.file_name)
                    .mime_str(screenshot.content_type.as_ref())?,
            );
        }
        Ok(form)
    }
}

pub struct RestBackend {
    base_url: String,
    client: Client,
}

impl RestBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client: Client::new(),
        }
    }

    pub async fn register(&self, req: RestRegistrationReqForm) -> Result<()> {
        let res = self
            .client
            .post(format!("{}/api/register", &self.base_url))
            .multipart(req.into_multipart()?)
            .send()
            .await?;
        if !res.status().is_success() {
            bail!(
                "Registration endpoint responded with status {}",
                res.status()
            );
        }
        Ok(())
    }
}
