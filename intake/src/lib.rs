use ahash::HashMap;
use mc_backend_docstore::{client::DocStoreClient, model::InsertRegistrationReqJson};
use mc_backend_rest::{RestBackend, RestRegistrationReqForm, ScreenshotPart};
use mc_backend_webhook::{WebhookBackend, WebhookRegistrationReqJson};
use mc_config::registration::RegistrationConfig;
use mc_form::FormState;

pub mod encode;
pub mod validate;

pub const RETRY_MESSAGE: &str =
    "Something went wrong while submitting the registration. Please try again.";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Accepted {
    Confirmed,
    Dispatched,
}

#[derive(Clone, PartialEq, Debug)]
pub enum Rejected {
    Invalid(HashMap<String, String>),
    Failed(String),
}

pub struct ValidationPolicy {
    require_academic_details: bool,
}

impl ValidationPolicy {
    pub fn new(require_academic_details: &bool) -> Self {
        Self {
            require_academic_details: *require_academic_details,
        }
    }

    pub fn from_config(registration: &Option<RegistrationConfig>, backend: &Backend) -> Self {
        match registration
            .as_ref()
            .and_then(|registration| *registration.require_academic_details())
        {
            Some(require_academic_details) => Self::new(&require_academic_details),
            None => backend.default_policy(),
        }
    }

    pub fn require_academic_details(&self) -> &bool {
        &self.require_academic_details
    }
}

pub enum Backend {
    Rest(RestBackend),
    Webhook(WebhookBackend),
    DocStore(DocStoreClient),
}

impl Backend {
    pub fn default_policy(&self) -> ValidationPolicy {
        match self {
            Self::Rest(_) | Self::DocStore(_) => ValidationPolicy::new(&true),
            Self::Webhook(_) => ValidationPolicy::new(&false),
        }
    }
}

pub async fn submit(
    form: &mut FormState,
    backend: &Backend,
    policy: &ValidationPolicy,
) -> Result<Accepted, Rejected> {
    let record = form.record().clone();

    if let Err(field_errors) = validate::validate(&record, policy) {
        form.set_field_errors(field_errors.clone());
        return Err(Rejected::Invalid(field_errors));
    }

    let encoded = match record.attachment() {
        Some(attachment) => match encode::encode_attachment(attachment).await {
            Ok(encoded) => Some(encoded),
            Err(err) => {
                mc_log::error(
                    None,
                    format!("[Intake] Failed to encode the payment screenshot: {err}"),
                );
                return Err(Rejected::Failed(RETRY_MESSAGE.to_owned()));
            }
        },
        None => None,
    };

    let accepted = match backend {
        Backend::Rest(rest) => {
            let screenshot = encoded.as_ref().map(|encoded| {
                ScreenshotPart::new(encoded.file_name(), encoded.content_type(), encoded.bytes())
            });
            let req = RestRegistrationReqForm::new(
                record.name(),
                record.qualification(),
                record.mobile(),
                record.email(),
                &record.working().to_string(),
                record.transaction_id(),
                screenshot,
            );
            match rest.register(req).await {
                Ok(()) => Accepted::Confirmed,
                Err(err) => {
                    mc_log::error(None, format!("[Intake] Registration submit failed: {err}"));
                    return Err(Rejected::Failed(RETRY_MESSAGE.to_owned()));
                }
            }
        }
        Backend::Webhook(webhook) => {
            let payment_screenshot = encoded
                .as_ref()
                .map(|encoded| encoded.data_uri().to_owned())
                .unwrap_or_default();
            let req = WebhookRegistrationReqJson::new(
                record.name(),
                record.qualification(),
                record.mobile(),
                record.email(),
                &record.working().to_string(),
                record.transaction_id(),
                &payment_screenshot,
            );
            match webhook.dispatch(&req).await {
                Ok(()) => Accepted::Dispatched,
                Err(err) => {
                    mc_log::error(None, format!("[Intake] Registration dispatch failed: {err}"));
                    return Err(Rejected::Failed(RETRY_MESSAGE.to_owned()));
                }
            }
        }
        Backend::DocStore(docstore) => {
            let doc = InsertRegistrationReqJson::new(
                record.name(),
                record.qualification(),
                record.year_of_passing(),
                &record.working().to_string(),
                &record.course().to_string(),
                record.mobile(),
                record.email(),
            );
            match docstore.insert_one(&doc).await {
                Ok(()) => Accepted::Confirmed,
                Err(err) => {
                    mc_log::error(None, format!("[Intake] Registration insert failed: {err}"));
                    return Err(Rejected::Failed(RETRY_MESSAGE.to_owned()));
                }
            }
        }
    };

    form.reset();
    Ok(accepted)
}
