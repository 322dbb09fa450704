use std::borrow::Cow;

use ahash::{HashMap, HashMapExt};
use mc_form::{field::Field, record::RegistrationRecord};
use validator::{Validate, ValidationError};

use crate::ValidationPolicy;

#[derive(Validate)]
struct ContactCheck {
    #[validate(custom(function = "check_email"))]
    email: String,
    #[validate(custom(function = "check_mobile"))]
    mobile: String,
}

pub fn validate(
    record: &RegistrationRecord,
    policy: &ValidationPolicy,
) -> Result<(), HashMap<String, String>> {
    let mut field_errors = HashMap::new();

    let contact = ContactCheck {
        email: record.email().to_owned(),
        mobile: record.mobile().to_owned(),
    };
    if let Err(errors) = contact.validate() {
        for (field, errors) in errors.field_errors() {
            if let Some(error) = errors.first() {
                let message = match &error.message {
                    Some(message) => message.to_string(),
                    None => error.code.to_string(),
                };
                field_errors.insert(field.to_string(), message);
            }
        }
    }

    if *policy.require_academic_details() {
        for (field, value) in [
            (Field::Name, record.name()),
            (Field::Qualification, record.qualification()),
            (Field::YearOfPassing, record.year_of_passing()),
        ] {
            if value.trim().is_empty() {
                field_errors.insert(field.to_string(), "This field is required".to_owned());
            }
        }
    }

    if record.transaction_id().trim().is_empty() && record.attachment().is_none() {
        field_errors.insert(
            Field::TransactionId.to_string(),
            "Provide a transaction ID or attach the payment screenshot".to_owned(),
        );
    }

    if field_errors.is_empty() {
        Ok(())
    } else {
        Err(field_errors)
    }
}

fn check_email(email: &str) -> Result<(), ValidationError> {
    if matches_email_shape(email) {
        return Ok(());
    }
    let mut error = ValidationError::new("email");
    error.message = Some(Cow::from("Enter a valid email address"));
    Err(error)
}

// Same shape the enrollment form enforced: ^[^\s@]+@[^\s@]+\.[^\s@]+$
fn matches_email_shape(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let bytes = domain.as_bytes();
    bytes
        .iter()
        .enumerate()
        .any(|(idx, byte)| *byte == b'.' && idx > 0 && idx + 1 < bytes.len())
}

fn check_mobile(mobile: &str) -> Result<(), ValidationError> {
    if mobile.len() == 10 && mobile.chars().all(|char| char.is_ascii_digit()) {
        return Ok(());
    }
    let mut error = ValidationError::new("mobile");
    error.message = Some(Cow::from("Enter a valid 10-digit mobile number"));
    Err(error)
}
