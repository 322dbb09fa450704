use ahash::{HashMap, HashMapExt};

use crate::{attachment::Attachment, course::Course, field::Field, record::RegistrationRecord};

pub mod attachment;
pub mod course;
pub mod field;
pub mod record;

const MOBILE_MAX_LEN: usize = 10;

pub struct FormState {
    opened_for: Course,
    record: RegistrationRecord,
    field_errors: HashMap<String, String>,
}

impl FormState {
    pub fn new(course: &Course) -> Self {
        Self {
            opened_for: *course,
            record: RegistrationRecord::new(course),
            field_errors: HashMap::new(),
        }
    }

    pub fn record(&self) -> &RegistrationRecord {
        &self.record
    }

    pub fn field_errors(&self) -> &HashMap<String, String> {
        &self.field_errors
    }

    pub fn update_field(&mut self, field: &Field, raw_value: &str) -> bool {
        match field {
            Field::Name => self.record.set_name(raw_value),
            Field::Qualification => self.record.set_qualification(raw_value),
            Field::YearOfPassing => self.record.set_year_of_passing(raw_value),
            Field::Working => match raw_value.parse() {
                Ok(working) => self.record.set_working(&working),
                Err(_) => return false,
            },
            Field::Course => match raw_value.parse() {
                Ok(course) => self.record.set_course(&course),
                Err(_) => return false,
            },
            Field::Mobile => {
                if raw_value.len() > MOBILE_MAX_LEN
                    || !raw_value.chars().all(|char| char.is_ascii_digit())
                {
                    return false;
                }
                self.record.set_mobile(raw_value);
            }
            Field::Email => self.record.set_email(raw_value),
            Field::TransactionId => self.record.set_transaction_id(raw_value),
            Field::PaymentScreenshot => return false,
        }
        self.field_errors.remove(field.as_ref());
        true
    }

    pub fn attach_file(&mut self, attachment: Attachment) {
        self.record.set_attachment(attachment);
        self.field_errors.remove(Field::PaymentScreenshot.as_ref());
        self.field_errors.remove(Field::TransactionId.as_ref());
    }

    pub fn can_submit(&self) -> bool {
        !self.record.mobile().is_empty()
            && !self.record.email().is_empty()
            && (!self.record.transaction_id().is_empty() || self.record.attachment().is_some())
    }

    pub fn set_field_errors(&mut self, field_errors: HashMap<String, String>) {
        self.field_errors = field_errors;
    }

    pub fn reset(&mut self) {
        self.record = RegistrationRecord::new(&self.opened_for);
        self.field_errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::course::Working;

    #[test]
    fn mobile_accepts_digits_up_to_ten() {
        let mut form = FormState::new(&Course::JavaFullStack);
        assert!(form.update_field(&Field::Mobile, "98765"));
        assert_eq!(form.record().mobile(), "98765");
        assert!(form.update_field(&Field::Mobile, "9876543210"));
        assert_eq!(form.record().mobile(), "9876543210");
    }

    #[test]
    fn mobile_rejects_non_digit_and_overlong_input() {
        let mut form = FormState::new(&Course::JavaFullStack);
        assert!(form.update_field(&Field::Mobile, "9876543210"));

        assert!(!form.update_field(&Field::Mobile, "98765432011"));
        assert_eq!(form.record().mobile(), "9876543210");

        assert!(!form.update_field(&Field::Mobile, "98765abc"));
        assert_eq!(form.record().mobile(), "9876543210");

        assert!(!form.update_field(&Field::Mobile, "98765 4321"));
        assert_eq!(form.record().mobile(), "9876543210");
    }

    #[test]
    fn mobile_keystroke_by_keystroke_caps_at_ten_digits() {
        let mut form = FormState::new(&Course::PythonFullStack);
        let typed = "98765432011";
        let mut entered = String::new();
        for char in typed.chars() {
            entered.push(char);
            if !form.update_field(&Field::Mobile, &entered) {
                entered.pop();
            }
        }
        assert_eq!(form.record().mobile(), "9876543201");
    }

    #[test]
    fn course_selector_only_accepts_offered_courses() {
        let mut form = FormState::new(&Course::AiUserTraining);
        assert_eq!(form.record().course(), &Course::AiUserTraining);

        assert!(!form.update_field(&Field::Course, "Underwater Basket Weaving"));
        assert_eq!(form.record().course(), &Course::AiUserTraining);

        assert!(form.update_field(&Field::Course, "Python Full Stack Development"));
        assert_eq!(form.record().course(), &Course::PythonFullStack);
    }

    #[test]
    fn can_submit_requires_mobile_email_and_payment_proof() {
        let mut form = FormState::new(&Course::JavaFullStack);
        assert!(!form.can_submit());

        form.update_field(&Field::Mobile, "9876543210");
        form.update_field(&Field::Email, "a@b.com");
        assert!(!form.can_submit());

        form.update_field(&Field::TransactionId, "TXN1");
        assert!(form.can_submit());

        form.update_field(&Field::TransactionId, "");
        assert!(!form.can_submit());

        form.attach_file(Attachment::new(
            "proof.png",
            &mime::IMAGE_PNG,
            Path::new("/tmp/proof.png"),
        ));
        assert!(form.can_submit());
    }

    #[test]
    fn can_submit_is_looser_than_full_validation() {
        let mut form = FormState::new(&Course::JavaFullStack);
        form.update_field(&Field::Mobile, "98");
        form.update_field(&Field::Email, "not-an-email");
        form.update_field(&Field::TransactionId, "TXN1");
        assert!(form.can_submit());
    }

    #[test]
    fn reset_restores_the_initial_empty_record() {
        let mut form = FormState::new(&Course::ArtificialIntelligence);
        let initial = form.record().clone();

        form.update_field(&Field::Name, "Asha");
        form.update_field(&Field::Qualification, "B.Tech");
        form.update_field(&Field::YearOfPassing, "2024");
        form.update_field(&Field::Working, "yes");
        form.update_field(&Field::Mobile, "9876543210");
        form.update_field(&Field::Email, "asha@example.com");
        form.update_field(&Field::TransactionId, "TXN99");
        form.attach_file(Attachment::new(
            "proof.png",
            &mime::IMAGE_PNG,
            Path::new("/tmp/proof.png"),
        ));
        assert_ne!(form.record(), &initial);

        form.reset();
        assert_eq!(form.record(), &initial);
        assert_eq!(form.record().working(), &Working::No);
        assert!(form.field_errors().is_empty());
    }

    #[test]
    fn accepted_update_clears_the_field_error() {
        let mut form = FormState::new(&Course::JavaFullStack);
        let mut errors = HashMap::new();
        errors.insert("email".to_owned(), "Enter a valid email address".to_owned());
        form.set_field_errors(errors);

        form.update_field(&Field::Email, "asha@example.com");
        assert!(form.field_errors().is_empty());
    }
}
