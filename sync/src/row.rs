use mc_backend_docstore::model::RegistrationResJson;

use crate::TIMESTAMP_SENTINEL;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RegistrationRow {
    id: String,
    timestamp: String,
    student_name: String,
    qualification: String,
    year_of_passing: String,
    working: String,
    course: String,
    mobile: String,
    email: String,
}

impl RegistrationRow {
    pub fn from_document(document: &RegistrationResJson) -> Self {
        let timestamp = match document.timestamp() {
            Some(timestamp) if !timestamp.is_empty() => timestamp.to_owned(),
            _ => TIMESTAMP_SENTINEL.to_owned(),
        };
        Self {
            id: document.id().clone().unwrap_or_default(),
            timestamp,
            student_name: document.student_name().to_owned(),
            qualification: document.qualification().to_owned(),
            year_of_passing: document.year_of_passing().to_owned(),
            working: document.working().to_owned(),
            course: document.course().to_owned(),
            mobile: document.mobile().to_owned(),
            email: document.email().to_owned(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    pub fn qualification(&self) -> &str {
        &self.qualification
    }

    pub fn year_of_passing(&self) -> &str {
        &self.year_of_passing
    }

    pub fn working(&self) -> &str {
        &self.working
    }

    pub fn course(&self) -> &str {
        &self.course
    }

    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
