use crate::{
    attachment::Attachment,
    course::{Course, Working},
};

#[derive(Clone, PartialEq, Debug)]
pub struct RegistrationRecord {
    name: String,
    qualification: String,
    year_of_passing: String,
    working: Working,
    course: Course,
    mobile: String,
    email: String,
    transaction_id: String,
    attachment: Option<Attachment>,
}

impl RegistrationRecord {
    pub fn new(course: &Course) -> Self {
        Self {
            name: String::new(),
            qualification: String::new(),
            year_of_passing: String::new(),
            working: Working::No,
            course: *course,
            mobile: String::new(),
            email: String::new(),
            transaction_id: String::new(),
            attachment: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn qualification(&self) -> &str {
        &self.qualification
    }

    pub fn year_of_passing(&self) -> &str {
        &self.year_of_passing
    }

    pub fn working(&self) -> &Working {
        &self.working
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }

    pub fn attachment(&self) -> &Option<Attachment> {
        &self.attachment
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = name.to_owned();
    }

    pub(crate) fn set_qualification(&mut self, qualification: &str) {
        self.qualification = qualification.to_owned();
    }

    pub(crate) fn set_year_of_passing(&mut self, year_of_passing: &str) {
        self.year_of_passing = year_of_passing.to_owned();
    }

    pub(crate) fn set_working(&mut self, working: &Working) {
        self.working = *working;
    }

    pub(crate) fn set_course(&mut self, course: &Course) {
        self.course = *course;
    }

    pub(crate) fn set_mobile(&mut self, mobile: &str) {
        self.mobile = mobile.to_owned();
    }

    pub(crate) fn set_email(&mut self, email: &str) {
        self.email = email.to_owned();
    }

    pub(crate) fn set_transaction_id(&mut self, transaction_id: &str) {
        self.transaction_id = transaction_id.to_owned();
    }

    pub(crate) fn set_attachment(&mut self, attachment: Attachment) {
        self.attachment = Some(attachment);
    }
}
