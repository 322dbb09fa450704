use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InsertRegistrationReqJson {
    student_name: String,
    qualification: String,
    year_of_passing: String,
    working: String,
    course: String,
    mobile: String,
    email: String,
}

impl InsertRegistrationReqJson {
    pub fn new(
        student_name: &str,
        qualification: &str,
        year_of_passing: &str,
        working: &str,
        course: &str,
        mobile: &str,
        email: &str,
    ) -> Self {
        Self {
            student_name: student_name.to_owned(),
            qualification: qualification.to_owned(),
            year_of_passing: year_of_passing.to_owned(),
            working: working.to_owned(),
            course: course.to_owned(),
            mobile: mobile.to_owned(),
            email: email.to_owned(),
        }
    }
}

#[derive(Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResJson {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    student_name: String,
    #[serde(default)]
    qualification: String,
    #[serde(default)]
    year_of_passing: String,
    #[serde(default)]
    working: String,
    #[serde(default)]
    course: String,
    #[serde(default)]
    mobile: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    timestamp: Option<String>,
}

impl RegistrationResJson {
    pub fn new(
        id: &Option<String>,
        student_name: &str,
        qualification: &str,
        year_of_passing: &str,
        working: &str,
        course: &str,
        mobile: &str,
        email: &str,
        timestamp: &Option<String>,
    ) -> Self {
        Self {
            id: id.clone(),
            student_name: student_name.to_owned(),
            qualification: qualification.to_owned(),
            year_of_passing: year_of_passing.to_owned(),
            working: working.to_owned(),
            course: course.to_owned(),
            mobile: mobile.to_owned(),
            email: email.to_owned(),
            timestamp: timestamp.clone(),
        }
    }

    pub fn id(&self) -> &Option<String> {
        &self.id
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

    pub fn timestamp(&self) -> &Option<String> {
        &self.timestamp
    }
}
