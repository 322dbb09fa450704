use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegistrationConfig {
    require_academic_details: Option<bool>,
}

impl RegistrationConfig {
    pub fn require_academic_details(&self) -> &Option<bool> {
        &self.require_academic_details
    }
}
