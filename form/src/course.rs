use strum_macros::{Display, EnumString};

#[derive(Display, EnumString, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Course {
    #[strum(serialize = "Java Full Stack Development")]
    JavaFullStack,
    #[strum(serialize = "Python Full Stack Development")]
    PythonFullStack,
    #[strum(serialize = "Artificial Intelligence & ML")]
    ArtificialIntelligence,
    #[strum(serialize = "AI User Training")]
    AiUserTraining,
}

#[derive(Display, EnumString, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Working {
    #[strum(serialize = "yes")]
    Yes,
    #[strum(serialize = "no")]
    No,
}
