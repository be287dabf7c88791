use serde::{Deserialize, Serialize};

pub mod seed {
    use super::*;

    pub const SEEDED: &str = "Database seeded successfully";

    /// Body of a successful `GET /seed`.
    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    pub struct SeedStatus {
        pub message: String,
    }

    impl SeedStatus {
        pub fn seeded() -> Self {
            Self {
                message: SEEDED.to_string(),
            }
        }
    }
}

pub mod error {
    use super::*;

    /// Body of every failed request.
    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    pub struct ApiError {
        pub error: String,
    }
}

pub mod voting {
    use super::*;

    /// A question as listed by `GET /questions`.
    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    pub struct Question {
        pub id: String,
        pub question: String,
        pub choices_array: Vec<String>,
    }

    /// Form payload posted by the voting form.
    ///
    /// The radio group is named `radio-0`; the field is absent when nothing
    /// was selected.
    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct ChoiceForm {
        #[serde(rename = "radio-0")]
        pub choice: Option<String>,
    }
}
