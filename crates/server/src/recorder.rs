//! Hand-off between the voting form and whatever stores the vote.

use async_trait::async_trait;
use engine::{Engine, EngineError};

/// What the voting form submitted.
#[derive(Clone, Debug, PartialEq)]
pub struct AnswerSubmission {
    pub question_id: String,
    /// Value of the `shareholder-id` header, if sent.
    pub shareholder_id: Option<String>,
    /// Selected radio value; `None` when the form was submitted empty.
    pub choice: Option<String>,
}

/// The record-answer action invoked on form submission.
#[async_trait]
pub trait AnswerRecorder: Send + Sync {
    async fn record(&self, submission: AnswerSubmission) -> Result<(), EngineError>;
}

#[async_trait]
impl AnswerRecorder for Engine {
    async fn record(&self, submission: AnswerSubmission) -> Result<(), EngineError> {
        let Some(shareholder_id) = submission.shareholder_id else {
            return Err(EngineError::InvalidAnswer(
                "missing shareholder-id header".to_string(),
            ));
        };
        let Some(choice) = submission.choice else {
            return Err(EngineError::InvalidAnswer("no choice selected".to_string()));
        };

        self.record_answer(&shareholder_id, &submission.question_id, &choice)
            .await?;
        Ok(())
    }
}
