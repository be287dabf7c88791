use api_types::error::ApiError;
use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

pub use recorder::{AnswerRecorder, AnswerSubmission};
pub use server::{ServerState, router, run_with_listener};
pub use voting::VotingForm;

mod recorder;
mod seed;
mod server;
mod voting;

pub enum ServerError {
    Engine(EngineError),
    /// A seed run that did not commit. The message is returned as is.
    Seed(String),
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::ClosedQuestion(_) | EngineError::InvalidAnswer(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        EngineError::PasswordHash(_) | EngineError::InvalidPlan(_) | EngineError::Database(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => {
                (status_for_engine_error(&err), message_for_engine_error(err))
            }
            ServerError::Seed(err) => (StatusCode::INTERNAL_SERVER_ERROR, err),
        };

        (status, Json(ApiError { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_not_found_maps_to_404() {
        let res = ServerError::from(EngineError::KeyNotFound("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn closed_question_maps_to_422() {
        let res = ServerError::from(EngineError::ClosedQuestion("q".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn invalid_answer_maps_to_422() {
        let res = ServerError::from(EngineError::InvalidAnswer("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn database_error_maps_to_500() {
        let err = EngineError::Database(sea_orm::DbErr::Custom("boom".to_string()));
        let res = ServerError::from(err).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn seed_failure_maps_to_500() {
        let res = ServerError::Seed("seeding answers failed".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
