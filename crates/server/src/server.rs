use axum::{
    Router,
    routing::{get, post},
};
use axum_extra::headers::{Error as AxumError, Header};

use std::sync::Arc;

use crate::{recorder::AnswerRecorder, seed, voting};
use engine::{Dataset, Engine};

static SHAREHOLDER_HEADER: axum::http::HeaderName =
    axum::http::HeaderName::from_static("shareholder-id");

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
    /// Receives the choices submitted through the voting form.
    pub recorder: Arc<dyn AnswerRecorder>,
    /// Rows written by `GET /seed`.
    pub dataset: Arc<Dataset>,
}

impl ServerState {
    /// State whose answers are recorded by `engine` itself.
    pub fn new(engine: Engine, dataset: Dataset) -> Self {
        let engine = Arc::new(engine);
        Self {
            recorder: engine.clone(),
            engine,
            dataset: Arc::new(dataset),
        }
    }

    pub fn with_recorder(mut self, recorder: Arc<dyn AnswerRecorder>) -> Self {
        self.recorder = recorder;
        self
    }
}

/// `TypedHeader` naming the shareholder who submits a vote.
///
/// Voting requests carry the "shareholder-id" header. It identifies the
/// voter, it does not authenticate them.
#[derive(Debug)]
pub(crate) struct ShareholderHeader(pub(crate) String);

impl Header for ShareholderHeader {
    fn name() -> &'static axum::http::HeaderName {
        &SHAREHOLDER_HEADER
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, AxumError>
    where
        Self: Sized,
        I: Iterator<Item = &'i axum::http::HeaderValue>,
    {
        let value = values.next().ok_or_else(AxumError::invalid)?;
        let Ok(value) = value.to_str() else {
            return Err(AxumError::invalid());
        };
        let value = value.trim();
        if value.is_empty() {
            return Err(AxumError::invalid());
        }

        Ok(ShareholderHeader(value.to_string()))
    }

    fn encode<E: Extend<axum::http::HeaderValue>>(&self, values: &mut E) {
        match axum::http::HeaderValue::from_str(&self.0) {
            Ok(value) => values.extend(std::iter::once(value)),
            Err(_) => tracing::error!("failed to encode shareholder-id header"),
        }
    }
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/seed", get(seed::seed))
        .route("/questions", get(voting::list_questions))
        .route("/voting", get(voting::index))
        .route("/voting/{question_id}", get(voting::form))
        .route("/voting/{question_id}/answer", post(voting::submit))
        .with_state(state)
}

pub async fn run_with_listener(
    state: ServerState,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(state)).await
}
