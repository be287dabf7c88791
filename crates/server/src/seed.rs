//! Seed endpoint

use api_types::seed::SeedStatus;
use axum::{Json, extract::State};
use engine::SeedOutcome;

use crate::{ServerError, server::ServerState};

/// Write the configured dataset, all rows or none.
pub async fn seed(State(state): State<ServerState>) -> Result<Json<SeedStatus>, ServerError> {
    match state.engine.seed(&state.dataset).await {
        Ok(SeedOutcome::Committed(report)) => {
            tracing::info!(
                "database seeded: {} rows inserted, {} skipped",
                report.inserted(),
                report.skipped()
            );
            Ok(Json(SeedStatus::seeded()))
        }
        Ok(SeedOutcome::RolledBack(failure)) => Err(ServerError::Seed(failure.to_string())),
        Err(err) => {
            tracing::error!("seeding aborted: {err}");
            Err(ServerError::Seed(err.to_string()))
        }
    }
}
