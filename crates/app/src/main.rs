use std::error::Error;

use engine::{Dataset, Engine, SeedOutcome};
use migration::{Migrator, MigratorTrait};
use server::ServerState;

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "shareholder_vote={level},server={level},engine={level},migration={level}",
            level = settings.app.level
        ))
        .init();

    let db = match connect(&settings.server.database).await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!("failed to initialize database: {err}");
            return Err(err);
        }
    };

    let engine = match Engine::builder().database(db).build().await {
        Ok(engine) => engine,
        Err(err) => {
            tracing::error!("failed to build engine from database: {err}");
            return Err(err.into());
        }
    };

    let dataset = match settings.seed.dataset.as_deref() {
        Some(path) => {
            tracing::info!("Loading dataset from {path}...");
            serde_json::from_str(&std::fs::read_to_string(path)?)?
        }
        None => Dataset::demo(),
    };

    if settings.seed.on_start {
        match engine.seed(&dataset).await? {
            SeedOutcome::Committed(report) => tracing::info!(
                "database seeded on start: {} rows inserted, {} skipped",
                report.inserted(),
                report.skipped()
            ),
            SeedOutcome::RolledBack(failure) => tracing::error!("{failure}"),
        }
    }

    let addr = format!("{}:{}", settings.server.bind, settings.server.port);
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return Err(err.into());
        }
    };

    server::run_with_listener(ServerState::new(engine, dataset), listener).await?;

    Ok(())
}

async fn connect(
    config: &settings::Database,
) -> Result<sea_orm::DatabaseConnection, Box<dyn Error + Send + Sync>> {
    let database = sea_orm::Database::connect(config.url()).await?;
    Migrator::up(&database, None).await?;
    Ok(database)
}
