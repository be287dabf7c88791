//! Transactional seeding.
//!
//! Every step of the [`SeedPlan`] ensures its table and inserts its rows as
//! one [`InsertBatch`]. All steps share a single transaction: the first
//! failing step rolls everything back, including the tables created by the
//! earlier steps.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbBackend,
    EntityTrait, Insert, IntoActiveModel, TransactionTrait, sea_query::OnConflict,
};
use thiserror::Error;

use crate::{
    EngineError, ResultEngine, answers,
    batch::{InsertBatch, StepReport},
    choices, customers,
    dataset::Dataset,
    invoices,
    password::hash_password,
    plan::{SeedPlan, SeedStep},
    questions, revenue, shareholders, users,
};

/// How a seed run ended.
#[derive(Debug)]
pub enum SeedOutcome {
    Committed(SeedReport),
    RolledBack(SeedFailure),
}

impl SeedOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, SeedOutcome::Committed(_))
    }
}

/// Per-table counts of a committed run, in execution order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeedReport {
    pub steps: Vec<StepReport>,
}

impl SeedReport {
    pub fn step(&self, step: SeedStep) -> Option<&StepReport> {
        self.steps.iter().find(|report| report.step == step)
    }

    pub fn inserted(&self) -> u64 {
        self.steps.iter().map(|report| report.inserted).sum()
    }

    pub fn skipped(&self) -> u64 {
        self.steps.iter().map(|report| report.skipped).sum()
    }
}

/// The step that aborted a seed run and why.
#[derive(Debug, Error)]
#[error("seeding {step} failed: {cause}")]
pub struct SeedFailure {
    pub step: SeedStep,
    #[source]
    pub cause: EngineError,
}

/// Run every step of the default plan inside one transaction.
///
/// Errors opening, committing or rolling back the transaction are returned as
/// `Err`; a failing step is reported as [`SeedOutcome::RolledBack`].
pub(crate) async fn run(db: &DatabaseConnection, dataset: &Dataset) -> ResultEngine<SeedOutcome> {
    let plan = SeedPlan::new()?;
    let txn = db.begin().await?;
    let mut report = SeedReport::default();

    for step in plan.steps() {
        match seed_step(&txn, *step, dataset).await {
            Ok(step_report) => {
                tracing::info!(
                    "seeded {step}: {} inserted, {} skipped",
                    step_report.inserted,
                    step_report.skipped
                );
                report.steps.push(step_report);
            }
            Err(cause) => {
                tracing::warn!("seeding {step} failed, rolling back: {cause}");
                txn.rollback().await?;
                return Ok(SeedOutcome::RolledBack(SeedFailure { step: *step, cause }));
            }
        }
    }

    txn.commit().await?;
    Ok(SeedOutcome::Committed(report))
}

async fn seed_step(
    txn: &DatabaseTransaction,
    step: SeedStep,
    dataset: &Dataset,
) -> ResultEngine<StepReport> {
    ensure_uuid_support(txn).await?;
    let backend = txn.get_database_backend();
    txn.execute(backend.build(&step.table())).await?;

    let mut batch = InsertBatch::new(step);
    match step {
        SeedStep::Shareholders => {
            for row in &dataset.shareholders {
                batch.push(async move {
                    let hash = hash_password(row.password.clone()).await?;
                    let model = shareholders::ActiveModel::hashed(row, hash);
                    insert_or_skip(txn, model, shareholders::Column::Id).await
                });
            }
        }
        SeedStep::Questions => {
            for row in &dataset.questions {
                let model = questions::ActiveModel::from(row);
                batch.push(insert_or_skip(txn, model, questions::Column::Id));
            }
        }
        SeedStep::Choices => {
            for row in &dataset.choices {
                let model = choices::ActiveModel::from(row);
                batch.push(insert_or_skip(txn, model, choices::Column::Id));
            }
        }
        SeedStep::Answers => {
            let answer_time = Utc::now().naive_utc();
            for row in &dataset.answers {
                let model = answers::ActiveModel::stamped(row, answer_time);
                batch.push(insert_or_skip(txn, model, answers::Column::Id));
            }
        }
        SeedStep::Users => {
            for row in &dataset.users {
                batch.push(async move {
                    let hash = hash_password(row.password.clone()).await?;
                    let model = users::ActiveModel::hashed(row, hash);
                    insert_or_skip(txn, model, users::Column::Id).await
                });
            }
        }
        SeedStep::Customers => {
            for row in &dataset.customers {
                let model = customers::ActiveModel::from(row);
                batch.push(insert_or_skip(txn, model, customers::Column::Id));
            }
        }
        SeedStep::Invoices => {
            for row in &dataset.invoices {
                let model = invoices::ActiveModel::from(row);
                batch.push(insert_or_skip(txn, model, invoices::Column::Id));
            }
        }
        SeedStep::Revenue => {
            for row in &dataset.revenue {
                let model = revenue::ActiveModel::from(row);
                batch.push(insert_or_skip(txn, model, revenue::Column::Month));
            }
        }
    }

    batch.join().await
}

/// PostgreSQL needs `uuid-ossp` for generated ids; other backends have
/// nothing to install.
async fn ensure_uuid_support<C: ConnectionTrait>(db: &C) -> ResultEngine<()> {
    if db.get_database_backend() == DbBackend::Postgres {
        db.execute_unprepared(r#"CREATE EXTENSION IF NOT EXISTS "uuid-ossp""#)
            .await?;
    }
    Ok(())
}

/// Insert `model` unless a row with the same `key` exists. Returns the
/// number of inserted rows.
async fn insert_or_skip<A>(
    txn: &DatabaseTransaction,
    model: A,
    key: <A::Entity as EntityTrait>::Column,
) -> ResultEngine<u64>
where
    A: ActiveModelTrait + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    let inserted = Insert::one(model)
        .on_conflict(OnConflict::column(key).do_nothing().to_owned())
        .exec_without_returning(txn)
        .await?;
    Ok(inserted)
}
