use chrono::Utc;
use sea_orm::{ActiveValue, QueryFilter, QueryOrder, prelude::*};
use uuid::Uuid;

pub use batch::{InsertBatch, StepReport};
pub use dataset::Dataset;
pub use error::EngineError;
pub use password::{hash_password, verify_password};
pub use plan::{SeedPlan, SeedStep};
pub use questions::Question;
pub use seed::{SeedFailure, SeedOutcome, SeedReport};

pub mod answers;
mod batch;
pub mod choices;
pub mod customers;
pub mod dataset;
mod error;
pub mod invoices;
mod password;
mod plan;
pub mod questions;
pub mod revenue;
mod seed;
pub mod shareholders;
pub mod users;

type ResultEngine<T> = Result<T, EngineError>;

#[derive(Clone, Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Write `dataset` into the database.
    ///
    /// Tables are created when missing and rows whose key already exists are
    /// skipped, so running the same dataset again is a no-op. Either every
    /// row is written or none is: see [`SeedOutcome`].
    pub async fn seed(&self, dataset: &Dataset) -> ResultEngine<SeedOutcome> {
        seed::run(&self.database, dataset).await
    }

    /// Return the question with its choices.
    pub async fn question(&self, question_id: &str) -> ResultEngine<Question> {
        let model = questions::Entity::find_by_id(question_id.to_string())
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(question_id.to_string()))?;

        let choices = choices::Entity::find()
            .filter(choices::Column::QuestionId.eq(question_id))
            .order_by_asc(choices::Column::Id)
            .all(&self.database)
            .await?;

        Ok(Question::from_models(model, choices))
    }

    /// List the questions currently accepting answers.
    pub async fn active_questions(&self) -> ResultEngine<Vec<Question>> {
        let rows = questions::Entity::find()
            .find_with_related(choices::Entity)
            .filter(questions::Column::IsActive.eq(1))
            .order_by_asc(questions::Column::Id)
            .order_by_asc(choices::Column::Id)
            .all(&self.database)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(model, choices)| Question::from_models(model, choices))
            .collect())
    }

    /// Store a shareholder's vote and return the new answer id.
    ///
    /// `choice` is the choice text as submitted by the voting form. A
    /// shareholder may answer the same question more than once.
    pub async fn record_answer(
        &self,
        shareholder_id: &str,
        question_id: &str,
        choice: &str,
    ) -> ResultEngine<String> {
        shareholders::Entity::find_by_id(shareholder_id.to_string())
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(shareholder_id.to_string()))?;

        let question = questions::Entity::find_by_id(question_id.to_string())
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(question_id.to_string()))?;
        if question.is_active != 1 {
            return Err(EngineError::ClosedQuestion(question_id.to_string()));
        }

        let choice = choices::Entity::find()
            .filter(choices::Column::QuestionId.eq(question_id))
            .filter(choices::Column::Choice.eq(choice))
            .one(&self.database)
            .await?
            .ok_or_else(|| {
                EngineError::InvalidAnswer(format!(
                    "\"{choice}\" is not a choice of question {question_id}"
                ))
            })?;

        let id = Uuid::new_v4().to_string();
        let answer = answers::ActiveModel {
            id: ActiveValue::Set(id.clone()),
            sh_id: ActiveValue::Set(shareholder_id.to_string()),
            question_id: ActiveValue::Set(question_id.to_string()),
            choice_id: ActiveValue::Set(choice.id),
            answer_time: ActiveValue::Set(Utc::now().naive_utc()),
        };
        answers::Entity::insert(answer)
            .exec_without_returning(&self.database)
            .await?;

        tracing::info!("recorded answer {id} to question {question_id}");
        Ok(id)
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`, checking the database is reachable.
    pub async fn build(self) -> ResultEngine<Engine> {
        self.database.ping().await?;

        Ok(Engine {
            database: self.database,
        })
    }
}
