//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`KeyNotFound`] thrown when a question, a shareholder or a choice is missing.
//! - [`ClosedQuestion`] thrown when answering a question that is not active.
//! - [`InvalidAnswer`] thrown when a submitted answer cannot be recorded.
//! - [`PasswordHash`] thrown when a password cannot be hashed.
//! - [`InvalidPlan`] thrown when seed steps depend on each other in a cycle.
//!
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`ClosedQuestion`]: EngineError::ClosedQuestion
//!  [`InvalidAnswer`]: EngineError::InvalidAnswer
//!  [`PasswordHash`]: EngineError::PasswordHash
//!  [`InvalidPlan`]: EngineError::InvalidPlan
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("Question \"{0}\" is closed")]
    ClosedQuestion(String),
    #[error("Invalid answer: {0}")]
    InvalidAnswer(String),
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),
    #[error("Invalid seed plan: {0}")]
    InvalidPlan(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::ClosedQuestion(a), Self::ClosedQuestion(b)) => a == b,
            (Self::InvalidAnswer(a), Self::InvalidAnswer(b)) => a == b,
            (Self::PasswordHash(a), Self::PasswordHash(b)) => a == b,
            (Self::InvalidPlan(a), Self::InvalidPlan(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
