//! The module contains the `Question` struct and the `questions` table.

use sea_orm::entity::{ActiveValue, prelude::*};

use crate::{choices, dataset};

/// A question together with its choices, in the shape the voting form needs.
#[derive(Clone, Debug, PartialEq)]
pub struct Question {
    pub id: String,
    pub question: String,
    pub is_active: bool,
    /// Choice texts ordered by choice id.
    pub choices_array: Vec<String>,
}

impl Question {
    pub(crate) fn from_models(model: Model, choices: Vec<choices::Model>) -> Self {
        Self {
            id: model.id,
            question: model.question,
            is_active: model.is_active == 1,
            choices_array: choices.into_iter().map(|c| c.choice).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub question: String,
    /// `1` when the question accepts answers.
    pub is_active: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::choices::Entity")]
    Choices,
}

impl Related<super::choices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Choices.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&dataset::Question> for ActiveModel {
    fn from(value: &dataset::Question) -> Self {
        Self {
            id: ActiveValue::Set(value.id.clone()),
            question: ActiveValue::Set(value.question.clone()),
            is_active: ActiveValue::Set(value.is_active),
        }
    }
}
