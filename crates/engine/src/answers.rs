//! Recorded votes.
//!
//! Uniqueness is on `id` only: nothing stops a shareholder from answering the
//! same question twice.

use sea_orm::entity::{ActiveValue, prelude::*};

use crate::dataset;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "answers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Shareholder who answered.
    pub sh_id: String,
    pub question_id: String,
    pub choice_id: String,
    pub answer_time: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// Seeded answers carry no timestamp, they are stamped with the seeding
    /// time.
    pub fn stamped(value: &dataset::Answer, answer_time: DateTime) -> Self {
        Self {
            id: ActiveValue::Set(value.id.clone()),
            sh_id: ActiveValue::Set(value.sh_id.clone()),
            question_id: ActiveValue::Set(value.question_id.clone()),
            choice_id: ActiveValue::Set(value.choice_id.clone()),
            answer_time: ActiveValue::Set(answer_time),
        }
    }
}
