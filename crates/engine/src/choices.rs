use sea_orm::entity::{ActiveValue, prelude::*};

use crate::dataset;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "choices")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub question_id: String,
    pub choice: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::questions::Entity",
        from = "Column::QuestionId",
        to = "super::questions::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Questions,
}

impl Related<super::questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Questions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&dataset::Choice> for ActiveModel {
    fn from(value: &dataset::Choice) -> Self {
        Self {
            id: ActiveValue::Set(value.id.clone()),
            question_id: ActiveValue::Set(value.question_id.clone()),
            choice: ActiveValue::Set(value.choice.clone()),
        }
    }
}
