//! Monthly revenue.
//!
//! The table has no id column: `month` carries a unique constraint and is
//! used as the entity key.

use sea_orm::entity::{ActiveValue, prelude::*};

use crate::dataset;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "revenue")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub month: String,
    pub revenue: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&dataset::Revenue> for ActiveModel {
    fn from(value: &dataset::Revenue) -> Self {
        Self {
            month: ActiveValue::Set(value.month.clone()),
            revenue: ActiveValue::Set(value.revenue),
        }
    }
}
