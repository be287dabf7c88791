//! Invoices table.
//!
//! `customer_id` points at [`customers`](crate::customers); the relation is
//! declared here for queries only, the schema has no foreign key.

use sea_orm::entity::{ActiveValue, prelude::*};

use crate::dataset;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "invoices")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub customer_id: String,
    /// Amount in cents.
    pub amount: i32,
    pub status: String,
    pub date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customers::Entity",
        from = "Column::CustomerId",
        to = "super::customers::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Customers,
}

impl Related<super::customers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&dataset::Invoice> for ActiveModel {
    fn from(value: &dataset::Invoice) -> Self {
        Self {
            id: ActiveValue::Set(value.id.clone()),
            customer_id: ActiveValue::Set(value.customer_id.clone()),
            amount: ActiveValue::Set(value.amount),
            status: ActiveValue::Set(value.status.as_str().to_string()),
            date: ActiveValue::Set(value.date),
        }
    }
}
