//! Table definitions for the voting demo.
//!
//! Every statement is built with `IF NOT EXISTS`, so the same definitions are
//! used by the migration and by the seeder, which ensures each table inside
//! its own transaction before inserting rows.
//!
//! - `shareholders`: people allowed to vote
//! - `questions`: ballot questions, `is_active` stored as an integer flag
//! - `choices`: possible answers of a question
//! - `answers`: recorded votes
//! - `users`: dashboard accounts
//! - `customers`, `invoices`, `revenue`: invoicing demo data

use sea_orm_migration::prelude::*;

#[derive(Iden)]
pub enum Shareholders {
    Table,
    Id,
    Name,
    Email,
    Password,
}

#[derive(Iden)]
pub enum Questions {
    Table,
    Id,
    Question,
    IsActive,
}

#[derive(Iden)]
pub enum Choices {
    Table,
    Id,
    QuestionId,
    Choice,
}

#[derive(Iden)]
pub enum Answers {
    Table,
    Id,
    ShId,
    QuestionId,
    ChoiceId,
    AnswerTime,
}

#[derive(Iden)]
pub enum Users {
    Table,
    Id,
    Name,
    Email,
    Password,
}

#[derive(Iden)]
pub enum Customers {
    Table,
    Id,
    Name,
    Email,
    ImageUrl,
}

#[derive(Iden)]
pub enum Invoices {
    Table,
    Id,
    CustomerId,
    Amount,
    Status,
    Date,
}

#[derive(Iden)]
pub enum Revenue {
    Table,
    Month,
    Revenue,
}

pub fn shareholders() -> TableCreateStatement {
    Table::create()
        .table(Shareholders::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Shareholders::Id)
                .string()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(Shareholders::Name).string_len(255).not_null())
        .col(
            ColumnDef::new(Shareholders::Email)
                .text()
                .not_null()
                .unique_key(),
        )
        .col(ColumnDef::new(Shareholders::Password).text().not_null())
        .to_owned()
}

pub fn questions() -> TableCreateStatement {
    Table::create()
        .table(Questions::Table)
        .if_not_exists()
        .col(ColumnDef::new(Questions::Id).string().not_null().primary_key())
        .col(ColumnDef::new(Questions::Question).string_len(255).not_null())
        .col(ColumnDef::new(Questions::IsActive).integer().not_null())
        .to_owned()
}

pub fn choices() -> TableCreateStatement {
    Table::create()
        .table(Choices::Table)
        .if_not_exists()
        .col(ColumnDef::new(Choices::Id).string().not_null().primary_key())
        .col(ColumnDef::new(Choices::QuestionId).string().not_null())
        .col(ColumnDef::new(Choices::Choice).string_len(255).not_null())
        .to_owned()
}

pub fn answers() -> TableCreateStatement {
    Table::create()
        .table(Answers::Table)
        .if_not_exists()
        .col(ColumnDef::new(Answers::Id).string().not_null().primary_key())
        .col(ColumnDef::new(Answers::ShId).string().not_null())
        .col(ColumnDef::new(Answers::QuestionId).string().not_null())
        .col(ColumnDef::new(Answers::ChoiceId).string_len(255).not_null())
        .col(ColumnDef::new(Answers::AnswerTime).timestamp().not_null())
        .to_owned()
}

pub fn users() -> TableCreateStatement {
    Table::create()
        .table(Users::Table)
        .if_not_exists()
        .col(ColumnDef::new(Users::Id).string().not_null().primary_key())
        .col(ColumnDef::new(Users::Name).string_len(255).not_null())
        .col(ColumnDef::new(Users::Email).text().not_null().unique_key())
        .col(ColumnDef::new(Users::Password).text().not_null())
        .to_owned()
}

pub fn customers() -> TableCreateStatement {
    Table::create()
        .table(Customers::Table)
        .if_not_exists()
        .col(ColumnDef::new(Customers::Id).string().not_null().primary_key())
        .col(ColumnDef::new(Customers::Name).string_len(255).not_null())
        .col(ColumnDef::new(Customers::Email).string_len(255).not_null())
        .col(ColumnDef::new(Customers::ImageUrl).string_len(255).not_null())
        .to_owned()
}

pub fn invoices() -> TableCreateStatement {
    Table::create()
        .table(Invoices::Table)
        .if_not_exists()
        .col(ColumnDef::new(Invoices::Id).string().not_null().primary_key())
        .col(ColumnDef::new(Invoices::CustomerId).string().not_null())
        .col(ColumnDef::new(Invoices::Amount).integer().not_null())
        .col(ColumnDef::new(Invoices::Status).string_len(255).not_null())
        .col(ColumnDef::new(Invoices::Date).date().not_null())
        .to_owned()
}

pub fn revenue() -> TableCreateStatement {
    Table::create()
        .table(Revenue::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Revenue::Month)
                .string_len(4)
                .not_null()
                .unique_key(),
        )
        .col(ColumnDef::new(Revenue::Revenue).integer().not_null())
        .to_owned()
}

/// All table definitions, referenced tables first.
pub fn all() -> Vec<TableCreateStatement> {
    vec![
        shareholders(),
        questions(),
        choices(),
        answers(),
        users(),
        customers(),
        invoices(),
        revenue(),
    ]
}

/// Drop statements in reverse creation order.
pub fn drop_all() -> Vec<TableDropStatement> {
    vec![
        Table::drop().table(Revenue::Table).if_exists().to_owned(),
        Table::drop().table(Invoices::Table).if_exists().to_owned(),
        Table::drop().table(Customers::Table).if_exists().to_owned(),
        Table::drop().table(Users::Table).if_exists().to_owned(),
        Table::drop().table(Answers::Table).if_exists().to_owned(),
        Table::drop().table(Choices::Table).if_exists().to_owned(),
        Table::drop().table(Questions::Table).if_exists().to_owned(),
        Table::drop().table(Shareholders::Table).if_exists().to_owned(),
    ]
}
