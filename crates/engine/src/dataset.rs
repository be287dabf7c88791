//! Rows written by the seeder.
//!
//! A [`Dataset`] holds one collection per table. [`Dataset::demo`] returns the
//! fixed demo data; any other dataset can be deserialized from JSON with the
//! same field names.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shareholder {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Clear-text password, hashed by the seeder before insert.
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub question: String,
    pub is_active: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub id: String,
    pub question_id: String,
    pub choice: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub id: String,
    pub sh_id: String,
    pub question_id: String,
    pub choice_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub customer_id: String,
    /// Amount in cents.
    pub amount: i32,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Revenue {
    /// Short month code, at most four characters (`"Jan"`).
    pub month: String,
    pub revenue: i32,
}

/// Everything the seeder writes, one collection per table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub shareholders: Vec<Shareholder>,
    pub questions: Vec<Question>,
    pub choices: Vec<Choice>,
    pub answers: Vec<Answer>,
    pub users: Vec<User>,
    pub customers: Vec<Customer>,
    pub invoices: Vec<Invoice>,
    pub revenue: Vec<Revenue>,
}

const ALICE: &str = "410544b2-4001-4271-9855-fec4b6a6442a";
const BRUNO: &str = "5f2a6c1e-7b0d-4c8e-9a31-2d4e6f8a0b1c";
const CHEN: &str = "8c3d1e2f-4a5b-4c6d-8e7f-9a0b1c2d3e4f";

const DIVIDEND: &str = "1b6e1c7a-52f0-4b0e-8a9b-3c1d2e4f5a60";
const MEETING: &str = "2c7f2d8b-63a1-4c1f-9bac-4d2e3f5a6b71";
const ACCOUNTS: &str = "3d803e9c-74b2-4d20-8cbd-5e3f4a6b7c82";

const DIVIDEND_YES: &str = "a1e0c3f4-0d1b-4e2a-9b3c-4d5e6f7a8b01";
const DIVIDEND_NO: &str = "a1e0c3f4-0d1b-4e2a-9b3c-4d5e6f7a8b02";
const DIVIDEND_ABSTAIN: &str = "a1e0c3f4-0d1b-4e2a-9b3c-4d5e6f7a8b03";
const MEETING_LISBON: &str = "b2f1d4a5-1e2c-4f3b-8c4d-5e6f7a8b9c01";
const MEETING_BERLIN: &str = "b2f1d4a5-1e2c-4f3b-8c4d-5e6f7a8b9c02";
const MEETING_TORONTO: &str = "b2f1d4a5-1e2c-4f3b-8c4d-5e6f7a8b9c03";
const ACCOUNTS_APPROVE: &str = "c3a2e5b6-2f3d-4a4c-9d5e-6f7a8b9c0d01";
const ACCOUNTS_REJECT: &str = "c3a2e5b6-2f3d-4a4c-9d5e-6f7a8b9c0d02";

const ANSWER_1: &str = "e4b3f6c7-3a4e-4b5d-8e6f-7a8b9c0d1e01";
const ANSWER_2: &str = "e4b3f6c7-3a4e-4b5d-8e6f-7a8b9c0d1e02";
const ANSWER_3: &str = "e4b3f6c7-3a4e-4b5d-8e6f-7a8b9c0d1e03";

const EVIL_RABBIT: &str = "d6e15727-9fe1-4961-8c5b-ea44a9bd81aa";
const DELBA: &str = "3958dc9e-712f-4377-85e9-fec4b6a6442a";
const LEE: &str = "3958dc9e-742f-4377-85e9-fec4b6a6442a";
const MICHAEL: &str = "76d65c26-f784-44a2-ac19-586678f7c2f2";

fn shareholder(id: &str, name: &str, email: &str) -> Shareholder {
    Shareholder {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        password: "123456".to_string(),
    }
}

fn question(id: &str, text: &str, is_active: i32) -> Question {
    Question {
        id: id.to_string(),
        question: text.to_string(),
        is_active,
    }
}

fn choice(id: &str, question_id: &str, text: &str) -> Choice {
    Choice {
        id: id.to_string(),
        question_id: question_id.to_string(),
        choice: text.to_string(),
    }
}

fn answer(id: &str, sh_id: &str, question_id: &str, choice_id: &str) -> Answer {
    Answer {
        id: id.to_string(),
        sh_id: sh_id.to_string(),
        question_id: question_id.to_string(),
        choice_id: choice_id.to_string(),
    }
}

fn customer(id: &str, name: &str, email: &str, image: &str) -> Customer {
    Customer {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        image_url: format!("/customers/{image}.png"),
    }
}

fn invoice(
    id: &str,
    customer_id: &str,
    amount: i32,
    status: InvoiceStatus,
    (year, month, day): (i32, u32, u32),
) -> Invoice {
    Invoice {
        id: id.to_string(),
        customer_id: customer_id.to_string(),
        amount,
        status,
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
    }
}

impl Dataset {
    /// The fixed demo data.
    pub fn demo() -> Self {
        use InvoiceStatus::{Paid, Pending};

        let revenue = [
            ("Jan", 2000),
            ("Feb", 1800),
            ("Mar", 2200),
            ("Apr", 2500),
            ("May", 2300),
            ("Jun", 3200),
            ("Jul", 3500),
            ("Aug", 3700),
            ("Sep", 2500),
            ("Oct", 2800),
            ("Nov", 3000),
            ("Dec", 4800),
        ];
        let invoices = [
            ("f5c4a7d8-4b5f-4c6e-9f7a-8b9c0d1e2f01", EVIL_RABBIT, 15795, Pending, (2022, 12, 6)),
            ("f5c4a7d8-4b5f-4c6e-9f7a-8b9c0d1e2f02", DELBA, 20348, Pending, (2022, 11, 14)),
            ("f5c4a7d8-4b5f-4c6e-9f7a-8b9c0d1e2f03", LEE, 3040, Paid, (2022, 10, 29)),
            ("f5c4a7d8-4b5f-4c6e-9f7a-8b9c0d1e2f04", MICHAEL, 44800, Paid, (2023, 9, 10)),
            ("f5c4a7d8-4b5f-4c6e-9f7a-8b9c0d1e2f05", EVIL_RABBIT, 34577, Pending, (2023, 8, 5)),
            ("f5c4a7d8-4b5f-4c6e-9f7a-8b9c0d1e2f06", LEE, 1250, Paid, (2023, 6, 17)),
        ];

        Self {
            shareholders: vec![
                shareholder(ALICE, "Alice Martin", "alice@example.com"),
                shareholder(BRUNO, "Bruno Costa", "bruno@example.com"),
                shareholder(CHEN, "Chen Wei", "chen@example.com"),
            ],
            questions: vec![
                question(DIVIDEND, "Should the company pay an annual dividend?", 1),
                question(MEETING, "Which city should host the next general meeting?", 1),
                question(ACCOUNTS, "Approve the previous year's financial statements?", 0),
            ],
            choices: vec![
                choice(DIVIDEND_YES, DIVIDEND, "Yes"),
                choice(DIVIDEND_NO, DIVIDEND, "No"),
                choice(DIVIDEND_ABSTAIN, DIVIDEND, "Abstain"),
                choice(MEETING_LISBON, MEETING, "Lisbon"),
                choice(MEETING_BERLIN, MEETING, "Berlin"),
                choice(MEETING_TORONTO, MEETING, "Toronto"),
                choice(ACCOUNTS_APPROVE, ACCOUNTS, "Approve"),
                choice(ACCOUNTS_REJECT, ACCOUNTS, "Reject"),
            ],
            answers: vec![
                answer(ANSWER_1, ALICE, DIVIDEND, DIVIDEND_YES),
                answer(ANSWER_2, BRUNO, DIVIDEND, DIVIDEND_NO),
                answer(ANSWER_3, ALICE, ACCOUNTS, ACCOUNTS_APPROVE),
            ],
            users: vec![User {
                id: "410544b2-4001-4271-9855-fec4b6a6442b".to_string(),
                name: "User".to_string(),
                email: "user@nextmail.com".to_string(),
                password: "123456".to_string(),
            }],
            customers: vec![
                customer(EVIL_RABBIT, "Evil Rabbit", "evil@rabbit.com", "evil-rabbit"),
                customer(DELBA, "Delba de Oliveira", "delba@oliveira.com", "delba-de-oliveira"),
                customer(LEE, "Lee Robinson", "lee@robinson.com", "lee-robinson"),
                customer(MICHAEL, "Michael Novotny", "michael@novotny.com", "michael-novotny"),
            ],
            invoices: invoices
                .into_iter()
                .map(|(id, customer_id, amount, status, date)| {
                    invoice(id, customer_id, amount, status, date)
                })
                .collect(),
            revenue: revenue
                .into_iter()
                .map(|(month, revenue)| Revenue {
                    month: month.to_string(),
                    revenue,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn demo_references_are_consistent() {
        let data = Dataset::demo();
        let shareholders: HashSet<_> = data.shareholders.iter().map(|s| &s.id).collect();
        let questions: HashSet<_> = data.questions.iter().map(|q| &q.id).collect();
        let customers: HashSet<_> = data.customers.iter().map(|c| &c.id).collect();

        for choice in &data.choices {
            assert!(questions.contains(&choice.question_id), "{choice:?}");
        }
        for answer in &data.answers {
            assert!(shareholders.contains(&answer.sh_id), "{answer:?}");
            let choice = data
                .choices
                .iter()
                .find(|c| c.id == answer.choice_id)
                .expect("answer points at a missing choice");
            assert_eq!(choice.question_id, answer.question_id);
        }
        for invoice in &data.invoices {
            assert!(customers.contains(&invoice.customer_id), "{invoice:?}");
        }
    }

    #[test]
    fn demo_keys_are_unique() {
        let data = Dataset::demo();
        let emails: HashSet<_> = data.shareholders.iter().map(|s| &s.email).collect();
        assert_eq!(emails.len(), data.shareholders.len());

        let months: HashSet<_> = data.revenue.iter().map(|r| &r.month).collect();
        assert_eq!(months.len(), data.revenue.len());
        assert!(data.revenue.iter().all(|r| r.month.len() <= 4));

        let choices: HashSet<_> = data.choices.iter().map(|c| &c.id).collect();
        assert_eq!(choices.len(), data.choices.len());
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let data: Dataset = serde_json::from_str(
            r#"{"revenue": [{"month": "Jan", "revenue": 10}]}"#,
        )
        .unwrap();

        assert!(data.shareholders.is_empty());
        assert_eq!(data.revenue.len(), 1);
    }

    #[test]
    fn invoice_status_is_lowercase() {
        let json = serde_json::to_string(&InvoiceStatus::Paid).unwrap();
        assert_eq!(json, "\"paid\"");
    }
}
