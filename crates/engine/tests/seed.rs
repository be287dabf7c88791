use sea_orm::{
    ColumnTrait, ConnectionTrait, Database, DatabaseConnection, EntityTrait, QueryFilter,
    Statement,
};

use engine::{
    Dataset, Engine, EngineError, SeedOutcome, SeedStep, answers,
    dataset::{Answer, Choice, Question, Revenue, Shareholder, User},
    revenue, shareholders, verify_password,
};
use migration::MigratorTrait;

const TABLES: [&str; 8] = [
    "shareholders",
    "questions",
    "choices",
    "answers",
    "users",
    "customers",
    "invoices",
    "revenue",
];

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

async fn engine_with_migrated_db() -> (Engine, DatabaseConnection) {
    let (engine, db) = engine_with_db().await;
    migration::Migrator::up(&db, None).await.unwrap();
    (engine, db)
}

async fn count(db: &DatabaseConnection, sql: String, values: Vec<sea_orm::Value>) -> i64 {
    let backend = db.get_database_backend();
    db.query_one(Statement::from_sql_and_values(backend, sql, values))
        .await
        .unwrap()
        .unwrap()
        .try_get::<i64>("", "n")
        .unwrap()
}

async fn table_exists(db: &DatabaseConnection, table: &str) -> bool {
    count(
        db,
        "SELECT COUNT(*) AS n FROM sqlite_master WHERE type = 'table' AND name = ?".to_string(),
        vec![table.into()],
    )
    .await
        > 0
}

/// Rows in `table`, zero when the table does not exist.
async fn row_count(db: &DatabaseConnection, table: &str) -> i64 {
    if !table_exists(db, table).await {
        return 0;
    }
    count(db, format!("SELECT COUNT(*) AS n FROM {table}"), Vec::new()).await
}

fn ballot() -> Dataset {
    Dataset {
        shareholders: vec![Shareholder {
            id: "u1".to_string(),
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            password: "pw".to_string(),
        }],
        questions: vec![
            Question {
                id: "q1".to_string(),
                question: "Pick one".to_string(),
                is_active: 1,
            },
            Question {
                id: "q2".to_string(),
                question: "Closed already".to_string(),
                is_active: 0,
            },
        ],
        choices: vec![
            Choice {
                id: "c2".to_string(),
                question_id: "q1".to_string(),
                choice: "B".to_string(),
            },
            Choice {
                id: "c1".to_string(),
                question_id: "q1".to_string(),
                choice: "A".to_string(),
            },
            Choice {
                id: "c3".to_string(),
                question_id: "q2".to_string(),
                choice: "Yes".to_string(),
            },
        ],
        ..Dataset::default()
    }
}

fn committed(outcome: SeedOutcome) -> engine::SeedReport {
    match outcome {
        SeedOutcome::Committed(report) => report,
        SeedOutcome::RolledBack(failure) => panic!("seed rolled back: {failure}"),
    }
}

#[tokio::test]
async fn seed_demo_fills_every_table() {
    let (engine, db) = engine_with_db().await;
    let dataset = Dataset::demo();

    let report = committed(engine.seed(&dataset).await.unwrap());

    let order: Vec<SeedStep> = report.steps.iter().map(|s| s.step).collect();
    assert_eq!(order, SeedStep::ALL.to_vec());
    assert_eq!(row_count(&db, "shareholders").await, dataset.shareholders.len() as i64);
    assert_eq!(row_count(&db, "questions").await, dataset.questions.len() as i64);
    assert_eq!(row_count(&db, "choices").await, dataset.choices.len() as i64);
    assert_eq!(row_count(&db, "answers").await, dataset.answers.len() as i64);
    assert_eq!(row_count(&db, "users").await, dataset.users.len() as i64);
    assert_eq!(row_count(&db, "customers").await, dataset.customers.len() as i64);
    assert_eq!(row_count(&db, "invoices").await, dataset.invoices.len() as i64);
    assert_eq!(row_count(&db, "revenue").await, dataset.revenue.len() as i64);
    assert_eq!(report.skipped(), 0);
}

#[tokio::test]
async fn seeding_twice_skips_existing_rows() {
    let (engine, db) = engine_with_db().await;
    let dataset = Dataset::demo();

    let first = committed(engine.seed(&dataset).await.unwrap());
    let mut before = Vec::new();
    for table in TABLES {
        before.push(row_count(&db, table).await);
    }

    let second = committed(engine.seed(&dataset).await.unwrap());
    let mut after = Vec::new();
    for table in TABLES {
        after.push(row_count(&db, table).await);
    }

    assert_eq!(before, after);
    assert_eq!(second.inserted(), 0);
    assert_eq!(second.skipped(), first.inserted());
}

#[tokio::test]
async fn seeded_answer_keeps_its_columns() {
    let (engine, db) = engine_with_db().await;
    let dataset = Dataset {
        answers: vec![Answer {
            id: "a1".to_string(),
            sh_id: "u1".to_string(),
            question_id: "q1".to_string(),
            choice_id: "c2".to_string(),
        }],
        ..ballot()
    };

    committed(engine.seed(&dataset).await.unwrap());

    let stored = answers::Entity::find_by_id("a1".to_string())
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.sh_id, "u1");
    assert_eq!(stored.question_id, "q1");
    assert_eq!(stored.choice_id, "c2");
}

#[tokio::test]
async fn only_is_active_one_counts_as_open() {
    let (engine, _db) = engine_with_db().await;
    let mut dataset = ballot();
    dataset.questions[1].is_active = 2;
    committed(engine.seed(&dataset).await.unwrap());

    let open: Vec<String> = engine
        .active_questions()
        .await
        .unwrap()
        .into_iter()
        .map(|q| q.id)
        .collect();

    assert_eq!(open, vec!["q1".to_string()]);
    assert!(!engine.question("q2").await.unwrap().is_active);
    assert_eq!(
        engine.record_answer("u1", "q2", "Yes").await.unwrap_err(),
        EngineError::ClosedQuestion("q2".to_string())
    );
}

#[tokio::test]
async fn shareholder_password_is_stored_hashed() {
    let (engine, db) = engine_with_db().await;

    committed(engine.seed(&ballot()).await.unwrap());

    let stored = shareholders::Entity::find()
        .filter(shareholders::Column::Email.eq("a@x.com"))
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.id, "u1");
    assert_ne!(stored.password, "pw");
    assert!(verify_password("pw", &stored.password).unwrap());
}

#[tokio::test]
async fn revenue_keeps_first_value() {
    let (engine, db) = engine_with_db().await;
    let month = |revenue| Dataset {
        revenue: vec![Revenue {
            month: "Jan".to_string(),
            revenue,
        }],
        ..Dataset::default()
    };

    committed(engine.seed(&month(100)).await.unwrap());
    let report = committed(engine.seed(&month(999)).await.unwrap());

    let rows = revenue::Entity::find().all(&db).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].revenue, 100);
    assert_eq!(report.step(SeedStep::Revenue).unwrap().skipped, 1);
}

#[tokio::test]
async fn failing_insert_rolls_back_every_table() {
    let (engine, db) = engine_with_migrated_db().await;
    let mut dataset = Dataset::demo();
    let taken = dataset.users[0].email.clone();
    dataset.users.push(User {
        id: "duplicate-user".to_string(),
        name: "Copy".to_string(),
        email: taken,
        password: "123456".to_string(),
    });

    let outcome = engine.seed(&dataset).await.unwrap();

    let SeedOutcome::RolledBack(failure) = outcome else {
        panic!("expected a rollback");
    };
    assert_eq!(failure.step, SeedStep::Users);
    assert!(matches!(failure.cause, EngineError::Database(_)));
    for table in TABLES {
        assert_eq!(row_count(&db, table).await, 0, "{table} kept rows");
    }
}

#[tokio::test]
async fn failure_in_fourth_step_leaves_no_rows() {
    let (engine, db) = engine_with_db().await;
    db.execute_unprepared("CREATE TABLE answers (id TEXT PRIMARY KEY)")
        .await
        .unwrap();

    let outcome = engine.seed(&Dataset::demo()).await.unwrap();

    let SeedOutcome::RolledBack(failure) = outcome else {
        panic!("expected a rollback");
    };
    assert_eq!(failure.step, SeedStep::Answers);
    assert!(failure.to_string().starts_with("seeding answers failed"));
    for table in TABLES {
        assert_eq!(row_count(&db, table).await, 0, "{table} kept rows");
    }
    assert!(!table_exists(&db, "shareholders").await);
    assert!(!table_exists(&db, "choices").await);
}

#[tokio::test]
async fn question_lists_choices_by_id() {
    let (engine, _db) = engine_with_db().await;
    committed(engine.seed(&ballot()).await.unwrap());

    let question = engine.question("q1").await.unwrap();

    assert_eq!(question.question, "Pick one");
    assert_eq!(question.choices_array, vec!["A".to_string(), "B".to_string()]);
    assert_eq!(
        engine.question("missing").await.unwrap_err(),
        EngineError::KeyNotFound("missing".to_string())
    );
}

#[tokio::test]
async fn active_questions_skip_closed_ones() {
    let (engine, _db) = engine_with_db().await;
    committed(engine.seed(&ballot()).await.unwrap());

    let questions = engine.active_questions().await.unwrap();

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].id, "q1");
    assert_eq!(questions[0].choices_array.len(), 2);
}

#[tokio::test]
async fn record_answer_stores_choice_id() {
    let (engine, db) = engine_with_db().await;
    committed(engine.seed(&ballot()).await.unwrap());

    let first = engine.record_answer("u1", "q1", "B").await.unwrap();
    let second = engine.record_answer("u1", "q1", "A").await.unwrap();

    let stored = answers::Entity::find_by_id(first.clone())
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.sh_id, "u1");
    assert_eq!(stored.question_id, "q1");
    assert_eq!(stored.choice_id, "c2");
    assert_ne!(first, second);
    assert_eq!(row_count(&db, "answers").await, 2);
}

#[tokio::test]
async fn record_answer_rejects_bad_input() {
    let (engine, _db) = engine_with_db().await;
    committed(engine.seed(&ballot()).await.unwrap());

    assert_eq!(
        engine.record_answer("nobody", "q1", "A").await.unwrap_err(),
        EngineError::KeyNotFound("nobody".to_string())
    );
    assert_eq!(
        engine.record_answer("u1", "q9", "A").await.unwrap_err(),
        EngineError::KeyNotFound("q9".to_string())
    );
    assert_eq!(
        engine.record_answer("u1", "q2", "Yes").await.unwrap_err(),
        EngineError::ClosedQuestion("q2".to_string())
    );
    assert!(matches!(
        engine.record_answer("u1", "q1", "Yes").await,
        Err(EngineError::InvalidAnswer(_))
    ));
}
