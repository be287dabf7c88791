use sea_orm::Database;
use sea_orm_migration::prelude::*;

const USAGE: &str = "\
Creates or drops the voting tables (shareholders, questions, choices, answers,
users, customers, invoices, revenue).

Usage: migration [COMMAND]

Commands:
  up      create the missing tables (default)
  down    drop every table
  fresh   drop every table, then create them again
  status  list applied migrations
  help    print this message

Environment:
  DATABASE_URL  database to migrate [default: sqlite:./voting.db?mode=rwc]";

const DEFAULT_DATABASE_URL: &str = "sqlite:./voting.db?mode=rwc";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut args = std::env::args().skip(1);
    let cmd = args.next().unwrap_or_else(|| "up".to_string());
    if matches!(cmd.as_str(), "help" | "-h" | "--help") {
        println!("{USAGE}");
        return Ok(());
    }

    let db_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    let db = Database::connect(&db_url).await?;

    match cmd.as_str() {
        "up" => migration::Migrator::up(&db, None).await?,
        "down" => migration::Migrator::down(&db, None).await?,
        "fresh" => migration::Migrator::fresh(&db).await?,
        "status" => {
            migration::Migrator::status(&db).await?;
        }
        other => {
            eprintln!("unknown command: {other}\n\n{USAGE}");
            std::process::exit(2);
        }
    }

    Ok(())
}
