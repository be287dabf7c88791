use std::{error::Error, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use engine::{Dataset, Engine, SeedOutcome};
use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection};

#[derive(Parser, Debug)]
#[command(name = "shareholder_vote_admin")]
#[command(about = "Admin utilities for the shareholder vote (seed data)")]
struct Cli {
    /// Database connection string (also read from `DATABASE_URL`).
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite:./voting.db?mode=rwc"
    )]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a dataset into the database, all rows or none.
    Seed(SeedArgs),
    /// Print the demo dataset as JSON.
    Dataset,
}

#[derive(Args, Debug)]
struct SeedArgs {
    /// JSON dataset to seed instead of the demo one.
    #[arg(long)]
    dataset: Option<PathBuf>,
}

fn load_dataset(path: Option<&PathBuf>) -> Result<Dataset, Box<dyn Error + Send + Sync>> {
    match path {
        Some(path) => Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?),
        None => Ok(Dataset::demo()),
    }
}

async fn connect_db(
    database_url: &str,
) -> Result<DatabaseConnection, Box<dyn Error + Send + Sync>> {
    let db = Database::connect(database_url).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Seed(args) => {
            let dataset = load_dataset(args.dataset.as_ref())?;
            let db = connect_db(&cli.database_url).await?;
            let engine = Engine::builder().database(db).build().await?;

            match engine.seed(&dataset).await? {
                SeedOutcome::Committed(report) => {
                    for step in &report.steps {
                        println!(
                            "{:<14}{:>4} inserted{:>4} skipped",
                            step.step, step.inserted, step.skipped
                        );
                    }
                    println!("Database seeded successfully");
                }
                SeedOutcome::RolledBack(failure) => {
                    eprintln!("{failure}");
                    std::process::exit(1);
                }
            }
        }
        Command::Dataset => {
            println!("{}", serde_json::to_string_pretty(&Dataset::demo())?);
        }
    }

    Ok(())
}
