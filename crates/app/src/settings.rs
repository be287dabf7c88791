//! Handles settings for the application. Configuration is read from an
//! optional `settings.toml` and from `VOTING_*` environment variables, e.g.
//! `VOTING_SERVER__PORT=8080`.
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(String),
    Postgres(String),
}

impl Database {
    pub fn url(&self) -> String {
        match self {
            Database::Memory => String::from("sqlite::memory:"),
            Database::Sqlite(path) => format!("sqlite:{path}?mode=rwc"),
            Database::Postgres(url) => url.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: String,
    pub port: u16,
    pub database: Database,
}

#[derive(Debug, Deserialize)]
pub struct Seed {
    /// JSON dataset written by `GET /seed`; the demo dataset when unset.
    pub dataset: Option<String>,
    pub on_start: bool,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    pub seed: Seed,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::build(Config::builder().add_source(File::with_name("settings").required(false)))
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        builder
            .set_default("app.level", "info")?
            .set_default("server.bind", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.database", "memory")?
            .set_default("seed.on_start", false)?
            .add_source(
                Environment::with_prefix("VOTING")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    #[cfg(test)]
    fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Self::build(Config::builder().add_source(File::from_str(raw, FileFormat::Toml)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let settings = Settings::from_toml("").unwrap();

        assert_eq!(settings.app.level, "info");
        assert_eq!(settings.server.bind, "127.0.0.1");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.server.database, Database::Memory);
        assert_eq!(settings.seed.dataset, None);
        assert!(!settings.seed.on_start);
    }

    #[test]
    fn sqlite_database_is_a_table() {
        let settings = Settings::from_toml(
            r#"
            [server]
            port = 8080
            database = { sqlite = "voting.db" }

            [seed]
            dataset = "demo.json"
            on_start = true
            "#,
        )
        .unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(
            settings.server.database,
            Database::Sqlite("voting.db".to_string())
        );
        assert_eq!(settings.seed.dataset.as_deref(), Some("demo.json"));
        assert!(settings.seed.on_start);
    }

    #[test]
    fn database_urls() {
        assert_eq!(Database::Memory.url(), "sqlite::memory:");
        assert_eq!(
            Database::Sqlite("voting.db".to_string()).url(),
            "sqlite:voting.db?mode=rwc"
        );
        assert_eq!(
            Database::Postgres("postgres://localhost/voting".to_string()).url(),
            "postgres://localhost/voting"
        );
    }
}
