//! Handles settings for the application.
//!
//! Values are layered: built-in defaults, then an optional TOML file
//! (`settings.toml` unless `--config` says otherwise), then environment
//! variables such as `POCKETBOOK__SERVER__PORT=8080`.
use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use engine::{Addressing, RecordPolicy};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "settings";
const ENV_PREFIX: &str = "POCKETBOOK";

#[derive(Debug, Parser)]
#[command(name = "pocketbook", version)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long, env = "POCKETBOOK_CONFIG")]
    config: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
    /// Prefix for every resource route, e.g. `/api`.
    pub base_path: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Store {
    pub addressing: Addressing,
    pub transactions: RecordPolicy,
    pub categories: RecordPolicy,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    #[serde(default)]
    pub store: Store,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let args = Args::parse();
        Self::from_file(args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH))
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        Self::load(path, environment())
    }

    fn load(path: &str, environment: Environment) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("app.level", "info")?
            .set_default("server.port", 3000)?
            .set_default("server.base_path", "")?
            .add_source(File::with_name(path).required(false))
            .add_source(environment)
            .build()?;

        settings.try_deserialize()
    }
}

/// `POCKETBOOK__SECTION__KEY` variables; required field lists are
/// comma separated.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("store.transactions.required_fields")
        .with_list_parse_key("store.categories.required_fields")
}
