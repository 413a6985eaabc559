//! Subcommands and the options they share

pub mod fetch;
pub mod history;
pub mod session;
pub mod show;

use brewlog_engine::config::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use brewlog_engine::{FetchConfig, HttpBeerSource};
use brewlog_store::HistoryStore;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// SQLite file holding the fetch history
    #[arg(long, global = true, env = "BREWLOG_DB", default_value = ".brewlog/beers.db")]
    pub db: PathBuf,

    /// Endpoint returning one random beer as JSON
    #[arg(long, global = true, env = "BREWLOG_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Request timeout in seconds
    #[arg(
        long,
        global = true,
        env = "BREWLOG_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    pub timeout_secs: u64,

    #[arg(
        long,
        global = true,
        env = "BREWLOG_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Pretty
    )]
    pub log_format: LogFormat,
}

impl GlobalArgs {
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig::default()
            .with_endpoint(self.endpoint.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }

    pub fn http_source(&self) -> Result<HttpBeerSource, Box<dyn std::error::Error>> {
        Ok(HttpBeerSource::new(&self.fetch_config())?)
    }

    /// Open the store; history is optional for screens that can live without it
    pub fn open_store_optional(&self) -> Option<HistoryStore> {
        match HistoryStore::open(&self.db) {
            Ok(store) => Some(store),
            Err(e) => {
                eprintln!("History unavailable: {}", e);
                None
            }
        }
    }
}
