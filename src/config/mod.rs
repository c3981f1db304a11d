pub mod credentials;

use crate::adapters::comtrade::{COMTRADE_PREVIEW, DEFAULT_TIMEOUT_SECS};
use crate::core::ConfigProvider;
use crate::domain::model::{Flow, QueryKind, QueryRequest};
use crate::utils::error::{Result, TradeError};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "trade-desk")]
#[command(about = "Trade statistics queries with sample-data fallback")]
pub struct CliConfig {
    #[arg(long, default_value = COMTRADE_PREVIEW)]
    pub api_endpoint: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    #[arg(long, default_value = "./data/sample_firms.csv")]
    pub firms_path: String,

    #[arg(long, default_value = "./favorites.json")]
    pub favorites_path: String,

    #[arg(long, help = "TOML secrets file with AUTH_USER / AUTH_PWD")]
    pub secrets_path: Option<String>,

    #[arg(long, help = "Login user (defaults to the configured one)")]
    pub user: Option<String>,

    #[arg(long, help = "Login password (defaults to the configured one)")]
    pub password: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run one query and print the result table and partner totals
    Query(QueryArgs),
    /// Saved queries
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
    /// List the supported reporter countries
    Countries,
}

#[derive(Debug, Subcommand)]
pub enum FavoritesAction {
    List,
    Clear,
}

#[derive(Debug, Args)]
pub struct QueryArgs {
    #[arg(long, help = "Target country; omit for all countries")]
    pub country: Option<String>,

    #[arg(long, default_value_t = 2023)]
    pub year: u16,

    #[arg(long, default_value = "import")]
    pub flow: Flow,

    #[arg(long, conflicts_with = "firm", help = "Commodity (HS) code, e.g. 0805")]
    pub hs: Option<String>,

    #[arg(long, help = "Firm name substring")]
    pub firm: Option<String>,

    #[arg(long, help = "Skip the live API, use bundled sample data")]
    pub offline: bool,

    #[arg(long, help = "Write the result as CSV into this directory")]
    pub export_dir: Option<String>,

    #[arg(long, value_name = "LABEL", help = "Save this query as a favorite")]
    pub save: Option<String>,
}

impl QueryArgs {
    /// Exactly one of --hs / --firm; clap rejects both, this rejects neither.
    pub fn to_request(&self) -> Result<QueryRequest> {
        let query = match (&self.hs, &self.firm) {
            (Some(code), None) => QueryKind::Commodity(code.clone()),
            (None, Some(name)) => QueryKind::Firm(name.clone()),
            _ => {
                return Err(TradeError::MissingFieldError {
                    field: "--hs or --firm".to_string(),
                })
            }
        };
        Ok(QueryRequest {
            country: self.country.clone(),
            year: self.year,
            flow: self.flow,
            query,
            use_live: !self.offline,
        })
    }
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    fn firms_path(&self) -> &str {
        &self.firms_path
    }

    fn favorites_path(&self) -> &str {
        &self.favorites_path
    }
}
