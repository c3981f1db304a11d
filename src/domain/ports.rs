use crate::domain::model::{FirmRecord, Flow, TradeRecord};
use crate::utils::error::SourceError;
use async_trait::async_trait;

/// Parameters of one remote lookup, already resolved to wire values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeQuery {
    pub reporter: String,
    pub period: String,
    pub cmd_code: String,
    pub flow: Flow,
    pub partner: String,
}

impl TradeQuery {
    pub fn all_partners(reporter: &str, period: &str, cmd_code: &str, flow: Flow) -> Self {
        Self {
            reporter: reporter.to_string(),
            period: period.to_string(),
            cmd_code: cmd_code.to_string(),
            flow,
            partner: "all".to_string(),
        }
    }
}

#[async_trait]
pub trait TradeSource: Send + Sync {
    /// Single attempt, bounded timeout, no retry. Failure kinds are explicit;
    /// the caller decides whether to fall back or surface them.
    async fn fetch(&self, query: &TradeQuery) -> Result<Vec<TradeRecord>, SourceError>;
}

pub trait FirmSource: Send + Sync {
    /// Empty query returns the whole table; otherwise a case-insensitive
    /// substring match on firm name or partner description.
    fn search(&self, query: &str) -> Vec<FirmRecord>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn timeout_secs(&self) -> u64;
    fn firms_path(&self) -> &str;
    fn favorites_path(&self) -> &str;
}
