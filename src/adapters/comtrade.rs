use crate::domain::model::TradeRecord;
use crate::domain::ports::{TradeQuery, TradeSource};
use crate::utils::error::SourceError;
use reqwest::Client;
use std::time::Duration;

pub const COMTRADE_PREVIEW: &str = "https://comtradeapi.un.org/public/v1/preview";

/// Customs procedure code the preview endpoint expects; fixed upstream.
const CUSTOMS_CODE: &str = "C00";

pub const DEFAULT_TIMEOUT_SECS: u64 = 25;

/// Remote Trade Source against the Comtrade preview endpoint. One bounded
/// attempt per call: no retry, no backoff, no rate-limit handling.
pub struct ComtradeClient {
    endpoint: String,
    client: Client,
}

impl ComtradeClient {
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
        }
    }
}

impl Default for ComtradeClient {
    fn default() -> Self {
        Self::new(COMTRADE_PREVIEW, DEFAULT_TIMEOUT_SECS)
    }
}

#[async_trait::async_trait]
impl TradeSource for ComtradeClient {
    async fn fetch(&self, query: &TradeQuery) -> Result<Vec<TradeRecord>, SourceError> {
        tracing::debug!(
            reporter = %query.reporter,
            period = %query.period,
            cmd_code = %query.cmd_code,
            "fetching from trade API"
        );

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("reporterCode", query.reporter.as_str()),
                ("period", query.period.as_str()),
                ("partnerCode", query.partner.as_str()),
                ("cmdCode", query.cmd_code.as_str()),
                ("flowCode", query.flow.code()),
                ("customsCode", CUSTOMS_CODE),
            ])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("trade API response status: {}", status);
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        let body: serde_json::Value = serde_json::from_str(&text)?;

        let data = body
            .get("data")
            .and_then(|d| d.as_array())
            .ok_or(SourceError::MissingData)?;

        Ok(data.iter().map(TradeRecord::from_api_value).collect())
    }
}
