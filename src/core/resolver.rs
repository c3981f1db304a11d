use crate::domain::countries;
use crate::domain::model::{QueryKind, QueryRequest, ResultSet, Session, TradeRecord};
use crate::domain::ports::{FirmSource, TradeQuery, TradeSource};
use crate::utils::error::{Result, TradeError};
use crate::utils::validation::Validate;

/// Reporter used when a commodity query asks for "all countries". The preview
/// endpoint needs one concrete reporter, so the directory's reference entry
/// stands in.
pub const FALLBACK_REPORTER: &str = countries::DEFAULT_REPORTER;

/// The query-resolution and fallback pipeline. Decides which source answers a
/// request and tags the result with its provenance. Stateless across calls:
/// identical requests repeat identical work.
pub struct QueryResolver<T: TradeSource, F: FirmSource> {
    trade: T,
    firms: F,
    sample_rows: Vec<TradeRecord>,
}

impl<T: TradeSource, F: FirmSource> QueryResolver<T, F> {
    pub fn new(trade: T, firms: F, sample_rows: Vec<TradeRecord>) -> Self {
        Self {
            trade,
            firms,
            sample_rows,
        }
    }

    /// Produces exactly one ResultSet per request.
    ///
    /// Commodity queries try the live source (when enabled) and otherwise
    /// degrade to the bundled sample, so they always yield rows. Firm queries
    /// search the local catalog and may yield a well-formed empty result.
    /// Source failures never propagate past this point; only validation and
    /// auth errors do.
    pub async fn resolve(&self, session: &Session, request: &QueryRequest) -> Result<ResultSet> {
        if !session.is_authenticated() {
            return Err(TradeError::Unauthorized);
        }
        request.validate()?;

        match &request.query {
            QueryKind::Commodity(code) => self.resolve_commodity(request, code).await,
            QueryKind::Firm(name) => Ok(self.resolve_firm(request, name)),
        }
    }

    async fn resolve_commodity(&self, request: &QueryRequest, code: &str) -> Result<ResultSet> {
        if request.use_live {
            let reporter = match &request.country {
                Some(name) => countries::resolve(name),
                None => FALLBACK_REPORTER,
            };
            let query = TradeQuery::all_partners(
                reporter,
                &request.year.to_string(),
                code,
                request.flow,
            );

            match self.trade.fetch(&query).await {
                Ok(rows) if !rows.is_empty() => {
                    tracing::debug!("live source answered with {} rows", rows.len());
                    return Ok(ResultSet::live_trade(rows));
                }
                Ok(_) => {
                    tracing::warn!("live source returned no rows, using sample data");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "live source unavailable, using sample data");
                }
            }
        }

        Ok(ResultSet::sample_trade(self.sample_rows.clone()))
    }

    fn resolve_firm(&self, request: &QueryRequest, name: &str) -> ResultSet {
        let mut rows = self.firms.search(name);
        if let Some(country) = &request.country {
            rows.retain(|r| r.country == *country);
        }
        if rows.is_empty() {
            tracing::warn!("no firm matched '{}'", name);
        }
        ResultSet::firms(rows)
    }
}
