use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub const MIN_YEAR: u16 = 2018;
pub const MAX_YEAR: u16 = 2025;

/// Direction of a trade flow, encoded as "M"/"X" on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flow {
    Import,
    Export,
}

impl Flow {
    pub fn code(&self) -> &'static str {
        match self {
            Flow::Import => "M",
            Flow::Export => "X",
        }
    }
}

impl std::str::FromStr for Flow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "import" | "m" => Ok(Flow::Import),
            "export" | "x" => Ok(Flow::Export),
            other => Err(format!("unknown flow '{}', expected import or export", other)),
        }
    }
}

impl std::fmt::Display for Flow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Flow::Import => write!(f, "import"),
            Flow::Export => write!(f, "export"),
        }
    }
}

/// What the user is asking for. The variant carries the query text, so a
/// request can never hold both a commodity code and a firm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryKind {
    Commodity(String),
    Firm(String),
}

impl QueryKind {
    pub fn text(&self) -> &str {
        match self {
            QueryKind::Commodity(s) | QueryKind::Firm(s) => s,
        }
    }
}

/// One user request. `country: None` means "all countries".
#[derive(Debug, Clone)]
pub struct QueryRequest {
    pub country: Option<String>,
    pub year: u16,
    pub flow: Flow,
    pub query: QueryKind,
    pub use_live: bool,
}

impl QueryRequest {
    pub fn to_favorite(&self, label: &str) -> FavoriteEntry {
        FavoriteEntry {
            label: label.to_string(),
            country: self.country.clone().unwrap_or_else(|| "all".to_string()),
            year: self.year,
            query: self.query.text().to_string(),
            kind: match self.query {
                QueryKind::Commodity(_) => FavoriteKind::Hs,
                QueryKind::Firm(_) => FavoriteKind::Firm,
            },
            saved_at: Utc::now(),
        }
    }
}

/// Explicit login state, passed into the resolver instead of living in a
/// global flag. Built by the credential layer, consumed read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Authenticated { user: String },
    Anonymous,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }
}

/// One reported trade flow for one partner/commodity/period combination.
/// Field names mirror the Comtrade schema so CSV export round-trips the
/// upstream column names. Never mutated after creation, only aggregated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeRecord {
    #[serde(rename = "partnerDesc")]
    pub partner_desc: String,
    #[serde(rename = "cmdCode")]
    pub cmd_code: String,
    #[serde(rename = "cmdDesc")]
    pub cmd_desc: String,
    #[serde(rename = "flowDesc")]
    pub flow_desc: String,
    #[serde(rename = "primaryValue", deserialize_with = "de_coerced_f64")]
    pub primary_value: f64,
    #[serde(rename = "netWgt", deserialize_with = "de_coerced_f64")]
    pub net_wgt: f64,
    #[serde(rename = "qtyUnit", default)]
    pub qty_unit: String,
}

impl TradeRecord {
    /// Builds a record from one element of the API's "data" array. Absent or
    /// unparseable numbers become NaN, never an error; the row is kept.
    pub fn from_api_value(v: &serde_json::Value) -> Self {
        Self {
            partner_desc: str_field(v, "partnerDesc"),
            cmd_code: str_field(v, "cmdCode"),
            cmd_desc: str_field(v, "cmdDesc"),
            flow_desc: str_field(v, "flowDesc"),
            primary_value: coerce_number(v.get("primaryValue")),
            net_wgt: coerce_number(v.get("netWgt")),
            qty_unit: str_field(v, "qtyUnit"),
        }
    }
}

/// Demo firm row, read-only at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirmRecord {
    pub firm_name: String,
    pub country: String,
    #[serde(rename = "partnerDesc", default)]
    pub partner_desc: String,
    pub product: String,
    #[serde(deserialize_with = "de_coerced_f64")]
    pub value_usd: f64,
    #[serde(deserialize_with = "de_coerced_f64")]
    pub weight_kg: f64,
}

/// Where a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provenance {
    Live,
    Sample,
    Empty,
}

#[derive(Debug, Clone)]
pub enum Rows {
    Trade(Vec<TradeRecord>),
    Firms(Vec<FirmRecord>),
}

/// One normalized answer to one query. Created fresh per request, handed to
/// rendering/export, then discarded; never persisted or cached.
#[derive(Debug, Clone)]
pub struct ResultSet {
    pub rows: Rows,
    pub provenance: Provenance,
}

impl ResultSet {
    pub fn live_trade(rows: Vec<TradeRecord>) -> Self {
        Self {
            rows: Rows::Trade(rows),
            provenance: Provenance::Live,
        }
    }

    pub fn sample_trade(rows: Vec<TradeRecord>) -> Self {
        Self {
            rows: Rows::Trade(rows),
            provenance: Provenance::Sample,
        }
    }

    /// Firm results come from the demo catalog: Sample when non-empty,
    /// Empty (zero rows, fixed schema) otherwise.
    pub fn firms(rows: Vec<FirmRecord>) -> Self {
        let provenance = if rows.is_empty() {
            Provenance::Empty
        } else {
            Provenance::Sample
        };
        Self {
            rows: Rows::Firms(rows),
            provenance,
        }
    }

    pub fn len(&self) -> usize {
        match &self.rows {
            Rows::Trade(r) => r.len(),
            Rows::Firms(r) => r.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Column schema is fixed by the row variant, even for zero rows.
    pub fn headers(&self) -> &'static [&'static str] {
        match &self.rows {
            Rows::Trade(_) => &[
                "partnerDesc",
                "cmdCode",
                "cmdDesc",
                "flowDesc",
                "primaryValue",
                "netWgt",
                "qtyUnit",
            ],
            Rows::Firms(_) => &[
                "firm_name",
                "country",
                "partnerDesc",
                "product",
                "value_usd",
                "weight_kg",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FavoriteKind {
    #[serde(rename = "HS")]
    Hs,
    #[serde(rename = "FIRM")]
    Firm,
}

/// One saved query. Lives in the favorites file until an explicit clear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub label: String,
    pub country: String,
    pub year: u16,
    pub query: String,
    #[serde(rename = "type")]
    pub kind: FavoriteKind,
    #[serde(default = "Utc::now")]
    pub saved_at: DateTime<Utc>,
}

fn str_field(v: &serde_json::Value, key: &str) -> String {
    match v.get(key) {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Numeric coercion in the upstream's spirit: numbers pass through, numeric
/// strings are parsed, everything else is NaN.
pub(crate) fn coerce_number(v: Option<&serde_json::Value>) -> f64 {
    match v {
        Some(serde_json::Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(serde_json::Value::String(s)) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

fn de_coerced_f64<'de, D>(de: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(de)?;
    Ok(raw
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
        .unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_number_parses_numeric_strings() {
        assert_eq!(coerce_number(Some(&serde_json::json!("123.4"))), 123.4);
        assert_eq!(coerce_number(Some(&serde_json::json!(42))), 42.0);
    }

    #[test]
    fn coerce_number_invalid_becomes_nan() {
        assert!(coerce_number(Some(&serde_json::json!("abc"))).is_nan());
        assert!(coerce_number(Some(&serde_json::Value::Null)).is_nan());
        assert!(coerce_number(None).is_nan());
    }

    #[test]
    fn trade_record_from_api_value_keeps_unparseable_rows() {
        let v = serde_json::json!({
            "partnerDesc": "Greece",
            "cmdCode": "0805",
            "primaryValue": "abc"
        });
        let rec = TradeRecord::from_api_value(&v);
        assert_eq!(rec.partner_desc, "Greece");
        assert!(rec.primary_value.is_nan());
        assert!(rec.net_wgt.is_nan());
    }

    #[test]
    fn empty_firm_result_has_fixed_schema() {
        let rs = ResultSet::firms(vec![]);
        assert_eq!(rs.provenance, Provenance::Empty);
        assert_eq!(rs.len(), 0);
        assert_eq!(rs.headers()[0], "firm_name");
    }

    #[test]
    fn favorite_entry_survives_missing_saved_at() {
        let json = r#"{"label":"A","country":"Sırbistan","year":2023,"query":"0805","type":"HS"}"#;
        let fav: FavoriteEntry = serde_json::from_str(json).unwrap();
        assert_eq!(fav.kind, FavoriteKind::Hs);
    }

    #[test]
    fn flow_codes() {
        assert_eq!(Flow::Import.code(), "M");
        assert_eq!(Flow::Export.code(), "X");
        assert_eq!("export".parse::<Flow>().unwrap(), Flow::Export);
        assert!("sideways".parse::<Flow>().is_err());
    }
}
