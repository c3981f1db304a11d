use crate::domain::model::{ResultSet, Rows};
use crate::utils::error::Result;

/// Serializes a result set to CSV (UTF-8, header row). The header is written
/// explicitly so even a zero-row result carries its fixed column schema.
pub fn to_csv(result: &ResultSet) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(vec![]);

    writer.write_record(result.headers())?;
    match &result.rows {
        Rows::Trade(rows) => {
            for row in rows {
                writer.serialize(row)?;
            }
        }
        Rows::Firms(rows) => {
            for row in rows {
                writer.serialize(row)?;
            }
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Download filename encoding country and year, `all` when no country filter.
pub fn filename(country: Option<&str>, year: u16) -> String {
    format!("trade_{}_{}.csv", country.unwrap_or("all"), year)
}
