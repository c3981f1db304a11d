use crate::domain::model::FirmRecord;
use crate::domain::ports::FirmSource;
use crate::utils::error::Result;
use std::path::Path;

/// Local Firm Catalog: an in-memory table of demo firm rows loaded once at
/// startup. Read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct FirmCatalog {
    rows: Vec<FirmRecord>,
}

impl FirmCatalog {
    /// Absent file means an empty catalog, not an error.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!("firm file {} not found, catalog is empty", path.display());
            return Ok(Self::default());
        }
        let mut reader = csv::Reader::from_path(path)?;
        let rows = reader.deserialize().collect::<std::result::Result<_, _>>()?;
        Ok(Self { rows })
    }

    /// The demo dataset compiled into the binary.
    pub fn bundled() -> Self {
        let data = include_str!("../../data/sample_firms.csv");
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let rows = reader
            .deserialize()
            .collect::<std::result::Result<_, _>>()
            .unwrap_or_default();
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FirmSource for FirmCatalog {
    fn search(&self, query: &str) -> Vec<FirmRecord> {
        if query.is_empty() {
            return self.rows.clone();
        }
        let needle = query.to_lowercase();
        self.rows
            .iter()
            .filter(|r| {
                r.firm_name.to_lowercase().contains(&needle)
                    || r.partner_desc.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn bundled_catalog_is_non_empty() {
        let catalog = FirmCatalog::bundled();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn absent_file_yields_empty_catalog() {
        let catalog = FirmCatalog::from_path("/nonexistent/firms.csv").unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.search("anything").is_empty());
    }

    #[test]
    fn empty_query_returns_whole_table() {
        let catalog = FirmCatalog::bundled();
        assert_eq!(catalog.search("").len(), catalog.len());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let catalog = FirmCatalog::bundled();
        let hits = catalog.search("mpm fruit");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].firm_name, "MPM Fruit DOO");
    }

    #[test]
    fn search_also_matches_partner_description() {
        let catalog = FirmCatalog::bundled();
        let hits = catalog.search("romanya");
        assert!(hits.len() >= 2);
        assert!(hits.iter().all(|r| r
            .partner_desc
            .to_lowercase()
            .contains("romanya")));
    }

    #[test]
    fn missing_partner_desc_is_treated_as_empty_string() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "firm_name,country,partnerDesc,product,value_usd,weight_kg").unwrap();
        writeln!(file, "Solo Trade,Moldova,,Wine,100.0,50.0").unwrap();
        file.flush().unwrap();

        let catalog = FirmCatalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        // A partner search cannot match the empty string, a name search can.
        assert!(catalog.search("wine-partner").is_empty());
        assert_eq!(catalog.search("solo").len(), 1);
    }
}
