use crate::domain::model::TradeRecord;

/// Bundled Serbia citrus dataset, the fallback for commodity queries when the
/// live source yields nothing. Compiled into the binary so the dashboard can
/// always render something tabular.
pub fn bundled_trade_rows() -> Vec<TradeRecord> {
    let data = include_str!("../../data/sample_serbia_citrus.csv");
    let mut reader = csv::Reader::from_reader(data.as_bytes());
    reader
        .deserialize()
        .collect::<Result<_, _>>()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_rows_parse() {
        let rows = bundled_trade_rows();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].partner_desc, "Türkiye");
        assert_eq!(rows[0].cmd_code, "0805");
        assert_eq!(rows[0].primary_value, 18423650.0);
    }

    #[test]
    fn blank_value_is_nan_not_dropped() {
        let rows = bundled_trade_rows();
        let nes = rows.iter().find(|r| r.partner_desc == "Areas nes").unwrap();
        assert!(nes.primary_value.is_nan());
        assert_eq!(nes.net_wgt, 120500.0);
    }
}
