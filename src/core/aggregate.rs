use crate::domain::model::{ResultSet, Rows};
use std::collections::HashMap;

/// Total value per partner (or firm) group, sorted by value descending.
#[derive(Debug, Clone, PartialEq)]
pub struct PartnerTotal {
    pub partner: String,
    /// Sum of the group's values, skipping NaN entries.
    pub total: f64,
    /// Row count of the group, NaN rows included.
    pub records: usize,
}

/// Groups a result set by partner description (trade rows) or firm name
/// (firm rows) and sums the monetary value of each group. NaN values count
/// toward `records` but contribute nothing to `total`.
pub fn partner_totals(result: &ResultSet) -> Vec<PartnerTotal> {
    let pairs: Vec<(&str, f64)> = match &result.rows {
        Rows::Trade(rows) => rows
            .iter()
            .map(|r| (r.partner_desc.as_str(), r.primary_value))
            .collect(),
        Rows::Firms(rows) => rows
            .iter()
            .map(|r| (r.firm_name.as_str(), r.value_usd))
            .collect(),
    };

    let mut groups: HashMap<&str, (f64, usize)> = HashMap::new();
    for (key, value) in pairs {
        let entry = groups.entry(key).or_insert((0.0, 0));
        if !value.is_nan() {
            entry.0 += value;
        }
        entry.1 += 1;
    }

    let mut totals: Vec<PartnerTotal> = groups
        .into_iter()
        .map(|(partner, (total, records))| PartnerTotal {
            partner: partner.to_string(),
            total,
            records,
        })
        .collect();
    totals.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(std::cmp::Ordering::Equal));
    totals
}
