use tabled::{Table, Tabled, settings::Style};

use crate::format::format_price;
use crate::record::Record;

#[derive(Tabled)]
struct ListingRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Brand")]
    brand: String,
    #[tabled(rename = "Price")]
    price: String,
}

/// Render the full record set as a table, prices thousands-grouped.
pub fn catalog_table(records: &[Record]) -> String {
    let rows: Vec<ListingRow> = records
        .iter()
        .map(|r| ListingRow {
            id: r.id,
            brand: r.brand.clone(),
            price: format_price(&r.price),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Value")]
    value: String,
}

pub fn stats_table(stats: &[(&str, String)]) -> String {
    let rows: Vec<StatRow> = stats
        .iter()
        .map(|(metric, value)| StatRow {
            metric: (*metric).to_string(),
            value: value.clone(),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_table_formats_prices() {
        let records = vec![Record {
            id: 1,
            brand: "Honda".to_string(),
            price: "25000".to_string(),
        }];

        let rendered = catalog_table(&records);
        assert!(rendered.contains("Honda"));
        assert!(rendered.contains("25 000"));
        assert!(!rendered.contains("25000"));
    }
}
