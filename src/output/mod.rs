pub mod args;
pub mod errors;

use serde::Serialize;

use crate::commands::{IntegrationStats, PriceTable};
use crate::sheet::Sheet;
use errors::OutputError;

/// Everything one run produces for an integrated dataset.
#[derive(Debug, Serialize)]
pub struct Report {
    pub dataset: String,
    pub name: String,
    pub integrated: Sheet,
    pub stats: IntegrationStats,
    pub prices: PriceTable,
}

impl Report {
    pub fn to_json(&self) -> Result<String, OutputError> {
        serde_json::to_string_pretty(self).map_err(|e| OutputError::SerializeError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{CellPos, FinalAmount};
    use crate::commands::PricedCell;

    #[test]
    fn report_json_flattens_amounts_and_formats_positions() {
        let mut prices = PriceTable::default();
        prices.cells.push(PricedCell {
            row: 5,
            col: 1,
            amount: FinalAmount {
                final_amount: 120,
                price: 1_350_000,
                policy_support: 10,
                public_support: 50_000,
                additional_service: 0,
            },
        });
        prices.best_total.insert(CellPos::new(5, 1));

        let report = Report {
            dataset: "dashboard".into(),
            name: "통합".into(),
            integrated: Sheet::blank(1, 1),
            stats: IntegrationStats::new(),
            prices,
        };
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(value["prices"]["cells"][0]["final_amount"], 120);
        assert_eq!(value["prices"]["best_total"][0]["row"], 5);
        assert_eq!(value["integrated"], serde_json::json!([[""]]));
        assert!(value["stats"].get("total_duration").is_none());
    }
}
