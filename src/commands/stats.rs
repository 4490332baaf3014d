use serde::Serialize;
use std::time::Duration;

use crate::sheet::encoding::OfferCell;

#[derive(Debug, Clone, Serialize)]
pub struct ConflictStat {
    pub row: usize,
    pub col: usize,
    pub values: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct IntegrationStats {
    pub cells_total: usize,
    pub matched: usize,
    pub conflicts: usize,
    pub empty: usize,
    /// Cells the matcher left alone because they already held a manual value.
    pub kept_manual: usize,
    #[serde(skip)]
    pub total_duration: Duration,
    pub conflict_cells: Vec<ConflictStat>,
}

impl Default for IntegrationStats {
    fn default() -> Self {
        Self::new()
    }
}

impl IntegrationStats {
    pub fn new() -> Self {
        Self {
            cells_total: 0,
            matched: 0,
            conflicts: 0,
            empty: 0,
            kept_manual: 0,
            total_duration: Duration::from_secs(0),
            conflict_cells: Vec::new(),
        }
    }

    pub fn add_cell(&mut self, row: usize, col: usize, result: &OfferCell) {
        self.cells_total += 1;
        match result {
            OfferCell::Empty => self.empty += 1,
            OfferCell::Value(_) => self.matched += 1,
            OfferCell::Conflict(values) => {
                self.conflicts += 1;
                self.conflict_cells.push(ConflictStat {
                    row,
                    col,
                    values: values.clone(),
                });
            }
        }
    }

    /// Share of cells resolved to a single value, in percent.
    pub fn match_rate(&self) -> f64 {
        if self.cells_total == 0 {
            0.0
        } else {
            (self.matched as f64 / self.cells_total as f64) * 100.0
        }
    }
}
