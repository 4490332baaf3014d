use indexmap::IndexMap;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::calculator::{FinalAmount, calculate_final_amount};
use crate::dataset::DataSet;
use crate::sheet::encoding::leading_number;
use crate::sheet::{HeaderRow, Sheet, SheetIndex};
use crate::subsidy::PublicSubsidyData;

/// Position of a cell, displayed as `"row-col"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

/// Cheapest policy cells of every data row, per carrier and join type.
pub fn calculate_highlighted_cells(sheet: &Sheet, headers: &[HeaderRow]) -> BTreeSet<CellPos> {
    let mut out = BTreeSet::new();
    for (row, cells) in sheet.data_rows() {
        let values = cells
            .iter()
            .enumerate()
            .skip(1)
            .filter_map(|(col, cell)| leading_number(cell).map(|v| (col, v)));
        mark_group_minimums(row, headers, values, &mut out);
    }
    out
}

/// Cheapest final amounts of every data row, per carrier and join type.
///
/// Only priced offers take part.
pub fn calculate_highlighted_total_cells(
    sheet: &Sheet,
    index: &SheetIndex,
    datasets: &[DataSet],
    public: Option<&PublicSubsidyData>,
) -> BTreeSet<CellPos> {
    let amounts: Vec<(CellPos, FinalAmount)> = sheet
        .data_rows()
        .flat_map(|(row, _)| (1..sheet.col_count()).map(move |col| CellPos::new(row, col)))
        .map(|pos| {
            let amount = calculate_final_amount(pos.row, pos.col, index, datasets, public, sheet);
            (pos, amount)
        })
        .collect();
    highlight_priced_amounts(&index.headers, amounts.iter().map(|(pos, amount)| (*pos, amount)))
}

/// Same selection as [`calculate_highlighted_total_cells`] over amounts computed elsewhere.
pub fn highlight_priced_amounts<'a>(
    headers: &[HeaderRow],
    amounts: impl IntoIterator<Item = (CellPos, &'a FinalAmount)>,
) -> BTreeSet<CellPos> {
    let mut rows: BTreeMap<usize, Vec<(usize, i64)>> = BTreeMap::new();
    for (pos, amount) in amounts {
        if amount.is_priced() {
            rows.entry(pos.row)
                .or_default()
                .push((pos.col, amount.final_amount));
        }
    }

    let mut out = BTreeSet::new();
    for (row, values) in rows {
        mark_group_minimums(row, headers, values.into_iter(), &mut out);
    }
    out
}

fn mark_group_minimums(
    row: usize,
    headers: &[HeaderRow],
    values: impl Iterator<Item = (usize, i64)>,
    out: &mut BTreeSet<CellPos>,
) {
    let mut groups: IndexMap<(&str, &str), Vec<(usize, i64)>> = IndexMap::new();
    for (col, value) in values {
        let Some(header) = headers.get(col) else {
            continue;
        };
        groups
            .entry((header.carrier.as_str(), header.join_type.as_str()))
            .or_default()
            .push((col, value));
    }

    for members in groups.values() {
        let Some(min) = members.iter().map(|(_, v)| *v).min() else {
            continue;
        };
        out.extend(
            members
                .iter()
                .filter(|(_, v)| *v == min)
                .map(|(col, _)| CellPos::new(row, *col)),
        );
    }
}
