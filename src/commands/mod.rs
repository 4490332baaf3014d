pub mod stats;

use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeSet;
use std::time::Instant;

use crate::args::Args;
use crate::dataset::{self, DataSet, helpers::warn_duplicate_codes};
use crate::engine::{
    CellPos, FinalAmount, PolicySources, calculate_final_amount, calculate_highlighted_cells,
    highlight_priced_amounts,
};
use crate::error::AppError;
use crate::output::Report;
use crate::sheet::encoding::OfferCell;
use crate::sheet::{Sheet, SheetIndex};
use crate::subsidy::PublicSubsidyData;
pub use stats::{ConflictStat, IntegrationStats};

/// Fills every data cell of `sheet` from the policy datasets.
///
/// Unless `overwrite` is set, cells the matcher cannot resolve keep whatever was typed in.
pub fn integrate(
    sheet: &Sheet,
    datasets: &[DataSet],
    overwrite: bool,
) -> Result<(Sheet, IntegrationStats), AppError> {
    let start = Instant::now();
    let index = SheetIndex::new(sheet);
    let sources = PolicySources::new(datasets);
    tracing::debug!(sources = sources.len(), "matching against policy sheets");

    let results: Vec<(usize, Vec<(usize, OfferCell)>)> = sheet
        .data_rows()
        .map(|(row, _)| row)
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|row| {
            let cells = (1..sheet.col_count())
                .map(|col| (col, sources.find(row, col, &index)))
                .collect();
            (row, cells)
        })
        .collect();

    let mut filled = sheet.clone();
    let mut stats = IntegrationStats::new();

    for (row, cells) in results {
        for (col, result) in cells {
            stats.add_cell(row, col, &result);

            if let OfferCell::Conflict(values) = &result {
                tracing::warn!(
                    row = row + 1,
                    col = col + 1,
                    values = %values.join(", "),
                    "policy sources disagree; resolve manually"
                );
            }

            if result.is_empty() && !overwrite && !sheet.get(row, col).trim().is_empty() {
                stats.kept_manual += 1;
                continue;
            }
            filled.set(row, col, result.into_cell())?;
        }
    }

    stats.total_duration = start.elapsed();
    tracing::info!(
        cells = stats.cells_total,
        matched = stats.matched,
        conflicts = stats.conflicts,
        "integrated sheet"
    );
    Ok((filled, stats))
}

#[derive(Debug, Clone, Serialize)]
pub struct PricedCell {
    pub row: usize,
    pub col: usize,
    #[serde(flatten)]
    pub amount: FinalAmount,
}

/// Net prices and highlight hints of an integrated sheet.
#[derive(Debug, Default, Serialize)]
pub struct PriceTable {
    pub cells: Vec<PricedCell>,
    pub best_policy: BTreeSet<CellPos>,
    pub best_total: BTreeSet<CellPos>,
}

impl PriceTable {
    pub fn is_best_total(&self, row: usize, col: usize) -> bool {
        self.best_total.contains(&CellPos::new(row, col))
    }
}

pub fn price_table(
    sheet: &Sheet,
    datasets: &[DataSet],
    public: Option<&PublicSubsidyData>,
) -> PriceTable {
    let index = SheetIndex::new(sheet);

    let cells: Vec<PricedCell> = sheet
        .data_rows()
        .flat_map(|(row, _)| (1..sheet.col_count()).map(move |col| (row, col)))
        .map(|(row, col)| PricedCell {
            row,
            col,
            amount: calculate_final_amount(row, col, &index, datasets, public, sheet),
        })
        .filter(|cell| cell.amount.is_priced())
        .collect();

    let best_total = highlight_priced_amounts(
        &index.headers,
        cells.iter().map(|cell| (CellPos::new(cell.row, cell.col), &cell.amount)),
    );

    PriceTable {
        best_policy: calculate_highlighted_cells(sheet, &index.headers),
        best_total,
        cells,
    }
}

/// Loads the workspace named by `args`, integrates the selected sheet and prices it.
pub fn run(args: &Args) -> Result<Report, AppError> {
    let workspace = dataset::load_workspace(&args.workspace.workspace)?;
    let workbook = workspace.open_workbook(args.workspace.xlsx.as_deref())?;
    let datasets = workspace.resolve(workbook.as_ref())?;

    let public = match args
        .subsidy
        .subsidy
        .as_deref()
        .or(workspace.settings.subsidy.as_deref())
    {
        Some(path) => Some(PublicSubsidyData::load(path)?),
        None => {
            tracing::info!("no public subsidy data; public support counts as 0");
            None
        }
    };

    let (target, sheet) =
        dataset::select_integrated(&datasets, args.workspace.integrated.as_deref())?;
    warn_duplicate_codes(&target.id, &SheetIndex::new(sheet));

    let (integrated, stats) =
        integrate(sheet, &datasets, args.workspace.overwrite).map_err(|e| AppError::InDataSet {
            name: target.id.clone(),
            source: Box::new(e),
        })?;
    let prices = price_table(&integrated, &datasets, public.as_ref());

    Ok(Report {
        dataset: target.id.clone(),
        name: target.name.clone(),
        integrated,
        stats,
        prices,
    })
}
