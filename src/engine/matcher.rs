use crate::dataset::DataSet;
use crate::sheet::encoding::OfferCell;
use crate::sheet::{HeaderRow, Sheet, SheetIndex};

/// Looks up the policy value for one integrated-sheet cell across all policy datasets.
///
/// A source cell counts when its column carries the same five-field header as `col`
/// and its row's device code is one of the codes listed on `row`. Distinct values are
/// reported as a conflict, never averaged or picked.
pub fn find_matching_value(
    row: usize,
    col: usize,
    index: &SheetIndex,
    datasets: &[DataSet],
) -> OfferCell {
    PolicySources::new(datasets).find(row, col, index)
}

/// Policy sheets with their header rows parsed once, for filling many cells.
pub struct PolicySources<'a> {
    sheets: Vec<(&'a Sheet, Vec<HeaderRow>)>,
}

impl<'a> PolicySources<'a> {
    /// Integrated and additional datasets are not sources.
    pub fn new(datasets: &'a [DataSet]) -> Self {
        let sheets = datasets
            .iter()
            .filter_map(DataSet::policy_sheet)
            .map(|sheet| (sheet, sheet.header_rows()))
            .collect();
        Self { sheets }
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    pub fn find(&self, row: usize, col: usize, index: &SheetIndex) -> OfferCell {
        let Some(target) = index.header(col).filter(|h| h.is_complete()) else {
            return OfferCell::Empty;
        };
        let Some(device) = index.device(row).filter(|d| !d.codes.is_empty()) else {
            return OfferCell::Empty;
        };

        let mut values: Vec<String> = Vec::new();
        for (sheet, headers) in &self.sheets {
            collect_from_sheet(sheet, headers, target, |code| device.contains_code(code), &mut values);
        }

        // Order-independent result regardless of dataset order.
        values.sort_by_cached_key(|v| (v.parse::<i64>().map_err(|_| ()), v.clone()));
        values.dedup();

        match values.len() {
            0 => OfferCell::Empty,
            1 => OfferCell::Value(values.remove(0)),
            _ => OfferCell::Conflict(values),
        }
    }
}

fn collect_from_sheet(
    sheet: &Sheet,
    headers: &[HeaderRow],
    target: &HeaderRow,
    is_target_code: impl Fn(&str) -> bool,
    out: &mut Vec<String>,
) {
    let columns: Vec<usize> = headers
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, header)| header.matches(target))
        .map(|(col, _)| col)
        .collect();
    if columns.is_empty() {
        return;
    }

    for (_, cells) in sheet.data_rows() {
        let code = cells.first().map_or("", |c| c.trim());
        if code.is_empty() || !is_target_code(code) {
            continue;
        }
        for &col in &columns {
            let value = digits_only(cells.get(col).map_or("", String::as_str));
            if !value.is_empty() {
                out.push(value);
            }
        }
    }
}

/// Keeps ASCII digits and `-`.
fn digits_only(cell: &str) -> String {
    cell.chars().filter(|c| c.is_ascii_digit() || *c == '-').collect()
}
