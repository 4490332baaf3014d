use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use std::collections::HashMap;

use super::errors::DataSetError;
use crate::sheet::Sheet;

/// Worksheets of an Excel workbook, read once and converted to string grids on demand.
pub struct Workbook {
    sheets: HashMap<String, Range<Data>>,
}

impl Workbook {
    pub fn open(path: &str) -> Result<Self, DataSetError> {
        let mut workbook: Xlsx<_> = open_workbook(path)
            .map_err(|_| DataSetError::FileError(format!("failed to open file: {}", path)))?;

        let worksheets = workbook.worksheets();
        let mut sheets = HashMap::with_capacity(worksheets.len());
        for (name, range) in worksheets {
            sheets.insert(name, range);
        }

        tracing::debug!(path, worksheets = sheets.len(), "opened workbook");
        Ok(Self { sheets })
    }

    pub fn sheet(&self, name: &str) -> Result<Sheet, DataSetError> {
        let range = self.sheets.get(name).ok_or_else(|| {
            let mut available: Vec<_> = self.sheets.keys().map(|s| s.as_str()).collect();
            available.sort_unstable();
            DataSetError::WorksheetNotFound(format!(
                "'{}'. Available sheets: {}",
                name,
                available.join(", ")
            ))
        })?;

        Ok(rectangular(anchored_rows(range)))
    }
}

/// Rows of `range` placed at their absolute worksheet position.
///
/// Calamine ranges begin at the first used cell, so leading empty rows and
/// columns are restored to keep `(row, col)` equal to the Excel cell.
fn anchored_rows(range: &Range<Data>) -> Vec<Vec<String>> {
    let Some((row0, col0)) = range.start() else {
        return Vec::new();
    };
    let (row0, col0) = (row0 as usize, col0 as usize);

    let mut rows = vec![Vec::new(); row0];
    rows.extend(range.rows().map(|row| {
        std::iter::repeat_n(String::new(), col0)
            .chain(row.iter().map(cell_to_string))
            .collect()
    }));
    rows
}

/// Pads short rows so the grid is rectangular.
pub fn rectangular(mut rows: Vec<Vec<String>>) -> Sheet {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(width, String::new());
    }
    let mut sheet = Sheet::blank(0, width);
    sheet.paste(0, 0, &rows);
    sheet
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => (*f as i64).to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string().trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_render_as_sheet_text() {
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::Float(35.0)), "35");
        assert_eq!(cell_to_string(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_to_string(&Data::Int(-3)), "-3");
        assert_eq!(cell_to_string(&Data::String(" SK ".into())), "SK");
    }

    #[test]
    fn ranges_keep_their_worksheet_position() {
        // Used area B2:C3, as calamine reports a sheet with an empty first row and column.
        let mut range = Range::new((1, 1), (2, 2));
        range.set_value((1, 1), Data::String("SK".into()));
        range.set_value((2, 2), Data::Float(35.0));

        let sheet = rectangular(anchored_rows(&range));
        assert_eq!(sheet.row_count(), 3);
        assert_eq!(sheet.col_count(), 3);
        assert_eq!(sheet.get(0, 0), "");
        assert_eq!(sheet.get(1, 1), "SK");
        assert_eq!(sheet.get(2, 2), "35");
    }

    #[test]
    fn empty_range_is_an_empty_sheet() {
        let range: Range<Data> = Range::empty();
        assert_eq!(rectangular(anchored_rows(&range)).row_count(), 0);
    }

    #[test]
    fn short_rows_are_padded() {
        let sheet = rectangular(vec![vec!["a".into()], vec!["b".into(), "c".into()]]);
        assert_eq!(sheet.col_count(), 2);
        assert_eq!(sheet.get(0, 1), "");
        assert_eq!(sheet.get(1, 1), "c");
    }
}
