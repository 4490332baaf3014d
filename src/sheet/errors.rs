use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("Ragged sheet: row {row} has {found} columns, expected {expected}.")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Cell ({row}, {col}) is outside a {rows}x{cols} sheet.")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}
