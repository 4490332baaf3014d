pub mod encoding;
pub mod errors;

use serde::{Deserialize, Serialize};

use encoding::{DeviceEncoding, PlanHeader, plan_base};
use errors::SheetError;

/// Rows 0..HEADER_ROWS carry column metadata; data rows follow.
pub const HEADER_ROWS: usize = 5;

const CARRIER_ROW: usize = 0;
const SUPPORT_TYPE_ROW: usize = 1;
const PLAN_ROW: usize = 2;
const JOIN_TYPE_ROW: usize = 3;
const COMPANY_ROW: usize = 4;

/// Rectangular grid of string cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<String>>", into = "Vec<Vec<String>>")]
pub struct Sheet {
    rows: Vec<Vec<String>>,
    cols: usize,
}

impl Sheet {
    pub fn blank(rows: usize, cols: usize) -> Self {
        Self {
            rows: vec![vec![String::new(); cols]; rows],
            cols,
        }
    }

    pub fn from_rows(rows: Vec<Vec<String>>) -> Result<Self, SheetError> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != cols)
        {
            return Err(SheetError::Ragged {
                row,
                expected: cols,
                found,
            });
        }
        Ok(Self { rows, cols })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Cell text, or `""` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map_or("", String::as_str)
    }

    pub fn set(&mut self, row: usize, col: usize, value: impl Into<String>) -> Result<(), SheetError> {
        let (rows, cols) = (self.row_count(), self.cols);
        let cell = self
            .rows
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(SheetError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            })?;
        *cell = value.into();
        Ok(())
    }

    /// Writes `block` with its top-left corner at (`row`, `col`), growing the grid as needed.
    pub fn paste(&mut self, row: usize, col: usize, block: &[Vec<String>]) {
        let block_width = block.iter().map(Vec::len).max().unwrap_or(0);
        self.grow(row + block.len(), col + block_width);

        for (r, values) in block.iter().enumerate() {
            for (c, value) in values.iter().enumerate() {
                self.rows[row + r][col + c] = value.clone();
            }
        }
    }

    fn grow(&mut self, rows: usize, cols: usize) {
        if cols > self.cols {
            for r in &mut self.rows {
                r.resize(cols, String::new());
            }
            self.cols = cols;
        }
        if rows > self.rows.len() {
            self.rows.resize(rows, vec![String::new(); self.cols]);
        }
    }

    pub fn header(&self, col: usize) -> HeaderRow {
        HeaderRow {
            carrier: self.get(CARRIER_ROW, col).to_string(),
            support_type: self.get(SUPPORT_TYPE_ROW, col).to_string(),
            plan: self.get(PLAN_ROW, col).to_string(),
            join_type: self.get(JOIN_TYPE_ROW, col).to_string(),
            company: self.get(COMPANY_ROW, col).to_string(),
        }
    }

    /// One header record per column.
    pub fn header_rows(&self) -> Vec<HeaderRow> {
        (0..self.cols).map(|col| self.header(col)).collect()
    }

    pub fn data_rows(&self) -> impl Iterator<Item = (usize, &[String])> + '_ {
        self.rows
            .iter()
            .enumerate()
            .skip(HEADER_ROWS)
            .map(|(idx, row)| (idx, row.as_slice()))
    }
}

impl TryFrom<Vec<Vec<String>>> for Sheet {
    type Error = SheetError;

    fn try_from(rows: Vec<Vec<String>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Sheet> for Vec<Vec<String>> {
    fn from(sheet: Sheet) -> Self {
        sheet.rows
    }
}

/// The five header cells of one column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderRow {
    pub carrier: String,
    pub support_type: String,
    pub plan: String,
    pub join_type: String,
    pub company: String,
}

impl HeaderRow {
    pub fn plan_base(&self) -> &str {
        plan_base(&self.plan)
    }

    pub fn plan_header(&self) -> PlanHeader {
        PlanHeader::parse(&self.plan)
    }

    pub fn is_complete(&self) -> bool {
        [
            self.carrier.as_str(),
            self.support_type.as_str(),
            self.plan_base(),
            self.join_type.as_str(),
            self.company.as_str(),
        ]
        .iter()
        .all(|field| !field.is_empty())
    }

    /// Same offer category; plans compare on the name before any fee suffix.
    pub fn matches(&self, other: &HeaderRow) -> bool {
        self.carrier == other.carrier
            && self.support_type == other.support_type
            && self.plan_base() == other.plan_base()
            && self.join_type == other.join_type
            && self.company == other.company
    }

    /// Key of the additional-service table for this column.
    pub fn service_key(&self) -> String {
        format!("{}-{}", self.company, self.carrier)
    }
}

/// Headers and parsed device column of a sheet, derived once and shared by the engine.
#[derive(Debug, Clone, Default)]
pub struct SheetIndex {
    pub headers: Vec<HeaderRow>,
    pub devices: Vec<DeviceEncoding>,
}

impl SheetIndex {
    pub fn new(sheet: &Sheet) -> Self {
        let devices = sheet
            .rows()
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                if idx < HEADER_ROWS {
                    DeviceEncoding::default()
                } else {
                    row.first()
                        .map(|cell| DeviceEncoding::parse(cell))
                        .unwrap_or_default()
                }
            })
            .collect();

        Self {
            headers: sheet.header_rows(),
            devices,
        }
    }

    pub fn header(&self, col: usize) -> Option<&HeaderRow> {
        self.headers.get(col)
    }

    pub fn device(&self, row: usize) -> Option<&DeviceEncoding> {
        self.devices.get(row)
    }
}
