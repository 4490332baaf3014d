//! Packed multi-field cell formats.
//!
//! Three formats live inside single string cells:
//!
//! - device column: `codes:A,B,C|standard:SM-S928N|price:1350000`
//! - plan header (row 2): `planName|fee1|fee2`
//! - offer values: `120`, or `100;120|WARN_MULTI` when sources disagree
//!
//! Parsing is confined to this module; everything else works on the typed records.

use std::fmt;

pub const CONFLICT_MARKER: &str = "WARN_MULTI";

const FIELD_SEP: char = '|';
const KEY_SEP: char = ':';
const CODE_SEP: char = ',';
const VALUE_SEP: char = ';';

/// Parsed column-0 device descriptor of a data row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceEncoding {
    pub codes: Vec<String>,
    pub standard: Option<String>,
    pub price: Option<i64>,
}

impl DeviceEncoding {
    /// Unknown keys and segments without a `key:` prefix are skipped.
    pub fn parse(cell: &str) -> Self {
        let mut out = Self::default();

        for segment in cell.split(FIELD_SEP) {
            let Some((key, value)) = segment.split_once(KEY_SEP) else {
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "codes" => {
                    out.codes = value
                        .split(CODE_SEP)
                        .map(str::trim)
                        .filter(|c| !c.is_empty())
                        .map(str::to_string)
                        .collect();
                }
                "standard" if !value.is_empty() => out.standard = Some(value.to_string()),
                "price" => out.price = parse_amount(value),
                _ => {}
            }
        }

        out
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }

    pub fn standard_model(&self) -> Option<&str> {
        self.standard.as_deref()
    }
}

impl fmt::Display for DeviceEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::with_capacity(3);
        if !self.codes.is_empty() {
            parts.push(format!("codes{KEY_SEP}{}", self.codes.join(",")));
        }
        if let Some(standard) = &self.standard {
            parts.push(format!("standard{KEY_SEP}{standard}"));
        }
        if let Some(price) = self.price {
            parts.push(format!("price{KEY_SEP}{price}"));
        }
        write!(f, "{}", parts.join("|"))
    }
}

/// Row-2 plan header: plan name plus up to two selectable monthly fees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanHeader {
    pub name: String,
    pub fee1: Option<i64>,
    pub fee2: Option<i64>,
}

impl PlanHeader {
    pub fn parse(cell: &str) -> Self {
        let mut parts = cell.split(FIELD_SEP);
        let name = parts.next().unwrap_or_default().to_string();
        let fee1 = parts.next().and_then(parse_amount);
        let fee2 = parts.next().and_then(parse_amount);
        Self { name, fee1, fee2 }
    }

    pub fn fees(&self) -> impl Iterator<Item = i64> + '_ {
        self.fee1.into_iter().chain(self.fee2)
    }

    pub fn has_fee(&self) -> bool {
        self.fee1.is_some() || self.fee2.is_some()
    }
}

/// Plan text before the first `|`; the only part compared when matching columns.
pub fn plan_base(cell: &str) -> &str {
    cell.split(FIELD_SEP).next().unwrap_or_default()
}

/// Value of an offer cell in the integrated sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OfferCell {
    #[default]
    Empty,
    Value(String),
    /// Distinct values reported by different sources for the same offer.
    Conflict(Vec<String>),
}

impl OfferCell {
    pub fn parse(cell: &str) -> Self {
        let cell = cell.trim();
        if cell.is_empty() {
            return Self::Empty;
        }
        match cell.strip_suffix(CONFLICT_MARKER) {
            Some(rest) => {
                let rest = rest.strip_suffix(FIELD_SEP).unwrap_or(rest);
                Self::Conflict(
                    rest.split(VALUE_SEP)
                        .map(str::trim)
                        .filter(|v| !v.is_empty())
                        .map(str::to_string)
                        .collect(),
                )
            }
            None => Self::Value(cell.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }

    /// Flat grid form of the cell.
    pub fn into_cell(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for OfferCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Value(v) => write!(f, "{v}"),
            Self::Conflict(values) => {
                write!(f, "{}{FIELD_SEP}{CONFLICT_MARKER}", values.join(";"))
            }
        }
    }
}

/// Numeric prefix of the first `|`/`;` token of a cell, so `35만` reads as 35.
pub fn leading_number(cell: &str) -> Option<i64> {
    let token = cell
        .split([FIELD_SEP, VALUE_SEP])
        .next()
        .unwrap_or_default()
        .trim();
    let cleaned: String = token.chars().filter(|c| *c != ',').collect();

    let sign = usize::from(cleaned.starts_with('-'));
    let digits = cleaned[sign..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(cleaned.len(), |end| sign + end);
    if digits == sign {
        return None;
    }
    cleaned[..digits].parse().ok()
}

/// Integer amount, tolerating surrounding whitespace and thousands separators.
pub fn parse_amount(text: &str) -> Option<i64> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}
