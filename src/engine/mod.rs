//! Pure calculations over sheets already in memory.
//!
//! Nothing here performs I/O or fails: missing input yields an empty cell, a zero
//! amount or an empty set.

pub mod calculator;
pub mod highlight;
pub mod matcher;

pub use calculator::{FinalAmount, calculate_final_amount};
pub use highlight::{
    CellPos, calculate_highlighted_cells, calculate_highlighted_total_cells, highlight_priced_amounts,
};
pub use matcher::{PolicySources, find_matching_value};
pub use crate::subsidy::get_public_support_amount;
