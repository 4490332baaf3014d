use std::collections::HashMap;

use crate::sheet::SheetIndex;

/// Warn about device codes listed on more than one data row of an integrated sheet.
///
/// Rows are reported 1-based, as a spreadsheet shows them.
pub fn warn_duplicate_codes(dataset: &str, index: &SheetIndex) {
    let mut index_map: HashMap<&str, Vec<usize>> = HashMap::new();

    for (row, device) in index.devices.iter().enumerate() {
        for code in &device.codes {
            index_map.entry(code.as_str()).or_default().push(row + 1);
        }
    }

    let mut duplicates: Vec<(&str, Vec<usize>)> = index_map
        .into_iter()
        .filter(|(_, rows)| rows.len() > 1)
        .collect();

    duplicates.sort_by(|a, b| a.0.cmp(b.0));

    for (code, rows) in duplicates {
        let rows_str = rows
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        tracing::warn!(dataset, code, rows = %rows_str, "device code listed on several rows");
    }
}
