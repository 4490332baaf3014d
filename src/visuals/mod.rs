mod formatters;

use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use formatters::{format_amount, format_man, format_rate};

use crate::output::Report;

pub fn print_summary(report: &Report) {
    println!(
        "✓ Integrated '{}': {}/{} cells matched, {} conflicts in {}ms ({} match rate)",
        report.name,
        report.stats.matched,
        report.stats.cells_total,
        report.stats.conflicts,
        report.stats.total_duration.as_millis(),
        format_rate(report.stats.match_rate())
    );
}

pub fn print_detailed(report: &Report) {
    let stats = &report.stats;

    let mut summary_table = Table::new();
    summary_table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Integration Summary")
                .add_attribute(Attribute::Bold)
                .set_alignment(comfy_table::CellAlignment::Left),
            Cell::new(""),
        ]);

    summary_table.add_row(vec!["Dataset", &report.name]);
    summary_table.add_row(vec![
        "Time",
        &format!("{}ms", stats.total_duration.as_millis()),
    ]);
    summary_table.add_row(vec!["Cells", &format!("{}", stats.cells_total)]);
    summary_table.add_row(vec!["Matched", &format!("{}", stats.matched)]);
    summary_table.add_row(vec!["Conflicts", &format!("{}", stats.conflicts)]);
    summary_table.add_row(vec!["Kept Manual", &format!("{}", stats.kept_manual)]);
    summary_table.add_row(vec!["Match Rate", &format_rate(stats.match_rate())]);

    println!("{summary_table}\n");

    if !stats.conflict_cells.is_empty() {
        let mut conflict_table = Table::new();
        conflict_table
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("Cell").add_attribute(Attribute::Bold),
                Cell::new("Offer").add_attribute(Attribute::Bold),
                Cell::new("Values").add_attribute(Attribute::Bold),
            ]);
        for conflict in &stats.conflict_cells {
            let header = report.integrated.header(conflict.col);
            conflict_table.add_row(vec![
                Cell::new(format!("R{}C{}", conflict.row + 1, conflict.col + 1)),
                Cell::new(format!(
                    "{} {} {} {}",
                    header.carrier,
                    header.plan_base(),
                    header.join_type,
                    header.company
                )),
                Cell::new(conflict.values.join(" / ")),
            ]);
        }
        println!("{conflict_table}\n");
    }

    let mut price_table = Table::new();
    price_table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Device").add_attribute(Attribute::Bold),
            Cell::new("Offer").add_attribute(Attribute::Bold),
            Cell::new("Price").add_attribute(Attribute::Bold),
            Cell::new("Policy").add_attribute(Attribute::Bold),
            Cell::new("Public").add_attribute(Attribute::Bold),
            Cell::new("Services").add_attribute(Attribute::Bold),
            Cell::new("Final").add_attribute(Attribute::Bold),
        ]);

    for priced in &report.prices.cells {
        let header = report.integrated.header(priced.col);
        let amount = &priced.amount;
        let mut final_cell = Cell::new(format_man(amount.final_amount));
        if report.prices.is_best_total(priced.row, priced.col) {
            final_cell = final_cell.add_attribute(Attribute::Bold);
        }
        price_table.add_row(vec![
            Cell::new(report.integrated.get(priced.row, 0)),
            Cell::new(format!("{} {} {}", header.carrier, header.plan_base(), header.join_type)),
            Cell::new(format_amount(amount.price)),
            Cell::new(format_man(amount.policy_support)),
            Cell::new(format_amount(amount.public_support)),
            Cell::new(format_amount(amount.additional_service)),
            final_cell,
        ]);
    }

    println!("{price_table}");
}
