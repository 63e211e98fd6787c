use super::ui::{self, StyleType};
use crate::core::compare::{CompareSelection, comparison_for};
use crate::core::holidays::HolidayRegistry;
use crate::store::portfolios::PortfolioStore;
use anyhow::Result;
use chrono::{Datelike, Local};
use comfy_table::{Cell, CellAlignment};

/// Compares selected portfolios side by side.
///
/// Indices toggle selection membership, so a repeated index drops the
/// portfolio from the comparison again.
pub fn run(store: &PortfolioStore, registry: &HolidayRegistry, indices: &[usize]) -> Result<()> {
    let mut selection = CompareSelection::new();
    for &index in indices {
        selection.toggle(index);
    }
    if selection.is_empty() {
        println!(
            "{}",
            ui::style_text("Nothing selected to compare", StyleType::Subtle)
        );
        return Ok(());
    }

    let portfolios = store.list();
    let year = Local::now().year();

    for index in selection.indices() {
        let Some(portfolio) = portfolios.get(index) else {
            println!(
                "{}",
                ui::style_text(
                    &format!("No portfolio at index {index}"),
                    StyleType::Subtle
                )
            );
            continue;
        };

        let comparison = comparison_for(portfolio, registry, year);
        println!(
            "{}",
            ui::style_text(
                &format!("[{index}] {} ({})", comparison.title, comparison.owner),
                StyleType::Title
            )
        );

        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Stock"),
            ui::header_cell("Ratio %"),
            ui::header_cell("Invested"),
            ui::header_cell("Per Day"),
        ]);
        for row in &comparison.rows {
            table.add_row(vec![
                Cell::new(&row.stock_name),
                Cell::new(row.ratio_percent.to_string()).set_alignment(CellAlignment::Right),
                ui::amount_cell(row.invested_amount),
                ui::amount_cell(row.daily_amount),
            ]);
        }
        println!("{table}");
    }
    Ok(())
}
