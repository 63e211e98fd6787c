use super::ui::{self, StyleType};
use crate::core::allocation;
use crate::store::portfolios::PortfolioStore;
use anyhow::Result;
use comfy_table::{Cell, CellAlignment};

/// Lists all saved portfolios.
pub fn run(store: &PortfolioStore) -> Result<()> {
    let portfolios = store.list();
    if portfolios.is_empty() {
        println!(
            "{}",
            ui::style_text("No saved portfolios", StyleType::Subtle)
        );
        return Ok(());
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("#"),
        ui::header_cell("Title"),
        ui::header_cell("Owner"),
        ui::header_cell("Total Investment"),
        ui::header_cell("Ratio %"),
        ui::header_cell("Stocks"),
        ui::header_cell("Saved At"),
    ]);

    for (index, portfolio) in portfolios.iter().enumerate() {
        let saved_at = portfolio
            .created_at
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(index.to_string()).set_alignment(CellAlignment::Right),
            Cell::new(&portfolio.title),
            Cell::new(&portfolio.owner),
            ui::amount_cell(portfolio.total_investment),
            Cell::new(format!(
                "{:.0}",
                allocation::total_ratio(&portfolio.stocks)
            ))
            .set_alignment(CellAlignment::Right),
            Cell::new(portfolio.stocks.len().to_string()).set_alignment(CellAlignment::Right),
            Cell::new(saved_at),
        ]);
    }

    println!("{table}");
    Ok(())
}
