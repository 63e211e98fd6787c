use super::ui::{self, StyleType};
use crate::core::allocation::{daily_investment, per_stock_investment, total_ratio};
use crate::core::calendar::count_business_days;
use crate::core::holidays::HolidayRegistry;
use crate::store::portfolios::PortfolioStore;
use anyhow::Result;
use chrono::{Datelike, Local};
use comfy_table::{Cell, CellAlignment};

/// Shows the full investment plan for one saved portfolio.
pub fn run(store: &PortfolioStore, registry: &HolidayRegistry, index: usize) -> Result<()> {
    let Some(portfolio) = store.load(index) else {
        println!(
            "{}",
            ui::style_text(
                &format!("No portfolio at index {index}"),
                StyleType::Subtle
            )
        );
        return Ok(());
    };

    println!(
        "{}",
        ui::style_text(
            &format!("{} ({})", portfolio.title, portfolio.owner),
            StyleType::Title
        )
    );

    let year = Local::now().year();
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Stock"),
        ui::header_cell("Ratio %"),
        ui::header_cell("Start"),
        ui::header_cell("End"),
        ui::header_cell("Business Days"),
        ui::header_cell("Invested"),
        ui::header_cell("Per Day"),
    ]);

    for stock in &portfolio.stocks {
        let extra = registry.extra_for_year(stock.country, year);
        let days = count_business_days(&stock.start, &stock.end, stock.country, &extra);
        let invested = per_stock_investment(portfolio.total_investment, stock.ratio);
        let daily = daily_investment(invested, days);

        table.add_row(vec![
            Cell::new(format!("{} ({})", stock.name, stock.country)),
            Cell::new(format!("{:.0}", stock.ratio)).set_alignment(CellAlignment::Right),
            Cell::new(&stock.start),
            Cell::new(&stock.end),
            ui::count_cell(days),
            ui::amount_cell(invested),
            ui::amount_cell(daily),
        ]);
    }
    println!("{table}");

    println!(
        "{} {}",
        ui::style_text("Total investment:", StyleType::TotalLabel),
        ui::style_text(
            &ui::format_amount(portfolio.total_investment),
            StyleType::TotalValue
        )
    );

    let total = total_ratio(&portfolio.stocks);
    if total > 100.0 {
        println!(
            "{}",
            ui::style_text(
                &format!("Warning: allocations total {total:.0}% (over 100%)"),
                StyleType::Warning
            )
        );
    }
    Ok(())
}
