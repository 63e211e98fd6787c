use super::ui::{self, StyleType};
use crate::core::allocation;
use crate::core::portfolio::Portfolio;
use crate::store::portfolios::PortfolioStore;
use anyhow::{Context, Result};
use std::fs;
use tracing::debug;

/// Saves a portfolio from a YAML definition file.
///
/// Without `--index` the portfolio is appended as a new record; with it the
/// record at that index is overwritten in place. An over-100% allocation
/// total is warned about but never blocks the save.
pub fn run(store: &PortfolioStore, path: &str, index: Option<usize>) -> Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read portfolio definition: {path}"))?;
    let portfolio: Portfolio = serde_yaml::from_str(&raw)
        .with_context(|| format!("Failed to parse portfolio definition: {path}"))?;
    debug!("Parsed definition: {portfolio:#?}");

    let total = allocation::total_ratio(&portfolio.stocks);
    if allocation::is_over_allocated(&portfolio.stocks) {
        println!(
            "{}",
            ui::style_text(
                &format!("Warning: allocations total {total:.0}% (over 100%)"),
                StyleType::Warning,
            )
        );
    }

    match index {
        Some(i) => {
            if i >= store.list().len() {
                println!(
                    "{}",
                    ui::style_text(
                        &format!("No portfolio at index {i}, nothing updated"),
                        StyleType::Subtle,
                    )
                );
                return Ok(());
            }
            store.update(i, portfolio);
            println!("Updated portfolio at index {i}");
        }
        None => {
            let new_index = store.create(portfolio);
            println!("Saved portfolio at index {new_index}");
        }
    }
    Ok(())
}
