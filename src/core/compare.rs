//! Side-by-side comparison of saved portfolios.

use crate::core::allocation::{daily_investment, per_stock_investment};
use crate::core::calendar::count_business_days;
use crate::core::holidays::HolidayRegistry;
use crate::core::portfolio::Portfolio;
use std::collections::BTreeSet;

/// One stock line in a comparison table.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub stock_name: String,
    /// Allocation percentage rounded to the nearest integer for display.
    pub ratio_percent: i64,
    pub invested_amount: f64,
    pub daily_amount: f64,
}

/// Display-ready comparison for a single portfolio.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioComparison {
    pub title: String,
    pub owner: String,
    pub rows: Vec<ComparisonRow>,
}

/// Transient selection of stored portfolios, identified by index.
///
/// Toggling the same index twice is a net no-op. Never persisted.
#[derive(Debug, Default, Clone)]
pub struct CompareSelection {
    selected: BTreeSet<usize>,
}

impl CompareSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, index: usize) {
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }
}

/// Computes the comparison rows for one portfolio.
///
/// Each stock uses its own country and date range; extra holidays are
/// resolved for `year` (the current evaluation year) for every date tested.
pub fn comparison_for(
    portfolio: &Portfolio,
    registry: &HolidayRegistry,
    year: i32,
) -> PortfolioComparison {
    let rows = portfolio
        .stocks
        .iter()
        .map(|stock| {
            let extra = registry.extra_for_year(stock.country, year);
            let days = count_business_days(&stock.start, &stock.end, stock.country, &extra);
            let invested = per_stock_investment(portfolio.total_investment, stock.ratio);
            ComparisonRow {
                stock_name: stock.name.clone(),
                ratio_percent: stock.ratio.round() as i64,
                invested_amount: invested,
                daily_amount: daily_investment(invested, days),
            }
        })
        .collect();

    PortfolioComparison {
        title: portfolio.title.clone(),
        owner: portfolio.owner.clone(),
        rows,
    }
}
