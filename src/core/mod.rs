//! Core planning logic: calendars, allocation math, portfolio records.

pub mod allocation;
pub mod calendar;
pub mod compare;
pub mod config;
pub mod holidays;
pub mod log;
pub mod portfolio;

// Re-export main types for cleaner imports
pub use compare::{CompareSelection, ComparisonRow, PortfolioComparison};
pub use holidays::HolidayRegistry;
pub use portfolio::{Country, Portfolio, StockAllocation};
