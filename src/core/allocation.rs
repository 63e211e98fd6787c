//! Allocation math: ratios, per-stock and per-business-day amounts.
//!
//! All functions are total; malformed inputs read as 0 upstream and a zero
//! business-day count yields a zero daily amount rather than an error.

use crate::core::portfolio::StockAllocation;

/// Sum of all allocation percentages in a portfolio.
pub fn total_ratio(stocks: &[StockAllocation]) -> f64 {
    stocks.iter().map(|s| s.ratio).sum()
}

/// Whether the allocations exceed 100% of the total investment.
///
/// Over-allocation is a display-only warning; saving proceeds regardless.
pub fn is_over_allocated(stocks: &[StockAllocation]) -> bool {
    total_ratio(stocks) > 100.0
}

/// Amount allocated to one stock, rounded half-up to a whole unit.
pub fn per_stock_investment(total_investment: f64, ratio_percent: f64) -> f64 {
    (total_investment * ratio_percent / 100.0).round()
}

/// Amount to invest per business day, rounded half-up.
///
/// A zero business-day count yields 0, never a division error.
pub fn daily_investment(per_stock_investment: f64, business_days: u32) -> f64 {
    if business_days == 0 {
        return 0.0;
    }
    (per_stock_investment / business_days as f64).round()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::portfolio::Country;

    fn stock(ratio: f64) -> StockAllocation {
        StockAllocation {
            name: String::new(),
            ratio,
            start: String::new(),
            end: String::new(),
            country: Country::US,
        }
    }

    #[test]
    fn per_stock_and_daily_amounts() {
        let invested = per_stock_investment(1_000_000.0, 30.0);
        assert_eq!(invested, 300_000.0);
        assert_eq!(daily_investment(invested, 10), 30_000.0);
    }

    #[test]
    fn amounts_round_half_up() {
        // 1005 * 50% = 502.5
        assert_eq!(per_stock_investment(1005.0, 50.0), 503.0);
        // 100 / 3 = 33.33..
        assert_eq!(daily_investment(100.0, 3), 33.0);
        // 50 / 4 = 12.5
        assert_eq!(daily_investment(50.0, 4), 13.0);
    }

    #[test]
    fn zero_business_days_yield_zero_daily() {
        assert_eq!(daily_investment(300_000.0, 0), 0.0);
        assert_eq!(daily_investment(0.0, 0), 0.0);
    }

    #[test]
    fn total_ratio_sums_all_stocks() {
        let stocks = vec![stock(45.0), stock(60.0)];
        assert_eq!(total_ratio(&stocks), 105.0);
        assert!(is_over_allocated(&stocks));

        let stocks = vec![stock(40.0), stock(60.0)];
        assert!(!is_over_allocated(&stocks));
        assert!(!is_over_allocated(&[]));
    }
}
