use super::ui::{self, StyleType};
use crate::core::calendar::parse_date;
use crate::core::holidays::{HolidayRegistry, builtin_dates};
use crate::core::portfolio::Country;
use anyhow::{Result, bail};
use chrono::{Datelike, Local};
use comfy_table::Cell;

/// Registers an extra holiday. The year scope defaults to the date's own
/// year.
pub fn add(
    registry: &HolidayRegistry,
    country: Country,
    date: &str,
    year: Option<i32>,
) -> Result<()> {
    let Some(parsed) = parse_date(date) else {
        bail!("Invalid date '{date}', expected YYYY-MM-DD");
    };
    let year = year.unwrap_or_else(|| parsed.year());

    registry.ensure_year(country, year);
    registry.add_extra_holiday(country, year, parsed);
    println!("Added {parsed} to {country} extra holidays for {year}");
    Ok(())
}

/// Lists the effective holiday set (built-in + extra) for a country and
/// year. Defaults to the current year.
pub fn list(registry: &HolidayRegistry, country: Country, year: Option<i32>) -> Result<()> {
    let year = year.unwrap_or_else(|| Local::now().year());
    let builtin = builtin_dates(country);
    let holidays = registry.holidays_for(country, year);

    println!(
        "{}",
        ui::style_text(&format!("{country} holidays ({year})"), StyleType::Title)
    );

    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Date"), ui::header_cell("Source")]);
    for holiday in &holidays {
        let source = if builtin.contains(holiday) {
            "built-in"
        } else {
            "extra"
        };
        table.add_row(vec![
            Cell::new(holiday.format("%Y-%m-%d").to_string()),
            Cell::new(source),
        ]);
    }
    println!("{table}");
    Ok(())
}
