//! Built-in market holiday lists and the user-extensible holiday registry.

use crate::core::portfolio::Country;
use crate::store::KeyValue;
use chrono::NaiveDate;
use serde_json::{Map, Value, json};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

/// Store key for the user-added holiday map.
pub const EXTRA_HOLIDAYS_KEY: &str = "extraHolidays";

/// Fixed KRX holidays.
pub const KR_HOLIDAYS: [&str; 3] = ["2025-01-01", "2025-03-01", "2025-05-05"];

/// Fixed NYSE holidays.
pub const US_HOLIDAYS: [&str; 12] = [
    "2025-01-01",
    "2025-01-20",
    "2025-02-17",
    "2025-04-18",
    "2025-05-26",
    "2025-06-19",
    "2025-07-04",
    "2025-09-01",
    "2025-10-13",
    "2025-11-11",
    "2025-11-27",
    "2025-12-25",
];

pub fn builtin_holidays(country: Country) -> &'static [&'static str] {
    match country {
        Country::KR => &KR_HOLIDAYS,
        Country::US => &US_HOLIDAYS,
    }
}

/// Parsed built-in list for a country. Entries are compile-time constants,
/// so parse failures cannot occur at runtime.
pub fn builtin_dates(country: Country) -> Vec<NaiveDate> {
    builtin_holidays(country)
        .iter()
        .filter_map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        .collect()
}

/// User-added holidays layered on top of the built-in lists, persisted under
/// `extraHolidays` as `{ "KR": { "<year>": ["YYYY-MM-DD", ...] }, "US": {} }`.
///
/// Reads are lenient: an absent or unparseable stored value behaves as the
/// empty map. Writes replace the whole value.
pub struct HolidayRegistry {
    store: Arc<dyn KeyValue>,
}

impl HolidayRegistry {
    pub fn new(store: Arc<dyn KeyValue>) -> Self {
        Self { store }
    }

    fn load_map(&self) -> Map<String, Value> {
        let fallback = || {
            json!({ "KR": {}, "US": {} })
                .as_object()
                .cloned()
                .unwrap_or_default()
        };
        match self.store.get(EXTRA_HOLIDAYS_KEY) {
            Some(raw) => match serde_json::from_str::<Value>(&raw) {
                Ok(Value::Object(map)) => map,
                _ => {
                    debug!("extraHolidays value is unparseable, using defaults");
                    fallback()
                }
            },
            None => fallback(),
        }
    }

    fn persist(&self, map: &Map<String, Value>) {
        match serde_json::to_string(map) {
            Ok(raw) => self.store.set(EXTRA_HOLIDAYS_KEY, &raw),
            Err(e) => debug!("Failed to serialize extraHolidays: {e}"),
        }
    }

    /// Creates the empty extra-holiday entry for `(country, year)` if it is
    /// absent, and writes the map back immediately. Idempotent; must run
    /// before any consumer reads extras for that year.
    pub fn ensure_year(&self, country: Country, year: i32) {
        let mut map = self.load_map();
        let years = map
            .entry(country.code().to_string())
            .or_insert_with(|| json!({}));
        if !years.is_object() {
            *years = json!({});
        }
        if let Some(years) = years.as_object_mut() {
            years.entry(year.to_string()).or_insert_with(|| json!([]));
        }
        self.persist(&map);
    }

    /// Appends an extra holiday for `(country, year)`. Duplicates are kept
    /// as-is; the union in [`Self::holidays_for`] de-duplicates on read.
    pub fn add_extra_holiday(&self, country: Country, year: i32, date: NaiveDate) {
        let mut map = self.load_map();
        let years = map
            .entry(country.code().to_string())
            .or_insert_with(|| json!({}));
        if !years.is_object() {
            *years = json!({});
        }
        if let Some(years) = years.as_object_mut() {
            let list = years.entry(year.to_string()).or_insert_with(|| json!([]));
            if !list.is_array() {
                *list = json!([]);
            }
            if let Some(list) = list.as_array_mut() {
                list.push(json!(date.format("%Y-%m-%d").to_string()));
            }
        }
        self.persist(&map);
        debug!("Added extra holiday {date} for {country}/{year}");
    }

    /// Extra holidays registered for `(country, year)`, parsed and in
    /// insertion order. Unparseable entries are skipped.
    pub fn extra_for_year(&self, country: Country, year: i32) -> Vec<NaiveDate> {
        let map = self.load_map();
        map.get(country.code())
            .and_then(|years| years.get(year.to_string()))
            .and_then(Value::as_array)
            .map(|list| {
                list.iter()
                    .filter_map(Value::as_str)
                    .filter_map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The effective holiday set for `(country, year)`: built-in list
    /// unioned with the extras, sorted and de-duplicated.
    pub fn holidays_for(&self, country: Country, year: i32) -> Vec<NaiveDate> {
        let mut set: BTreeSet<NaiveDate> = builtin_dates(country).into_iter().collect();
        set.extend(self.extra_for_year(country, year));
        set.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    fn registry() -> HolidayRegistry {
        HolidayRegistry::new(Arc::new(MemoryStore::new()))
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn ensure_year_is_write_through_and_idempotent() {
        let store = Arc::new(MemoryStore::new());
        let registry = HolidayRegistry::new(Arc::clone(&store) as Arc<dyn KeyValue>);

        registry.ensure_year(Country::KR, 2025);
        let first = store.get(EXTRA_HOLIDAYS_KEY).expect("written immediately");
        let parsed: Value = serde_json::from_str(&first).unwrap();
        assert_eq!(parsed["KR"]["2025"], json!([]));

        registry.add_extra_holiday(Country::KR, 2025, date("2025-08-15"));
        registry.ensure_year(Country::KR, 2025);
        assert_eq!(
            registry.extra_for_year(Country::KR, 2025),
            vec![date("2025-08-15")],
            "ensure_year must not reset an existing entry"
        );
    }

    #[test]
    fn duplicates_are_tolerated() {
        let registry = registry();
        registry.add_extra_holiday(Country::US, 2025, date("2025-12-24"));
        registry.add_extra_holiday(Country::US, 2025, date("2025-12-24"));

        assert_eq!(registry.extra_for_year(Country::US, 2025).len(), 2);
        // Union de-duplicates for the effective set
        let effective = registry.holidays_for(Country::US, 2025);
        assert_eq!(
            effective.iter().filter(|d| **d == date("2025-12-24")).count(),
            1
        );
    }

    #[test]
    fn holidays_for_unions_builtin_and_extra_sorted() {
        let registry = registry();
        registry.add_extra_holiday(Country::KR, 2025, date("2025-08-15"));
        registry.add_extra_holiday(Country::KR, 2025, date("2025-02-10"));

        let effective = registry.holidays_for(Country::KR, 2025);
        assert_eq!(effective.len(), KR_HOLIDAYS.len() + 2);
        assert!(effective.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn corrupt_value_reads_as_empty() {
        let store = Arc::new(MemoryStore::new());
        store.set(EXTRA_HOLIDAYS_KEY, "not json at all");
        let registry = HolidayRegistry::new(Arc::clone(&store) as Arc<dyn KeyValue>);

        assert!(registry.extra_for_year(Country::KR, 2025).is_empty());
        assert_eq!(
            registry.holidays_for(Country::US, 2025).len(),
            US_HOLIDAYS.len()
        );

        // Next write replaces the corrupt value with a valid map
        registry.ensure_year(Country::US, 2025);
        let raw = store.get(EXTRA_HOLIDAYS_KEY).unwrap();
        assert!(serde_json::from_str::<Value>(&raw).is_ok());
    }
}
