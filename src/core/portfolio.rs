//! Portfolio record model and its persisted wire format.
//!
//! Field names on the wire are fixed by the stored JSON schema
//! (`totalInvestment`, `createdAt`, and per-stock `name`/`ratio`/`start`/
//! `end`/`country`), so the structs carry serde renames rather than the
//! Rust-native names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Market whose holiday calendar applies to a stock's date range.
///
/// Unknown country codes collapse to `US` on parse and on deserialize, so
/// stale or hand-edited records never fail to load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Country {
    KR,
    #[default]
    US,
}

impl Country {
    pub const ALL: [Country; 2] = [Country::KR, Country::US];

    pub fn code(&self) -> &'static str {
        match self {
            Country::KR => "KR",
            Country::US => "US",
        }
    }
}

impl From<&str> for Country {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "KR" => Country::KR,
            _ => Country::US,
        }
    }
}

impl From<String> for Country {
    fn from(s: String) -> Self {
        Country::from(s.as_str())
    }
}

impl From<Country> for String {
    fn from(country: Country) -> Self {
        country.code().to_string()
    }
}

impl std::str::FromStr for Country {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Country::from(s))
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Accepts a number, a numeric string, an empty string, or null; anything
/// non-numeric reads as 0 instead of rejecting the whole record.
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Num(n)) => n,
        Some(Raw::Text(s)) => s.trim().parse().unwrap_or(0.0),
        None => 0.0,
    })
}

/// One stock line in a portfolio: a percentage of the total investment and
/// the date range over which it is spread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockAllocation {
    #[serde(default)]
    pub name: String,
    /// Percentage of the total investment, 0..100+ (unclamped).
    #[serde(default, deserialize_with = "lenient_number")]
    pub ratio: f64,
    /// Inclusive range start, `YYYY-MM-DD` or empty.
    #[serde(default)]
    pub start: String,
    /// Inclusive range end, `YYYY-MM-DD` or empty.
    #[serde(default)]
    pub end: String,
    #[serde(default)]
    pub country: Country,
}

/// A saved portfolio. `created_at` is stamped by the store on create and on
/// update, so drafts built by callers leave it unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_investment: f64,
    #[serde(default)]
    pub stocks: Vec<StockAllocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_country_defaults_to_us() {
        assert_eq!(Country::from("KR"), Country::KR);
        assert_eq!(Country::from("kr"), Country::KR);
        assert_eq!(Country::from("US"), Country::US);
        assert_eq!(Country::from("JP"), Country::US);
        assert_eq!(Country::from(""), Country::US);
    }

    #[test]
    fn ratio_accepts_numbers_strings_and_junk() {
        let cases = [
            (r#"{"name":"A","ratio":30}"#, 30.0),
            (r#"{"name":"A","ratio":"45.5"}"#, 45.5),
            (r#"{"name":"A","ratio":""}"#, 0.0),
            (r#"{"name":"A","ratio":"abc"}"#, 0.0),
            (r#"{"name":"A","ratio":null}"#, 0.0),
            (r#"{"name":"A"}"#, 0.0),
        ];
        for (raw, expected) in cases {
            let stock: StockAllocation = serde_json::from_str(raw).unwrap();
            assert_eq!(stock.ratio, expected, "input: {raw}");
        }
    }

    #[test]
    fn portfolio_uses_camel_case_wire_names() {
        let raw = r#"{
            "title": "Tech",
            "owner": "dana",
            "totalInvestment": 1000000,
            "stocks": [
                {"name": "AAPL", "ratio": 30, "start": "2025-06-09", "end": "2025-06-13", "country": "US"}
            ],
            "createdAt": "2025-06-01T09:30:00Z"
        }"#;
        let portfolio: Portfolio = serde_json::from_str(raw).unwrap();
        assert_eq!(portfolio.total_investment, 1_000_000.0);
        assert_eq!(portfolio.stocks.len(), 1);
        assert_eq!(portfolio.stocks[0].country, Country::US);
        assert!(portfolio.created_at.is_some());

        let back = serde_json::to_string(&portfolio).unwrap();
        assert!(back.contains("\"totalInvestment\""));
        assert!(back.contains("\"createdAt\""));
    }

    #[test]
    fn missing_fields_read_as_defaults() {
        let portfolio: Portfolio = serde_json::from_str(r#"{"title":"Empty"}"#).unwrap();
        assert_eq!(portfolio.owner, "");
        assert_eq!(portfolio.total_investment, 0.0);
        assert!(portfolio.stocks.is_empty());
        assert!(portfolio.created_at.is_none());
    }
}
