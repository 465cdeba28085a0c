//! Revenue records as delivered by a record source.
//!
//! The serialized shape follows the income-statement collection the
//! upstream API serves: `ticker`, `index` (reporting date) and
//! `Total Revenue`. Everything else on the wire (`_id`, `year`, ...) is
//! ignored.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One reported revenue amount for one company at one point in time.
///
/// Decoding never fails on a field's value: a null, missing or oddly typed
/// field decodes to an empty string or `None`, and [`RevenueRecord::validate`]
/// rejects the record later so aggregation can skip it alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueRecord {
    /// Ticker symbol.
    #[serde(
        rename = "ticker",
        alias = "company",
        default,
        deserialize_with = "loose_text"
    )]
    pub company: String,

    /// Reporting date, ISO-8601.
    #[serde(
        rename = "index",
        alias = "date",
        default,
        deserialize_with = "loose_text"
    )]
    pub date: String,

    /// Revenue in base currency units, unscaled.
    #[serde(
        rename = "Total Revenue",
        alias = "revenue",
        default,
        deserialize_with = "loose_amount"
    )]
    pub revenue: Option<f64>,
}

/// Why a record cannot take part in aggregation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("record has no company identifier")]
    MissingCompany,

    #[error("unparseable date '{date}' for {company}")]
    UnparseableDate { company: String, date: String },

    #[error("missing or non-numeric revenue amount for {company} at {date}")]
    MissingAmount { company: String, date: String },

    #[error("non-finite revenue amount {amount} for {company} at {date}")]
    NonFiniteAmount {
        company: String,
        date: String,
        amount: f64,
    },
}

/// A record that passed validation, borrowing the company from its source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidRecord<'a> {
    pub company: &'a str,
    pub year: i32,
    pub amount: f64,
}

impl RevenueRecord {
    pub fn new(company: impl Into<String>, date: impl Into<String>, revenue: f64) -> Self {
        Self {
            company: company.into(),
            date: date.into(),
            revenue: Some(revenue),
        }
    }

    /// Reporting timestamp in UTC, if the date parses.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.date)
    }

    /// Check the record and extract its calendar year (UTC).
    pub fn validate(&self) -> Result<ValidRecord<'_>, RecordError> {
        let company = self.company.trim();
        if company.is_empty() {
            return Err(RecordError::MissingCompany);
        }

        let year = self
            .timestamp()
            .map(|ts| ts.year())
            .ok_or_else(|| RecordError::UnparseableDate {
                company: company.to_string(),
                date: self.date.clone(),
            })?;

        let amount = self.revenue.ok_or_else(|| RecordError::MissingAmount {
            company: company.to_string(),
            date: self.date.clone(),
        })?;

        if !amount.is_finite() {
            return Err(RecordError::NonFiniteAmount {
                company: company.to_string(),
                date: self.date.clone(),
                amount,
            });
        }

        Ok(ValidRecord {
            company,
            year,
            amount,
        })
    }
}

/// Parse an ISO-8601 timestamp. Values without an offset are taken as UTC.
///
/// Accepts RFC 3339 (`2024-09-28T00:00:00Z`, `...+09:00`), naive date-times
/// with either `T` or a space separator, and bare dates.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Any scalar a record field may arrive as.
enum Loose {
    Text(String),
    Number(f64),
    Absent,
}

struct LooseVisitor;

impl<'de> Visitor<'de> for LooseVisitor {
    type Value = Loose;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any value")
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Loose, E> {
        Ok(Loose::Absent)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Loose, E> {
        Ok(Loose::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Loose, E> {
        Ok(Loose::Number(v as f64))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Loose, E> {
        Ok(Loose::Number(v as f64))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Loose, E> {
        Ok(Loose::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Loose, E> {
        Ok(Loose::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Loose, E> {
        Ok(Loose::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Loose, E> {
        Ok(Loose::Text(v))
    }

    fn visit_bytes<E: de::Error>(self, _: &[u8]) -> Result<Loose, E> {
        Ok(Loose::Absent)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Loose, E> {
        Ok(Loose::Absent)
    }

    fn visit_none<E: de::Error>(self) -> Result<Loose, E> {
        Ok(Loose::Absent)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Loose, D::Error> {
        deserializer.deserialize_any(LooseVisitor)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Loose, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Loose::Absent)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Loose, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Loose::Absent)
    }
}

/// Strings pass through, numbers are printed, anything else is empty.
fn loose_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match deserializer.deserialize_any(LooseVisitor)? {
        Loose::Text(text) => text,
        Loose::Number(n) => n.to_string(),
        Loose::Absent => String::new(),
    })
}

/// Numbers pass through, numeric strings are parsed, anything else is `None`.
fn loose_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match deserializer.deserialize_any(LooseVisitor)? {
        Loose::Number(n) => Some(n),
        Loose::Text(text) => text.trim().parse().ok(),
        Loose::Absent => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_timestamp_shapes() {
        for raw in [
            "2024-09-28",
            "2024-09-28T00:00:00",
            "2024-09-28 00:00:00",
            "2024-09-28T00:00:00.000",
            "2024-09-28T00:00:00Z",
        ] {
            let ts = parse_timestamp(raw).unwrap_or_else(|| panic!("failed on {raw}"));
            assert_eq!(ts.year(), 2024, "{raw}");
        }
    }

    #[test]
    fn year_is_taken_in_utc() {
        // 00:30 on Jan 1st in Tokyo is still Dec 31st in UTC.
        let ts = parse_timestamp("2024-01-01T00:30:00+09:00").unwrap();
        assert_eq!(ts.year(), 2023);
    }

    #[test]
    fn rejects_garbage_dates() {
        assert!(parse_timestamp("not a date").is_none());
        assert!(parse_timestamp("2024-13-40").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn validate_extracts_year_and_amount() {
        let rec = RevenueRecord::new(" AAPL ", "2023-09-30", 383_285_000_000.0);
        let valid = rec.validate().unwrap();
        assert_eq!(valid.company, "AAPL");
        assert_eq!(valid.year, 2023);
        assert_eq!(valid.amount, 383_285_000_000.0);
    }

    #[test]
    fn validate_reports_each_failure() {
        let blank = RevenueRecord::new("  ", "2023-01-01", 1.0);
        assert_eq!(blank.validate(), Err(RecordError::MissingCompany));

        let bad_date = RevenueRecord::new("MSFT", "someday", 1.0);
        assert!(matches!(
            bad_date.validate(),
            Err(RecordError::UnparseableDate { .. })
        ));

        let missing = RevenueRecord {
            company: "MSFT".into(),
            date: "2023-06-30".into(),
            revenue: None,
        };
        assert!(matches!(
            missing.validate(),
            Err(RecordError::MissingAmount { .. })
        ));

        let nan = RevenueRecord::new("MSFT", "2023-06-30", f64::NAN);
        assert!(matches!(
            nan.validate(),
            Err(RecordError::NonFiniteAmount { .. })
        ));
    }

    #[test]
    fn deserializes_upstream_wire_shape() {
        let json = r#"{
            "_id": "665f0c",
            "ticker": "NVDA",
            "index": "2024-01-28T00:00:00.000",
            "year": "2024",
            "Total Revenue": 60922000000
        }"#;
        let rec: RevenueRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.company, "NVDA");
        assert_eq!(rec.revenue, Some(60_922_000_000.0));
        assert_eq!(rec.validate().unwrap().year, 2024);
    }

    #[test]
    fn deserializes_aliases_and_null_amount() {
        let json = r#"{"company": "TSLA", "date": "2022-12-31", "revenue": null}"#;
        let rec: RevenueRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.company, "TSLA");
        assert_eq!(rec.revenue, None);
    }

    #[test]
    fn null_or_missing_date_decodes_and_fails_validation() {
        let null_date: RevenueRecord =
            serde_json::from_str(r#"{"ticker": "META", "index": null, "Total Revenue": 1.0}"#)
                .unwrap();
        assert_eq!(null_date.date, "");
        assert!(matches!(
            null_date.validate(),
            Err(RecordError::UnparseableDate { .. })
        ));

        let no_date: RevenueRecord =
            serde_json::from_str(r#"{"ticker": "META", "Total Revenue": 1.0}"#).unwrap();
        assert!(matches!(
            no_date.validate(),
            Err(RecordError::UnparseableDate { .. })
        ));
    }

    #[test]
    fn odd_field_types_decode_leniently() {
        let rec: RevenueRecord = serde_json::from_str(
            r#"{"ticker": {"$oid": "x"}, "index": "2024-12-31", "Total Revenue": "637959000000"}"#,
        )
        .unwrap();
        assert_eq!(rec.company, "");
        assert_eq!(rec.revenue, Some(637_959_000_000.0));
        assert_eq!(rec.validate(), Err(RecordError::MissingCompany));

        let text_amount: RevenueRecord =
            serde_json::from_str(r#"{"ticker": "MSFT", "index": "2024-06-30", "Total Revenue": "lots"}"#)
                .unwrap();
        assert!(matches!(
            text_amount.validate(),
            Err(RecordError::MissingAmount { .. })
        ));
    }
}
