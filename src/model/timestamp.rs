//! Lenient timestamp parsing for stored records
//!
//! Records are written as RFC 3339. Older files may carry naive ISO 8601
//! timestamps without an offset (`2024-01-02T03:04:05.123456`); those are
//! read as UTC.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer};

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub fn parse(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = s.parse::<DateTime<Utc>>() {
        return Some(dt);
    }
    NaiveDateTime::parse_from_str(s, NAIVE_FORMAT)
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse(&s).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", s)))
}

pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) => parse(&s)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", s))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse("2024-01-02T03:04:05+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 2, 1, 4, 5).unwrap());
        assert_eq!(parse(&dt.to_rfc3339()), Some(dt));
    }

    #[test]
    fn test_parse_naive_as_utc() {
        let dt = parse("2024-01-02T03:04:05.123456").unwrap();
        let base = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(dt, base + chrono::Duration::microseconds(123456));
        assert_eq!(
            parse("2024-01-02T03:04:05").unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse("yesterday").is_none());
        assert!(parse("2024-01-02").is_none());
    }
}
