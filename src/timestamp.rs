use chrono::{DateTime, TimeZone, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref TIMESTAMP_PATTERN: Regex =
        Regex::new(r"^/Date\((\d+)-(\d+)\)/$").expect("bad pattern");
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TimestampError {
    #[error("Invalid Timestamp")]
    InvalidTimestamp,
}

/// Decodes the service's `/Date(<millis>-<marker>)/` date serialization
/// into a UTC timestamp.
///
/// The second digit group looks like a timezone marker, but the service
/// never applies it to the value, so neither does this. Callers only learn
/// valid vs invalid: pattern mismatches, empty input and numeric overflow
/// all collapse into the one `InvalidTimestamp` value.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, TimestampError> {
    let groups = TIMESTAMP_PATTERN
        .captures(raw)
        .ok_or(TimestampError::InvalidTimestamp)?;

    let millis: i64 = groups[1]
        .parse()
        .map_err(|_| TimestampError::InvalidTimestamp)?;

    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or(TimestampError::InvalidTimestamp)
}
