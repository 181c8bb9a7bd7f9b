//! Time related utils.

use crate::{Error, Result};
use chrono::Utc;

/// DateTime used across the signers, always in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Create a new DateTime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into date: `20220301`
pub fn format_date(t: DateTime) -> String {
    t.format("%Y%m%d").to_string()
}

/// Format time into ISO8601: `20220313T072004Z`
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Format time into RFC 2822: `Tue, 01 Mar 2022 08:12:34 +0000`
///
/// This is the form the V2 `Date` header is generated in. The day is always
/// two digits.
pub fn format_rfc2822(t: DateTime) -> String {
    t.format("%a, %d %b %Y %H:%M:%S %z").to_string()
}

/// Parse RFC 2822 time into DateTime.
pub fn parse_rfc2822(s: &str) -> Result<DateTime> {
    let t = chrono::DateTime::parse_from_rfc2822(s)
        .map_err(|e| Error::unexpected(format!("parse '{s}' as rfc2822 failed")).with_source(e))?;

    Ok(t.with_timezone(&Utc))
}
