//! Video length decoding and display.

use crate::error::StatsError;
use jiff::fmt::temporal::SpanParser;
use jiff::{SpanRelativeTo, Unit};

static PARSER: SpanParser = SpanParser::new();

/// Decodes an ISO 8601 duration as reported in `contentDetails.duration` into whole seconds.
///
/// Days count as 24 hours and weeks as 7 days, which covers the `P1DT2H` style the API uses
/// for very long uploads. Fractional seconds are truncated.
pub fn parse_duration_seconds(duration: &str) -> Result<u64, StatsError> {
    let invalid = || StatsError::InvalidDuration(duration.to_string());

    // ISO 8601 only; `Span`'s `FromStr` would also take "1h 2m" and "1:02:03"
    let span = PARSER.parse_span(duration).map_err(|_| invalid())?;
    if span.is_negative() {
        return Err(invalid());
    }

    // years and months have no fixed length and make this fail
    let seconds = span
        .total((Unit::Second, SpanRelativeTo::days_are_24_hours()))
        .map_err(|_| invalid())?;

    Ok(seconds.trunc() as u64)
}

/// Formats a number of seconds as `HHh:MMm:SSs`.
///
/// Hours are zero-padded to two digits but not capped.
pub fn format_duration(seconds: u64) -> String {
    let (hours, remainder) = (seconds / 3600, seconds % 3600);
    let (minutes, seconds) = (remainder / 60, remainder % 60);
    format!("{hours:02}h:{minutes:02}m:{seconds:02}s")
}
