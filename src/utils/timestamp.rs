//! Epoch timestamp conversion.
//!
//! Feed timestamps are UTC epoch seconds, possibly fractional. They are shown
//! in the configured IANA zone as ISO-8601 with a numeric offset. Fractional
//! seconds are kept to microsecond precision and only printed when non-zero.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use thiserror::Error;

const FORMAT_WHOLE_SECONDS: &str = "%Y-%m-%dT%H:%M:%S%:z";
const FORMAT_MICROSECONDS: &str = "%Y-%m-%dT%H:%M:%S%.6f%:z";

/// Error converting a feed timestamp.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimestampError {
    /// The value is NaN or infinite.
    #[error("timestamp is not a finite number: {0}")]
    NotFinite(f64),

    /// The value is outside the range chrono can represent.
    #[error("timestamp out of range: {0}")]
    OutOfRange(f64),

    /// A string-encoded timestamp that is not a number.
    #[error("timestamp is not numeric: {0:?}")]
    NotNumeric(String),
}

/// Converts UTC epoch seconds to `tz` and formats as ISO-8601 with offset.
///
/// ```
/// use quake_watch::utils::format_epoch_in_zone;
///
/// let s = format_epoch_in_zone(1_700_000_000.0, chrono_tz::UTC).unwrap();
/// assert_eq!(s, "2023-11-14T22:13:20+00:00");
/// ```
pub fn format_epoch_in_zone(epoch_seconds: f64, tz: Tz) -> Result<String, TimestampError> {
    let utc = epoch_to_utc(epoch_seconds)?;
    Ok(format_in_zone(&utc, tz))
}

fn epoch_to_utc(epoch_seconds: f64) -> Result<DateTime<Utc>, TimestampError> {
    if !epoch_seconds.is_finite() {
        return Err(TimestampError::NotFinite(epoch_seconds));
    }
    let micros = (epoch_seconds * 1_000_000.0).round_ties_even();
    if micros < i64::MIN as f64 || micros > i64::MAX as f64 {
        return Err(TimestampError::OutOfRange(epoch_seconds));
    }
    #[allow(clippy::cast_possible_truncation)] // range checked above
    DateTime::<Utc>::from_timestamp_micros(micros as i64)
        .ok_or(TimestampError::OutOfRange(epoch_seconds))
}

fn format_in_zone(utc: &DateTime<Utc>, tz: Tz) -> String {
    let local = utc.with_timezone(&tz);
    if utc.timestamp_subsec_micros() == 0 {
        local.format(FORMAT_WHOLE_SECONDS).to_string()
    } else {
        local.format(FORMAT_MICROSECONDS).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_whole_seconds() {
        assert_eq!(
            format_epoch_in_zone(1_700_000_000.0, chrono_tz::UTC).unwrap(),
            "2023-11-14T22:13:20+00:00"
        );
    }

    #[test]
    fn test_fractional_seconds_use_six_digits() {
        assert_eq!(
            format_epoch_in_zone(1_700_000_000.5, chrono_tz::UTC).unwrap(),
            "2023-11-14T22:13:20.500000+00:00"
        );
    }

    #[test]
    fn test_dst_zone_uses_standard_offset_in_winter() {
        assert_eq!(
            format_epoch_in_zone(1_700_000_000.0, chrono_tz::America::New_York).unwrap(),
            "2023-11-14T17:13:20-05:00"
        );
    }

    #[test]
    fn test_dst_zone_uses_daylight_offset_in_summer() {
        assert_eq!(
            format_epoch_in_zone(1_690_000_000.0, chrono_tz::America::New_York).unwrap(),
            "2023-07-22T00:26:40-04:00"
        );
    }

    #[test]
    fn test_offset_switches_at_transition_instant() {
        // Europe/Athens leaves EET at 2024-03-31T01:00:00Z
        let before = format_epoch_in_zone(1_711_846_799.0, chrono_tz::Europe::Athens).unwrap();
        let after = format_epoch_in_zone(1_711_846_800.0, chrono_tz::Europe::Athens).unwrap();
        assert_eq!(before, "2024-03-31T02:59:59+02:00");
        assert_eq!(after, "2024-03-31T04:00:00+03:00");
    }

    #[test]
    fn test_crosses_date_line_into_next_day() {
        assert_eq!(
            format_epoch_in_zone(1_700_000_000.0, chrono_tz::Europe::Athens).unwrap(),
            "2023-11-15T00:13:20+02:00"
        );
    }

    #[test]
    fn test_non_finite_is_rejected() {
        assert!(matches!(
            format_epoch_in_zone(f64::NAN, chrono_tz::UTC),
            Err(TimestampError::NotFinite(_))
        ));
        assert!(format_epoch_in_zone(f64::INFINITY, chrono_tz::UTC).is_err());
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        assert_eq!(
            format_epoch_in_zone(1e18, chrono_tz::UTC),
            Err(TimestampError::OutOfRange(1e18))
        );
    }
}
