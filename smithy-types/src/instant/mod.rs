/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Timestamps for `smithy.api#Timestamp` members.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

mod format;

#[cfg(feature = "serde-serialize")]
mod ser;

pub use format::ParseError;

const NANOS_PER_SECOND: u32 = 1_000_000_000;
const MILLIS_PER_SECOND: i64 = 1_000;
const NANOS_PER_MILLI: u32 = 1_000_000;

/// A point in time, stored as whole seconds since the Unix epoch plus a sub-second
/// nanosecond component.
///
/// `subsecond_nanos` always moves time *forward*, so one nanosecond before the epoch is
/// `seconds: -1, subsecond_nanos: 999_999_999`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    /// Creates an `Instant` from whole seconds since the epoch.
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    /// Creates an `Instant` from seconds and a sub-second nanosecond component.
    ///
    /// Nanoseconds beyond one second carry into `seconds`.
    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds: seconds.saturating_add(i64::from(subsecond_nanos / NANOS_PER_SECOND)),
            subsecond_nanos: subsecond_nanos % NANOS_PER_SECOND,
        }
    }

    /// Creates an `Instant` from milliseconds since the epoch.
    pub fn from_epoch_millis(epoch_millis: i64) -> Self {
        let seconds = epoch_millis.div_euclid(MILLIS_PER_SECOND);
        let millis = epoch_millis.rem_euclid(MILLIS_PER_SECOND) as u32;
        Instant {
            seconds,
            subsecond_nanos: millis * NANOS_PER_MILLI,
        }
    }

    /// Creates an `Instant` from fractional seconds since the epoch.
    ///
    /// Precision below a nanosecond is truncated.
    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor();
        let fraction = epoch_seconds - seconds;
        Instant {
            seconds: seconds as i64,
            subsecond_nanos: ((fraction * f64::from(NANOS_PER_SECOND)) as u32)
                .min(NANOS_PER_SECOND - 1),
        }
    }

    /// Converts a `SystemTime`, including times before the epoch.
    ///
    /// Times beyond the `i64` second range saturate.
    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(since) => Instant {
                seconds: i64::try_from(since.as_secs()).unwrap_or(i64::MAX),
                subsecond_nanos: since.subsec_nanos(),
            },
            Err(err) => {
                let before = err.duration();
                let (seconds, subsecond_nanos) = match before.subsec_nanos() {
                    0 => (-i128::from(before.as_secs()), 0),
                    nanos => (-i128::from(before.as_secs()) - 1, NANOS_PER_SECOND - nanos),
                };
                Instant {
                    seconds: i64::try_from(seconds).unwrap_or(i64::MIN),
                    subsecond_nanos,
                }
            }
        }
    }

    /// Whole seconds since the epoch.
    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    /// Sub-second component in nanoseconds.
    pub fn subsec_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    /// Milliseconds since the epoch, truncating sub-millisecond precision.
    pub fn epoch_millis(&self) -> i64 {
        self.seconds
            .saturating_mul(MILLIS_PER_SECOND)
            .saturating_add(i64::from(self.subsecond_nanos / NANOS_PER_MILLI))
    }

    /// Fractional seconds since the epoch.
    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + f64::from(self.subsecond_nanos) / f64::from(NANOS_PER_SECOND)
    }

    /// Returns true if the sub-second component is non-zero.
    pub fn has_subsec_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }
}

impl From<SystemTime> for Instant {
    fn from(system_time: SystemTime) -> Self {
        Instant::from_system_time(system_time)
    }
}

/// Failure to convert an [`Instant`] into another time representation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{instant} can't be represented as a `SystemTime` on this platform")]
pub struct ConversionError {
    instant: Instant,
}

impl TryFrom<Instant> for SystemTime {
    type Error = ConversionError;

    fn try_from(instant: Instant) -> Result<Self, Self::Error> {
        let converted = if instant.seconds >= 0 {
            UNIX_EPOCH.checked_add(Duration::new(
                instant.seconds.unsigned_abs(),
                instant.subsecond_nanos,
            ))
        } else {
            UNIX_EPOCH
                .checked_sub(Duration::from_secs(instant.seconds.unsigned_abs()))
                .and_then(|time| {
                    time.checked_add(Duration::from_nanos(u64::from(instant.subsecond_nanos)))
                })
        };
        converted.ok_or(ConversionError { instant })
    }
}

/// Parses an RFC 3339 timestamp, the form `Display` writes.
impl FromStr for Instant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        format::rfc3339::parse(s)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match format::rfc3339::format(self) {
            Some(formatted) => f.write_str(&formatted),
            // Out of the calendar range chrono supports; fall back to a lossless representation.
            None => f.write_str(&format::epoch_seconds::format(self)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Instant;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    #[test]
    fn display_is_rfc3339() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(instant.to_string(), "2019-12-16T23:48:18Z");

        let instant = Instant::from_secs_and_nanos(1576540098, 520_000_000);
        assert_eq!(instant.to_string(), "2019-12-16T23:48:18.52Z");
    }

    #[test]
    fn trailing_zero_seconds_are_kept() {
        let instant = Instant::from_epoch_seconds(1576540090);
        assert_eq!(instant.to_string(), "2019-12-16T23:48:10Z");
    }

    #[test]
    fn display_outside_calendar_range_uses_epoch_seconds() {
        assert_eq!(
            Instant::from_epoch_seconds(i64::MAX).to_string(),
            "9223372036854775807"
        );
        assert_eq!(
            Instant::from_secs_and_nanos(i64::MIN, 500_000_000).to_string(),
            "-9223372036854775807.5"
        );
    }

    #[test]
    fn parse_round_trips_display() {
        let instant = Instant::from_secs_and_nanos(1576540098, 520_000_000);
        assert_eq!(instant.to_string().parse::<Instant>().unwrap(), instant);
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = "yesterday".parse::<Instant>().unwrap_err();
        assert_eq!(err.to_string(), "invalid RFC 3339 timestamp `yesterday`");
        assert!("Mon, 16 Dec 2019 23:48:18 GMT".parse::<Instant>().is_err());
    }

    #[test]
    fn parse_rfc3339_with_offset() {
        let instant: Instant = "2019-12-16T23:48:18+01:00".parse().unwrap();
        assert_eq!(instant.epoch_seconds(), 1576540098 - 3600);
    }

    #[test]
    fn millis() {
        let instant = Instant::from_epoch_millis(-1);
        assert_eq!(instant.epoch_seconds(), -1);
        assert_eq!(instant.subsec_nanos(), 999_000_000);
        assert_eq!(instant.epoch_millis(), -1);
        assert_eq!(Instant::from_epoch_millis(1_500).epoch_millis(), 1_500);
    }

    #[test]
    fn system_time_before_epoch() {
        let before = UNIX_EPOCH - Duration::from_millis(1_500);
        let instant = Instant::from_system_time(before);
        assert_eq!(instant.epoch_seconds(), -2);
        assert_eq!(instant.subsec_nanos(), 500_000_000);
        assert_eq!(SystemTime::try_from(instant).unwrap(), before);
    }

    #[test]
    fn extreme_instants_convert_without_panicking() {
        for instant in [
            Instant::from_epoch_seconds(i64::MAX),
            Instant::from_secs_and_nanos(i64::MAX, 999_999_999),
            Instant::from_epoch_seconds(i64::MIN),
            Instant::from_secs_and_nanos(i64::MIN, 1),
        ] {
            match SystemTime::try_from(instant) {
                Ok(time) => assert_eq!(Instant::from_system_time(time), instant),
                Err(err) => assert!(err.to_string().contains("can't be represented")),
            }
        }
    }

    #[test]
    fn nanos_carry_into_seconds() {
        let instant = Instant::from_secs_and_nanos(1, 1_500_000_000);
        assert_eq!(instant, Instant::from_secs_and_nanos(2, 500_000_000));
    }

    #[test]
    fn from_f64() {
        let instant = Instant::from_f64(1576540098.25);
        assert_eq!(instant.epoch_seconds(), 1576540098);
        assert_eq!(instant.subsec_nanos(), 250_000_000);
        assert_eq!(instant.epoch_fractional_seconds(), 1576540098.25);
    }
}
