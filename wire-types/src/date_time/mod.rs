/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

mod format;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// A point in time with nanosecond precision, stored as seconds since the Unix epoch.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct DateTime {
    seconds: i64,
    subsecond_nanos: u32,
}

/// Wire formats a [`DateTime`] can be rendered in.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Format {
    /// RFC 3339, eg. `2019-12-16T23:48:18Z`
    DateTime,
    /// IMF-fixdate, eg. `Mon, 16 Dec 2019 23:48:18 GMT`
    HttpDate,
    /// Seconds since the epoch with an optional fraction, eg. `1576540098.52`
    EpochSeconds,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("timestamp {seconds}s (+{nanos}ns) cannot be represented as a calendar date")]
pub struct DateTimeFormatError {
    seconds: i64,
    nanos: u32,
}

impl DateTime {
    pub fn from_secs(epoch_seconds: i64) -> Self {
        DateTime {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    /// Nanoseconds beyond one second are carried into `seconds`.
    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        DateTime {
            seconds: seconds + (subsecond_nanos / NANOS_PER_SECOND) as i64,
            subsecond_nanos: subsecond_nanos % NANOS_PER_SECOND,
        }
    }

    pub fn from_fractional_secs(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor();
        let nanos = ((epoch_seconds - seconds) * NANOS_PER_SECOND as f64).round() as u32;
        DateTime::from_secs_and_nanos(seconds as i64, nanos)
    }

    pub fn from_system_time(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(after) => DateTime::from_secs_and_nanos(after.as_secs() as i64, after.subsec_nanos()),
            Err(err) => {
                let before = err.duration();
                let mut seconds = -(before.as_secs() as i64);
                let mut nanos = before.subsec_nanos();
                if nanos != 0 {
                    seconds -= 1;
                    nanos = NANOS_PER_SECOND - nanos;
                }
                DateTime::from_secs_and_nanos(seconds, nanos)
            }
        }
    }

    pub fn secs(&self) -> i64 {
        self.seconds
    }

    pub fn subsec_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    pub fn has_subsec_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn fmt(&self, format: Format) -> Result<String, DateTimeFormatError> {
        match format {
            Format::DateTime => format::date_time(self),
            Format::HttpDate => format::http_date(self),
            Format::EpochSeconds => Ok(self.fmt_epoch_seconds()),
        }
    }

    /// Epoch seconds are representable for every `DateTime`, so this cannot fail.
    pub fn fmt_epoch_seconds(&self) -> String {
        format::epoch_seconds(self)
    }

    fn out_of_range(&self) -> DateTimeFormatError {
        DateTimeFormatError {
            seconds: self.seconds,
            nanos: self.subsecond_nanos,
        }
    }
}

impl From<SystemTime> for DateTime {
    fn from(time: SystemTime) -> Self {
        DateTime::from_system_time(time)
    }
}

#[cfg(test)]
mod test {
    use super::{DateTime, Format};
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn formats() {
        let date_time = DateTime::from_secs(1576540098);
        assert_eq!(date_time.fmt(Format::DateTime).unwrap(), "2019-12-16T23:48:18Z");
        assert_eq!(date_time.fmt(Format::EpochSeconds).unwrap(), "1576540098");
        assert_eq!(
            date_time.fmt(Format::HttpDate).unwrap(),
            "Mon, 16 Dec 2019 23:48:18 GMT"
        );

        let date_time = DateTime::from_secs_and_nanos(1576540098, 520_000_000);
        assert_eq!(date_time.fmt(Format::DateTime).unwrap(), "2019-12-16T23:48:18.52Z");
        assert_eq!(date_time.fmt(Format::EpochSeconds).unwrap(), "1576540098.52");
        assert_eq!(
            date_time.fmt(Format::HttpDate).unwrap(),
            "Mon, 16 Dec 2019 23:48:18.520 GMT"
        );
    }

    #[test]
    fn trailing_zero_seconds_are_kept() {
        let date_time = DateTime::from_secs(1576540090);
        assert_eq!(date_time.fmt(Format::DateTime).unwrap(), "2019-12-16T23:48:10Z");
    }

    #[test]
    fn nanos_carry_into_seconds() {
        let date_time = DateTime::from_secs_and_nanos(10, 1_500_000_000);
        assert_eq!(date_time.secs(), 11);
        assert_eq!(date_time.subsec_nanos(), 500_000_000);
    }

    #[test]
    fn fractional_seconds() {
        let date_time = DateTime::from_fractional_secs(5.25);
        assert_eq!(date_time.secs(), 5);
        assert_eq!(date_time.subsec_nanos(), 250_000_000);
        assert_eq!(date_time.fmt(Format::EpochSeconds).unwrap(), "5.25");
    }

    #[test]
    fn system_time_before_epoch() {
        let time = UNIX_EPOCH - Duration::from_millis(1500);
        let date_time = DateTime::from_system_time(time);
        assert_eq!(date_time.secs(), -2);
        assert_eq!(date_time.subsec_nanos(), 500_000_000);
        assert_eq!(
            date_time.fmt(Format::DateTime).unwrap(),
            "1969-12-31T23:59:58.5Z"
        );
        assert_eq!(date_time.fmt(Format::EpochSeconds).unwrap(), "-1.5");
    }

    #[test]
    fn out_of_range_dates_fail_to_format() {
        let date_time = DateTime::from_secs(i64::MAX);
        date_time
            .fmt(Format::DateTime)
            .expect_err("not representable");
        date_time
            .fmt(Format::HttpDate)
            .expect_err("not representable");
        assert_eq!(
            date_time.fmt(Format::EpochSeconds).unwrap(),
            i64::MAX.to_string()
        );
    }

    proptest::proptest! {
        #[test]
        fn date_time_output_is_rfc3339(secs in -62_135_596_800i64..253_402_300_799i64, nanos in 0u32..1_000_000_000u32) {
            let date_time = DateTime::from_secs_and_nanos(secs, nanos);
            let formatted = date_time.fmt(Format::DateTime).unwrap();
            let parsed = chrono::DateTime::parse_from_rfc3339(&formatted).unwrap();
            proptest::prop_assert_eq!(parsed.timestamp(), secs);
            proptest::prop_assert_eq!(parsed.timestamp_subsec_nanos(), nanos);
        }
    }
}
