/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::{DateTime, DateTimeFormatError, NANOS_PER_SECOND};
use chrono::{TimeZone, Utc};

fn to_chrono(date_time: &DateTime) -> Result<chrono::DateTime<Utc>, DateTimeFormatError> {
    Utc.timestamp_opt(date_time.seconds, date_time.subsecond_nanos)
        .single()
        .ok_or_else(|| date_time.out_of_range())
}

/// Nanoseconds as a fraction with trailing zeroes removed, eg. `520_000_000` => `52`
fn trimmed_fraction(nanos: u32) -> String {
    format!("{:09}", nanos).trim_end_matches('0').to_owned()
}

pub(super) fn date_time(date_time: &DateTime) -> Result<String, DateTimeFormatError> {
    let chrono = to_chrono(date_time)?;
    let mut out = chrono.format("%Y-%m-%dT%H:%M:%S").to_string();
    if date_time.has_subsec_nanos() {
        out.push('.');
        out.push_str(&trimmed_fraction(date_time.subsecond_nanos));
    }
    out.push('Z');
    Ok(out)
}

/// Fractional seconds are written with millisecond precision
pub(super) fn http_date(date_time: &DateTime) -> Result<String, DateTimeFormatError> {
    let chrono = to_chrono(date_time)?;
    let mut out = chrono.format("%a, %d %b %Y %H:%M:%S").to_string();
    if date_time.has_subsec_nanos() {
        out.push_str(&format!(".{:03}", date_time.subsecond_nanos / 1_000_000));
    }
    out.push_str(" GMT");
    Ok(out)
}

pub(super) fn epoch_seconds(date_time: &DateTime) -> String {
    if !date_time.has_subsec_nanos() {
        return date_time.seconds.to_string();
    }
    if date_time.seconds >= 0 {
        format!(
            "{}.{}",
            date_time.seconds,
            trimmed_fraction(date_time.subsecond_nanos)
        )
    } else {
        // nanos count forward from a negative second, eg. (-2, 0.5s) is -1.5
        let whole = date_time.seconds + 1;
        format!(
            "-{}.{}",
            whole.unsigned_abs(),
            trimmed_fraction(NANOS_PER_SECOND - date_time.subsecond_nanos)
        )
    }
}
