/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use super::{Instant, NANOS_PER_SECOND};
use chrono::{DateTime, Utc};

/// Failure to parse an RFC 3339 timestamp.
#[derive(Debug, thiserror::Error)]
#[error("invalid RFC 3339 timestamp `{input}`")]
pub struct ParseError {
    input: String,
    #[source]
    source: chrono::ParseError,
}

/// Digits of `nanos` as a fraction, without trailing zeroes. Empty when `nanos` is zero.
fn trimmed_fraction(nanos: u32) -> String {
    if nanos == 0 {
        return String::new();
    }
    format!("{:09}", nanos).trim_end_matches('0').to_owned()
}

pub(super) mod rfc3339 {
    use super::*;

    /// `None` when the instant is outside chrono's calendar range.
    pub(in crate::instant) fn format(instant: &Instant) -> Option<String> {
        let date_time = DateTime::<Utc>::from_timestamp(instant.seconds, instant.subsecond_nanos)?;
        let mut out = date_time.format("%Y-%m-%dT%H:%M:%S").to_string();
        let fraction = trimmed_fraction(instant.subsecond_nanos);
        if !fraction.is_empty() {
            out.push('.');
            out.push_str(&fraction);
        }
        out.push('Z');
        Some(out)
    }

    pub(in crate::instant) fn parse(s: &str) -> Result<Instant, ParseError> {
        let parsed = DateTime::parse_from_rfc3339(s).map_err(|source| ParseError {
            input: s.to_owned(),
            source,
        })?;
        Ok(Instant::from_secs_and_nanos(
            parsed.timestamp(),
            parsed.timestamp_subsec_nanos(),
        ))
    }
}

pub(super) mod epoch_seconds {
    use super::*;

    pub(in crate::instant) fn format(instant: &Instant) -> String {
        match instant.subsecond_nanos {
            0 => instant.seconds.to_string(),
            nanos if instant.seconds < 0 => format!(
                "-{}.{}",
                (instant.seconds + 1).unsigned_abs(),
                trimmed_fraction(NANOS_PER_SECOND - nanos)
            ),
            nanos => format!("{}.{}", instant.seconds, trimmed_fraction(nanos)),
        }
    }
}
