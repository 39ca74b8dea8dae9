/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use super::Instant;
use serde::ser::{Serialize, SerializeTuple, Serializer};

/// Human-readable formats get the same RFC 3339 text as `Display`; compact formats get
/// `(seconds, subsecond_nanos)`.
impl Serialize for Instant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            return serializer.collect_str(self);
        }
        let mut parts = serializer.serialize_tuple(2)?;
        parts.serialize_element(&self.seconds)?;
        parts.serialize_element(&self.subsecond_nanos)?;
        parts.end()
    }
}

#[cfg(test)]
mod test {
    use crate::Instant;

    #[test]
    fn serializes_as_rfc3339_text() {
        let instant = Instant::from_secs_and_nanos(1576540098, 520_000_000);
        assert_eq!(
            serde_json::to_string(&instant).unwrap(),
            r#""2019-12-16T23:48:18.52Z""#
        );
    }
}
