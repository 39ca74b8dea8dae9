/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Member value support for [`shape!`](crate::shape!) expansions.
//!
//! Member hashes are stable across processes and platforms: strings hash over their UTF-16
//! code units, booleans hash to `1231`/`1237`, 64-bit values fold their high
//! and low halves, and lists combine element hashes with the multiplier `31` starting from `1`.

use crate::schema::ShapeType;
use crate::Instant;
use std::fmt;

/// Placeholder written in place of sensitive member values.
pub const SENSITIVE_REDACTED: &str = "*** Sensitive Data Redacted ***";

/// A type that can be stored as a structure member.
pub trait MemberValue {
    /// Shape type recorded in the member's schema.
    const SHAPE_TYPE: ShapeType;

    /// What the structure's getter hands out for a present member.
    type Ref<'a>
    where
        Self: 'a;

    /// Borrows the value for a getter.
    fn member_ref(&self) -> Self::Ref<'_>;

    /// Member equality. Reflexive for every value, including NaN doubles.
    fn eq_member(&self, other: &Self) -> bool;

    /// Contribution of this value to its structure's hash.
    fn hash_member(&self) -> i32;

    /// Writes the value in diagnostic form.
    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

fn fold_i64(value: i64) -> i32 {
    (value ^ ((value as u64) >> 32) as i64) as i32
}

/// Bit pattern with every NaN collapsed onto the canonical quiet NaN.
fn double_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

impl MemberValue for String {
    const SHAPE_TYPE: ShapeType = ShapeType::String;
    type Ref<'a> = &'a str;

    fn member_ref(&self) -> &str {
        self
    }

    fn eq_member(&self, other: &Self) -> bool {
        self == other
    }

    fn hash_member(&self) -> i32 {
        self.encode_utf16()
            .fold(0_i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
    }

    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl MemberValue for bool {
    const SHAPE_TYPE: ShapeType = ShapeType::Boolean;
    type Ref<'a> = bool;

    fn member_ref(&self) -> bool {
        *self
    }

    fn eq_member(&self, other: &Self) -> bool {
        self == other
    }

    fn hash_member(&self) -> i32 {
        if *self {
            1231
        } else {
            1237
        }
    }

    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl MemberValue for i32 {
    const SHAPE_TYPE: ShapeType = ShapeType::Integer;
    type Ref<'a> = i32;

    fn member_ref(&self) -> i32 {
        *self
    }

    fn eq_member(&self, other: &Self) -> bool {
        self == other
    }

    fn hash_member(&self) -> i32 {
        *self
    }

    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl MemberValue for i64 {
    const SHAPE_TYPE: ShapeType = ShapeType::Long;
    type Ref<'a> = i64;

    fn member_ref(&self) -> i64 {
        *self
    }

    fn eq_member(&self, other: &Self) -> bool {
        self == other
    }

    fn hash_member(&self) -> i32 {
        fold_i64(*self)
    }

    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl MemberValue for f64 {
    const SHAPE_TYPE: ShapeType = ShapeType::Double;
    type Ref<'a> = f64;

    fn member_ref(&self) -> f64 {
        *self
    }

    /// `NaN` equals `NaN`; `0.0` and `-0.0` differ.
    fn eq_member(&self, other: &Self) -> bool {
        double_bits(*self) == double_bits(*other)
    }

    fn hash_member(&self) -> i32 {
        fold_i64(double_bits(*self) as i64)
    }

    /// Always keeps a fractional part: `1.0`, not `1`.
    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl MemberValue for Instant {
    const SHAPE_TYPE: ShapeType = ShapeType::Timestamp;
    type Ref<'a> = &'a Instant;

    fn member_ref(&self) -> &Instant {
        self
    }

    /// Millisecond precision.
    fn eq_member(&self, other: &Self) -> bool {
        self == other
    }

    fn hash_member(&self) -> i32 {
        fold_i64(self.epoch_millis())
    }

    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<T: MemberValue> MemberValue for Vec<T> {
    const SHAPE_TYPE: ShapeType = ShapeType::List;
    type Ref<'a> = &'a [T] where Self: 'a;

    fn member_ref(&self) -> &[T] {
        self
    }

    fn eq_member(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.eq_member(b))
    }

    fn hash_member(&self) -> i32 {
        self.iter().fold(1_i32, |hash, item| {
            hash.wrapping_mul(31).wrapping_add(item.hash_member())
        })
    }

    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            item.fmt_member(f)?;
        }
        f.write_str("]")
    }
}
