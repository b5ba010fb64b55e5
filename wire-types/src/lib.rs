/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Types shared by the wire crates: the [`Value`] read out of a request field and the scalar
//! types it is built from.

pub mod date_time;
mod value;

pub use crate::date_time::DateTime;
pub use crate::value::Value;

use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Blob {
    inner: Vec<u8>,
}

impl Blob {
    pub fn new<T: Into<Vec<u8>>>(inp: T) -> Self {
        Blob { inner: inp.into() }
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.inner
    }

    /// Standard (padded) base64, the encoding every textual protocol uses for blobs.
    pub fn to_base64(&self) -> String {
        base64::encode(&self.inner)
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

/// A number type that implements Javascript / JSON semantics, modeled on serde_json:
/// https://docs.serde.rs/src/serde_json/number.rs.html#20-22
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    PosInt(u64),
    NegInt(i64),
    Float(f64),
}

impl Number {
    pub fn is_finite(&self) -> bool {
        match self {
            Number::Float(value) => value.is_finite(),
            _ => true,
        }
    }
}

macro_rules! number_from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Number {
            fn from(value: $ty) -> Self {
                Number::PosInt(value as u64)
            }
        })*
    };
}

macro_rules! number_from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Number {
            fn from(value: $ty) -> Self {
                if value < 0 {
                    Number::NegInt(value as i64)
                } else {
                    Number::PosInt(value as u64)
                }
            }
        })*
    };
}

number_from_unsigned!(u8, u16, u32, u64, usize);
number_from_signed!(i8, i16, i32, i64, isize);

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// Text form used outside of JSON: headers, labels, query strings, XML and form bodies.
///
/// Non-finite floats render as `NaN`, `Infinity` and `-Infinity`.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::PosInt(value) => f.write_str(itoa::Buffer::new().format(value)),
            Number::NegInt(value) => f.write_str(itoa::Buffer::new().format(value)),
            Number::Float(value) if value.is_nan() => f.write_str("NaN"),
            Number::Float(value) if value == f64::INFINITY => f.write_str("Infinity"),
            Number::Float(value) if value == f64::NEG_INFINITY => f.write_str("-Infinity"),
            Number::Float(value) => f.write_str(ryu::Buffer::new().format_finite(value)),
        }
    }
}
