/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::date_time::{DateTimeFormatError, Format};
use crate::{Blob, DateTime, Number};

/// A request field as read through a field binding.
///
/// Objects keep their members in declaration order so that serialized output is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Bool(bool),
    Number(Number),
    Timestamp(DateTime),
    Blob(Blob),
    List(Vec<Value>),
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Builds an object from `(member name, optional value)` pairs, dropping unset members.
    pub fn object<K, I>(members: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Option<Value>)>,
    {
        Value::Object(
            members
                .into_iter()
                .filter_map(|(name, value)| value.map(|value| (name.into(), value)))
                .collect(),
        )
    }

    pub fn is_scalar(&self) -> bool {
        !matches!(self, Value::List(_) | Value::Object(_))
    }

    /// Text form of a scalar, with timestamps rendered in `timestamp_format`.
    ///
    /// Returns `Ok(None)` for lists and objects, which have no single text form.
    pub fn scalar_text(&self, timestamp_format: Format) -> Result<Option<String>, DateTimeFormatError> {
        Ok(Some(match self {
            Value::String(value) => value.clone(),
            Value::Bool(value) => value.to_string(),
            Value::Number(value) => value.to_string(),
            Value::Timestamp(value) => value.fmt(timestamp_format)?,
            Value::Blob(value) => value.to_base64(),
            Value::List(_) | Value::Object(_) => return Ok(None),
        }))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

macro_rules! value_from_number {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::Number(Number::from(value))
            }
        })*
    };
}

value_from_number!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

impl From<DateTime> for Value {
    fn from(value: DateTime) -> Self {
        Value::Timestamp(value)
    }
}

impl From<Blob> for Value {
    fn from(value: Blob) -> Self {
        Value::Blob(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}
