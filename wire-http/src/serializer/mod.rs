/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Body serializers: the format-specific half of marshalling.
//!
//! A serializer is driven as `start`, then one `write_field` per set body field in declaration
//! order, then `finish`. Errors are boxed at this seam and never leave [`marshal`] as-is.
//!
//! [`marshal`]: crate::marshal::marshal

use bytes::Bytes;
use std::error::Error;
use wire_types::Value;

mod json;
mod query;
mod xml;

pub use json::JsonBody;
pub use query::QueryBody;
pub(crate) use query::FORM_CONTENT_TYPE;
pub use xml::XmlBody;

pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// The wire identity of one body field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyField<'a> {
    pub name: &'a str,
    /// Name of list entries, for formats that name them (XML, Query)
    pub member_name: Option<&'a str>,
}

impl<'a> BodyField<'a> {
    pub fn new(name: &'a str) -> Self {
        BodyField {
            name,
            member_name: None,
        }
    }
}

pub trait SerializeBody {
    /// Value of the `Content-Type` header for bodies produced by this serializer
    fn content_type(&self) -> &str;

    /// Short format name used in error messages, eg. `json`
    fn format_name(&self) -> &'static str;

    fn start(&mut self) -> Result<(), BoxError>;

    fn write_field(&mut self, field: BodyField<'_>, value: &Value) -> Result<(), BoxError>;

    fn finish(&mut self) -> Result<Bytes, BoxError>;
}
