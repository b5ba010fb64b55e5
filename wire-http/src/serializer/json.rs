/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::serializer::{BodyField, BoxError, SerializeBody};
use bytes::Bytes;
use wire_json::escape::escape_string;
use wire_json::serialize::JsonValueWriter;
use wire_types::Value;

/// Writes body fields as the members of a single JSON object
#[derive(Debug)]
pub struct JsonBody {
    content_type: &'static str,
    out: String,
    started: bool,
}

impl JsonBody {
    pub fn new(content_type: &'static str) -> Self {
        JsonBody {
            content_type,
            out: String::new(),
            started: false,
        }
    }
}

impl SerializeBody for JsonBody {
    fn content_type(&self) -> &str {
        self.content_type
    }

    fn format_name(&self) -> &'static str {
        "json"
    }

    fn start(&mut self) -> Result<(), BoxError> {
        self.out.clear();
        self.out.push('{');
        self.started = false;
        Ok(())
    }

    fn write_field(&mut self, field: BodyField<'_>, value: &Value) -> Result<(), BoxError> {
        if self.out.is_empty() {
            return Err("JSON body written before start".into());
        }
        if self.started {
            self.out.push(',');
        }
        self.started = true;
        self.out.push('"');
        self.out.push_str(&escape_string(field.name));
        self.out.push_str("\":");
        JsonValueWriter::new(&mut self.out).value(value);
        Ok(())
    }

    fn finish(&mut self) -> Result<Bytes, BoxError> {
        if self.out.is_empty() {
            return Err("JSON body finished before start".into());
        }
        self.out.push('}');
        self.started = false;
        Ok(Bytes::from(std::mem::take(&mut self.out)))
    }
}
