/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::serializer::{BodyField, BoxError, SerializeBody};
use bytes::Bytes;
use wire_types::date_time::Format;
use wire_types::Value;
use wire_xml::encode::{ScopeWriter, XmlWriter};

/// Writes body fields as child elements of a single root element, eg. `<InitiateJobRequest>`.
///
/// Lists are wrapped: each entry is written as `<member>` (or the field's member name) inside
/// the field's element.
#[derive(Debug)]
pub struct XmlBody {
    root: String,
    namespace: Option<&'static str>,
    fields: Option<Vec<(String, Option<String>, Value)>>,
}

impl XmlBody {
    pub fn new(root: impl Into<String>, namespace: Option<&'static str>) -> Self {
        XmlBody {
            root: root.into(),
            namespace,
            fields: None,
        }
    }
}

impl SerializeBody for XmlBody {
    fn content_type(&self) -> &str {
        "application/xml"
    }

    fn format_name(&self) -> &'static str {
        "xml"
    }

    fn start(&mut self) -> Result<(), BoxError> {
        self.fields = Some(vec![]);
        Ok(())
    }

    fn write_field(&mut self, field: BodyField<'_>, value: &Value) -> Result<(), BoxError> {
        let fields = self
            .fields
            .as_mut()
            .ok_or("XML body written before start")?;
        fields.push((
            field.name.to_owned(),
            field.member_name.map(str::to_owned),
            value.clone(),
        ));
        Ok(())
    }

    fn finish(&mut self) -> Result<Bytes, BoxError> {
        let fields = self.fields.take().ok_or("XML body finished before start")?;
        let mut out = String::new();
        let mut writer = XmlWriter::new(&mut out);
        let mut root = writer.start_el(&self.root)?;
        if let Some(namespace) = self.namespace {
            root = root.write_ns(namespace, None)?;
        }
        let mut scope = root.finish();
        for (name, member_name, value) in &fields {
            write_element(&mut scope, name, member_name.as_deref(), value)?;
        }
        scope.finish();
        Ok(Bytes::from(out))
    }
}

fn write_element(
    parent: &mut ScopeWriter<'_, '_>,
    name: &str,
    member_name: Option<&str>,
    value: &Value,
) -> Result<(), BoxError> {
    let mut scope = parent.start_el(name)?.finish();
    match value {
        Value::List(entries) => {
            for entry in entries {
                write_element(&mut scope, member_name.unwrap_or("member"), None, entry)?;
            }
        }
        Value::Object(members) => {
            for (member, member_value) in members {
                write_element(&mut scope, member, None, member_value)?;
            }
        }
        scalar => {
            if let Some(text) = scalar.scalar_text(Format::DateTime)? {
                scope.data(&text);
            }
        }
    }
    scope.finish();
    Ok(())
}
