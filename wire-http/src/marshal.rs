/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Combines a typed request, its descriptor and a body serializer into a [`WireRequest`]

use crate::descriptor::{FieldBinding, Location, RequestDescriptor};
use crate::error::MarshalError;
use crate::header::{Headers, CONTENT_LENGTH, CONTENT_TYPE, X_AMZ_TARGET};
use crate::idempotency_token::IdempotencyTokenProvider;
use crate::label;
use crate::operation::Metadata;
use crate::query;
use crate::request::WireRequest;
use crate::serializer::{BodyField, BoxError, SerializeBody};
use bytes::Bytes;
use http::{HeaderValue, Method};
use wire_types::Value;

/// Marshals `input` into a request.
///
/// Unset header and query fields are left out of the request entirely, while an unset path
/// field is substituted with the empty string. Body fields are written in declaration order,
/// so identical inputs marshal to identical requests (unless an idempotency token is
/// generated).
///
/// `None` input fails with [`MarshalError::InvalidRequest`] before anything else is read.
/// Failures of `body` are reported as [`MarshalError::Marshalling`].
pub fn marshal<T>(
    input: Option<&T>,
    descriptor: &RequestDescriptor<T>,
    body: &mut dyn SerializeBody,
    tokens: &IdempotencyTokenProvider,
) -> Result<WireRequest, MarshalError> {
    let metadata = descriptor.metadata();
    let input = input.ok_or_else(|| MarshalError::invalid(metadata, "input must not be null"))?;
    let protocol = descriptor.protocol();

    let mut headers = Headers::new();
    if let Some(target) = protocol.target_header(metadata.name()) {
        headers.insert(X_AMZ_TARGET, target);
    }
    for binding in bindings_in(descriptor, Location::Header) {
        match binding.resolve(input, tokens) {
            Some(Value::List(entries)) => {
                let values = entries
                    .iter()
                    .map(|entry| wire_text(metadata, binding, entry))
                    .collect::<Result<Vec<_>, _>>()?;
                let value = header_value(metadata, binding, values.join(", "))?;
                headers.insert(binding.wire_name(), value);
            }
            Some(value) => {
                let value = header_value(metadata, binding, wire_text(metadata, binding, &value)?)?;
                headers.insert(binding.wire_name(), value);
            }
            None => tracing::trace!(header = binding.wire_name(), "skipping unset header"),
        }
    }

    let path = descriptor
        .uri_template()
        .render(|name, greedy| -> Result<String, MarshalError> {
            let binding = descriptor.path_binding(name).ok_or_else(|| {
                MarshalError::invalid(metadata, format!("no binding for label `{}`", name))
            })?;
            let text = match binding.resolve(input, tokens) {
                Some(value) => wire_text(metadata, binding, &value)?,
                None => {
                    tracing::trace!(label = name, "unset path label rendered as empty string");
                    String::new()
                }
            };
            Ok(label::fmt_string(text, greedy))
        })?;

    let mut query = query::Writer::new(descriptor.uri_template().literal_query());
    for binding in bindings_in(descriptor, Location::Query) {
        match binding.resolve(input, tokens) {
            Some(Value::List(entries)) => {
                for entry in &entries {
                    query.push_kv(binding.wire_name(), &wire_text(metadata, binding, entry)?);
                }
            }
            Some(value) => {
                query.push_kv(binding.wire_name(), &wire_text(metadata, binding, &value)?)
            }
            None => tracing::trace!(param = binding.wire_name(), "skipping unset query param"),
        }
    }

    let (body, content_type) = if descriptor.sends_body() {
        let format = body.format_name();
        let wrap = |err: BoxError| MarshalError::Marshalling {
            metadata: metadata.clone(),
            format,
            message: err.to_string(),
        };
        body.start().map_err(wrap)?;
        for binding in bindings_in(descriptor, Location::Body) {
            match binding.resolve(input, tokens) {
                Some(value) => {
                    let field = BodyField {
                        name: binding.wire_name(),
                        member_name: binding.member_name(),
                    };
                    body.write_field(field, &value).map_err(wrap)?;
                }
                None => tracing::trace!(field = binding.wire_name(), "skipping unset body field"),
            }
        }
        let bytes = body.finish().map_err(wrap)?;
        (bytes, body.content_type().to_owned())
    } else {
        (Bytes::new(), protocol.content_type().to_owned())
    };

    if !headers.contains(CONTENT_TYPE) {
        headers.insert(CONTENT_TYPE, content_type);
    }
    let method = descriptor.method().clone();
    if !body.is_empty() || (method != Method::GET && method != Method::HEAD) {
        headers.insert(CONTENT_LENGTH, body.len().to_string());
    }

    let query = query.finish();
    tracing::debug!(
        operation = %metadata,
        method = %method,
        path = %path,
        content_length = body.len(),
        "marshalled request"
    );
    Ok(WireRequest::new(
        method,
        metadata.clone(),
        path,
        query,
        headers,
        body,
    ))
}

fn bindings_in<T>(
    descriptor: &RequestDescriptor<T>,
    location: Location,
) -> impl Iterator<Item = &FieldBinding<T>> {
    descriptor
        .bindings()
        .iter()
        .filter(move |binding| match (binding.location(), location) {
            (Location::Path { .. }, Location::Path { .. }) => true,
            (actual, wanted) => actual == wanted,
        })
}

/// Rejects header values that could not be sent, such as ones containing CR or LF
fn header_value<T>(
    metadata: &Metadata,
    binding: &FieldBinding<T>,
    value: String,
) -> Result<String, MarshalError> {
    match HeaderValue::from_str(&value) {
        Ok(_) => Ok(value),
        Err(_) => Err(MarshalError::invalid(
            metadata,
            format!(
                "`{}` is not a valid header value: control characters are not allowed",
                binding.wire_name()
            ),
        )),
    }
}

/// Text form of a value written outside of the body
fn wire_text<T>(
    metadata: &Metadata,
    binding: &FieldBinding<T>,
    value: &Value,
) -> Result<String, MarshalError> {
    match value.scalar_text(binding.location().timestamp_format()) {
        Ok(Some(text)) => Ok(text),
        Ok(None) => Err(MarshalError::invalid(
            metadata,
            format!(
                "`{}` cannot be written to the {}: only scalar values are supported there",
                binding.wire_name(),
                binding.location()
            ),
        )),
        Err(err) => Err(MarshalError::invalid(
            metadata,
            format!("`{}`: {}", binding.wire_name(), err),
        )),
    }
}
