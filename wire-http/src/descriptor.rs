/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Per-operation request descriptors and their field binding tables

use crate::error::MarshalError;
use crate::header::CONTENT_LENGTH;
use crate::idempotency_token::IdempotencyTokenProvider;
use crate::marshal::marshal;
use crate::operation::Metadata;
use crate::request::WireRequest;
use crate::serializer::{JsonBody, QueryBody, SerializeBody, XmlBody, FORM_CONTENT_TYPE};
use crate::uri_template::{UriTemplate, UriTemplateError};
use http::Method;
use std::fmt;
use thiserror::Error;
use wire_types::date_time::Format;
use wire_types::Value;

/// Where a field is written in the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// A `{name}` label of the URI template, or `{name+}` when `greedy`
    Path { greedy: bool },
    Query,
    Header,
    Body,
}

impl Location {
    /// Format of timestamps written to this location outside of a body
    pub fn timestamp_format(&self) -> Format {
        match self {
            Location::Header => Format::HttpDate,
            _ => Format::DateTime,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Path { .. } => write!(f, "path"),
            Location::Query => write!(f, "query string"),
            Location::Header => write!(f, "headers"),
            Location::Body => write!(f, "body"),
        }
    }
}

/// What to write when the accessor returns `None`
#[derive(Clone, Copy)]
enum Unset {
    Omit,
    Default(fn() -> Value),
    IdempotencyToken,
}

/// Maps one field of `T` to one wire location
pub struct FieldBinding<T> {
    wire_name: &'static str,
    location: Location,
    accessor: fn(&T) -> Option<Value>,
    member_name: Option<&'static str>,
    unset: Unset,
}

impl<T> FieldBinding<T> {
    fn new(wire_name: &'static str, location: Location, accessor: fn(&T) -> Option<Value>) -> Self {
        FieldBinding {
            wire_name,
            location,
            accessor,
            member_name: None,
            unset: Unset::Omit,
        }
    }

    pub fn path(wire_name: &'static str, accessor: fn(&T) -> Option<Value>) -> Self {
        Self::new(wire_name, Location::Path { greedy: false }, accessor)
    }

    /// A label that may span several path segments (`{name+}`)
    pub fn greedy_path(wire_name: &'static str, accessor: fn(&T) -> Option<Value>) -> Self {
        Self::new(wire_name, Location::Path { greedy: true }, accessor)
    }

    pub fn query(wire_name: &'static str, accessor: fn(&T) -> Option<Value>) -> Self {
        Self::new(wire_name, Location::Query, accessor)
    }

    pub fn header(wire_name: &'static str, accessor: fn(&T) -> Option<Value>) -> Self {
        Self::new(wire_name, Location::Header, accessor)
    }

    pub fn body(wire_name: &'static str, accessor: fn(&T) -> Option<Value>) -> Self {
        Self::new(wire_name, Location::Body, accessor)
    }

    /// Name of list entries in XML and Query bodies (default `member`)
    pub fn with_member_name(mut self, member_name: &'static str) -> Self {
        self.member_name = Some(member_name);
        self
    }

    /// Writes `default()` instead of omitting the field when it is unset
    pub fn with_default(mut self, default: fn() -> Value) -> Self {
        self.unset = Unset::Default(default);
        self
    }

    /// Fills the field with a fresh idempotency token when it is unset. Operations with such a
    /// binding do not produce identical requests for identical inputs.
    pub fn idempotency_token(mut self) -> Self {
        self.unset = Unset::IdempotencyToken;
        self
    }

    pub fn wire_name(&self) -> &'static str {
        self.wire_name
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn member_name(&self) -> Option<&'static str> {
        self.member_name
    }

    pub fn is_idempotency_token(&self) -> bool {
        matches!(self.unset, Unset::IdempotencyToken)
    }

    /// The value to write for `input`, after applying the unset rule
    pub(crate) fn resolve(&self, input: &T, tokens: &IdempotencyTokenProvider) -> Option<Value> {
        match ((self.accessor)(input), self.unset) {
            (Some(value), _) => Some(value),
            (None, Unset::Omit) => None,
            (None, Unset::Default(default)) => Some(default()),
            (None, Unset::IdempotencyToken) => {
                Some(Value::String(tokens.make_idempotency_token()))
            }
        }
    }
}

impl<T> fmt::Debug for FieldBinding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unset = match self.unset {
            Unset::Omit => "omit",
            Unset::Default(_) => "default",
            Unset::IdempotencyToken => "idempotency token",
        };
        f.debug_struct("FieldBinding")
            .field("wire_name", &self.wire_name)
            .field("location", &self.location)
            .field("member_name", &self.member_name)
            .field("unset", &unset)
            .finish()
    }
}

/// Wire protocol of a service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    AwsJson1_0 { target_prefix: &'static str },
    AwsJson1_1 { target_prefix: &'static str },
    RestJson1,
    RestXml { namespace: Option<&'static str> },
    AwsQuery { version: &'static str },
}

impl Protocol {
    pub fn content_type(&self) -> &'static str {
        match self {
            Protocol::AwsJson1_0 { .. } => "application/x-amz-json-1.0",
            Protocol::AwsJson1_1 { .. } => "application/x-amz-json-1.1",
            Protocol::RestJson1 => "application/json",
            Protocol::RestXml { .. } => "application/xml",
            Protocol::AwsQuery { .. } => FORM_CONTENT_TYPE,
        }
    }

    /// Value of `X-Amz-Target` for `operation`; only JSON RPC protocols send it
    pub fn target_header(&self, operation: &str) -> Option<String> {
        match self {
            Protocol::AwsJson1_0 { target_prefix } | Protocol::AwsJson1_1 { target_prefix } => {
                Some(format!("{}.{}", target_prefix, operation))
            }
            _ => None,
        }
    }

    /// RPC protocols address the operation through the body (or `X-Amz-Target`): they always
    /// send a body, take only body bindings, and always `POST` to the template path
    pub fn is_rpc(&self) -> bool {
        matches!(
            self,
            Protocol::AwsJson1_0 { .. } | Protocol::AwsJson1_1 { .. } | Protocol::AwsQuery { .. }
        )
    }

    pub fn body_serializer(&self, operation: &str) -> Box<dyn SerializeBody + Send> {
        match self {
            Protocol::AwsJson1_0 { .. } | Protocol::AwsJson1_1 { .. } | Protocol::RestJson1 => {
                Box::new(JsonBody::new(self.content_type()))
            }
            Protocol::RestXml { namespace } => {
                Box::new(XmlBody::new(format!("{}Request", operation), *namespace))
            }
            Protocol::AwsQuery { version } => Box::new(QueryBody::new(operation, *version)),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("HTTP method {method} is not supported")]
    UnsupportedMethod { method: Method },
    #[error(transparent)]
    Template(#[from] UriTemplateError),
    #[error("path binding `{name}` has no `{{{name}}}` label in the URI template")]
    MissingLabel { name: String },
    #[error("URI template label `{name}` has no path binding")]
    UnboundLabel { name: String },
    #[error("URI template label `{name}` appears more than once")]
    DuplicateLabel { name: String },
    #[error("path binding `{name}` disagrees with the URI template on whether the label is greedy")]
    GreedyMismatch { name: String },
    #[error("`{name}` is bound more than once in the {location}")]
    DuplicateBinding { name: String, location: Location },
    #[error("header `{name}` is set by the marshaller and cannot be bound")]
    ReservedHeader { name: String },
    #[error("{method} requests cannot have body bindings (`{name}`)")]
    BodyNotAllowed { method: Method, name: String },
    #[error("`{name}` is bound to the {location}, but this protocol only binds body fields")]
    RpcBinding { name: String, location: Location },
    #[error("this protocol only sends POST requests, not {method}")]
    RpcMethod { method: Method },
}

/// Everything needed to marshal one operation's input. Built once and shared.
pub struct RequestDescriptor<T> {
    metadata: Metadata,
    method: Method,
    uri_template: UriTemplate,
    protocol: Protocol,
    bindings: Vec<FieldBinding<T>>,
}

impl<T> RequestDescriptor<T> {
    pub fn new(
        service: &'static str,
        operation: &'static str,
        method: Method,
        uri_template: &str,
        protocol: Protocol,
        bindings: Vec<FieldBinding<T>>,
    ) -> Result<Self, DescriptorError> {
        let supported = [
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::HEAD,
        ];
        if !supported.contains(&method) {
            return Err(DescriptorError::UnsupportedMethod { method });
        }
        if protocol.is_rpc() && method != Method::POST {
            return Err(DescriptorError::RpcMethod { method });
        }
        let uri_template = UriTemplate::parse(uri_template)?;

        let labels: Vec<_> = uri_template.labels().collect();
        for (idx, (name, _)) in labels.iter().enumerate() {
            if labels[..idx].iter().any(|(earlier, _)| earlier == name) {
                return Err(DescriptorError::DuplicateLabel {
                    name: name.to_string(),
                });
            }
        }

        for (idx, binding) in bindings.iter().enumerate() {
            let name = binding.wire_name;
            if protocol.is_rpc() && binding.location != Location::Body {
                return Err(DescriptorError::RpcBinding {
                    name: name.to_owned(),
                    location: binding.location,
                });
            }
            let same_name = |other: &FieldBinding<T>| match binding.location {
                Location::Header => other.wire_name.eq_ignore_ascii_case(name),
                _ => other.wire_name == name,
            };
            if bindings[..idx]
                .iter()
                .any(|other| same_location(other.location, binding.location) && same_name(other))
            {
                return Err(DescriptorError::DuplicateBinding {
                    name: name.to_owned(),
                    location: binding.location,
                });
            }
            match binding.location {
                Location::Path { greedy } => match labels.iter().find(|(label, _)| *label == name) {
                    None => {
                        return Err(DescriptorError::MissingLabel {
                            name: name.to_owned(),
                        })
                    }
                    Some((_, label_greedy)) if *label_greedy != greedy => {
                        return Err(DescriptorError::GreedyMismatch {
                            name: name.to_owned(),
                        })
                    }
                    Some(_) => {}
                },
                Location::Header if name.eq_ignore_ascii_case(CONTENT_LENGTH) => {
                    return Err(DescriptorError::ReservedHeader {
                        name: name.to_owned(),
                    })
                }
                Location::Body if method == Method::GET || method == Method::HEAD => {
                    return Err(DescriptorError::BodyNotAllowed {
                        method,
                        name: name.to_owned(),
                    })
                }
                _ => {}
            }
        }

        for (label, _) in &labels {
            let bound = bindings.iter().any(|binding| {
                matches!(binding.location, Location::Path { .. }) && binding.wire_name == *label
            });
            if !bound {
                return Err(DescriptorError::UnboundLabel {
                    name: label.to_string(),
                });
            }
        }

        Ok(RequestDescriptor {
            metadata: Metadata::new(operation, service),
            method,
            uri_template,
            protocol,
            bindings,
        })
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn uri_template(&self) -> &UriTemplate {
        &self.uri_template
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Bindings in declaration order
    pub fn bindings(&self) -> &[FieldBinding<T>] {
        &self.bindings
    }

    pub fn path_binding(&self, label: &str) -> Option<&FieldBinding<T>> {
        self.bindings
            .iter()
            .find(|binding| matches!(binding.location, Location::Path { .. }) && binding.wire_name == label)
    }

    pub fn has_body_bindings(&self) -> bool {
        self.bindings
            .iter()
            .any(|binding| binding.location == Location::Body)
    }

    /// Whether a body is serialized, even when no body field is set
    pub fn sends_body(&self) -> bool {
        self.has_body_bindings() || self.protocol.is_rpc()
    }

    /// A fresh serializer for this operation's protocol
    pub fn body_serializer(&self) -> Box<dyn SerializeBody + Send> {
        self.protocol.body_serializer(self.metadata.name())
    }

    /// Marshals `input` with this descriptor's own body serializer
    pub fn marshal(
        &self,
        input: Option<&T>,
        tokens: &IdempotencyTokenProvider,
    ) -> Result<WireRequest, MarshalError> {
        let mut body = self.body_serializer();
        marshal(input, self, body.as_mut(), tokens)
    }
}

impl<T> fmt::Debug for RequestDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestDescriptor")
            .field("metadata", &self.metadata)
            .field("method", &self.method)
            .field("uri_template", &self.uri_template)
            .field("protocol", &self.protocol)
            .field("bindings", &self.bindings)
            .finish()
    }
}

fn same_location(a: Location, b: Location) -> bool {
    match (a, b) {
        (Location::Path { .. }, Location::Path { .. }) => true,
        (a, b) => a == b,
    }
}

#[cfg(test)]
mod test {
    use crate::descriptor::{DescriptorError, FieldBinding, Location, Protocol, RequestDescriptor};
    use crate::uri_template::UriTemplateError;
    use http::Method;
    use wire_types::Value;

    #[derive(Default)]
    struct Input {
        account_id: Option<String>,
        key: Option<String>,
        limit: Option<i32>,
    }

    fn account_id(input: &Input) -> Option<Value> {
        input.account_id.as_ref().map(Value::from)
    }

    fn key(input: &Input) -> Option<Value> {
        input.key.as_ref().map(Value::from)
    }

    fn limit(input: &Input) -> Option<Value> {
        input.limit.map(Value::from)
    }

    fn rest(
        method: Method,
        template: &str,
        bindings: Vec<FieldBinding<Input>>,
    ) -> Result<RequestDescriptor<Input>, DescriptorError> {
        RequestDescriptor::new("Svc", "Op", method, template, Protocol::RestJson1, bindings)
    }

    #[test]
    fn valid_descriptor() {
        let descriptor = rest(
            Method::PUT,
            "/{accountId}/objects/{Key+}",
            vec![
                FieldBinding::path("accountId", account_id),
                FieldBinding::greedy_path("Key", key),
                FieldBinding::query("limit", limit),
                FieldBinding::header("x-limit", limit),
                FieldBinding::body("limit", limit),
            ],
        )
        .unwrap();
        assert_eq!(descriptor.metadata().to_string(), "Svc.Op");
        assert_eq!(descriptor.bindings().len(), 5);
        assert!(descriptor.has_body_bindings());
        assert_eq!(
            descriptor.path_binding("Key").map(|b| b.location()),
            Some(Location::Path { greedy: true })
        );
    }

    #[test]
    fn descriptors_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RequestDescriptor<Input>>();
        assert_send_sync::<RequestDescriptor<std::rc::Rc<Input>>>();
    }

    #[test]
    fn labels_must_be_bound_exactly_once() {
        assert_eq!(
            rest(Method::GET, "/{accountId}", vec![]).unwrap_err(),
            DescriptorError::UnboundLabel {
                name: "accountId".to_owned()
            }
        );
        assert_eq!(
            rest(
                Method::GET,
                "/jobs",
                vec![FieldBinding::path("accountId", account_id)]
            )
            .unwrap_err(),
            DescriptorError::MissingLabel {
                name: "accountId".to_owned()
            }
        );
        assert_eq!(
            rest(
                Method::GET,
                "/{accountId}/{accountId}",
                vec![FieldBinding::path("accountId", account_id)]
            )
            .unwrap_err(),
            DescriptorError::DuplicateLabel {
                name: "accountId".to_owned()
            }
        );
        assert_eq!(
            rest(
                Method::GET,
                "/{Key+}",
                vec![FieldBinding::path("Key", key)]
            )
            .unwrap_err(),
            DescriptorError::GreedyMismatch {
                name: "Key".to_owned()
            }
        );
    }

    #[test]
    fn duplicate_wire_names() {
        assert!(matches!(
            rest(
                Method::GET,
                "/",
                vec![
                    FieldBinding::header("Range", key),
                    FieldBinding::header("range", account_id)
                ]
            ),
            Err(DescriptorError::DuplicateBinding {
                location: Location::Header,
                ..
            })
        ));
        assert!(matches!(
            rest(
                Method::POST,
                "/",
                vec![FieldBinding::body("a", key), FieldBinding::body("a", limit)]
            ),
            Err(DescriptorError::DuplicateBinding {
                location: Location::Body,
                ..
            })
        ));
        // same name in different locations is fine
        assert!(rest(
            Method::POST,
            "/",
            vec![FieldBinding::query("a", key), FieldBinding::body("a", key)]
        )
        .is_ok());
    }

    #[test]
    fn content_length_is_reserved() {
        assert_eq!(
            rest(
                Method::POST,
                "/",
                vec![FieldBinding::header("content-length", limit)]
            )
            .unwrap_err(),
            DescriptorError::ReservedHeader {
                name: "content-length".to_owned()
            }
        );
        assert!(rest(
            Method::POST,
            "/",
            vec![FieldBinding::header("Content-Type", key)]
        )
        .is_ok());
    }

    #[test]
    fn methods() {
        assert!(matches!(
            rest(Method::PATCH, "/", vec![]),
            Err(DescriptorError::UnsupportedMethod { .. })
        ));
        assert!(matches!(
            rest(Method::GET, "/", vec![FieldBinding::body("a", key)]),
            Err(DescriptorError::BodyNotAllowed { .. })
        ));
        assert!(matches!(
            rest(Method::HEAD, "/", vec![FieldBinding::body("a", key)]),
            Err(DescriptorError::BodyNotAllowed { .. })
        ));
    }

    #[test]
    fn rpc_protocols_only_bind_bodies() {
        let protocol = Protocol::AwsJson1_1 {
            target_prefix: "GameLift",
        };
        assert!(matches!(
            RequestDescriptor::new(
                "GameLift",
                "Op",
                Method::POST,
                "/",
                protocol,
                vec![FieldBinding::header("x-key", key)]
            ),
            Err(DescriptorError::RpcBinding { .. })
        ));
        assert!(matches!(
            RequestDescriptor::<Input>::new("GameLift", "Op", Method::GET, "/", protocol, vec![]),
            Err(DescriptorError::RpcMethod { .. })
        ));
        let descriptor =
            RequestDescriptor::<Input>::new("GameLift", "Op", Method::POST, "/", protocol, vec![])
                .unwrap();
        assert!(descriptor.sends_body());
    }

    #[test]
    fn template_errors_are_reported() {
        assert!(matches!(
            rest(Method::GET, "/{accountId", vec![]),
            Err(DescriptorError::Template(_))
        ));
        assert!(matches!(
            rest(Method::GET, "/my path", vec![]),
            Err(DescriptorError::Template(
                UriTemplateError::InvalidCharacter { character: ' ', .. }
            ))
        ));
    }

    #[test]
    fn protocol_properties() {
        let json = Protocol::AwsJson1_0 {
            target_prefix: "Logs_20140328",
        };
        assert_eq!(json.content_type(), "application/x-amz-json-1.0");
        assert_eq!(
            json.target_header("PutLogEvents").as_deref(),
            Some("Logs_20140328.PutLogEvents")
        );
        assert_eq!(Protocol::RestJson1.target_header("ListJobs"), None);
        assert!(!Protocol::RestJson1.is_rpc());
        assert!(Protocol::AwsQuery { version: "2010-05-15" }.is_rpc());
        assert_eq!(
            Protocol::RestXml { namespace: None }
                .body_serializer("PutThing")
                .content_type(),
            "application/xml"
        );
        let query = Protocol::AwsQuery { version: "2015-02-02" };
        assert_eq!(
            query.content_type(),
            "application/x-www-form-urlencoded; charset=utf-8"
        );
        assert_eq!(
            query.body_serializer("ModifyReplicationGroup").content_type(),
            query.content_type()
        );
    }

    #[test]
    fn debug_output_names_bindings() {
        let binding = FieldBinding::body("ClientToken", key).idempotency_token();
        assert!(binding.is_idempotency_token());
        let debug = format!("{:?}", binding);
        assert!(debug.contains("ClientToken"), "{}", debug);
        assert!(debug.contains("idempotency token"), "{}", debug);
    }
}
