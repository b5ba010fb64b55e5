/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Modeled service errors.
//!
//! Each service declares its error codes once, as an [`ErrorTable`]. An error returned by the
//! service is classified against that table into a single [`ServiceError`] type.

use crate::operation::Metadata;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// Which side is at fault for a modeled error
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum ErrorKind {
    /// The request was invalid and should not be sent again unchanged
    Client,

    /// The service failed to handle a valid request
    Server,

    /// The service asked the client to back off
    Throttling,
}

pub trait ProvideErrorKind {
    /// Returns the `ErrorKind`, or `None` when the error is not modeled
    fn error_kind(&self) -> Option<ErrorKind>;

    /// Returns the `code` for this error if one exists
    fn code(&self) -> Option<&str>;
}

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct ErrorShape {
    pub code: &'static str,
    pub kind: ErrorKind,
}

impl ErrorShape {
    pub const fn client(code: &'static str) -> Self {
        ErrorShape {
            code,
            kind: ErrorKind::Client,
        }
    }

    pub const fn server(code: &'static str) -> Self {
        ErrorShape {
            code,
            kind: ErrorKind::Server,
        }
    }

    pub const fn throttling(code: &'static str) -> Self {
        ErrorShape {
            code,
            kind: ErrorKind::Throttling,
        }
    }
}

/// All modeled errors of one service
#[derive(Debug)]
pub struct ErrorTable {
    service: &'static str,
    shapes: &'static [ErrorShape],
}

impl ErrorTable {
    pub const fn new(service: &'static str, shapes: &'static [ErrorShape]) -> Self {
        ErrorTable { service, shapes }
    }

    pub fn service(&self) -> &'static str {
        self.service
    }

    pub fn shapes(&self) -> &'static [ErrorShape] {
        self.shapes
    }

    pub fn shape(&self, code: &str) -> Option<&'static ErrorShape> {
        let code = sanitize_error_code(code);
        self.shapes.iter().find(|shape| shape.code == code)
    }

    /// Builds the error for `code`. Unknown codes are kept, with no kind.
    pub fn classify(&self, code: &str, message: Option<&str>) -> ServiceError {
        let code = sanitize_error_code(code);
        ServiceError {
            service: self.service,
            operation: None,
            code: code.to_owned(),
            kind: self.shape(code).map(|shape| shape.kind),
            message: message.map(str::to_owned),
            fields: vec![],
        }
    }
}

/// Error codes may carry a namespace (`aws.glacier#ResourceNotFoundException`) or a trailing
/// URL after a `:`; neither is part of the modeled code
fn sanitize_error_code(error_code: &str) -> &str {
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

/// An error returned by a service
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceError {
    service: &'static str,
    operation: Option<Metadata>,
    code: String,
    kind: Option<ErrorKind>,
    message: Option<String>,
    fields: Vec<(Cow<'static, str>, String)>,
}

impl ServiceError {
    /// Tags the error with the operation that produced it
    pub fn with_operation(mut self, operation: Metadata) -> Self {
        self.operation = Some(operation);
        self
    }

    /// Attaches an extra structured member of the error, eg. Glacier's `type`
    pub fn with_field(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn service(&self) -> &'static str {
        self.service
    }

    pub fn operation(&self) -> Option<&Metadata> {
        self.operation.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_modeled(&self) -> bool {
        self.kind.is_some()
    }
}

impl ProvideErrorKind for ServiceError {
    fn error_kind(&self) -> Option<ErrorKind> {
        self.kind
    }

    fn code(&self) -> Option<&str> {
        Some(&self.code)
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.operation {
            Some(operation) => write!(f, "{}", operation)?,
            None => write!(f, "{}", self.service)?,
        }
        write!(f, ": {}", self.code)?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl Error for ServiceError {}

#[cfg(test)]
mod test {
    use crate::operation::Metadata;
    use crate::service_error::{ErrorKind, ErrorShape, ErrorTable, ProvideErrorKind};

    static TABLE: ErrorTable = ErrorTable::new(
        "Glacier",
        &[
            ErrorShape::client("ResourceNotFoundException"),
            ErrorShape::server("ServiceUnavailableException"),
            ErrorShape::throttling("ThrottlingException"),
        ],
    );

    #[test]
    fn modeled_errors_are_classified() {
        let err = TABLE.classify("ResourceNotFoundException", Some("no such vault"));
        assert_eq!(err.error_kind(), Some(ErrorKind::Client));
        assert_eq!(err.code(), Some("ResourceNotFoundException"));
        assert_eq!(err.message(), Some("no such vault"));
        assert!(err.is_modeled());
        assert_eq!(
            TABLE.classify("ServiceUnavailableException", None).error_kind(),
            Some(ErrorKind::Server)
        );
        assert_eq!(
            TABLE.classify("ThrottlingException", None).error_kind(),
            Some(ErrorKind::Throttling)
        );
    }

    #[test]
    fn codes_are_sanitized() {
        let err = TABLE.classify(
            "aws.glacier#ResourceNotFoundException:http://internal.amazon.com/",
            None,
        );
        assert_eq!(err.code(), Some("ResourceNotFoundException"));
        assert_eq!(err.error_kind(), Some(ErrorKind::Client));
        assert!(TABLE.shape("com.amazon#ThrottlingException").is_some());
    }

    #[test]
    fn unknown_codes_are_unhandled() {
        let err = TABLE.classify("SomethingNew", Some("surprise"));
        assert_eq!(err.error_kind(), None);
        assert!(!err.is_modeled());
        assert_eq!(err.code(), Some("SomethingNew"));
        assert_eq!(err.to_string(), "Glacier: SomethingNew: surprise");
    }

    #[test]
    fn operation_and_fields() {
        let err = TABLE
            .classify("ResourceNotFoundException", Some("no such job"))
            .with_operation(Metadata::new("GetJobOutput", "Glacier"))
            .with_field("type", "Client")
            .with_field("code", "ResourceNotFoundException");
        assert_eq!(err.field("type"), Some("Client"));
        assert_eq!(err.field("code"), Some("ResourceNotFoundException"));
        assert_eq!(err.field("missing"), None);
        assert_eq!(err.service(), "Glacier");
        assert_eq!(
            err.to_string(),
            "Glacier.GetJobOutput: ResourceNotFoundException: no such job"
        );
    }
}
