/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use wire_http::service_error::{ErrorShape, ErrorTable, ServiceError};

pub static ERRORS: ErrorTable = ErrorTable::new(
    crate::SERVICE_NAME,
    &[
        ErrorShape::client("InvalidParameterValueException"),
        ErrorShape::client("MissingParameterValueException"),
        ErrorShape::client("ResourceNotFoundException"),
        ErrorShape::server("ServiceUnavailableException"),
        ErrorShape::client("RequestTimeoutException"),
        ErrorShape::client("LimitExceededException"),
        ErrorShape::client("PolicyEnforcedException"),
        ErrorShape::client("InsufficientCapacityException"),
    ],
);

/// Glacier error bodies repeat the error code and the fault side as `code` and `type`
pub fn classify(
    code: &str,
    message: Option<&str>,
    fault_type: Option<&str>,
) -> ServiceError {
    let err = ERRORS.classify(code, message).with_field("code", code);
    match fault_type {
        Some(fault_type) => err.with_field("type", fault_type),
        None => err,
    }
}
