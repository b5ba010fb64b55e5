/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use wire_http::service_error::{ErrorShape, ErrorTable};

pub static ERRORS: ErrorTable = ErrorTable::new(
    crate::SERVICE_NAME,
    &[
        ErrorShape::server("InternalServiceException"),
        ErrorShape::client("InvalidRequestException"),
        ErrorShape::client("NotFoundException"),
        ErrorShape::client("UnauthorizedException"),
        ErrorShape::client("ConflictException"),
        ErrorShape::client("FleetCapacityExceededException"),
        ErrorShape::client("InvalidFleetStatusException"),
        ErrorShape::client("LimitExceededException"),
        ErrorShape::client("TerminalRoutingStrategyException"),
        ErrorShape::client("IdempotentParameterMismatchException"),
    ],
);
