/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use wire_http::service_error::{ErrorShape, ErrorTable};

pub static ERRORS: ErrorTable = ErrorTable::new(
    crate::SERVICE_NAME,
    &[
        ErrorShape::client("InvalidLookupAttributesException"),
        ErrorShape::client("InvalidTimeRangeException"),
        ErrorShape::client("InvalidMaxResultsException"),
        ErrorShape::client("InvalidNextTokenException"),
        ErrorShape::client("InvalidEventCategoryException"),
        ErrorShape::client("OperationNotPermittedException"),
        ErrorShape::client("UnsupportedOperationException"),
    ],
);
