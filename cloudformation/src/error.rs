/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use wire_http::service_error::{ErrorShape, ErrorTable};

pub static ERRORS: ErrorTable = ErrorTable::new(
    crate::SERVICE_NAME,
    &[
        ErrorShape::client("AlreadyExistsException"),
        ErrorShape::client("InsufficientCapabilitiesException"),
        ErrorShape::client("LimitExceededException"),
        ErrorShape::client("TokenAlreadyExistsException"),
        ErrorShape::client("ValidationError"),
        ErrorShape::throttling("Throttling"),
    ],
);

#[cfg(test)]
mod test {
    use crate::error::ERRORS;
    use wire_http::service_error::{ErrorKind, ProvideErrorKind};

    #[test]
    fn throttling_and_validation_codes() {
        assert_eq!(
            ERRORS.classify("Throttling", Some("Rate exceeded")).error_kind(),
            Some(ErrorKind::Throttling)
        );
        assert_eq!(
            ERRORS.classify("ValidationError", None).error_kind(),
            Some(ErrorKind::Client)
        );
    }
}
