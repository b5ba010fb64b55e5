/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use wire_http::service_error::{ErrorShape, ErrorTable};

pub static ERRORS: ErrorTable = ErrorTable::new(
    crate::SERVICE_NAME,
    &[
        ErrorShape::client("InvalidParameterException"),
        ErrorShape::client("InvalidSequenceTokenException"),
        ErrorShape::client("DataAlreadyAcceptedException"),
        ErrorShape::client("ResourceNotFoundException"),
        ErrorShape::server("ServiceUnavailableException"),
        ErrorShape::client("UnrecognizedClientException"),
    ],
);

#[cfg(test)]
mod test {
    use crate::error::ERRORS;
    use wire_http::operation::Metadata;
    use wire_http::service_error::{ErrorKind, ProvideErrorKind};

    #[test]
    fn sequence_token_errors() {
        let err = ERRORS
            .classify(
                "InvalidSequenceTokenException",
                Some("The given sequenceToken is invalid"),
            )
            .with_operation(Metadata::new("PutLogEvents", "CloudWatchLogs"));
        assert_eq!(err.error_kind(), Some(ErrorKind::Client));
        assert_eq!(
            err.to_string(),
            "CloudWatchLogs.PutLogEvents: InvalidSequenceTokenException: The given sequenceToken is invalid"
        );
    }
}
