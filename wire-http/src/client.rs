/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::body::SdkBody;
use crate::config::Config;
use crate::error::MarshalError;
use crate::operation::{Metadata, OperationInput};
use crate::request::WireRequest;
use http::Uri;

/// Turns operation inputs into HTTP requests for one service, using one [`Config`].
///
/// Sending the request is left to the caller's HTTP stack.
#[derive(Clone, Debug)]
pub struct Client {
    config: Config,
    endpoint_prefix: &'static str,
}

impl Client {
    /// `endpoint_prefix` is the service's host prefix, eg. `logs` for
    /// `https://logs.us-east-1.amazonaws.com`
    pub fn new(config: Config, endpoint_prefix: &'static str) -> Self {
        Client {
            config,
            endpoint_prefix,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn marshal<T: OperationInput>(&self, input: Option<&T>) -> Result<WireRequest, MarshalError> {
        T::descriptor().marshal(input, self.config.idempotency_token_provider())
    }

    /// Marshals `input` and addresses it to the configured endpoint
    pub fn prepare<T: OperationInput>(
        &self,
        input: Option<&T>,
    ) -> Result<http::Request<SdkBody>, MarshalError> {
        let request = self.marshal(input)?;
        let endpoint = self.resolve_endpoint(request.metadata())?;
        tracing::debug!(operation = %request.metadata(), endpoint = %endpoint, "resolved endpoint");
        request.into_http(&endpoint)
    }

    /// The explicit endpoint, otherwise `https://<prefix>.<region>.amazonaws.com`
    pub fn resolve_endpoint(&self, metadata: &Metadata) -> Result<Uri, MarshalError> {
        if let Some(endpoint) = self.config.endpoint() {
            return Ok(endpoint.clone());
        }
        let region = self.config.region().ok_or_else(|| {
            MarshalError::invalid(metadata, "no region or endpoint is configured")
        })?;
        let endpoint = format!("https://{}.{}.amazonaws.com", self.endpoint_prefix, region);
        endpoint.parse::<Uri>().map_err(|err| {
            MarshalError::invalid(
                metadata,
                format!("`{}` is not a valid endpoint: {}", endpoint, err),
            )
        })
    }
}
