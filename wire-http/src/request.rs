/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::body::SdkBody;
use crate::error::MarshalError;
use crate::header::{Headers, CONTENT_LENGTH, CONTENT_TYPE};
use crate::operation::Metadata;
use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use http::uri::{PathAndQuery, Uri};
use http::Method;

/// A fully marshalled request, ready to be sent to an endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireRequest {
    method: Method,
    metadata: Metadata,
    path: String,
    query: String,
    headers: Headers,
    body: Bytes,
}

impl WireRequest {
    pub(crate) fn new(
        method: Method,
        metadata: Metadata,
        path: String,
        query: String,
        headers: Headers,
        body: Bytes,
    ) -> Self {
        WireRequest {
            method,
            metadata,
            path,
            query,
            headers,
            body,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// The resource path with every label substituted and encoded
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The encoded query string, without the leading `?`
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Path and query, as in the request line
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query)
        }
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE)
    }

    pub fn content_length(&self) -> Option<u64> {
        self.headers
            .get(CONTENT_LENGTH)
            .and_then(|length| length.parse().ok())
    }

    /// Converts into an HTTP request against `endpoint`. A path on the endpoint is kept as a
    /// prefix of the resource path.
    pub fn into_http(self, endpoint: &Uri) -> Result<http::Request<SdkBody>, MarshalError> {
        let invalid = |message: String| MarshalError::InvalidRequest {
            metadata: self.metadata.clone(),
            message,
        };
        let (scheme, authority) = match (endpoint.scheme(), endpoint.authority()) {
            (Some(scheme), Some(authority)) => (scheme.clone(), authority.clone()),
            _ => {
                return Err(invalid(format!(
                    "endpoint `{}` must be an absolute URI",
                    endpoint
                )))
            }
        };
        let prefix = endpoint.path().trim_end_matches('/');
        let path_and_query = format!("{}{}", prefix, self.path_and_query());
        let path_and_query = path_and_query
            .parse::<PathAndQuery>()
            .map_err(|err| invalid(format!("invalid request path `{}`: {}", path_and_query, err)))?;
        let uri = Uri::builder()
            .scheme(scheme)
            .authority(authority)
            .path_and_query(path_and_query)
            .build()
            .map_err(|err| invalid(format!("invalid request URI: {}", err)))?;

        let mut request = http::Request::new(SdkBody::from(self.body.clone()));
        *request.method_mut() = self.method.clone();
        *request.uri_mut() = uri;
        for (name, value) in self.headers.iter() {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| invalid(format!("`{}` is not a valid header name", name)))?;
            let header_value = HeaderValue::from_str(value).map_err(|_| {
                invalid(format!("value of header `{}` is not a valid header value", name))
            })?;
            request.headers_mut().append(header_name, header_value);
        }
        Ok(request)
    }
}
