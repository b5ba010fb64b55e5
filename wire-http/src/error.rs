/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::operation::Metadata;
use thiserror::Error;

/// Failure to marshal a request. Nothing is returned alongside an error: a request is either
/// fully built or not built at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarshalError {
    /// The input was missing or cannot be expressed on the wire
    #[error("invalid request for {metadata}: {message}")]
    InvalidRequest { metadata: Metadata, message: String },

    /// The body serializer rejected the input. Only the cause's message is kept.
    #[error("failed to serialize {format} body for {metadata}: {message}")]
    Marshalling {
        metadata: Metadata,
        format: &'static str,
        message: String,
    },
}

impl MarshalError {
    pub(crate) fn invalid(metadata: &Metadata, message: impl Into<String>) -> Self {
        MarshalError::InvalidRequest {
            metadata: metadata.clone(),
            message: message.into(),
        }
    }

    pub fn metadata(&self) -> &Metadata {
        match self {
            MarshalError::InvalidRequest { metadata, .. } => metadata,
            MarshalError::Marshalling { metadata, .. } => metadata,
        }
    }

    pub fn is_invalid_request(&self) -> bool {
        matches!(self, MarshalError::InvalidRequest { .. })
    }
}
