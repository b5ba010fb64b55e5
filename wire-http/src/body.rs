/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::{HeaderMap, HeaderValue};
use std::error::Error;
use std::pin::Pin;
use std::task::{Context, Poll};

type BodyError = Box<dyn Error + Send + Sync>;

/// SdkBody type
///
/// This is the Body used for dispatching all HTTP Requests. Marshalled bodies are always fully
/// buffered, so the body is a single chunk that can be cloned for retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SdkBody {
    Once(Option<Bytes>),
}

impl SdkBody {
    pub fn empty() -> Self {
        SdkBody::Once(None)
    }

    /// The buffered contents; empty once they have been polled out
    pub fn bytes(&self) -> &[u8] {
        match self {
            SdkBody::Once(Some(bytes)) => bytes.as_ref(),
            SdkBody::Once(None) => &[],
        }
    }

    pub fn content_length(&self) -> u64 {
        self.bytes().len() as u64
    }

    pub fn try_clone(&self) -> Option<Self> {
        Some(self.clone())
    }

    fn poll_inner(&mut self) -> Poll<Option<Result<Bytes, BodyError>>> {
        match self {
            SdkBody::Once(ref mut opt) => Poll::Ready(opt.take().filter(|b| !b.is_empty()).map(Ok)),
        }
    }
}

impl From<&str> for SdkBody {
    fn from(s: &str) -> Self {
        SdkBody::from(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<Bytes> for SdkBody {
    fn from(bytes: Bytes) -> Self {
        SdkBody::Once(Some(bytes))
    }
}

impl From<Vec<u8>> for SdkBody {
    fn from(data: Vec<u8>) -> SdkBody {
        Self::from(Bytes::from(data))
    }
}

impl http_body::Body for SdkBody {
    type Data = Bytes;
    type Error = BodyError;

    fn poll_data(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Self::Data, Self::Error>>> {
        self.poll_inner()
    }

    fn poll_trailers(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Result<Option<HeaderMap<HeaderValue>>, Self::Error>> {
        Poll::Ready(Ok(None))
    }

    fn is_end_stream(&self) -> bool {
        match self {
            SdkBody::Once(None) => true,
            SdkBody::Once(Some(bytes)) => bytes.is_empty(),
        }
    }

    fn size_hint(&self) -> http_body::SizeHint {
        http_body::SizeHint::with_exact(self.content_length())
    }
}

#[cfg(test)]
mod test {
    use super::SdkBody;
    use http_body::Body;

    #[test]
    fn buffered_body_reports_exact_size() {
        let body = SdkBody::from("{\"FleetId\":\"fleet-1\"}");
        assert_eq!(body.content_length(), 21);
        assert_eq!(body.size_hint().exact(), Some(21));
        assert!(!body.is_end_stream());
        assert_eq!(body.try_clone(), Some(body.clone()));
    }

    #[test]
    fn empty_body() {
        let body = SdkBody::empty();
        assert_eq!(body.bytes(), b"");
        assert_eq!(body.content_length(), 0);
        assert!(body.is_end_stream());
        assert!(SdkBody::from(Vec::new()).is_end_stream());
    }
}
