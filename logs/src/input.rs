/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::model::InputLogEvent;
use crate::{PROTOCOL, SERVICE_NAME};
use http::Method;
use lazy_static::lazy_static;
use wire_http::descriptor::{FieldBinding, RequestDescriptor};
use wire_http::operation::OperationInput;
use wire_types::Value;

/// Uploads a batch of log events to a log stream.
///
/// Events must be in chronological order. `sequence_token` is the token returned by the
/// previous upload to the same stream.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PutLogEventsInput {
    pub log_group_name: Option<String>,
    pub log_stream_name: Option<String>,
    pub log_events: Option<Vec<InputLogEvent>>,
    pub sequence_token: Option<String>,
}

lazy_static! {
    static ref PUT_LOG_EVENTS: RequestDescriptor<PutLogEventsInput> = RequestDescriptor::new(
        SERVICE_NAME,
        "PutLogEvents",
        Method::POST,
        "/",
        PROTOCOL,
        vec![
            FieldBinding::body("logGroupName", |i: &PutLogEventsInput| {
                i.log_group_name.as_ref().map(Value::from)
            }),
            FieldBinding::body("logStreamName", |i: &PutLogEventsInput| {
                i.log_stream_name.as_ref().map(Value::from)
            }),
            FieldBinding::body("logEvents", |i: &PutLogEventsInput| {
                i.log_events
                    .as_ref()
                    .map(|events| Value::List(events.iter().map(InputLogEvent::to_value).collect()))
            }),
            FieldBinding::body("sequenceToken", |i: &PutLogEventsInput| {
                i.sequence_token.as_ref().map(Value::from)
            }),
        ],
    )
    .expect("PutLogEvents descriptor is valid");
}

impl OperationInput for PutLogEventsInput {
    fn descriptor() -> &'static RequestDescriptor<Self> {
        &PUT_LOG_EVENTS
    }
}
