/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::model::LookupAttribute;
use crate::{PROTOCOL, SERVICE_NAME};
use http::Method;
use lazy_static::lazy_static;
use wire_http::descriptor::{FieldBinding, RequestDescriptor};
use wire_http::operation::OperationInput;
use wire_types::{DateTime, Value};

/// Looks up management events captured in the last 90 days
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LookupEventsInput {
    /// The service accepts at most one attribute
    pub lookup_attributes: Option<Vec<LookupAttribute>>,
    pub start_time: Option<DateTime>,
    pub end_time: Option<DateTime>,
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
}

lazy_static! {
    static ref LOOKUP_EVENTS: RequestDescriptor<LookupEventsInput> = RequestDescriptor::new(
        SERVICE_NAME,
        "LookupEvents",
        Method::POST,
        "/",
        PROTOCOL,
        vec![
            FieldBinding::body("LookupAttributes", |i: &LookupEventsInput| {
                i.lookup_attributes.as_ref().map(|attributes| {
                    Value::List(attributes.iter().map(LookupAttribute::to_value).collect())
                })
            }),
            FieldBinding::body("StartTime", |i: &LookupEventsInput| {
                i.start_time.map(Value::from)
            }),
            FieldBinding::body("EndTime", |i: &LookupEventsInput| i.end_time.map(Value::from)),
            FieldBinding::body("MaxResults", |i: &LookupEventsInput| {
                i.max_results.map(Value::from)
            }),
            FieldBinding::body("NextToken", |i: &LookupEventsInput| {
                i.next_token.as_ref().map(Value::from)
            }),
        ],
    )
    .expect("LookupEvents descriptor is valid");
}

impl OperationInput for LookupEventsInput {
    fn descriptor() -> &'static RequestDescriptor<Self> {
        &LOOKUP_EVENTS
    }
}
