/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::{PROTOCOL, SERVICE_NAME};
use http::Method;
use lazy_static::lazy_static;
use wire_http::descriptor::{FieldBinding, RequestDescriptor};
use wire_http::operation::OperationInput;
use wire_types::Value;

/// Describes the resources of a stack, or the stack that owns `physical_resource_id`.
///
/// One of `stack_name` and `physical_resource_id` is required by the service.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescribeStackResourcesInput {
    pub stack_name: Option<String>,
    pub logical_resource_id: Option<String>,
    pub physical_resource_id: Option<String>,
}

lazy_static! {
    static ref DESCRIBE_STACK_RESOURCES: RequestDescriptor<DescribeStackResourcesInput> =
        RequestDescriptor::new(
            SERVICE_NAME,
            "DescribeStackResources",
            Method::POST,
            "/",
            PROTOCOL,
            vec![
                FieldBinding::body("StackName", |i: &DescribeStackResourcesInput| {
                    i.stack_name.as_ref().map(Value::from)
                }),
                FieldBinding::body("LogicalResourceId", |i: &DescribeStackResourcesInput| {
                    i.logical_resource_id.as_ref().map(Value::from)
                }),
                FieldBinding::body("PhysicalResourceId", |i: &DescribeStackResourcesInput| {
                    i.physical_resource_id.as_ref().map(Value::from)
                }),
            ],
        )
        .expect("DescribeStackResources descriptor is valid");
}

impl OperationInput for DescribeStackResourcesInput {
    fn descriptor() -> &'static RequestDescriptor<Self> {
        &DESCRIBE_STACK_RESOURCES
    }
}
