/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::model::{GameProperty, ScalingStatusType};
use crate::{PROTOCOL, SERVICE_NAME};
use http::Method;
use lazy_static::lazy_static;
use wire_http::descriptor::{FieldBinding, RequestDescriptor};
use wire_http::operation::OperationInput;
use wire_types::Value;

/// Input of `DescribeScalingPolicies`: retrieves the scaling policies of a fleet
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescribeScalingPoliciesInput {
    pub fleet_id: Option<String>,
    /// Only return policies in this status
    pub status_filter: Option<ScalingStatusType>,
    pub limit: Option<i32>,
    pub next_token: Option<String>,
}

/// Input of `CreateGameSession`.
///
/// An unset `idempotency_token` is filled with a fresh token, so two otherwise identical
/// requests differ unless the client is configured with a fixed token provider.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateGameSessionInput {
    pub fleet_id: Option<String>,
    pub alias_id: Option<String>,
    pub maximum_player_session_count: Option<i32>,
    pub name: Option<String>,
    pub game_properties: Option<Vec<GameProperty>>,
    pub creator_id: Option<String>,
    pub idempotency_token: Option<String>,
}

lazy_static! {
    static ref DESCRIBE_SCALING_POLICIES: RequestDescriptor<DescribeScalingPoliciesInput> =
        RequestDescriptor::new(
            SERVICE_NAME,
            "DescribeScalingPolicies",
            Method::POST,
            "/",
            PROTOCOL,
            vec![
                FieldBinding::body("FleetId", |i: &DescribeScalingPoliciesInput| {
                    i.fleet_id.as_ref().map(Value::from)
                }),
                FieldBinding::body("StatusFilter", |i: &DescribeScalingPoliciesInput| {
                    i.status_filter.as_ref().map(|s| Value::from(s.as_str()))
                }),
                FieldBinding::body("Limit", |i: &DescribeScalingPoliciesInput| {
                    i.limit.map(Value::from)
                }),
                FieldBinding::body("NextToken", |i: &DescribeScalingPoliciesInput| {
                    i.next_token.as_ref().map(Value::from)
                }),
            ],
        )
        .expect("DescribeScalingPolicies descriptor is valid");
    static ref CREATE_GAME_SESSION: RequestDescriptor<CreateGameSessionInput> =
        RequestDescriptor::new(
            SERVICE_NAME,
            "CreateGameSession",
            Method::POST,
            "/",
            PROTOCOL,
            vec![
                FieldBinding::body("FleetId", |i: &CreateGameSessionInput| {
                    i.fleet_id.as_ref().map(Value::from)
                }),
                FieldBinding::body("AliasId", |i: &CreateGameSessionInput| {
                    i.alias_id.as_ref().map(Value::from)
                }),
                FieldBinding::body("MaximumPlayerSessionCount", |i: &CreateGameSessionInput| {
                    i.maximum_player_session_count.map(Value::from)
                }),
                FieldBinding::body("Name", |i: &CreateGameSessionInput| {
                    i.name.as_ref().map(Value::from)
                }),
                FieldBinding::body("GameProperties", |i: &CreateGameSessionInput| {
                    i.game_properties
                        .as_ref()
                        .map(|props| Value::List(props.iter().map(GameProperty::to_value).collect()))
                }),
                FieldBinding::body("CreatorId", |i: &CreateGameSessionInput| {
                    i.creator_id.as_ref().map(Value::from)
                }),
                FieldBinding::body("IdempotencyToken", |i: &CreateGameSessionInput| {
                    i.idempotency_token.as_ref().map(Value::from)
                })
                .idempotency_token(),
            ],
        )
        .expect("CreateGameSession descriptor is valid");
}

impl OperationInput for DescribeScalingPoliciesInput {
    fn descriptor() -> &'static RequestDescriptor<Self> {
        &DESCRIBE_SCALING_POLICIES
    }
}

impl OperationInput for CreateGameSessionInput {
    fn descriptor() -> &'static RequestDescriptor<Self> {
        &CREATE_GAME_SESSION
    }
}
