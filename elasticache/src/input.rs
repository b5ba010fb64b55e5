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

/// Modifies the settings of a replication group.
///
/// Unless `apply_immediately` is set, changes are applied during the next maintenance window.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModifyReplicationGroupInput {
    pub replication_group_id: Option<String>,
    pub replication_group_description: Option<String>,
    pub primary_cluster_id: Option<String>,
    pub snapshotting_cluster_id: Option<String>,
    pub automatic_failover_enabled: Option<bool>,
    /// Only for clusters outside a VPC
    pub cache_security_group_names: Option<Vec<String>>,
    /// Only for clusters in a VPC
    pub security_group_ids: Option<Vec<String>>,
    /// `ddd:hh24:mi-ddd:hh24:mi`, eg. `sun:23:00-mon:01:30`
    pub preferred_maintenance_window: Option<String>,
    pub notification_topic_arn: Option<String>,
    pub cache_parameter_group_name: Option<String>,
    /// `active` or `inactive`
    pub notification_topic_status: Option<String>,
    pub apply_immediately: Option<bool>,
    pub engine_version: Option<String>,
    pub auto_minor_version_upgrade: Option<bool>,
    pub snapshot_retention_limit: Option<i32>,
    pub snapshot_window: Option<String>,
    pub cache_node_type: Option<String>,
}

fn string_list(values: &Option<Vec<String>>) -> Option<Value> {
    values
        .as_ref()
        .map(|values| Value::List(values.iter().map(Value::from).collect()))
}

lazy_static! {
    static ref MODIFY_REPLICATION_GROUP: RequestDescriptor<ModifyReplicationGroupInput> =
        RequestDescriptor::new(
            SERVICE_NAME,
            "ModifyReplicationGroup",
            Method::POST,
            "/",
            PROTOCOL,
            vec![
                FieldBinding::body("ReplicationGroupId", |i: &ModifyReplicationGroupInput| {
                    i.replication_group_id.as_ref().map(Value::from)
                }),
                FieldBinding::body(
                    "ReplicationGroupDescription",
                    |i: &ModifyReplicationGroupInput| {
                        i.replication_group_description.as_ref().map(Value::from)
                    },
                ),
                FieldBinding::body("PrimaryClusterId", |i: &ModifyReplicationGroupInput| {
                    i.primary_cluster_id.as_ref().map(Value::from)
                }),
                FieldBinding::body("SnapshottingClusterId", |i: &ModifyReplicationGroupInput| {
                    i.snapshotting_cluster_id.as_ref().map(Value::from)
                }),
                FieldBinding::body(
                    "AutomaticFailoverEnabled",
                    |i: &ModifyReplicationGroupInput| i.automatic_failover_enabled.map(Value::from),
                ),
                FieldBinding::body(
                    "CacheSecurityGroupNames",
                    |i: &ModifyReplicationGroupInput| string_list(&i.cache_security_group_names),
                )
                .with_member_name("CacheSecurityGroupName"),
                FieldBinding::body("SecurityGroupIds", |i: &ModifyReplicationGroupInput| {
                    string_list(&i.security_group_ids)
                })
                .with_member_name("SecurityGroupId"),
                FieldBinding::body(
                    "PreferredMaintenanceWindow",
                    |i: &ModifyReplicationGroupInput| {
                        i.preferred_maintenance_window.as_ref().map(Value::from)
                    },
                ),
                FieldBinding::body("NotificationTopicArn", |i: &ModifyReplicationGroupInput| {
                    i.notification_topic_arn.as_ref().map(Value::from)
                }),
                FieldBinding::body(
                    "CacheParameterGroupName",
                    |i: &ModifyReplicationGroupInput| {
                        i.cache_parameter_group_name.as_ref().map(Value::from)
                    },
                ),
                FieldBinding::body(
                    "NotificationTopicStatus",
                    |i: &ModifyReplicationGroupInput| {
                        i.notification_topic_status.as_ref().map(Value::from)
                    },
                ),
                FieldBinding::body("ApplyImmediately", |i: &ModifyReplicationGroupInput| {
                    i.apply_immediately.map(Value::from)
                }),
                FieldBinding::body("EngineVersion", |i: &ModifyReplicationGroupInput| {
                    i.engine_version.as_ref().map(Value::from)
                }),
                FieldBinding::body(
                    "AutoMinorVersionUpgrade",
                    |i: &ModifyReplicationGroupInput| i.auto_minor_version_upgrade.map(Value::from),
                ),
                FieldBinding::body(
                    "SnapshotRetentionLimit",
                    |i: &ModifyReplicationGroupInput| i.snapshot_retention_limit.map(Value::from),
                ),
                FieldBinding::body("SnapshotWindow", |i: &ModifyReplicationGroupInput| {
                    i.snapshot_window.as_ref().map(Value::from)
                }),
                FieldBinding::body("CacheNodeType", |i: &ModifyReplicationGroupInput| {
                    i.cache_node_type.as_ref().map(Value::from)
                }),
            ],
        )
        .expect("ModifyReplicationGroup descriptor is valid");
}

impl OperationInput for ModifyReplicationGroupInput {
    fn descriptor() -> &'static RequestDescriptor<Self> {
        &MODIFY_REPLICATION_GROUP
    }
}
