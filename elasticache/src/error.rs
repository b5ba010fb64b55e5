/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use wire_http::service_error::{ErrorShape, ErrorTable};

pub static ERRORS: ErrorTable = ErrorTable::new(
    crate::SERVICE_NAME,
    &[
        ErrorShape::client("ReplicationGroupNotFoundFault"),
        ErrorShape::client("InvalidReplicationGroupState"),
        ErrorShape::client("InvalidCacheClusterState"),
        ErrorShape::client("InvalidCacheSecurityGroupState"),
        ErrorShape::client("InsufficientCacheClusterCapacity"),
        ErrorShape::client("CacheClusterNotFound"),
        ErrorShape::client("NodeQuotaForClusterExceeded"),
        ErrorShape::client("NodeQuotaForCustomerExceeded"),
        ErrorShape::client("CacheSecurityGroupNotFound"),
        ErrorShape::client("CacheParameterGroupNotFound"),
        ErrorShape::client("InvalidVPCNetworkStateFault"),
        ErrorShape::client("InvalidParameterValue"),
        ErrorShape::client("InvalidParameterCombination"),
    ],
);
