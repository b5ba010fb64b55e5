/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Amazon ElastiCache: managed Memcached and Redis.
//!
//! Requests use the AWS Query protocol, version `2015-02-02`.

pub mod error;
pub mod input;

use wire_http::client::Client;
use wire_http::config::Config;
use wire_http::descriptor::Protocol;

pub const SERVICE_NAME: &str = "ElastiCache";
pub const ENDPOINT_PREFIX: &str = "elasticache";

pub(crate) const PROTOCOL: Protocol = Protocol::AwsQuery {
    version: "2015-02-02",
};

pub fn client(config: Config) -> Client {
    Client::new(config, ENDPOINT_PREFIX)
}
