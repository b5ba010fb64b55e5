/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS CloudTrail: account activity history.

pub mod error;
pub mod input;
pub mod model;

use wire_http::client::Client;
use wire_http::config::Config;
use wire_http::descriptor::Protocol;

pub const SERVICE_NAME: &str = "CloudTrail";
pub const ENDPOINT_PREFIX: &str = "cloudtrail";

pub(crate) const PROTOCOL: Protocol = Protocol::AwsJson1_1 {
    target_prefix: "com.amazonaws.cloudtrail.v20131101.CloudTrail_20131101",
};

pub fn client(config: Config) -> Client {
    Client::new(config, ENDPOINT_PREFIX)
}
