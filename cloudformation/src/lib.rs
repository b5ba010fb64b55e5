/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS CloudFormation: infrastructure as code.
//!
//! Requests use the AWS Query protocol, version `2010-05-15`.

pub mod error;
pub mod input;
pub mod model;

use wire_http::client::Client;
use wire_http::config::Config;
use wire_http::descriptor::Protocol;

pub const SERVICE_NAME: &str = "CloudFormation";
pub const ENDPOINT_PREFIX: &str = "cloudformation";

pub(crate) const PROTOCOL: Protocol = Protocol::AwsQuery {
    version: "2010-05-15",
};

pub fn client(config: Config) -> Client {
    Client::new(config, ENDPOINT_PREFIX)
}
