/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Amazon GameLift: game server hosting.
//!
//! Requests use the AWS JSON 1.1 protocol with the `GameLift` target prefix.

pub mod error;
pub mod input;
pub mod model;

use wire_http::client::Client;
use wire_http::config::Config;
use wire_http::descriptor::Protocol;

pub const SERVICE_NAME: &str = "GameLift";
pub const ENDPOINT_PREFIX: &str = "gamelift";

pub(crate) const PROTOCOL: Protocol = Protocol::AwsJson1_1 {
    target_prefix: "GameLift",
};

pub fn client(config: Config) -> Client {
    Client::new(config, ENDPOINT_PREFIX)
}
