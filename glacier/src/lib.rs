/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Amazon Glacier: archive storage.
//!
//! Requests use REST JSON. Every operation carries the `x-amz-glacier-version` header.

pub mod error;
pub mod input;
pub mod model;

use wire_http::client::Client;
use wire_http::config::Config;

pub const SERVICE_NAME: &str = "Glacier";
pub const ENDPOINT_PREFIX: &str = "glacier";
pub const API_VERSION: &str = "2012-06-01";

pub fn client(config: Config) -> Client {
    Client::new(config, ENDPOINT_PREFIX)
}
