/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Amazon CloudWatch Logs.
//!
//! ```rust
//! use logs::input::PutLogEventsInput;
//! use wire_http::config::{Config, ConfigKey};
//!
//! let client = logs::client(Config::from_options(vec![(ConfigKey::Region, "us-east-1")]).unwrap());
//! let request = client
//!     .prepare(Some(&PutLogEventsInput {
//!         log_group_name: Some("app".to_owned()),
//!         log_stream_name: Some("web-1".to_owned()),
//!         ..Default::default()
//!     }))
//!     .unwrap();
//! assert_eq!(request.uri().host(), Some("logs.us-east-1.amazonaws.com"));
//! ```

pub mod error;
pub mod input;
pub mod model;

use wire_http::client::Client;
use wire_http::config::Config;
use wire_http::descriptor::Protocol;

pub const SERVICE_NAME: &str = "CloudWatchLogs";
pub const ENDPOINT_PREFIX: &str = "logs";

pub(crate) const PROTOCOL: Protocol = Protocol::AwsJson1_1 {
    target_prefix: "Logs_20140328",
};

pub fn client(config: Config) -> Client {
    Client::new(config, ENDPOINT_PREFIX)
}
