/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request marshalling for generated service clients.
//!
//! A [`RequestDescriptor`](descriptor::RequestDescriptor) describes one operation: its HTTP
//! method, URI template, protocol and an ordered table of
//! [`FieldBinding`](descriptor::FieldBinding)s. [`marshal`](marshal::marshal) combines a typed
//! request with its descriptor and a body serializer into a [`WireRequest`](request::WireRequest).

pub mod body;
pub mod client;
pub mod config;
pub mod descriptor;
pub mod env;
pub mod error;
pub mod header;
pub mod idempotency_token;
pub mod label;
pub mod marshal;
pub mod operation;
pub mod query;
pub mod request;
pub mod serializer;
pub mod service_error;
pub mod uri_template;

pub use wire_types::Value;
