/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use wire_types::Value;

/// A log event to upload
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputLogEvent {
    /// Milliseconds since the epoch
    pub timestamp: Option<i64>,
    pub message: Option<String>,
}

impl InputLogEvent {
    pub(crate) fn to_value(&self) -> Value {
        Value::object(vec![
            ("timestamp", self.timestamp.map(Value::from)),
            ("message", self.message.as_ref().map(Value::from)),
        ])
    }
}
