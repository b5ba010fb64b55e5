/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use wire_types::Value;

#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum StatusCode {
    Failed,
    InProgress,
    Succeeded,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}

impl From<&str> for StatusCode {
    fn from(s: &str) -> Self {
        match s {
            "Failed" => StatusCode::Failed,
            "InProgress" => StatusCode::InProgress,
            "Succeeded" => StatusCode::Succeeded,
            other => StatusCode::Unknown(other.to_owned()),
        }
    }
}

impl std::str::FromStr for StatusCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(StatusCode::from(s))
    }
}

impl StatusCode {
    pub fn as_str(&self) -> &str {
        match self {
            StatusCode::Failed => "Failed",
            StatusCode::InProgress => "InProgress",
            StatusCode::Succeeded => "Succeeded",
            StatusCode::Unknown(s) => s.as_ref(),
        }
    }
}

impl AsRef<str> for StatusCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Range of inventory items to retrieve with an `inventory-retrieval` job
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InventoryRetrievalJobInput {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub limit: Option<String>,
    pub marker: Option<String>,
}

impl InventoryRetrievalJobInput {
    pub(crate) fn to_value(&self) -> Value {
        Value::object(vec![
            ("StartDate", self.start_date.as_ref().map(Value::from)),
            ("EndDate", self.end_date.as_ref().map(Value::from)),
            ("Limit", self.limit.as_ref().map(Value::from)),
            ("Marker", self.marker.as_ref().map(Value::from)),
        ])
    }
}

/// Describes the job to start: an `archive-retrieval` or an `inventory-retrieval`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JobParameters {
    pub format: Option<String>,
    pub r#type: Option<String>,
    pub archive_id: Option<String>,
    pub description: Option<String>,
    pub sns_topic: Option<String>,
    /// `StartByteValue-EndByteValue`; only for archive retrieval
    pub retrieval_byte_range: Option<String>,
    pub tier: Option<String>,
    pub inventory_retrieval_parameters: Option<InventoryRetrievalJobInput>,
}
