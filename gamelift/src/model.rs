/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use wire_types::Value;

/// Current status of a scaling policy
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ScalingStatusType {
    Active,
    DeleteRequested,
    Deleted,
    Deleting,
    Error,
    UpdateRequested,
    Updating,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}

impl From<&str> for ScalingStatusType {
    fn from(s: &str) -> Self {
        match s {
            "ACTIVE" => ScalingStatusType::Active,
            "DELETE_REQUESTED" => ScalingStatusType::DeleteRequested,
            "DELETED" => ScalingStatusType::Deleted,
            "DELETING" => ScalingStatusType::Deleting,
            "ERROR" => ScalingStatusType::Error,
            "UPDATE_REQUESTED" => ScalingStatusType::UpdateRequested,
            "UPDATING" => ScalingStatusType::Updating,
            other => ScalingStatusType::Unknown(other.to_owned()),
        }
    }
}

impl std::str::FromStr for ScalingStatusType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ScalingStatusType::from(s))
    }
}

impl ScalingStatusType {
    pub fn as_str(&self) -> &str {
        match self {
            ScalingStatusType::Active => "ACTIVE",
            ScalingStatusType::DeleteRequested => "DELETE_REQUESTED",
            ScalingStatusType::Deleted => "DELETED",
            ScalingStatusType::Deleting => "DELETING",
            ScalingStatusType::Error => "ERROR",
            ScalingStatusType::UpdateRequested => "UPDATE_REQUESTED",
            ScalingStatusType::Updating => "UPDATING",
            ScalingStatusType::Unknown(s) => s.as_ref(),
        }
    }
}

impl AsRef<str> for ScalingStatusType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// A custom key/value property passed to a game server process
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameProperty {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl GameProperty {
    pub(crate) fn to_value(&self) -> Value {
        Value::object(vec![
            ("Key", self.key.as_ref().map(Value::from)),
            ("Value", self.value.as_ref().map(Value::from)),
        ])
    }
}

#[cfg(test)]
mod test {
    use crate::model::ScalingStatusType;

    #[test]
    fn scaling_status_round_trips_known_values() {
        for status in &["ACTIVE", "UPDATE_REQUESTED", "DELETED", "ERROR"] {
            assert_eq!(ScalingStatusType::from(*status).as_str(), *status);
        }
        assert_eq!(
            "PAUSED".parse::<ScalingStatusType>(),
            Ok(ScalingStatusType::Unknown("PAUSED".to_owned()))
        );
    }
}
