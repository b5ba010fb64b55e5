/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A resource attribute that a change set can modify.
///
/// Unlike most service enums this one is closed: parsing an unknown value fails.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ResourceAttribute {
    Properties,
    Metadata,
    CreationPolicy,
    UpdatePolicy,
    DeletionPolicy,
    Tags,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseResourceAttributeError {
    #[error("resource attribute must not be empty")]
    Empty,
    #[error("`{value}` is not a resource attribute")]
    Unknown { value: String },
}

impl ResourceAttribute {
    pub const ALL: [ResourceAttribute; 6] = [
        ResourceAttribute::Properties,
        ResourceAttribute::Metadata,
        ResourceAttribute::CreationPolicy,
        ResourceAttribute::UpdatePolicy,
        ResourceAttribute::DeletionPolicy,
        ResourceAttribute::Tags,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceAttribute::Properties => "Properties",
            ResourceAttribute::Metadata => "Metadata",
            ResourceAttribute::CreationPolicy => "CreationPolicy",
            ResourceAttribute::UpdatePolicy => "UpdatePolicy",
            ResourceAttribute::DeletionPolicy => "DeletionPolicy",
            ResourceAttribute::Tags => "Tags",
        }
    }
}

impl FromStr for ResourceAttribute {
    type Err = ParseResourceAttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseResourceAttributeError::Empty);
        }
        ResourceAttribute::ALL
            .iter()
            .find(|attribute| attribute.as_str() == s)
            .copied()
            .ok_or_else(|| ParseResourceAttributeError::Unknown {
                value: s.to_owned(),
            })
    }
}

impl AsRef<str> for ResourceAttribute {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ResourceAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod test {
    use crate::model::{ParseResourceAttributeError, ResourceAttribute};

    #[test]
    fn parse_known_attributes() {
        for attribute in &ResourceAttribute::ALL {
            assert_eq!(attribute.as_str().parse(), Ok(*attribute));
        }
        assert_eq!(ResourceAttribute::DeletionPolicy.to_string(), "DeletionPolicy");
    }

    #[test]
    fn empty_is_rejected() {
        assert_eq!(
            "".parse::<ResourceAttribute>(),
            Err(ParseResourceAttributeError::Empty)
        );
    }

    #[test]
    fn unknown_is_rejected() {
        let err = "properties".parse::<ResourceAttribute>().unwrap_err();
        assert_eq!(
            err,
            ParseResourceAttributeError::Unknown {
                value: "properties".to_owned()
            }
        );
        assert_eq!(err.to_string(), "`properties` is not a resource attribute");
    }
}
