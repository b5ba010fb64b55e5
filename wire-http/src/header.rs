/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Header map for marshalled requests
//!
//! Names keep the exact casing they were written with (eg. `X-Amz-Target`), while lookups are
//! case-insensitive as HTTP requires. Entries stay in insertion order.

use std::borrow::Cow;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const X_AMZ_TARGET: &str = "X-Amz-Target";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(Cow<'static, str>, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`, replacing (and returning) any value stored under the same name
    /// in any casing. A replaced entry keeps its position but takes the new name's casing.
    pub fn insert(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<String>,
    ) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(idx) => {
                let (old_name, old_value) = &mut self.entries[idx];
                *old_name = name;
                Some(std::mem::replace(old_value, value))
            }
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name)
            .map(|idx| self.entries[idx].1.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.position(name)
            .map(|idx| self.entries.remove(idx).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_ref(), value.as_str()))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(existing, _)| existing.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod test {
    use super::Headers;

    #[test]
    fn lookups_ignore_case() {
        let mut headers = Headers::new();
        headers.insert("X-Amz-Target", "GameLift.DescribeScalingPolicies");
        assert_eq!(
            headers.get("x-amz-target"),
            Some("GameLift.DescribeScalingPolicies")
        );
        assert!(headers.contains("X-AMZ-TARGET"));
        assert!(!headers.contains("Range"));
    }

    #[test]
    fn casing_and_order_are_preserved() {
        let mut headers = Headers::new();
        headers.insert("Range", "bytes=0-10");
        headers.insert("x-amz-glacier-version", "2012-06-01");
        headers.insert("Content-Type", "application/json");
        let names: Vec<_> = headers.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Range", "x-amz-glacier-version", "Content-Type"]);
    }

    #[test]
    fn insert_replaces_existing_value() {
        let mut headers = Headers::new();
        assert_eq!(headers.insert("content-type", "text/plain"), None);
        assert_eq!(
            headers.insert("Content-Type", "application/json"),
            Some("text/plain".to_owned())
        );
        assert_eq!(headers.len(), 1);
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec![("Content-Type", "application/json")]
        );
        assert_eq!(headers.remove("CONTENT-TYPE"), Some("application/json".to_owned()));
        assert!(headers.is_empty());
    }
}
