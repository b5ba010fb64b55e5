/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Abstractions for the AWS Query protocol, where the request body is a flat list of
//! `Key=Value` pairs joined with `&`.

use std::borrow::Cow;
use thiserror::Error;
use urlencoding::encode;
use wire_types::date_time::{DateTimeFormatError, Format};
use wire_types::{Blob, DateTime, Number};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryEncodeError {
    #[error("query parameter names cannot be empty (under prefix `{prefix}`)")]
    EmptyName { prefix: String },
    #[error(transparent)]
    Timestamp(#[from] DateTimeFormatError),
}

/// Writes the `Action` and `Version` parameters, then one pair per [`QueryValueWriter`]
pub struct QueryWriter<'a> {
    output: &'a mut String,
}

impl<'a> QueryWriter<'a> {
    pub fn new(output: &'a mut String, action: &str, version: &str) -> Self {
        output.push_str("Action=");
        output.push_str(&encode(action));
        output.push_str("&Version=");
        output.push_str(&encode(version));
        QueryWriter { output }
    }

    pub fn prefix(&mut self, name: &str) -> Result<QueryValueWriter<'_>, QueryEncodeError> {
        if name.is_empty() {
            return Err(QueryEncodeError::EmptyName {
                prefix: String::new(),
            });
        }
        Ok(QueryValueWriter::new(self.output, Cow::Owned(name.to_owned())))
    }

    pub fn finish(self) {
        // pairs are written eagerly, nothing is left to close
    }
}

/// Writes the value for one key, or descends into nested keys
pub struct QueryValueWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
}

impl<'a> QueryValueWriter<'a> {
    fn new(output: &'a mut String, prefix: Cow<'a, str>) -> Self {
        QueryValueWriter { output, prefix }
    }

    /// Nested key `<prefix>.<name>`, used for structure and map members
    pub fn prefix(&mut self, name: &str) -> Result<QueryValueWriter<'_>, QueryEncodeError> {
        if name.is_empty() {
            return Err(QueryEncodeError::EmptyName {
                prefix: self.prefix.to_string(),
            });
        }
        let prefix = format!("{}.{}", self.prefix, name);
        Ok(QueryValueWriter::new(self.output, Cow::Owned(prefix)))
    }

    pub fn string(self, value: &str) {
        self.write_param(&encode(value));
    }

    pub fn boolean(self, value: bool) {
        self.write_param(if value { "true" } else { "false" });
    }

    pub fn number(self, value: Number) {
        self.write_param(&encode(&value.to_string()));
    }

    pub fn blob(self, value: &Blob) {
        self.write_param(&encode(&value.to_base64()));
    }

    pub fn date_time(self, value: &DateTime, format: Format) -> Result<(), QueryEncodeError> {
        let formatted = value.fmt(format)?;
        self.write_param(&encode(&formatted));
        Ok(())
    }

    /// Starts a list; members are written as `<prefix>.<member>.<n>` (`<prefix>.<n>` when `flat`)
    pub fn start_list(self, flat: bool, member_override: Option<&str>) -> QueryListWriter<'a> {
        let member = member_override.unwrap_or("member");
        let entry_prefix = if flat {
            self.prefix.to_string()
        } else {
            format!("{}.{}", self.prefix, member)
        };
        QueryListWriter {
            output: self.output,
            prefix: self.prefix,
            entry_prefix,
            next_index: 1,
        }
    }

    fn write_param(self, value: &str) {
        self.output.push('&');
        self.output.push_str(&encode(&self.prefix));
        self.output.push('=');
        self.output.push_str(value);
    }
}

pub struct QueryListWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
    entry_prefix: String,
    next_index: usize,
}

impl<'a> QueryListWriter<'a> {
    pub fn entry(&mut self) -> QueryValueWriter<'_> {
        let prefix = format!("{}.{}", self.entry_prefix, self.next_index);
        self.next_index += 1;
        QueryValueWriter::new(self.output, Cow::Owned(prefix))
    }

    /// An empty list is still sent, as `<prefix>=`
    pub fn finish(self) {
        if self.next_index == 1 {
            QueryValueWriter::new(self.output, self.prefix).write_param("");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{QueryEncodeError, QueryWriter};
    use wire_types::date_time::Format;
    use wire_types::{Blob, DateTime, Number};

    #[test]
    fn action_and_version_only() {
        let mut out = String::new();
        QueryWriter::new(&mut out, "DescribeStacks", "2010-05-15").finish();
        assert_eq!("Action=DescribeStacks&Version=2010-05-15", out);
    }

    #[test]
    fn scalars_are_form_encoded() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "SomeAction", "1.0");
        writer.prefix("Name").unwrap().string("some value & more");
        writer.prefix("Flag").unwrap().boolean(true);
        writer.prefix("Count").unwrap().number(Number::NegInt(-5));
        writer.prefix("Data").unwrap().blob(&Blob::new("hi?"));
        writer
            .prefix("When")
            .unwrap()
            .date_time(&DateTime::from_secs(0), Format::DateTime)
            .unwrap();
        writer.finish();
        assert_eq!(
            "Action=SomeAction&Version=1.0\
             &Name=some%20value%20%26%20more\
             &Flag=true\
             &Count=-5\
             &Data=aGk%2F\
             &When=1970-01-01T00%3A00%3A00Z",
            out
        );
    }

    #[test]
    fn lists() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "A", "1");

        let mut list = writer
            .prefix("CacheSecurityGroupNames")
            .unwrap()
            .start_list(false, Some("CacheSecurityGroupName"));
        list.entry().string("default");
        list.entry().string("other");
        list.finish();

        let mut list = writer.prefix("Ids").unwrap().start_list(false, None);
        list.entry().string("sg-1");
        list.finish();

        let mut flat = writer.prefix("Flat").unwrap().start_list(true, None);
        flat.entry().string("x");
        flat.finish();

        writer.prefix("Empty").unwrap().start_list(false, None).finish();
        writer.finish();

        assert_eq!(
            "Action=A&Version=1\
             &CacheSecurityGroupNames.CacheSecurityGroupName.1=default\
             &CacheSecurityGroupNames.CacheSecurityGroupName.2=other\
             &Ids.member.1=sg-1\
             &Flat.1=x\
             &Empty=",
            out
        );
    }

    #[test]
    fn nested_structures() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "A", "1");
        let mut tags = writer.prefix("Tags").unwrap().start_list(false, None);
        let mut tag = tags.entry();
        tag.prefix("Key").unwrap().string("env");
        tag.prefix("Value").unwrap().string("prod");
        tags.finish();
        writer.finish();
        assert_eq!(
            "Action=A&Version=1&Tags.member.1.Key=env&Tags.member.1.Value=prod",
            out
        );
    }

    #[test]
    fn empty_names_are_rejected() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "A", "1");
        assert_eq!(
            writer.prefix("").err(),
            Some(QueryEncodeError::EmptyName {
                prefix: String::new()
            })
        );
        let mut outer = writer.prefix("Outer").unwrap();
        assert_eq!(
            outer.prefix("").err(),
            Some(QueryEncodeError::EmptyName {
                prefix: "Outer".to_owned()
            })
        );
    }

    #[test]
    fn unrepresentable_timestamp() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "A", "1");
        let err = writer
            .prefix("When")
            .unwrap()
            .date_time(&DateTime::from_secs(i64::MAX), Format::DateTime)
            .expect_err("out of range");
        assert!(matches!(err, QueryEncodeError::Timestamp(_)));
    }

    proptest::proptest! {
        #[test]
        fn values_never_break_pairs(value in ".*") {
            let mut out = String::new();
            let mut writer = QueryWriter::new(&mut out, "A", "1");
            writer.prefix("Key").unwrap().string(&value);
            writer.finish();
            let pairs: Vec<&str> = out.split('&').collect();
            proptest::prop_assert_eq!(pairs.len(), 3);
            proptest::prop_assert_eq!(pairs[2].matches('=').count(), 1);
        }
    }
}
