/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Formatting values as query string parameters

use crate::label::LABEL_SET;
use percent_encoding::utf8_percent_encode;

/// Spaces are written as `%20`, never `+`
pub fn fmt_string<T: AsRef<str>>(t: T) -> String {
    utf8_percent_encode(t.as_ref(), LABEL_SET).to_string()
}

/// Accumulates `key=value` pairs joined with `&`, in the order they are written
#[derive(Debug, Default)]
pub struct Writer {
    out: String,
}

impl Writer {
    /// Starts from an already-encoded query, eg. the literal query part of a URI template
    pub fn new(encoded_prefix: &str) -> Self {
        Writer {
            out: encoded_prefix.to_owned(),
        }
    }

    pub fn push_kv(&mut self, key: &str, value: &str) {
        if !self.out.is_empty() {
            self.out.push('&');
        }
        self.out.push_str(&fmt_string(key));
        self.out.push('=');
        self.out.push_str(&fmt_string(value));
    }

    pub fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod test {
    use crate::query::{fmt_string, Writer};

    #[test]
    fn url_encode() {
        assert_eq!(fmt_string("y̆").as_str(), "y%CC%86");
        assert_eq!(fmt_string(" ").as_str(), "%20");
        assert_eq!(fmt_string("foo/baz%20").as_str(), "foo%2Fbaz%2520");
        assert_eq!(fmt_string("&=;+").as_str(), "%26%3D%3B%2B");
        assert_eq!(fmt_string("InProgress").as_str(), "InProgress");
    }

    #[test]
    fn writer_joins_pairs_in_order() {
        let mut writer = Writer::default();
        writer.push_kv("limit", "10");
        writer.push_kv("status code", "In Progress");
        writer.push_kv("limit", "20");
        assert_eq!(
            writer.finish(),
            "limit=10&status%20code=In%20Progress&limit=20"
        );
    }

    #[test]
    fn writer_appends_to_literal_query() {
        let mut writer = Writer::new("uploads");
        writer.push_kv("max-uploads", "5");
        assert_eq!(writer.finish(), "uploads&max-uploads=5");
        assert_eq!(Writer::new("").finish(), "");
    }
}
