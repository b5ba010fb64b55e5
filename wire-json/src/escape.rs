/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::borrow::Cow;
use std::fmt::Write;

fn needs_escape(c: char) -> bool {
    matches!(c, '"' | '\\' | '\u{0}'..='\u{1f}')
}

/// Escapes a string for embedding in a JSON string value.
///
/// Returns the input unchanged when nothing needs escaping.
pub fn escape_string(value: &str) -> Cow<'_, str> {
    match value.find(needs_escape) {
        None => Cow::Borrowed(value),
        Some(first) => {
            let mut escaped = String::with_capacity(value.len() + 8);
            escaped.push_str(&value[..first]);
            for c in value[first..].chars() {
                match c {
                    '"' => escaped.push_str("\\\""),
                    '\\' => escaped.push_str("\\\\"),
                    '\u{08}' => escaped.push_str("\\b"),
                    '\u{0C}' => escaped.push_str("\\f"),
                    '\n' => escaped.push_str("\\n"),
                    '\r' => escaped.push_str("\\r"),
                    '\t' => escaped.push_str("\\t"),
                    c if needs_escape(c) => {
                        // writing into a String cannot fail
                        let _ = write!(escaped, "\\u{:04x}", c as u32);
                    }
                    c => escaped.push(c),
                }
            }
            Cow::Owned(escaped)
        }
    }
}

#[cfg(test)]
mod test {
    use super::escape_string;
    use std::borrow::Cow;

    #[test]
    fn escape() {
        assert_eq!("", escape_string("").as_ref());
        assert_eq!("foo", escape_string("foo").as_ref());
        assert_eq!("foo\\r\\n", escape_string("foo\r\n").as_ref());
        assert_eq!(r#"foo\\bar"#, escape_string(r#"foo\bar"#).as_ref());
        assert_eq!(
            r#"\bf\fo\to\r\n"#,
            escape_string("\u{08}f\u{0C}o\to\r\n").as_ref()
        );
        assert_eq!("\\\"test\\\"", escape_string("\"test\"").as_ref());
        assert_eq!("\\u0000", escape_string("\u{0}").as_ref());
        assert_eq!("\\u001f", escape_string("\u{1f}").as_ref());
        assert_eq!("héllo ✓", escape_string("héllo ✓").as_ref());
    }

    #[test]
    fn unescaped_input_is_borrowed() {
        assert!(matches!(escape_string("fleet-1"), Cow::Borrowed(_)));
        assert!(matches!(escape_string("fleet\n1"), Cow::Owned(_)));
    }

    use proptest::proptest;
    proptest! {
        #[test]
        fn matches_serde_json(s in ".*") {
            assert_eq!(
                serde_json::to_string(&s).unwrap(),
                format!(r#""{}""#, escape_string(&s))
            )
        }
    }
}
