/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::borrow::Cow;
use std::fmt::Write;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Context {
    Text,
    Attribute,
}

fn needs_escape(c: char, context: Context) -> bool {
    match c {
        '&' | '<' | '>' => true,
        '"' => context == Context::Attribute,
        // tabs and newlines survive in text but are normalized away inside attributes
        '\t' | '\n' => context == Context::Attribute,
        c => c.is_control(),
    }
}

pub(crate) fn escape(s: &str, context: Context) -> Cow<'_, str> {
    let first = match s.find(|c| needs_escape(c, context)) {
        None => return Cow::Borrowed(s),
        Some(idx) => idx,
    };
    let mut out = String::with_capacity(s.len() + 16);
    out.push_str(&s[..first]);
    for c in s[first..].chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if context == Context::Attribute => out.push_str("&quot;"),
            c if needs_escape(c, context) => {
                let _ = write!(out, "&#x{:X};", c as u32);
            }
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod test {
    use super::{escape, Context};

    #[test]
    fn escape_text() {
        assert_eq!(escape("plain", Context::Text), "plain");
        assert_eq!(escape("a < b & c > d", Context::Text), "a &lt; b &amp; c &gt; d");
        assert_eq!(escape("say \"hi\"", Context::Text), "say \"hi\"");
        assert_eq!(escape("line\r\nnext", Context::Text), "line&#xD;\nnext");
        assert_eq!(escape("tab\there", Context::Text), "tab\there");
    }

    #[test]
    fn escape_attribute() {
        assert_eq!(escape("say \"hi\"", Context::Attribute), "say &quot;hi&quot;");
        assert_eq!(escape("a\nb\tc", Context::Attribute), "a&#xA;b&#x9;c");
    }
}
