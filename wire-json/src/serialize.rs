/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::escape::escape_string;
use thiserror::Error;
use wire_types::date_time::{DateTimeFormatError, Format};
use wire_types::{Blob, DateTime, Number, Value};

#[derive(Debug, Error)]
pub enum JsonEncodeError {
    #[error("timestamp cannot be written as JSON: {0}")]
    Timestamp(#[from] DateTimeFormatError),
}

/// Writes exactly one JSON value into the output.
pub struct JsonValueWriter<'a> {
    output: &'a mut String,
}

impl<'a> JsonValueWriter<'a> {
    pub fn new(output: &'a mut String) -> Self {
        JsonValueWriter { output }
    }

    /// Writes a null value.
    pub fn null(self) {
        self.output.push_str("null");
    }

    /// Writes the boolean `value`.
    pub fn boolean(self, value: bool) {
        self.output.push_str(if value { "true" } else { "false" });
    }

    /// Writes a string `value`.
    pub fn string(self, value: &str) {
        append_string(self.output, value);
    }

    /// Writes a string `value` without escaping it.
    pub fn string_unchecked(self, value: &str) {
        append_string_unchecked(self.output, value);
    }

    /// Writes a number `value`.
    pub fn number(self, value: Number) {
        append_number(self.output, value);
    }

    /// Writes a blob as a base64 string.
    pub fn blob(self, value: &Blob) {
        append_string_unchecked(self.output, &value.to_base64());
    }

    /// Writes a timestamp in `format`. Epoch seconds are numbers, the other formats strings.
    pub fn date_time(self, value: &DateTime, format: Format) -> Result<(), JsonEncodeError> {
        let formatted = value.fmt(format)?;
        match format {
            Format::EpochSeconds => self.output.push_str(&formatted),
            _ => append_string(self.output, &formatted),
        }
        Ok(())
    }

    /// Writes any [`Value`]. Timestamps use the JSON default of epoch seconds.
    pub fn value(self, value: &Value) {
        match value {
            Value::String(v) => self.string(v),
            Value::Bool(v) => self.boolean(*v),
            Value::Number(v) => self.number(*v),
            Value::Timestamp(v) => self.output.push_str(&v.fmt_epoch_seconds()),
            Value::Blob(v) => self.blob(v),
            Value::List(members) => {
                let mut array = self.start_array();
                for member in members {
                    array.value().value(member);
                }
                array.finish();
            }
            Value::Object(members) => {
                let mut object = self.start_object();
                for (key, member) in members {
                    object.key(key).value(member);
                }
                object.finish();
            }
        }
    }

    /// Starts an array.
    pub fn start_array(self) -> JsonArrayWriter<'a> {
        JsonArrayWriter::new(self.output)
    }

    /// Starts an object.
    pub fn start_object(self) -> JsonObjectWriter<'a> {
        JsonObjectWriter::new(self.output)
    }
}

pub struct JsonObjectWriter<'a> {
    json: &'a mut String,
    started: bool,
}

impl<'a> JsonObjectWriter<'a> {
    pub fn new(output: &'a mut String) -> Self {
        output.push('{');
        Self {
            json: output,
            started: false,
        }
    }

    /// Starts a member with the given `key`; the returned writer writes its value.
    pub fn key(&mut self, key: &str) -> JsonValueWriter<'_> {
        if self.started {
            self.json.push(',');
        }
        self.started = true;

        self.json.push('"');
        self.json.push_str(&escape_string(key));
        self.json.push_str("\":");

        JsonValueWriter::new(self.json)
    }

    /// Finishes the object.
    pub fn finish(self) {
        self.json.push('}');
    }
}

pub struct JsonArrayWriter<'a> {
    json: &'a mut String,
    started: bool,
}

impl<'a> JsonArrayWriter<'a> {
    pub fn new(output: &'a mut String) -> Self {
        output.push('[');
        Self {
            json: output,
            started: false,
        }
    }

    /// Starts the next element; the returned writer writes it.
    pub fn value(&mut self) -> JsonValueWriter<'_> {
        if self.started {
            self.json.push(',');
        }
        self.started = true;
        JsonValueWriter::new(self.json)
    }

    /// Finishes the array.
    pub fn finish(self) {
        self.json.push(']');
    }
}

fn append_string(json: &mut String, value: &str) {
    append_string_unchecked(json, &escape_string(value));
}

fn append_string_unchecked(json: &mut String, value: &str) {
    json.push('"');
    json.push_str(value);
    json.push('"');
}

fn append_number(json: &mut String, value: Number) {
    match value {
        Number::PosInt(value) => json.push_str(itoa::Buffer::new().format(value)),
        Number::NegInt(value) => json.push_str(itoa::Buffer::new().format(value)),
        // JSON has no literal for these, AWS JSON protocols send them as strings
        Number::Float(value) if !value.is_finite() => {
            append_string_unchecked(json, &Number::Float(value).to_string())
        }
        Number::Float(value) => json.push_str(ryu::Buffer::new().format_finite(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::{append_number, JsonArrayWriter, JsonObjectWriter, JsonValueWriter};
    use proptest::proptest;
    use wire_types::date_time::Format;
    use wire_types::{Blob, DateTime, Number, Value};

    fn format_test_number(number: Number) -> String {
        let mut formatted = String::new();
        append_number(&mut formatted, number);
        formatted
    }

    #[test]
    fn empty() {
        let mut output = String::new();
        JsonObjectWriter::new(&mut output).finish();
        assert_eq!("{}", &output);

        let mut output = String::new();
        JsonArrayWriter::new(&mut output).finish();
        assert_eq!("[]", &output);
    }

    #[test]
    fn object_inside_object() {
        let mut output = String::new();
        let mut outer = JsonObjectWriter::new(&mut output);
        let mut inner = outer.key("nested").start_object();
        inner.key("test").string("test");
        inner.finish();
        outer.finish();
        assert_eq!(r#"{"nested":{"test":"test"}}"#, &output);
    }

    #[test]
    fn object_members_in_write_order() {
        let mut output = String::new();
        let mut object = JsonObjectWriter::new(&mut output);
        object.key("FleetId").string("fleet-1");
        object.key("Limit").number(Number::PosInt(10));
        object.key("Enabled").boolean(false);
        object.key("Gone").null();
        object.key("ba\nr").start_array().finish();
        object.finish();
        assert_eq!(
            r#"{"FleetId":"fleet-1","Limit":10,"Enabled":false,"Gone":null,"ba\nr":[]}"#,
            &output
        );
    }

    #[test]
    fn mixed_array() {
        let mut output = String::new();
        let mut array = JsonArrayWriter::new(&mut output);
        array.value().string("1");
        array.value().number(Number::NegInt(-2));
        array.value().string_unchecked("unchecked");
        array.value().boolean(true);
        array.value().start_object().finish();
        array.value().null();
        array.finish();
        assert_eq!(r#"["1",-2,"unchecked",true,{},null]"#, &output);
    }

    #[test]
    fn date_times() {
        let mut output = String::new();
        let mut array = JsonArrayWriter::new(&mut output);
        let date_time = DateTime::from_secs_and_nanos(1576540098, 520_000_000);
        array
            .value()
            .date_time(&date_time, Format::EpochSeconds)
            .unwrap();
        array.value().date_time(&date_time, Format::DateTime).unwrap();
        array.value().date_time(&date_time, Format::HttpDate).unwrap();
        array.finish();
        assert_eq!(
            r#"[1576540098.52,"2019-12-16T23:48:18.52Z","Mon, 16 Dec 2019 23:48:18.520 GMT"]"#,
            &output
        );
    }

    #[test]
    fn unrepresentable_date_time_is_an_error() {
        let mut output = String::new();
        JsonValueWriter::new(&mut output)
            .date_time(&DateTime::from_secs(i64::MAX), Format::DateTime)
            .expect_err("year is out of range");
    }

    #[test]
    fn nested_values() {
        let value = Value::Object(vec![
            ("logGroupName".to_owned(), Value::from("group")),
            (
                "logEvents".to_owned(),
                Value::List(vec![Value::Object(vec![
                    ("timestamp".to_owned(), Value::from(1_500_000_000_000_i64)),
                    ("message".to_owned(), Value::from("hello \"world\"")),
                ])]),
            ),
            ("payload".to_owned(), Value::from(Blob::new("hi"))),
            ("at".to_owned(), Value::from(DateTime::from_secs(5))),
        ]);
        let mut output = String::new();
        JsonValueWriter::new(&mut output).value(&value);
        assert_eq!(
            r#"{"logGroupName":"group","logEvents":[{"timestamp":1500000000000,"message":"hello \"world\""}],"payload":"aGk=","at":5}"#,
            &output
        );
    }

    #[test]
    fn number_formatting() {
        assert_eq!("1", format_test_number(Number::PosInt(1)));
        assert_eq!("-1", format_test_number(Number::NegInt(-1)));
        assert_eq!("0.0", format_test_number(Number::Float(0.0)));
        assert_eq!("10000000000.0", format_test_number(Number::Float(1e10)));
        assert_eq!("-1.2", format_test_number(Number::Float(-1.2)));
        assert_eq!("\"NaN\"", format_test_number(Number::Float(f64::NAN)));
        assert_eq!(
            "\"Infinity\"",
            format_test_number(Number::Float(f64::INFINITY))
        );
        assert_eq!(
            "\"-Infinity\"",
            format_test_number(Number::Float(f64::NEG_INFINITY))
        );
    }

    proptest! {
        #[test]
        fn matches_serde_json_pos_int_format(value: u64) {
            assert_eq!(
                serde_json::to_string(&value).unwrap(),
                format_test_number(Number::PosInt(value)),
            )
        }

        #[test]
        fn matches_serde_json_neg_int_format(value: i64) {
            assert_eq!(
                serde_json::to_string(&value).unwrap(),
                format_test_number(Number::NegInt(value)),
            )
        }

        #[test]
        fn strings_parse_back_with_serde_json(s in ".*") {
            let mut output = String::new();
            JsonValueWriter::new(&mut output).string(&s);
            let parsed: String = serde_json::from_str(&output).unwrap();
            assert_eq!(parsed, s);
        }
    }
}
