/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::serializer::{BodyField, BoxError, SerializeBody};
use bytes::Bytes;
use wire_query::{QueryValueWriter, QueryWriter};
use wire_types::date_time::Format;
use wire_types::Value;

/// AWS Query bodies declare their charset
pub(crate) const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

/// Writes an AWS Query form body: `Action=<operation>&Version=<version>` followed by one pair
/// per scalar. Structures nest as `Name.Member`, lists as `Name.member.N`.
#[derive(Debug)]
pub struct QueryBody {
    action: String,
    version: &'static str,
    fields: Option<Vec<(String, Option<String>, Value)>>,
}

impl QueryBody {
    pub fn new(action: impl Into<String>, version: &'static str) -> Self {
        QueryBody {
            action: action.into(),
            version,
            fields: None,
        }
    }
}

impl SerializeBody for QueryBody {
    fn content_type(&self) -> &str {
        FORM_CONTENT_TYPE
    }

    fn format_name(&self) -> &'static str {
        "query"
    }

    fn start(&mut self) -> Result<(), BoxError> {
        self.fields = Some(vec![]);
        Ok(())
    }

    fn write_field(&mut self, field: BodyField<'_>, value: &Value) -> Result<(), BoxError> {
        let fields = self
            .fields
            .as_mut()
            .ok_or("query body written before start")?;
        fields.push((
            field.name.to_owned(),
            field.member_name.map(str::to_owned),
            value.clone(),
        ));
        Ok(())
    }

    fn finish(&mut self) -> Result<Bytes, BoxError> {
        let fields = self
            .fields
            .take()
            .ok_or("query body finished before start")?;
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, &self.action, self.version);
        for (name, member_name, value) in &fields {
            write_value(writer.prefix(name)?, member_name.as_deref(), value)?;
        }
        writer.finish();
        Ok(Bytes::from(out))
    }
}

fn write_value(
    writer: QueryValueWriter<'_>,
    member_name: Option<&str>,
    value: &Value,
) -> Result<(), BoxError> {
    match value {
        Value::String(value) => writer.string(value),
        Value::Bool(value) => writer.boolean(*value),
        Value::Number(value) => writer.number(*value),
        Value::Timestamp(value) => writer.date_time(value, Format::DateTime)?,
        Value::Blob(value) => writer.blob(value),
        Value::List(entries) => {
            let mut list = writer.start_list(false, member_name);
            for entry in entries {
                write_value(list.entry(), None, entry)?;
            }
            list.finish();
        }
        Value::Object(members) => {
            let mut writer = writer;
            for (member, member_value) in members {
                write_value(writer.prefix(member)?, None, member_value)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::serializer::{BodyField, QueryBody, SerializeBody};
    use wire_types::{DateTime, Value};

    #[test]
    fn action_and_version_come_first() {
        let mut body = QueryBody::new("DescribeStackResources", "2010-05-15");
        body.start().unwrap();
        body.write_field(BodyField::new("StackName"), &"my stack".into())
            .unwrap();
        assert_eq!(
            body.finish().unwrap(),
            "Action=DescribeStackResources&Version=2010-05-15&StackName=my%20stack"
        );
    }

    #[test]
    fn lists_and_structures() {
        let mut body = QueryBody::new("ModifyReplicationGroup", "2015-02-02");
        body.start().unwrap();
        body.write_field(
            BodyField {
                name: "SecurityGroupIds",
                member_name: Some("SecurityGroupId"),
            },
            &vec!["sg-1", "sg-2"].into(),
        )
        .unwrap();
        body.write_field(BodyField::new("Empty"), &Value::List(vec![]))
            .unwrap();
        body.write_field(
            BodyField::new("Window"),
            &Value::object(vec![
                ("Start", Some(DateTime::from_secs(0).into())),
                ("Enabled", Some(true.into())),
            ]),
        )
        .unwrap();
        assert_eq!(
            body.finish().unwrap(),
            "Action=ModifyReplicationGroup&Version=2015-02-02\
             &SecurityGroupIds.SecurityGroupId.1=sg-1\
             &SecurityGroupIds.SecurityGroupId.2=sg-2\
             &Empty=\
             &Window.Start=1970-01-01T00%3A00%3A00Z\
             &Window.Enabled=true"
        );
    }

    #[test]
    fn empty_member_names_fail() {
        let mut body = QueryBody::new("Action", "1");
        body.start().unwrap();
        body.write_field(
            BodyField::new("Attributes"),
            &Value::object(vec![("", Some("x".into()))]),
        )
        .unwrap();
        assert!(body.finish().is_err());
    }
}
