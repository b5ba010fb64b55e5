/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! URI templates such as `/{accountId}/vaults/{vaultName}/jobs` or `/{Bucket}/{Key+}?uploads`

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UriTemplateError {
    #[error("URI template `{template}` must start with `/`")]
    MissingLeadingSlash { template: String },
    #[error("unbalanced `{{` or `}}` at byte {position} of URI template `{template}`")]
    UnbalancedBrace { template: String, position: usize },
    #[error("empty label at byte {position} of URI template `{template}`")]
    EmptyLabel { template: String, position: usize },
    #[error("labels are not allowed in the query part of URI template `{template}`")]
    LabelInQuery { template: String },
    #[error("invalid character {character:?} at byte {position} of URI template `{template}`")]
    InvalidCharacter {
        template: String,
        character: char,
        position: usize,
    },
}

/// Characters allowed outside labels: RFC 3986 `pchar`, `/`, `?` and `%` of an escape
fn is_template_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "-._~!$&'()*+,;=:@/?%{}".contains(c)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Label { name: String, greedy: bool },
}

/// A parsed URI template. The path may contain labels; the optional query part is literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriTemplate {
    segments: Vec<Segment>,
    query: String,
}

impl UriTemplate {
    pub fn parse(template: &str) -> Result<Self, UriTemplateError> {
        if !template.starts_with('/') {
            return Err(UriTemplateError::MissingLeadingSlash {
                template: template.to_owned(),
            });
        }
        if let Some((position, character)) = template
            .char_indices()
            .find(|(_, c)| !is_template_char(*c))
        {
            return Err(UriTemplateError::InvalidCharacter {
                template: template.to_owned(),
                character,
                position,
            });
        }
        let (path, query) = match template.find('?') {
            Some(idx) => (&template[..idx], &template[idx + 1..]),
            None => (template, ""),
        };
        if query.contains(|c| c == '{' || c == '}') {
            return Err(UriTemplateError::LabelInQuery {
                template: template.to_owned(),
            });
        }

        let mut segments = vec![];
        let mut rest = path;
        let mut offset = 0;
        while !rest.is_empty() {
            let open = rest.find('{');
            let close = rest.find('}');
            match (open, close) {
                (None, None) => {
                    segments.push(Segment::Literal(rest.to_owned()));
                    break;
                }
                (Some(open), Some(close)) if open < close => {
                    if rest[open + 1..close].contains('{') {
                        return Err(UriTemplateError::UnbalancedBrace {
                            template: template.to_owned(),
                            position: offset + open,
                        });
                    }
                    if open > 0 {
                        segments.push(Segment::Literal(rest[..open].to_owned()));
                    }
                    let label = &rest[open + 1..close];
                    let (name, greedy) = match label.strip_suffix('+') {
                        Some(name) => (name, true),
                        None => (label, false),
                    };
                    if name.is_empty() {
                        return Err(UriTemplateError::EmptyLabel {
                            template: template.to_owned(),
                            position: offset + open,
                        });
                    }
                    segments.push(Segment::Label {
                        name: name.to_owned(),
                        greedy,
                    });
                    offset += close + 1;
                    rest = &rest[close + 1..];
                }
                (Some(position), _) | (None, Some(position)) => {
                    return Err(UriTemplateError::UnbalancedBrace {
                        template: template.to_owned(),
                        position: offset + position,
                    })
                }
            }
        }
        Ok(UriTemplate {
            segments,
            query: query.to_owned(),
        })
    }

    /// Labels in template order as `(name, greedy)`; a name may repeat
    pub fn labels(&self) -> impl Iterator<Item = (&str, bool)> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Label { name, greedy } => Some((name.as_str(), *greedy)),
            Segment::Literal(_) => None,
        })
    }

    /// The literal query part (without `?`), possibly empty
    pub fn literal_query(&self) -> &str {
        &self.query
    }

    /// Renders the path, substituting each label with the (already encoded) output of `label`
    pub fn render<E>(
        &self,
        mut label: impl FnMut(&str, bool) -> Result<String, E>,
    ) -> Result<String, E> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(literal) => out.push_str(literal),
                Segment::Label { name, greedy } => out.push_str(&label(name, *greedy)?),
            }
        }
        Ok(out)
    }
}
