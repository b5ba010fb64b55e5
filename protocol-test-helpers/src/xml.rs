/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::ProtocolTestFailure;
use roxmltree::{Node, NodeType};
use std::fmt::Write;

/// Assert that two XML documents are equivalent
///
/// Both documents are normalized first: whitespace-only text is dropped and attributes are
/// sorted. Element order is significant.
pub(crate) fn try_xml_equivalent(actual: &str, expected: &str) -> Result<(), ProtocolTestFailure> {
    if actual == expected {
        return Ok(());
    }
    let norm_actual = normalize_xml(actual).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
        expected: "actual document to be valid XML".to_string(),
        found: format!("{}\n{}", e, actual),
    })?;
    let norm_expected =
        normalize_xml(expected).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
            expected: "expected document to be valid XML".to_string(),
            found: format!("{}\n{}", e, expected),
        })?;
    if norm_actual == norm_expected {
        Ok(())
    } else {
        Err(ProtocolTestFailure::BodyDidNotMatch {
            hint: format!(
                "{}",
                pretty_assertions::Comparison::new(&norm_actual, &norm_expected)
            ),
            expected: norm_expected,
            found: norm_actual,
        })
    }
}

fn normalize_xml(s: &str) -> Result<String, roxmltree::Error> {
    let document = roxmltree::Document::parse(s)?;
    let mut out = String::new();
    write_node(&mut out, document.root_element(), 0);
    Ok(out)
}

fn write_node(out: &mut String, node: Node, depth: usize) {
    let indent = "  ".repeat(depth);
    match node.node_type() {
        NodeType::Element => {
            let mut attributes: Vec<_> = node
                .attributes()
                .iter()
                .map(|attr| format!("{}={:?}", attr.name(), attr.value()))
                .collect();
            attributes.sort();
            let _ = write!(out, "{}<{}", indent, node.tag_name().name());
            if let Some(namespace) = node.tag_name().namespace() {
                let _ = write!(out, " ns={:?}", namespace);
            }
            for attribute in attributes {
                let _ = write!(out, " {}", attribute);
            }
            out.push_str(">\n");
            for child in node.children() {
                write_node(out, child, depth + 1);
            }
        }
        NodeType::Text => {
            if let Some(text) = node.text() {
                if !text.trim().is_empty() {
                    let _ = writeln!(out, "{}{:?}", indent, text);
                }
            }
        }
        _ => {}
    }
}
