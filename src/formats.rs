//! Text renderings of parse results
//!
//! - [`to_treeviz_str`] draws the raw parse tree, one line per node
//! - [`to_json_string`] and [`to_yaml_string`] serialize a merged [`Tree`]

use crate::parser::ast::{RawDocument, RawNode, RawValue};
use crate::value::Tree;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn display_label(node: &RawNode) -> String {
    match node {
        RawNode::Option { key, value } => {
            let text = match value {
                RawValue::Plain(text) => text.clone(),
                RawValue::Heredoc {
                    terminator,
                    content,
                } => format!("<<{} ({} lines)", terminator, content.lines().count()),
            };
            format!("{} = {}", key, truncate(&text, 30))
        }
        RawNode::Block { kind, name, .. } if name.is_empty() => format!("<{}>", kind),
        RawNode::Block { kind, name, .. } => format!("<{} {}>", kind, name),
    }
}

/// Draw the raw parse tree with box-drawing connectors.
pub fn to_treeviz_str(doc: &RawDocument) -> String {
    let mut result = String::new();
    append_children(&mut result, &doc.children, "");
    result
}

fn append_node(result: &mut String, node: &RawNode, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };

    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        node.node_type(),
        display_label(node)
    ));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, node.children(), &new_prefix);
}

fn append_children(result: &mut String, children: &[RawNode], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_node(result, child, prefix, is_last);
    }
}

pub fn to_json_string(tree: &Tree) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tree)
}

pub fn to_yaml_string(tree: &Tree) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(tree)
}
