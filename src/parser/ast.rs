//! Raw parse tree produced by the grammar
//!
//! These nodes mirror the text closely: one node per option or block, in
//! source order, with repeated keys kept apart. [`crate::merge`] consumes them.

use serde::Serialize;

/// The root of a parsed document
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RawDocument {
    pub children: Vec<RawNode>,
}

impl RawDocument {
    pub fn new(children: Vec<RawNode>) -> Self {
        Self { children }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Count every node in the document, nested ones included
    pub fn node_count(&self) -> usize {
        self.children.iter().map(RawNode::node_count).sum()
    }
}

/// An option or a block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "lowercase")]
pub enum RawNode {
    /// `key = value`, `key value` or `key <<HEREDOC`
    Option { key: String, value: RawValue },
    /// `<kind name> ... </kind name>`; `name` is empty for `<kind>`
    Block {
        kind: String,
        name: String,
        children: Vec<RawNode>,
    },
}

impl RawNode {
    pub fn option(key: impl Into<String>, value: RawValue) -> Self {
        RawNode::Option {
            key: key.into(),
            value,
        }
    }

    pub fn block(kind: impl Into<String>, name: impl Into<String>, children: Vec<RawNode>) -> Self {
        RawNode::Block {
            kind: kind.into(),
            name: name.into(),
            children,
        }
    }

    /// Short node type name, used by the tree visualisation
    pub fn node_type(&self) -> &'static str {
        match self {
            RawNode::Option { .. } => "Option",
            RawNode::Block { .. } => "Block",
        }
    }

    pub fn children(&self) -> &[RawNode] {
        match self {
            RawNode::Option { .. } => &[],
            RawNode::Block { children, .. } => children,
        }
    }

    fn node_count(&self) -> usize {
        1 + self.children().iter().map(RawNode::node_count).sum::<usize>()
    }
}

/// The value side of an option
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Rest of the line, verbatim
    Plain(String),
    /// Lines between `<<TERMINATOR` and the terminator line
    Heredoc { terminator: String, content: String },
}

impl RawValue {
    pub fn plain(text: impl Into<String>) -> Self {
        RawValue::Plain(text.into())
    }

    pub fn heredoc(terminator: impl Into<String>, content: impl Into<String>) -> Self {
        RawValue::Heredoc {
            terminator: terminator.into(),
            content: content.into(),
        }
    }

    /// The literal text of the value
    pub fn text(&self) -> &str {
        match self {
            RawValue::Plain(text) => text,
            RawValue::Heredoc { content, .. } => content,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            RawValue::Plain(text) => text,
            RawValue::Heredoc { content, .. } => content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_count_includes_nested_nodes() {
        let doc = RawDocument::new(vec![
            RawNode::option("a", RawValue::plain("1")),
            RawNode::block(
                "outer",
                "",
                vec![RawNode::block(
                    "inner",
                    "x",
                    vec![RawNode::option("b", RawValue::plain("2"))],
                )],
            ),
        ]);
        assert_eq!(doc.node_count(), 4);
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_value_text() {
        assert_eq!(RawValue::plain("bar").text(), "bar");
        assert_eq!(RawValue::heredoc("EOT", "a\nb\n").text(), "a\nb\n");
        assert_eq!(RawValue::heredoc("EOT", "x\n").into_text(), "x\n");
    }

    #[test]
    fn test_option_has_no_children() {
        let node = RawNode::option("k", RawValue::plain("v"));
        assert!(node.children().is_empty());
        assert_eq!(node.node_type(), "Option");
    }
}
