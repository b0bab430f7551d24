use serde::{Deserialize, Serialize};

/// A top-level block of a resolved document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DocumentNode {
    Heading {
        level: u8,
        children: Vec<InlineNode>,
    },
    Paragraph {
        children: Vec<InlineNode>,
    },
    /// `start` is `None` for bullet lists and the first number for ordered ones.
    List {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start: Option<u64>,
        items: Vec<Vec<InlineNode>>,
    },
    /// Raw code; never passed through inline resolution.
    CodeBlock {
        language: Option<String>,
        code: String,
    },
    ImageBlock {
        source: String,
        alt_text: String,
    },
}

/// Content inside a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineNode {
    Text { value: String },
    Strong { children: Vec<InlineNode> },
    Emphasis { children: Vec<InlineNode> },
    Link { href: String, children: Vec<InlineNode> },
    InlineCode { value: String },
    InlineImage { source: String, alt_text: String },
    LineBreak,
}

impl InlineNode {
    pub fn text(value: impl Into<String>) -> Self {
        InlineNode::Text {
            value: value.into(),
        }
    }

    /// Child nodes of a span, empty for leaves.
    pub fn children(&self) -> &[InlineNode] {
        match self {
            InlineNode::Strong { children }
            | InlineNode::Emphasis { children }
            | InlineNode::Link { children, .. } => children,
            _ => &[],
        }
    }

    /// Text and leaf content in order, ignoring structure.
    ///
    /// Image alt text and line breaks contribute nothing.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.write_plain_text(&mut out);
        out
    }

    fn write_plain_text(&self, out: &mut String) {
        match self {
            InlineNode::Text { value } | InlineNode::InlineCode { value } => out.push_str(value),
            InlineNode::InlineImage { .. } | InlineNode::LineBreak => {}
            span => {
                for child in span.children() {
                    child.write_plain_text(out);
                }
            }
        }
    }

    /// Number of nested span levels, counting this node. Leaves are depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(InlineNode::depth)
            .max()
            .unwrap_or(0)
    }
}

/// Concatenated plain text of a run of inline nodes.
pub fn plain_text(nodes: &[InlineNode]) -> String {
    nodes.iter().map(InlineNode::plain_text).collect()
}

impl DocumentNode {
    pub fn plain_text(&self) -> String {
        match self {
            DocumentNode::Heading { children, .. } | DocumentNode::Paragraph { children } => {
                plain_text(children)
            }
            DocumentNode::List { items, .. } => items
                .iter()
                .map(|item| plain_text(item))
                .collect::<Vec<_>>()
                .join("\n"),
            DocumentNode::CodeBlock { code, .. } => code.clone(),
            DocumentNode::ImageBlock { .. } => String::new(),
        }
    }
}

/// An immutable snapshot of resolved markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<DocumentNode>,
}

impl Document {
    pub fn new(blocks: Vec<DocumentNode>) -> Self {
        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
