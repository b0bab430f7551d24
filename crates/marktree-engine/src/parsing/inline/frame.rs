use crate::models::InlineNode;
use crate::tokens::{Tag, Token};

/// An ordered children list that coalesces adjacent text.
#[derive(Debug, Default)]
pub struct Children {
    nodes: Vec<InlineNode>,
}

impl Children {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn push(&mut self, node: InlineNode) {
        match node {
            InlineNode::Text { value } => self.push_text(&value),
            other => self.nodes.push(other),
        }
    }

    pub fn push_text(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        if let Some(InlineNode::Text { value }) = self.nodes.last_mut() {
            value.push_str(s);
        } else {
            self.nodes.push(InlineNode::text(s));
        }
    }

    pub fn into_vec(self) -> Vec<InlineNode> {
        self.nodes
    }
}

/// Which inline node a frame becomes once its close arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanKind {
    Strong,
    Emphasis,
    /// `href` is captured when the frame is pushed.
    Link { href: Option<String> },
}

impl SpanKind {
    /// Span kind for an open token, if the tag opens an inline span.
    pub fn for_open(token: &Token) -> Option<Self> {
        match token.tag {
            Tag::Strong => Some(SpanKind::Strong),
            Tag::Emphasis => Some(SpanKind::Emphasis),
            Tag::Link => Some(SpanKind::Link {
                href: token.attr("href").map(str::to_string),
            }),
            _ => None,
        }
    }
}

/// Literal text an open token leaves behind when its span never closes.
pub fn open_marker(token: &Token) -> String {
    if !token.content.is_empty() {
        return token.content.clone();
    }
    match token.tag {
        Tag::Strong => "**",
        Tag::Emphasis => "*",
        Tag::Link => "[",
        _ => "",
    }
    .to_string()
}

/// Literal text a stray close token degrades to.
pub fn close_marker(token: &Token) -> String {
    if !token.content.is_empty() {
        return token.content.clone();
    }
    match token.tag {
        Tag::Strong => "**",
        Tag::Emphasis => "*",
        Tag::Link => "]",
        _ => "",
    }
    .to_string()
}

/// An open span on the resolver stack.
#[derive(Debug)]
pub struct Frame {
    pub tag: Tag,
    pub kind: SpanKind,
    pub marker: String,
    /// Absolute index of the open token, for recovery logs.
    pub opened_at: usize,
    pub children: Children,
}

impl Frame {
    pub fn new(token: &Token, kind: SpanKind, opened_at: usize) -> Self {
        Self {
            tag: token.tag.clone(),
            kind,
            marker: open_marker(token),
            opened_at,
            children: Children::default(),
        }
    }

    /// Wraps the accumulated children in the node this frame stands for.
    ///
    /// A link without `href` has nothing to point at; its children are
    /// returned unwrapped so the text stays visible.
    pub fn wrap(self) -> Vec<InlineNode> {
        let children = self.children.into_vec();
        match self.kind {
            SpanKind::Strong => vec![InlineNode::Strong { children }],
            SpanKind::Emphasis => vec![InlineNode::Emphasis { children }],
            SpanKind::Link { href: Some(href) } => vec![InlineNode::Link { href, children }],
            SpanKind::Link { href: None } => {
                log::debug!(
                    "link opened at token {} has no href; keeping its text",
                    self.opened_at
                );
                children
            }
        }
    }

    /// Degrades an unresolved frame: its marker followed by its children.
    pub fn flatten(self) -> Vec<InlineNode> {
        let mut out = Vec::with_capacity(self.children.nodes.len() + 1);
        out.push(InlineNode::text(self.marker));
        out.extend(self.children.into_vec());
        out
    }
}
