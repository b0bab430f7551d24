use crate::models::InlineNode;
use crate::parsing::cursor::Cursor;
use crate::parsing::image::image_parts;
use crate::parsing::options::{ResolveOptions, SoftBreak};
use crate::tokens::{Tag, Token, TokenKind};

use super::frame::{Children, Frame, SpanKind, close_marker};

/// Resolves an inline token slice into a nested tree of [`InlineNode`]s.
///
/// # Arguments
/// - `tokens`: The inline tokens owned by one block
/// - `base`: Absolute index of `tokens[0]` in the full stream (for logs)
/// - `options`: Placeholder and soft break handling
///
/// # Recovery
/// Unmatched opens are flattened to their literal marker plus whatever they
/// consumed; stray closes become their marker as text. Nothing is dropped
/// except images without a source.
pub fn resolve_inline_at(
    tokens: &[Token],
    base: usize,
    options: &ResolveOptions,
) -> Vec<InlineNode> {
    let mut resolver = InlineResolver::new(options);
    let mut cur = Cursor::new(tokens, base);
    while let Some(token) = cur.bump() {
        resolver.feed(token, cur.pos() - 1);
    }
    resolver.finish()
}

struct InlineResolver<'o> {
    options: &'o ResolveOptions,
    root: Children,
    stack: Vec<Frame>,
    /// Set by block boundaries inside the slice; the next emitted node is
    /// preceded by a line break if the target already has content.
    pending_break: bool,
}

impl<'o> InlineResolver<'o> {
    fn new(options: &'o ResolveOptions) -> Self {
        Self {
            options,
            root: Children::default(),
            stack: Vec::new(),
            pending_break: false,
        }
    }

    fn feed(&mut self, token: &Token, pos: usize) {
        match (&token.kind, &token.tag) {
            (TokenKind::Open, Tag::Strong | Tag::Emphasis | Tag::Link) => {
                self.open_span(token, pos)
            }
            (TokenKind::Close, Tag::Strong | Tag::Emphasis | Tag::Link) => {
                self.close_span(token, pos)
            }
            (TokenKind::Open | TokenKind::Close, tag) if tag.is_block() => {
                self.pending_break = true;
            }
            (TokenKind::SelfClosing | TokenKind::Text, Tag::CodeInline) => {
                self.emit(InlineNode::InlineCode {
                    value: token.content.clone(),
                });
            }
            (TokenKind::Text, _) => self.emit_text(&token.content),
            (TokenKind::Fence, _) => {
                self.emit(InlineNode::InlineCode {
                    value: token.content.clone(),
                });
            }
            (TokenKind::SelfClosing, Tag::Image) => {
                match image_parts(token, &self.options.image_placeholder) {
                    Some((source, alt_text)) => {
                        self.emit(InlineNode::InlineImage { source, alt_text })
                    }
                    None => log::debug!("image at token {pos} has no src; omitted"),
                }
            }
            (TokenKind::SelfClosing, Tag::SoftBreak) => match self.options.soft_break {
                SoftBreak::LineBreak => self.emit(InlineNode::LineBreak),
                SoftBreak::Space => self.emit_text(" "),
            },
            (TokenKind::SelfClosing, Tag::HardBreak) => self.emit(InlineNode::LineBreak),
            (kind, tag) => {
                log::trace!(
                    "skipping {} {} at token {pos}",
                    kind.as_str(),
                    tag.as_str()
                );
            }
        }
    }

    fn top(&mut self) -> &mut Children {
        match self.stack.last_mut() {
            Some(frame) => &mut frame.children,
            None => &mut self.root,
        }
    }

    fn flush_break(&mut self) {
        if std::mem::take(&mut self.pending_break) {
            let top = self.top();
            if !top.is_empty() {
                top.push(InlineNode::LineBreak);
            }
        }
    }

    fn emit(&mut self, node: InlineNode) {
        self.flush_break();
        self.top().push(node);
    }

    fn emit_text(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.flush_break();
        self.top().push_text(s);
    }

    fn open_span(&mut self, token: &Token, pos: usize) {
        let Some(kind) = SpanKind::for_open(token) else {
            return;
        };
        self.flush_break();
        self.stack.push(Frame::new(token, kind, pos));
    }

    fn close_span(&mut self, token: &Token, pos: usize) {
        let Some(idx) = self.stack.iter().rposition(|f| f.tag == token.tag) else {
            log::debug!(
                "stray {} close at token {pos}; kept as text",
                token.tag.as_str()
            );
            self.emit_text(&close_marker(token));
            return;
        };
        // Frames opened after the matching one can no longer close without
        // crossing it.
        while self.stack.len() > idx + 1 {
            self.degrade_top();
        }
        if let Some(frame) = self.stack.pop() {
            let nodes = frame.wrap();
            let top = self.top();
            for node in nodes {
                top.push(node);
            }
        }
    }

    fn degrade_top(&mut self) {
        if let Some(frame) = self.stack.pop() {
            log::debug!(
                "unclosed {} opened at token {}; degraded to text",
                frame.tag.as_str(),
                frame.opened_at
            );
            let nodes = frame.flatten();
            let top = self.top();
            for node in nodes {
                top.push(node);
            }
        }
    }

    fn finish(mut self) -> Vec<InlineNode> {
        while !self.stack.is_empty() {
            self.degrade_top();
        }
        self.root.into_vec()
    }
}
