use crate::models::DocumentNode;
use crate::parsing::cursor::{Cursor, SpanBody};
use crate::parsing::image::image_parts;
use crate::parsing::inline::resolve_inline_at;
use crate::parsing::options::ResolveOptions;
use crate::tokens::{Tag, Token, TokenKind};

use super::list;

/// Groups a flat token stream into top-level block nodes.
///
/// The outer loop is an explicit cursor, so arbitrarily long documents walk
/// in constant stack space. Each block's inline slice is handed to the
/// Inline Resolver.
pub fn walk(tokens: &[Token], options: &ResolveOptions) -> Vec<DocumentNode> {
    let mut cur = Cursor::new(tokens, 0);
    let mut out = vec![];

    while let Some(token) = cur.bump() {
        let pos = cur.pos() - 1;
        match (&token.kind, &token.tag) {
            (TokenKind::Open, Tag::Heading(level)) => {
                let body = take_block(&mut cur, token, pos);
                out.push(DocumentNode::Heading {
                    level: (*level).clamp(1, Tag::MAX_HEADING_LEVEL),
                    children: resolve_inline_at(body.tokens, body.base, options),
                });
            }
            (TokenKind::Open, Tag::Paragraph) => {
                let body = take_block(&mut cur, token, pos);
                out.push(DocumentNode::Paragraph {
                    children: resolve_inline_at(body.tokens, body.base, options),
                });
            }
            (TokenKind::Open, Tag::BulletList | Tag::OrderedList) => {
                let body = take_block(&mut cur, token, pos);
                out.push(DocumentNode::List {
                    start: list::start(token),
                    items: list::items(body, options),
                });
            }
            (TokenKind::Fence, _) => out.push(DocumentNode::CodeBlock {
                language: token
                    .info
                    .as_deref()
                    .map(str::trim)
                    .filter(|lang| !lang.is_empty())
                    .map(str::to_string),
                code: token.content.clone(),
            }),
            (TokenKind::SelfClosing, Tag::Image) => {
                match image_parts(token, &options.image_placeholder) {
                    Some((source, alt_text)) => {
                        out.push(DocumentNode::ImageBlock { source, alt_text })
                    }
                    None => log::debug!("block image at token {pos} has no src; omitted"),
                }
            }
            (kind, tag) => {
                log::trace!(
                    "skipping {} {} at block scope, token {pos}",
                    kind.as_str(),
                    tag.as_str()
                );
            }
        }
    }

    out
}

/// Takes the body of the block opened by `open`; a missing close ends the
/// block at the end of the stream.
fn take_block<'a>(cur: &mut Cursor<'a>, open: &Token, pos: usize) -> SpanBody<'a> {
    let body = cur.take_span(&open.tag);
    if !body.closed {
        log::debug!(
            "{} opened at token {pos} is never closed; ending it at end of stream",
            open.tag.as_str()
        );
    }
    body
}
