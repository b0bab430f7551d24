use crate::models::InlineNode;
use crate::parsing::cursor::{Cursor, SpanBody};
use crate::parsing::inline::resolve_inline_at;
use crate::parsing::options::ResolveOptions;
use crate::tokens::{Tag, Token};

/// First number of an ordered list; `None` for bullet lists.
pub fn start(open: &Token) -> Option<u64> {
    match open.tag {
        Tag::OrderedList => Some(
            open.attr("start")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(1),
        ),
        _ => None,
    }
}

/// Resolves each top-level `list_item` of a list body.
///
/// The whole item slice goes to the Inline Resolver: paragraph wrappers
/// vanish, and further paragraphs or a nested list inside the item come
/// out as line-separated text. Tokens between items are skipped.
pub fn items(body: SpanBody<'_>, options: &ResolveOptions) -> Vec<Vec<InlineNode>> {
    let mut cur = Cursor::new(body.tokens, body.base);
    let mut items = vec![];

    while let Some(token) = cur.bump() {
        if token.is_open(&Tag::ListItem) {
            let pos = cur.pos() - 1;
            let item = cur.take_span(&Tag::ListItem);
            if !item.closed {
                log::debug!("list item opened at token {pos} is never closed");
            }
            items.push(resolve_inline_at(item.tokens, item.base, options));
        } else {
            log::trace!(
                "skipping {} {} between list items",
                token.kind.as_str(),
                token.tag.as_str()
            );
        }
    }

    items
}
