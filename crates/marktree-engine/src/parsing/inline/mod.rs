//! # Inline Resolution
//!
//! Stack-based span matching over the inline tokens of one block.
//!
//! ## Architecture
//!
//! The resolver keeps an explicit stack of open frames (tag, literal marker,
//! children so far) above a root children list:
//! - `open` of strong/em/link pushes a frame (links capture `href` here)
//! - the matching `close` pops it and wraps the children in the node
//! - text, inline code, images and breaks are appended to the top frame
//!
//! One left-to-right pass; no token is looked at twice and no fixed-offset
//! lookahead is used, so any sibling count and nesting depth resolve.
//!
//! ## Modules
//!
//! - **`frame`**: `Frame`, `SpanKind`, `Children` (text-coalescing list) and markers
//! - **`resolver`**: `resolve_inline_at()` with the recovery rules
//!
//! ## Raw Zones
//!
//! `code_inline` and fence payloads are copied verbatim into `InlineCode`;
//! they never re-enter the span matcher.

pub mod frame;
pub mod resolver;

pub use resolver::resolve_inline_at;

use crate::models::InlineNode;
use crate::parsing::options::ResolveOptions;
use crate::tokens::Token;

/// Resolves one block's inline tokens with default options.
pub fn resolve_inline(tokens: &[Token]) -> Vec<InlineNode> {
    resolve_inline_at(tokens, 0, &ResolveOptions::default())
}

pub fn resolve_inline_with(tokens: &[Token], options: &ResolveOptions) -> Vec<InlineNode> {
    resolve_inline_at(tokens, 0, options)
}
