pub mod blocks;
pub mod cursor;
pub mod image;
pub mod inline;
pub mod options;

#[cfg(test)]
mod tests;

pub use inline::{resolve_inline, resolve_inline_with};
pub use options::{ResolveOptions, SoftBreak};

use crate::models::DocumentNode;
use crate::tokens::Token;

/// Resolves a token stream into document blocks with default options.
///
/// Pure: every call builds a fresh tree from its input, and there is no
/// shared parser state, so independent callers may resolve concurrently.
pub fn resolve(tokens: &[Token]) -> Vec<DocumentNode> {
    blocks::walk(tokens, &ResolveOptions::default())
}

pub fn resolve_with(tokens: &[Token], options: &ResolveOptions) -> Vec<DocumentNode> {
    blocks::walk(tokens, options)
}
