//! Entry points that take input all the way to a [`Document`].

use crate::models::Document;
use crate::parsing::{ResolveOptions, resolve_with};
use crate::tokenize::{TokenizeOptions, tokenize};
use crate::tokens::Token;

/// Options for the whole text-to-tree pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    pub tokenize: TokenizeOptions,
    pub resolve: ResolveOptions,
}

impl Document {
    /// Resolves an already tokenized stream.
    pub fn from_tokens(tokens: &[Token]) -> Self {
        Self::from_tokens_with(tokens, &ResolveOptions::default())
    }

    pub fn from_tokens_with(tokens: &[Token], options: &ResolveOptions) -> Self {
        Self::new(resolve_with(tokens, options))
    }

    /// Tokenizes markdown text with `pulldown-cmark` and resolves it.
    pub fn from_markdown(markdown: &str) -> Self {
        Self::from_markdown_with(markdown, &PipelineOptions::default())
    }

    pub fn from_markdown_with(markdown: &str, options: &PipelineOptions) -> Self {
        let tokens = tokenize(markdown, &options.tokenize);
        log::debug!("tokenized {} bytes into {} tokens", markdown.len(), tokens.len());
        Self::from_tokens_with(&tokens, &options.resolve)
    }
}
