pub mod error;
pub mod models;
pub mod parsing;
pub mod pipeline;
pub mod tokenize;
pub mod tokens;

// Re-export key types for easier usage
pub use error::TokenError;
pub use models::{Document, DocumentNode, InlineNode};
pub use parsing::{
    ResolveOptions, SoftBreak, resolve, resolve_inline, resolve_inline_with, resolve_with,
};
pub use pipeline::PipelineOptions;
pub use tokenize::{TokenizeOptions, tokenize};
pub use tokens::{Tag, Token, TokenKind};
