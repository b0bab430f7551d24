//! # Tokenizer Adapter
//!
//! Drives `pulldown-cmark` and rewrites its event stream into the flat
//! [`Token`] contract the resolver consumes.
//!
//! ## Event Mapping
//!
//! ```text
//! Start(Paragraph) / End(Paragraph)   -> open / close paragraph
//! Start(Heading { level: H2 })        -> open h2
//! Start(List(None)) / List(Some(3))   -> open bullet_list / ordered_list (start=3)
//! Start(Strong) / Emphasis / Link     -> open strong / em / link (href)
//! Text / Code                         -> text / self-closing code_inline
//! SoftBreak / HardBreak               -> self-closing softbreak / hardbreak
//! Start(CodeBlock) .. End(CodeBlock)  -> one fence token (info, raw content)
//! Start(Image) .. End(Image)          -> one self-closing image (src, alt)
//! anything else                       -> tokens with `Other` tags
//! ```
//!
//! No tokenization rules live here; escaping, entities and references are
//! whatever `pulldown-cmark` decided.

mod writer;

use pulldown_cmark::{Options, Parser};

use crate::tokens::Token;

use writer::TokenWriter;

/// Knobs for the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizeOptions {
    /// Emit a paragraph holding nothing but one image as a bare block-level
    /// image token.
    pub lift_standalone_images: bool,
}

impl Default for TokenizeOptions {
    fn default() -> Self {
        Self {
            lift_standalone_images: true,
        }
    }
}

/// Tokenizes markdown text into the engine's token contract.
pub fn tokenize(markdown: &str, options: &TokenizeOptions) -> Vec<Token> {
    let mut writer = TokenWriter::new(options);
    for event in Parser::new_ext(markdown, Options::empty()) {
        writer.event(event);
    }
    writer.finish()
}
