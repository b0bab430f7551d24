//! # Tokens
//!
//! The input contract of the engine: a flat, ordered sequence of typed
//! tokens as produced by a markup tokenizer.
//!
//! ## Modules
//!
//! - **`kind`**: `TokenKind` (open, close, self-closing, text, fence)
//! - **`tag`**: `Tag`, the element a token belongs to
//!
//! Tokens coming from outside the process are decoded with [`from_json`].
//! Shape errors are rejected there, before resolution begins; unknown kind
//! and tag names are not errors and decode to their `Other` variants.

pub mod kind;
pub mod tag;

pub use kind::TokenKind;
pub use tag::Tag;

use serde::{Deserialize, Serialize};

use crate::error::TokenError;

/// One lexical element of markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub tag: Tag,
    /// Nesting depth as reported by the tokenizer.
    #[serde(default)]
    pub level: u32,
    /// Ordered `(name, value)` pairs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<(String, String)>,
    /// Raw payload. For open/close tokens, an optional literal marker.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,
    /// Info string, fences only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

impl Token {
    pub fn new(kind: TokenKind, tag: Tag) -> Self {
        Self {
            kind,
            tag,
            level: 0,
            attrs: Vec::new(),
            content: String::new(),
            info: None,
        }
    }

    pub fn open(tag: Tag) -> Self {
        Self::new(TokenKind::Open, tag)
    }

    pub fn close(tag: Tag) -> Self {
        Self::new(TokenKind::Close, tag)
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(TokenKind::Text, Tag::Text).with_content(content)
    }

    pub fn self_closing(tag: Tag) -> Self {
        Self::new(TokenKind::SelfClosing, tag)
    }

    pub fn fence(info: Option<&str>, code: impl Into<String>) -> Self {
        let mut token = Self::new(TokenKind::Fence, Tag::Fence).with_content(code);
        token.info = info.map(str::to_string);
        token
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Value of the first attribute called `name`.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_open(&self, tag: &Tag) -> bool {
        self.kind == TokenKind::Open && &self.tag == tag
    }

    pub fn is_close(&self, tag: &Tag) -> bool {
        self.kind == TokenKind::Close && &self.tag == tag
    }
}

/// Decodes a JSON array of tokens.
pub fn from_json(json: &str) -> Result<Vec<Token>, TokenError> {
    serde_json::from_str(json).map_err(TokenError::Malformed)
}

/// Encodes tokens as pretty-printed JSON.
pub fn to_json(tokens: &[Token]) -> Result<String, TokenError> {
    serde_json::to_string_pretty(tokens).map_err(TokenError::Encode)
}
