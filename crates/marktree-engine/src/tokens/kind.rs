use serde::{Deserialize, Serialize};

/// What a token does to the nesting structure.
///
/// Decoded from a string at the boundary. Unrecognised kinds become
/// [`TokenKind::Other`] and are skipped by the walkers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TokenKind {
    Open,
    Close,
    SelfClosing,
    Text,
    Fence,
    Other(String),
}

impl TokenKind {
    pub fn as_str(&self) -> &str {
        match self {
            TokenKind::Open => "open",
            TokenKind::Close => "close",
            TokenKind::SelfClosing => "self_closing",
            TokenKind::Text => "text",
            TokenKind::Fence => "fence",
            TokenKind::Other(name) => name,
        }
    }
}

impl From<&str> for TokenKind {
    fn from(s: &str) -> Self {
        match s {
            "open" => TokenKind::Open,
            "close" => TokenKind::Close,
            "self_closing" | "self-closing" => TokenKind::SelfClosing,
            "text" => TokenKind::Text,
            "fence" => TokenKind::Fence,
            other => TokenKind::Other(other.to_string()),
        }
    }
}

impl From<String> for TokenKind {
    fn from(s: String) -> Self {
        TokenKind::from(s.as_str())
    }
}

impl From<TokenKind> for String {
    fn from(kind: TokenKind) -> Self {
        kind.as_str().to_string()
    }
}
