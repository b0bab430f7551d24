pub mod document;

pub use document::{Document, DocumentNode, InlineNode, plain_text};
