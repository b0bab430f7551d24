use serde::{Deserialize, Serialize};

/// How soft line breaks inside a paragraph are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoftBreak {
    /// Emit an `InlineNode::LineBreak`.
    #[default]
    LineBreak,
    /// Emit a single space, joining the lines.
    Space,
}

/// Knobs for the Block Walker and Inline Resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Alt text for images that carry neither an `alt` attribute nor content.
    pub image_placeholder: String,
    pub soft_break: SoftBreak,
}

impl ResolveOptions {
    pub const DEFAULT_IMAGE_PLACEHOLDER: &'static str = "image";
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            image_placeholder: Self::DEFAULT_IMAGE_PLACEHOLDER.to_string(),
            soft_break: SoftBreak::default(),
        }
    }
}
