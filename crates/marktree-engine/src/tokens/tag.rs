use serde::{Deserialize, Serialize};

/// The element a token belongs to.
///
/// Heading tags carry their level (`h1`..`h6`). Names the engine does not
/// know are preserved in [`Tag::Other`] so that dumps round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tag {
    Heading(u8),
    Paragraph,
    BulletList,
    OrderedList,
    ListItem,
    Strong,
    Emphasis,
    Link,
    Image,
    CodeInline,
    SoftBreak,
    HardBreak,
    Fence,
    Text,
    Other(String),
}

impl Tag {
    pub const MAX_HEADING_LEVEL: u8 = 6;

    /// The wire name of the tag.
    ///
    /// Decoding only yields heading levels 1 to 6. A hand-built level outside
    /// that range is named after the nearest one.
    pub fn as_str(&self) -> &str {
        match self {
            Tag::Heading(0..=1) => "h1",
            Tag::Heading(2) => "h2",
            Tag::Heading(3) => "h3",
            Tag::Heading(4) => "h4",
            Tag::Heading(5) => "h5",
            Tag::Heading(6..=u8::MAX) => "h6",
            Tag::Paragraph => "paragraph",
            Tag::BulletList => "bullet_list",
            Tag::OrderedList => "ordered_list",
            Tag::ListItem => "list_item",
            Tag::Strong => "strong",
            Tag::Emphasis => "em",
            Tag::Link => "link",
            Tag::Image => "image",
            Tag::CodeInline => "code_inline",
            Tag::SoftBreak => "softbreak",
            Tag::HardBreak => "hardbreak",
            Tag::Fence => "fence",
            Tag::Text => "text",
            Tag::Other(name) => name,
        }
    }

    /// Tags that delimit blocks. Inside an inline slice their closes act as
    /// line separators.
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            Tag::Heading(_) | Tag::Paragraph | Tag::BulletList | Tag::OrderedList | Tag::ListItem
        )
    }

    fn heading_level(s: &str) -> Option<u8> {
        match s.as_bytes() {
            [b'h', digit @ b'1'..=b'6'] => Some(digit - b'0'),
            _ => None,
        }
    }
}

impl From<&str> for Tag {
    fn from(s: &str) -> Self {
        if let Some(level) = Tag::heading_level(s) {
            return Tag::Heading(level);
        }
        match s {
            "heading" => Tag::Heading(1),
            "paragraph" => Tag::Paragraph,
            "bullet_list" => Tag::BulletList,
            "ordered_list" => Tag::OrderedList,
            "list_item" => Tag::ListItem,
            "strong" => Tag::Strong,
            "em" => Tag::Emphasis,
            "link" => Tag::Link,
            "image" => Tag::Image,
            "code_inline" => Tag::CodeInline,
            "softbreak" => Tag::SoftBreak,
            "hardbreak" => Tag::HardBreak,
            "fence" => Tag::Fence,
            "text" => Tag::Text,
            other => Tag::Other(other.to_string()),
        }
    }
}

impl From<String> for Tag {
    fn from(s: String) -> Self {
        Tag::from(s.as_str())
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.as_str().to_string()
    }
}
