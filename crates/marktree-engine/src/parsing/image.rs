use crate::tokens::Token;

/// Source and alt text of an image token.
///
/// Returns `None` when the token has no usable `src`; such images are
/// omitted from the tree. Alt text falls back from the `alt` attribute to
/// the token content, then to `placeholder`.
pub fn image_parts(token: &Token, placeholder: &str) -> Option<(String, String)> {
    let source = token.attr("src").filter(|s| !s.is_empty())?;
    let alt = token
        .attr("alt")
        .filter(|a| !a.is_empty())
        .or_else(|| Some(token.content.as_str()).filter(|c| !c.is_empty()))
        .unwrap_or(placeholder);
    Some((source.to_string(), alt.to_string()))
}
