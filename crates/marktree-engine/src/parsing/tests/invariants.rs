use crate::models::{InlineNode, plain_text};
use crate::tokens::{Tag, Token, TokenKind};

/// Text-bearing payload of an inline slice, in order.
pub fn input_text(tokens: &[Token]) -> Vec<&str> {
    tokens
        .iter()
        .filter(|t| {
            t.kind == TokenKind::Text
                || (t.kind == TokenKind::SelfClosing && t.tag == Tag::CodeInline)
        })
        .map(|t| t.content.as_str())
        .collect()
}

/// Deepest span nesting in the input, counting leaves as one level.
///
/// Closes pop back to the matching open, like the resolver does; a close
/// with no matching open is a leaf (it becomes marker text).
pub fn input_depth(tokens: &[Token]) -> usize {
    let mut stack: Vec<&Tag> = vec![];
    let mut deepest = 0usize;
    for t in tokens {
        let is_span = matches!(t.tag, Tag::Strong | Tag::Emphasis | Tag::Link);
        match t.kind {
            TokenKind::Open if is_span => {
                stack.push(&t.tag);
                deepest = deepest.max(stack.len());
            }
            TokenKind::Close if is_span => match stack.iter().rposition(|tag| **tag == t.tag) {
                Some(idx) => stack.truncate(idx),
                None => deepest = deepest.max(stack.len() + 1),
            },
            TokenKind::Text | TokenKind::SelfClosing => deepest = deepest.max(stack.len() + 1),
            _ => {}
        }
    }
    deepest
}

pub fn tree_depth(nodes: &[InlineNode]) -> usize {
    nodes.iter().map(InlineNode::depth).max().unwrap_or(0)
}

/// Every input text run appears in the output text, in order.
pub fn check_text_kept(tokens: &[Token], nodes: &[InlineNode]) {
    let out = plain_text(nodes);
    let mut from = 0;
    for run in input_text(tokens) {
        match out[from..].find(run) {
            Some(at) => from += at + run.len(),
            None => panic!("text {run:?} lost or reordered in {out:?}"),
        }
    }
}

pub fn check_depth_bounded(tokens: &[Token], nodes: &[InlineNode]) {
    let (have, limit) = (tree_depth(nodes), input_depth(tokens));
    assert!(
        have <= limit,
        "tree depth {have} exceeds input nesting {limit}: {nodes:?}"
    );
}
