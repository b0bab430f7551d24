//! Integration tests for the parsing module.
//!
//! Token streams here are written by hand in the shape a tokenizer emits
//! them; `tests/` at the crate root covers markdown text end to end.

mod invariants;

use insta::assert_debug_snapshot;
use pretty_assertions::assert_eq;

use crate::models::{DocumentNode, InlineNode};
use crate::parsing::{resolve, resolve_inline};
use crate::tokens::{Tag, Token};

fn text(s: &str) -> InlineNode {
    InlineNode::text(s)
}

/// `**bold** and *italic* and [text](http://x)`
fn mixed_paragraph() -> Vec<Token> {
    vec![
        Token::open(Tag::Paragraph),
        Token::open(Tag::Strong).with_level(1),
        Token::text("bold").with_level(2),
        Token::close(Tag::Strong).with_level(1),
        Token::text(" and ").with_level(1),
        Token::open(Tag::Emphasis).with_level(1),
        Token::text("italic").with_level(2),
        Token::close(Tag::Emphasis).with_level(1),
        Token::text(" and ").with_level(1),
        Token::open(Tag::Link)
            .with_attr("href", "http://x")
            .with_level(1),
        Token::text("text").with_level(2),
        Token::close(Tag::Link).with_level(1),
        Token::close(Tag::Paragraph),
    ]
}

#[test]
fn mixed_formatting_paragraph() {
    assert_eq!(
        resolve(&mixed_paragraph()),
        vec![DocumentNode::Paragraph {
            children: vec![
                InlineNode::Strong {
                    children: vec![text("bold")]
                },
                text(" and "),
                InlineNode::Emphasis {
                    children: vec![text("italic")]
                },
                text(" and "),
                InlineNode::Link {
                    href: "http://x".into(),
                    children: vec![text("text")]
                },
            ]
        }]
    );
}

#[test]
fn mixed_formatting_paragraph_snapshot() {
    assert_debug_snapshot!(resolve(&mixed_paragraph()), @r#"
    [
        Paragraph {
            children: [
                Strong {
                    children: [
                        Text {
                            value: "bold",
                        },
                    ],
                },
                Text {
                    value: " and ",
                },
                Emphasis {
                    children: [
                        Text {
                            value: "italic",
                        },
                    ],
                },
                Text {
                    value: " and ",
                },
                Link {
                    href: "http://x",
                    children: [
                        Text {
                            value: "text",
                        },
                    ],
                },
            ],
        },
    ]
    "#);
}

#[test]
fn python_fence_is_untouched() {
    let tokens = [Token::fence(Some("python"), "print(1)")];
    assert_eq!(
        resolve(&tokens),
        vec![DocumentNode::CodeBlock {
            language: Some("python".into()),
            code: "print(1)".into()
        }]
    );
}

#[test]
fn code_payloads_are_byte_for_byte() {
    let raw = "**a** _b_ [c](d) `e` <f> \\*";
    let tokens = [
        Token::open(Tag::Paragraph),
        Token::self_closing(Tag::CodeInline).with_content(raw),
        Token::close(Tag::Paragraph),
        Token::fence(None, raw),
    ];
    assert_eq!(
        resolve(&tokens),
        vec![
            DocumentNode::Paragraph {
                children: vec![InlineNode::InlineCode { value: raw.into() }]
            },
            DocumentNode::CodeBlock {
                language: None,
                code: raw.into()
            },
        ]
    );
}

#[test]
fn nesting_depth_matches_input() {
    let tokens = [
        Token::open(Tag::Strong),
        Token::open(Tag::Emphasis),
        Token::open(Tag::Link).with_attr("href", "/x"),
        Token::text("deep"),
        Token::close(Tag::Link),
        Token::close(Tag::Emphasis),
        Token::close(Tag::Strong),
    ];
    let nodes = resolve_inline(&tokens);
    assert_eq!(invariants::tree_depth(&nodes), 4);
    assert_eq!(invariants::input_depth(&tokens), 4);
}

#[test]
fn unmatched_strong_keeps_its_text() {
    let tokens = [Token::open(Tag::Strong), Token::text("trailing text")];
    match resolve_inline(&tokens).as_slice() {
        [InlineNode::Text { value }] => {
            assert!(!value.is_empty());
            assert!(value.contains("trailing text"));
        }
        other => panic!("expected a single text node, got {other:?}"),
    }
}

#[test]
fn heading_list_and_image_document() {
    let tokens = vec![
        Token::open(Tag::Heading(2)),
        Token::text("Shopping"),
        Token::close(Tag::Heading(2)),
        Token::open(Tag::BulletList),
        Token::open(Tag::ListItem).with_level(1),
        Token::text("eggs").with_level(2),
        Token::close(Tag::ListItem).with_level(1),
        Token::open(Tag::ListItem).with_level(1),
        Token::open(Tag::Emphasis).with_level(2),
        Token::text("fresh").with_level(3),
        Token::close(Tag::Emphasis).with_level(2),
        Token::text(" milk").with_level(2),
        Token::close(Tag::ListItem).with_level(1),
        Token::close(Tag::BulletList),
        Token::self_closing(Tag::Image)
            .with_attr("src", "cart.png")
            .with_attr("alt", "cart"),
    ];
    assert_eq!(
        resolve(&tokens),
        vec![
            DocumentNode::Heading {
                level: 2,
                children: vec![text("Shopping")]
            },
            DocumentNode::List {
                start: None,
                items: vec![
                    vec![text("eggs")],
                    vec![
                        InlineNode::Emphasis {
                            children: vec![text("fresh")]
                        },
                        text(" milk")
                    ],
                ]
            },
            DocumentNode::ImageBlock {
                source: "cart.png".into(),
                alt_text: "cart".into()
            },
        ]
    );
}

#[test]
fn long_documents_walk_without_recursion() {
    let mut tokens = Vec::new();
    for i in 0..20_000 {
        tokens.push(Token::open(Tag::Paragraph));
        tokens.push(Token::text(format!("p{i}")));
        tokens.push(Token::close(Tag::Paragraph));
    }
    let blocks = resolve(&tokens);
    assert_eq!(blocks.len(), 20_000);
    assert_eq!(blocks[19_999].plain_text(), "p19999");
}

#[test]
fn deep_inline_nesting_resolves() {
    let depth = 2_000;
    let mut tokens = vec![];
    for _ in 0..depth {
        tokens.push(Token::open(Tag::Emphasis));
    }
    tokens.push(Token::text("core"));
    let nodes = resolve_inline(&tokens);
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].plain_text(), format!("{}core", "*".repeat(depth)));
}

#[test]
fn resolution_is_repeatable() {
    let tokens = mixed_paragraph();
    assert_eq!(resolve(&tokens), resolve(&tokens));
}

#[test]
fn concurrent_callers_share_only_input() {
    let tokens = mixed_paragraph();
    let expected = resolve(&tokens);
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| resolve(&tokens))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
