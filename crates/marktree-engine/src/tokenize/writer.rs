use pulldown_cmark::{CodeBlockKind, Event, Tag as MdTag, TagEnd};

use crate::tokens::{Tag, Token, TokenKind};

use super::TokenizeOptions;

/// A code block being collected between its start and end events.
struct PendingCode {
    info: Option<String>,
    content: String,
}

/// An image being collected; its alt text arrives as nested events.
struct PendingImage {
    src: String,
    title: String,
    alt: String,
    /// Images nested inside the alt text.
    nested: usize,
}

/// Rewrites `pulldown-cmark` events into flat tokens.
pub struct TokenWriter<'o> {
    options: &'o TokenizeOptions,
    out: Vec<Token>,
    depth: u32,
    code: Option<PendingCode>,
    image: Option<PendingImage>,
    /// Index of the open token of the current top-level paragraph.
    paragraph_start: Option<usize>,
}

impl<'o> TokenWriter<'o> {
    pub fn new(options: &'o TokenizeOptions) -> Self {
        Self {
            options,
            out: vec![],
            depth: 0,
            code: None,
            image: None,
            paragraph_start: None,
        }
    }

    pub fn event(&mut self, event: Event<'_>) {
        if self.image.is_some() {
            self.image_event(event);
            return;
        }
        if self.code.is_some() {
            self.code_event(event);
            return;
        }

        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.push(Token::text(text.to_string())),
            Event::Code(code) => {
                self.push(Token::self_closing(Tag::CodeInline).with_content(code.to_string()))
            }
            Event::SoftBreak => self.push(Token::self_closing(Tag::SoftBreak)),
            Event::HardBreak => self.push(Token::self_closing(Tag::HardBreak)),
            Event::Rule => self.push(Token::self_closing(Tag::Other("hr".into()))),
            Event::Html(html) | Event::InlineHtml(html) => self.push(
                Token::new(TokenKind::Other("html".into()), Tag::Other("html".into()))
                    .with_content(html.to_string()),
            ),
            other => log::trace!("tokenizer event not mapped: {other:?}"),
        }
    }

    pub fn finish(self) -> Vec<Token> {
        self.out
    }

    fn push(&mut self, token: Token) {
        self.out.push(token.with_level(self.depth));
    }

    fn open(&mut self, token: Token) {
        self.push(token);
        self.depth += 1;
    }

    fn close(&mut self, tag: Tag) {
        self.depth = self.depth.saturating_sub(1);
        self.push(Token::close(tag));
    }

    fn start(&mut self, tag: MdTag<'_>) {
        match tag {
            MdTag::Paragraph => {
                if self.depth == 0 {
                    self.paragraph_start = Some(self.out.len());
                }
                self.open(Token::open(Tag::Paragraph));
            }
            MdTag::Heading { level, .. } => self.open(Token::open(Tag::Heading(level as u8))),
            MdTag::List(None) => self.open(Token::open(Tag::BulletList)),
            MdTag::List(Some(first)) => self.open(
                Token::open(Tag::OrderedList).with_attr("start", first.to_string()),
            ),
            MdTag::Item => self.open(Token::open(Tag::ListItem)),
            MdTag::Emphasis => self.open(Token::open(Tag::Emphasis)),
            MdTag::Strong => self.open(Token::open(Tag::Strong)),
            MdTag::Link {
                dest_url, title, ..
            } => {
                let mut token = Token::open(Tag::Link).with_attr("href", dest_url.to_string());
                if !title.is_empty() {
                    token = token.with_attr("title", title.to_string());
                }
                self.open(token);
            }
            MdTag::Image {
                dest_url, title, ..
            } => {
                self.image = Some(PendingImage {
                    src: dest_url.to_string(),
                    title: title.to_string(),
                    alt: String::new(),
                    nested: 0,
                });
            }
            MdTag::CodeBlock(kind) => {
                let info = match kind {
                    CodeBlockKind::Fenced(info) => Some(info.to_string()),
                    CodeBlockKind::Indented => None,
                };
                self.code = Some(PendingCode {
                    info,
                    content: String::new(),
                });
            }
            other => self.open(Token::open(Tag::Other(other_name(&other).into()))),
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.close_paragraph(),
            TagEnd::Heading(level) => self.close(Tag::Heading(level as u8)),
            TagEnd::List(true) => self.close(Tag::OrderedList),
            TagEnd::List(false) => self.close(Tag::BulletList),
            TagEnd::Item => self.close(Tag::ListItem),
            TagEnd::Emphasis => self.close(Tag::Emphasis),
            TagEnd::Strong => self.close(Tag::Strong),
            TagEnd::Link => self.close(Tag::Link),
            other => self.close(Tag::Other(other_end_name(&other).into())),
        }
    }

    fn code_event(&mut self, event: Event<'_>) {
        let Some(code) = self.code.as_mut() else {
            return;
        };
        match event {
            Event::Text(text) => code.content.push_str(&text),
            Event::End(TagEnd::CodeBlock) => {
                if let Some(code) = self.code.take() {
                    self.push(Token::fence(code.info.as_deref(), code.content));
                }
            }
            other => log::trace!("ignoring {other:?} inside code block"),
        }
    }

    fn image_event(&mut self, event: Event<'_>) {
        let Some(image) = self.image.as_mut() else {
            return;
        };
        match event {
            Event::Start(MdTag::Image { .. }) => image.nested += 1,
            Event::End(TagEnd::Image) if image.nested > 0 => image.nested -= 1,
            Event::End(TagEnd::Image) => {
                if let Some(image) = self.image.take() {
                    let mut token = Token::self_closing(Tag::Image)
                        .with_attr("src", image.src)
                        .with_attr("alt", image.alt.clone());
                    if !image.title.is_empty() {
                        token = token.with_attr("title", image.title);
                    }
                    self.push(token.with_content(image.alt));
                }
            }
            Event::Text(text) | Event::Code(text) => image.alt.push_str(&text),
            Event::SoftBreak | Event::HardBreak => image.alt.push(' '),
            _ => {}
        }
    }

    /// Closes a paragraph, lifting it to a bare image token when an image is
    /// all it holds.
    fn close_paragraph(&mut self) {
        self.close(Tag::Paragraph);
        let Some(start) = self.paragraph_start.take() else {
            return;
        };
        if !self.options.lift_standalone_images {
            return;
        }

        let inner = &self.out[start + 1..self.out.len() - 1];
        let blank = |t: &Token| t.kind == TokenKind::Text && t.content.trim().is_empty();
        let mut images = inner.iter().filter(|t| t.tag == Tag::Image);
        let (Some(image), None) = (images.next(), images.next()) else {
            return;
        };
        if !inner.iter().all(|t| t.tag == Tag::Image || blank(t)) {
            return;
        }

        let image = image.clone().with_level(self.out[start].level);
        self.out.truncate(start);
        self.out.push(image);
    }
}

fn other_name(tag: &MdTag<'_>) -> &'static str {
    match tag {
        MdTag::BlockQuote(_) => "blockquote",
        MdTag::HtmlBlock => "html_block",
        _ => "unsupported",
    }
}

fn other_end_name(tag: &TagEnd) -> &'static str {
    match tag {
        TagEnd::BlockQuote(_) => "blockquote",
        TagEnd::HtmlBlock => "html_block",
        _ => "unsupported",
    }
}
