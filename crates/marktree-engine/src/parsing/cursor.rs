use crate::tokens::{Tag, Token, TokenKind};

/// A forward-only cursor over a token slice.
///
/// Operates over a slice while tracking the absolute index in the original
/// stream (via `base` offset), so recovery logs can point at the token.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The tokens being walked.
    pub tokens: &'a [Token],
    /// Base index in the full stream (added to local index for absolute positions).
    pub base: usize,
    /// Current local index into `tokens`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `tokens` with the given base offset.
    pub fn new(tokens: &'a [Token], base: usize) -> Self {
        Self { tokens, base, i: 0 }
    }

    /// Returns the current absolute index (base + local index).
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    /// Peeks at the current token without advancing.
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.i)
    }

    /// Advances by one token, returning the consumed token.
    pub fn bump(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.i)?;
        self.i += 1;
        Some(token)
    }

    /// Consumes the body of a span whose open token was just bumped.
    ///
    /// Scans forward for the close of `tag` that balances the open, counting
    /// nested opens of the same tag. Returns the tokens between open and
    /// close and leaves the cursor after the close. When the stream ends
    /// first, the body runs to the end and `closed` is false.
    pub fn take_span(&mut self, tag: &Tag) -> SpanBody<'a> {
        let start = self.i;
        let mut depth = 0usize;
        while let Some(token) = self.peek() {
            if token.tag == *tag {
                match token.kind {
                    TokenKind::Open => depth += 1,
                    TokenKind::Close if depth == 0 => {
                        let body = &self.tokens[start..self.i];
                        self.i += 1;
                        return SpanBody {
                            tokens: body,
                            base: self.base + start,
                            closed: true,
                        };
                    }
                    TokenKind::Close => depth -= 1,
                    _ => {}
                }
            }
            self.i += 1;
        }
        SpanBody {
            tokens: &self.tokens[start..],
            base: self.base + start,
            closed: false,
        }
    }
}

/// The tokens strictly inside a span.
#[derive(Debug, Clone, Copy)]
pub struct SpanBody<'a> {
    pub tokens: &'a [Token],
    /// Absolute index of the first body token.
    pub base: usize,
    /// Whether a balancing close was found.
    pub closed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn para(text: &str) -> Vec<Token> {
        vec![
            Token::open(Tag::Paragraph),
            Token::text(text),
            Token::close(Tag::Paragraph),
        ]
    }

    #[test]
    fn cursor_basics() {
        let tokens = para("hello");
        let mut cur = Cursor::new(&tokens, 10);
        assert_eq!(cur.pos(), 10);
        assert_eq!(cur.peek(), Some(&tokens[0]));
        assert_eq!(cur.bump(), Some(&tokens[0]));
        assert_eq!(cur.pos(), 11);
    }

    #[test]
    fn empty_input() {
        let mut cur = Cursor::new(&[], 0);
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn take_span_stops_after_close() {
        let mut tokens = para("a");
        tokens.extend(para("b"));
        let mut cur = Cursor::new(&tokens, 0);
        cur.bump();

        let body = cur.take_span(&Tag::Paragraph);
        assert!(body.closed);
        assert_eq!(body.tokens, &[Token::text("a")]);
        assert_eq!(body.base, 1);
        assert_eq!(cur.pos(), 3);
    }

    #[test]
    fn take_span_balances_nested_opens() {
        let tokens = vec![
            Token::open(Tag::BulletList),
            Token::open(Tag::ListItem),
            Token::open(Tag::BulletList),
            Token::open(Tag::ListItem),
            Token::close(Tag::ListItem),
            Token::close(Tag::BulletList),
            Token::close(Tag::ListItem),
            Token::close(Tag::BulletList),
            Token::text("after"),
        ];
        let mut cur = Cursor::new(&tokens, 0);
        cur.bump();

        let body = cur.take_span(&Tag::BulletList);
        assert!(body.closed);
        assert_eq!(body.tokens.len(), 6);
        assert_eq!(cur.peek(), Some(&Token::text("after")));
    }

    #[test]
    fn take_span_runs_to_end_when_unclosed() {
        let tokens = vec![Token::open(Tag::Heading(1)), Token::text("never closed")];
        let mut cur = Cursor::new(&tokens, 0);
        cur.bump();

        let body = cur.take_span(&Tag::Heading(1));
        assert!(!body.closed);
        assert_eq!(body.tokens, &[Token::text("never closed")]);
        assert_eq!(cur.peek(), None);
    }
}
