use crate::ast::{Token, TokenKind};
use tracing::trace;

/// Pull-based scanner for placeholder expressions.
///
/// The scanner walks the input one byte at a time with one byte of
/// lookahead. It never fails: reading past the end yields the sentinel `0`,
/// which scans as [`TokenKind::Eof`], and bytes without a rule become
/// [`TokenKind::Illegal`] tokens.
pub struct Lexer {
    input: Vec<u8>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer::from_bytes(input.as_bytes())
    }

    /// Scans raw bytes, which need not be valid UTF-8.
    pub fn from_bytes(input: &[u8]) -> Self {
        Lexer {
            input: input.to_vec(),
            position: 0,
        }
    }

    /// Next unread byte, or `0` past the end.
    fn peek_byte(&self) -> u8 {
        self.input.get(self.position).copied().unwrap_or(0)
    }

    /// Consumes the next byte. Past the end this is a no-op returning `0`.
    fn read(&mut self) -> u8 {
        let ch = self.peek_byte();
        if self.position < self.input.len() {
            self.position += 1;
        }
        ch
    }

    /// Consumes the next byte only if it equals `expected`.
    fn expect(&mut self, expected: u8) -> bool {
        if self.position < self.input.len() && self.input[self.position] == expected {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn text(&self, start: usize, end: usize) -> String {
        String::from_utf8_lossy(&self.input[start..end]).into_owned()
    }

    /// Reads a quoted run. The opening quote is already consumed.
    ///
    /// The byte right after the opening quote always belongs to the literal,
    /// even when it is the closing quote itself. A missing terminator ends the
    /// run at end of input.
    fn read_quoted(&mut self, quote: u8) -> Token {
        let start = self.position;
        if self.read() == 0 {
            return Token::eof();
        }

        loop {
            match self.peek_byte() {
                0 => break,
                ch if ch == quote => break,
                _ => self.position += 1,
            }
        }

        let end = self.position;
        self.expect(quote);
        Token::new(TokenKind::Text, self.text(start, end))
    }

    /// Reads a run of letters and digits. The first byte is already consumed.
    fn read_word(&mut self) -> Token {
        let start = self.position - 1;
        while is_word_byte(self.peek_byte()) {
            self.position += 1;
        }
        Token::new(TokenKind::Text, self.text(start, self.position))
    }

    pub fn next_token(&mut self) -> Token {
        let token = self.scan();
        trace!(kind = %token.kind, literal = %token.literal, "scanned token");
        token
    }

    fn scan(&mut self) -> Token {
        let mut ch = self.read();
        while ch == b' ' {
            ch = self.read();
        }

        match ch {
            0 => Token::eof(),
            b'{' => {
                if self.expect(b'{') {
                    Token::new(TokenKind::WildcardOpen, "{{")
                } else {
                    single(TokenKind::LBrace, ch)
                }
            }
            b'}' => {
                if self.expect(b'}') {
                    Token::new(TokenKind::WildcardClose, "}}")
                } else {
                    single(TokenKind::RBrace, ch)
                }
            }
            b'\'' | b'"' => self.read_quoted(ch),
            b'?' => {
                if self.expect(b'?') {
                    Token::new(TokenKind::NullCoalesce, "??")
                } else {
                    single(TokenKind::QuestionMark, ch)
                }
            }
            b'|' => single(TokenKind::Pipe, ch),
            b'[' => single(TokenKind::LBracket, ch),
            b']' => single(TokenKind::RBracket, ch),
            b'(' => single(TokenKind::LParen, ch),
            b')' => single(TokenKind::RParen, ch),
            b'.' => single(TokenKind::Dot, ch),
            ch if is_word_byte(ch) => self.read_word(),
            ch => single(TokenKind::Illegal, ch),
        }
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields tokens up to, but not including, the end of input.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_eof() { None } else { Some(token) }
    }
}

/// One-byte token. The byte is read as a Latin-1 code point.
fn single(kind: TokenKind, ch: u8) -> Token {
    Token::new(kind, char::from(ch).to_string())
}

/// Letters and digits, classified per byte.
///
/// A byte counts as a letter when its Latin-1 code point is alphabetic, so
/// bytes of a multi-byte UTF-8 sequence are judged one at a time.
fn is_word_byte(ch: u8) -> bool {
    ch.is_ascii_digit() || char::from(ch).is_alphabetic()
}

#[test]
fn test_wildcard_markers() {
    let mut lexer = Lexer::new("{{ a }} { }");
    assert_eq!(lexer.next_token(), Token::new(TokenKind::WildcardOpen, "{{"));
    assert_eq!(lexer.next_token(), Token::new(TokenKind::Text, "a"));
    assert_eq!(lexer.next_token(), Token::new(TokenKind::WildcardClose, "}}"));
    assert_eq!(lexer.next_token(), Token::new(TokenKind::LBrace, "{"));
    assert_eq!(lexer.next_token(), Token::new(TokenKind::RBrace, "}"));
    assert_eq!(lexer.next_token(), Token::eof());
}

#[test]
fn test_pipe_and_fallback() {
    let kinds: Vec<TokenKind> = Lexer::new("a | f ?? b ? c").map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Text,
            TokenKind::Pipe,
            TokenKind::Text,
            TokenKind::NullCoalesce,
            TokenKind::Text,
            TokenKind::QuestionMark,
            TokenKind::Text,
        ]
    );
}
