use std::fmt;

/// Kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input
    ///
    /// Returned forever once the input is exhausted.
    Eof,

    // Delimiters
    /// Single left brace `{`
    LBrace,

    /// Single right brace `}`
    RBrace,

    /// Left bracket for index access
    ///
    /// # Examples
    /// ```text
    /// {{ user[name] }}
    /// ```
    LBracket,

    /// Right bracket
    RBracket,

    /// Opening placeholder marker `{{`
    WildcardOpen,

    /// Closing placeholder marker `}}`
    WildcardClose,

    /// Left parenthesis for grouping
    ///
    /// # Examples
    /// ```text
    /// {{ "none" ?? (name | toUpper) }}
    /// ```
    LParen,

    /// Right parenthesis
    RParen,

    // Operators
    /// A lone `?`
    ///
    /// Scanned but never accepted by the parser.
    QuestionMark,

    /// Null-coalescing operator
    ///
    /// # Examples
    /// ```text
    /// {{ user.nickname ?? user.name }}
    /// ```
    NullCoalesce,

    /// Field access operator
    ///
    /// # Examples
    /// ```text
    /// {{ user.name }}
    /// ```
    Dot,

    /// Function application operator
    ///
    /// # Examples
    /// ```text
    /// {{ name | toUpper }}
    /// ```
    Pipe,

    // Words
    /// Bare word (letters and digits) or the body of a quoted run
    ///
    /// # Examples
    /// ```text
    /// name
    /// 42
    /// "{{ not a placeholder }}"
    /// ```
    Text,

    /// Any byte the lexer has no rule for
    Illegal,
}

impl TokenKind {
    /// Upper-case name of the kind, e.g. `WILDCARD_OPEN`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::WildcardOpen => "WILDCARD_OPEN",
            TokenKind::WildcardClose => "WILDCARD_CLOSE",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::QuestionMark => "QUESTION_MARK",
            TokenKind::NullCoalesce => "NULL_COALESCE",
            TokenKind::Dot => "DOT",
            TokenKind::Pipe => "PIPE",
            TokenKind::Text => "TEXT",
            TokenKind::Illegal => "ILLEGAL",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token: its kind plus the exact text it was scanned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token {
            kind,
            literal: literal.into(),
        }
    }

    /// The end-of-input token, with an empty literal.
    pub fn eof() -> Self {
        Token::new(TokenKind::Eof, "")
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}
