use crate::{
    ast::{Ast, Expr, Priority, Token, TokenKind},
    lexer::Lexer,
};
use std::mem;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that end a parse. There is no recovery and no partial tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A required delimiter (`{{`, `}}`, `)` or `]`) was not found.
    ///
    /// End of input shows up here with an empty `found`.
    #[error("invalid wildcard syntax: expected '{expected}' found '{found}'")]
    Syntax {
        expected: &'static str,
        found: String,
    },

    /// No expression can start with this token.
    #[error("parser error unknown expression type {0}")]
    UnknownExpressionKind(TokenKind),
}

impl ParseError {
    fn syntax(expected: &'static str, found: &Token) -> Self {
        ParseError::Syntax {
            expected,
            found: found.literal.clone(),
        }
    }
}

/// Deepest allowed nesting of `{{ ... }}` and `( ... )`, counting the
/// top-level placeholder.
pub const MAX_NESTING: usize = 256;

/// Precedence-climbing parser over a [`Lexer`].
///
/// Holds a two-token window: `current_token` is the token being examined and
/// `peek_token` is the one after it. A fresh parser has not read anything
/// into `current_token` yet; `peek_token` already holds the first token.
///
/// Nesting deeper than [`MAX_NESTING`] is rejected with a syntax error naming
/// the closing delimiter and the opening one that went too deep.
pub struct Parser {
    lexer: Lexer,
    current_token: Token,
    peek_token: Token,
    depth: usize,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let peek_token = lexer.next_token();
        Parser {
            lexer,
            current_token: Token::eof(),
            peek_token,
            depth: 0,
        }
    }

    /// Shifts the window by one token.
    ///
    /// Once `current_token` is EOF the lexer is not pulled again.
    fn advance(&mut self) {
        let next = if self.peek_token.is_eof() {
            Token::eof()
        } else {
            self.lexer.next_token()
        };
        self.current_token = mem::replace(&mut self.peek_token, next);
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current_token.kind == kind
    }

    /// Consumes the current token if it has the given kind.
    fn expect(&mut self, kind: TokenKind, spelling: &'static str) -> Result<(), ParseError> {
        if !self.check(kind) {
            return Err(ParseError::syntax(spelling, &self.current_token));
        }
        self.advance();
        Ok(())
    }

    /// Runs `parse` one nesting level deeper. The current token is the
    /// opening delimiter.
    fn nested<T>(
        &mut self,
        closing: &'static str,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::syntax(closing, &self.current_token));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Parses one top-level placeholder.
    ///
    /// The input must start with `{{`. Anything after the matching `}}` is
    /// left unread.
    pub fn parse(&mut self) -> Result<Ast, ParseError> {
        let result = self.parse_root();
        match &result {
            Ok(ast) => debug!(root = %ast, "parsed wildcard"),
            Err(e) => debug!(error = %e, "parse failed"),
        }
        result
    }

    fn parse_root(&mut self) -> Result<Ast, ParseError> {
        if self.peek_token.kind != TokenKind::WildcardOpen {
            return Err(ParseError::syntax("{{", &self.peek_token));
        }
        self.advance(); // current: {{

        let root = self.nested("}}", |p| {
            p.advance(); // current: first token inside the placeholder
            p.parse_wildcard()
        })?;
        Ok(Ast::new(root))
    }

    /// Parses the body of a placeholder whose `{{` is already consumed.
    fn parse_wildcard(&mut self) -> Result<Expr, ParseError> {
        let inner = self.parse_expression(Priority::Lowest)?;
        self.expect(TokenKind::WildcardClose, "}}")?;
        Ok(Expr::wildcard(inner))
    }

    /// Parse primary expressions (atoms): text, nested wildcards, '(' ... ')'
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.current_token.kind {
            TokenKind::Text => {
                let text = mem::take(&mut self.current_token.literal);
                self.advance();
                Ok(Expr::Literal(text))
            }
            TokenKind::WildcardOpen => self.nested("}}", |p| {
                p.advance();
                p.parse_wildcard()
            }),
            TokenKind::LParen => self.nested(")", |p| {
                p.advance();
                let expr = p.parse_expression(Priority::Lowest)?;
                p.expect(TokenKind::RParen, ")")?;
                Ok(expr)
            }),
            kind => Err(ParseError::UnknownExpressionKind(kind)),
        }
    }

    /// Parses a primary, then folds in every operator that binds tighter
    /// than `threshold`.
    ///
    /// Each operand is parsed with its own operator's priority as the new
    /// threshold, so a run of the same operator is absorbed by this loop and
    /// nests to the left: `a.b.c` is `(a.b).c`.
    fn parse_expression(&mut self, threshold: Priority) -> Result<Expr, ParseError> {
        trace!(?threshold, token = %self.current_token.kind, "parse expression");
        let mut left = self.parse_primary()?;

        loop {
            match Priority::of(self.current_token.kind) {
                Some(priority) if priority > threshold => {}
                _ => return Ok(left),
            }

            left = match self.current_token.kind {
                TokenKind::Dot => {
                    self.advance();
                    let key = self.parse_expression(Priority::Index)?;
                    Expr::dot(left, key)
                }
                TokenKind::LBracket => {
                    self.advance();
                    let key = self.parse_expression(Priority::Index)?;
                    self.expect(TokenKind::RBracket, "]")?;
                    Expr::index(left, key)
                }
                TokenKind::NullCoalesce => {
                    self.advance();
                    let fallback = self.parse_expression(Priority::NullCoalesce)?;
                    Expr::null_coalesce(left, fallback)
                }
                TokenKind::Pipe => {
                    self.advance();
                    let name = self.parse_expression(Priority::Pipe)?;
                    Expr::function(left, name)
                }
                // '(' ranks in the table but has no infix form
                _ => return Ok(left),
            };
        }
    }
}

/// Parses a single line of input.
pub fn parse_str(input: &str) -> Result<Ast, ParseError> {
    Parser::new(Lexer::new(input)).parse()
}
