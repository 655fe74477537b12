use crate::ast::TokenKind;

/// Binding strength of infix operators, weakest first.
///
/// The derived ordering is the precedence table: a variant declared later
/// binds tighter than every variant declared before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    /// Threshold for a whole expression; no operator has it
    Lowest,
    /// Function application (`|`)
    Pipe,
    /// Null-coalescing (`??`)
    NullCoalesce,
    /// Field and index access (`.` and `[`)
    Index,
    /// Left parenthesis (`(`)
    Paren,
}

impl Priority {
    /// Looks up the priority of a token in operator position.
    ///
    /// Returns `None` for tokens that never continue an expression.
    pub fn of(kind: TokenKind) -> Option<Priority> {
        match kind {
            TokenKind::Pipe => Some(Priority::Pipe),
            TokenKind::NullCoalesce => Some(Priority::NullCoalesce),
            TokenKind::Dot | TokenKind::LBracket => Some(Priority::Index),
            TokenKind::LParen => Some(Priority::Paren),
            _ => None,
        }
    }
}
