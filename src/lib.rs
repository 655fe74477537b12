pub mod ast;
pub mod cli;
pub mod lexer;
pub mod output;
pub mod parser;

pub use ast::{Ast, Expr, ExprKind, Priority, Token, TokenKind};
pub use lexer::Lexer;
pub use output::{to_json, to_json_pretty};
pub use parser::{ParseError, Parser, parse_str};
