//! # Wildcard Expressions - Abstract Syntax Tree
//!
//! Types shared by the lexer and the parser for the `{{ ... }}` placeholder
//! language.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[expressions]** - Expression nodes (literals, wildcards, access, operators)
//! - **[operators]** - The operator precedence table
//! - **[tree]** - The parse result rooted at a single wildcard
//!
//! ## Quick Start
//!
//! ```text
//! {{ user.nickname ?? user[{{ field }}] | toUpper }}
//! ```
//!
//! A placeholder holds exactly one expression. Expressions are built from:
//!
//! - **Literals** - bare words (`name`, `42`) or quoted text (`"a b"`, `'{{x}}'`)
//! - **Wildcards** - nested `{{ ... }}` placeholders
//! - **Dot access** - `target.key`
//! - **Index access** - `target[key]`
//! - **Null-coalescing** - `primary ?? fallback`
//! - **Pipes** - `argument | function`
//! - **Grouping** - `( ... )`
//!
//! ## Precedence
//!
//! From weakest to tightest: `|`, `??`, then `.` and `[`. Without
//! parentheses, `a | f ?? b` groups as `a | (f ?? b)` and
//! `a ?? b | f` groups as `(a ?? b) | f`.
//!
//! Quoted text is opaque: `{{ "{{a}}" }}` is a wildcard around the literal
//! `{{a}}`, not a nested wildcard.
pub mod expressions;
pub mod operators;
pub mod tokens;
pub mod tree;

pub use expressions::{Expr, ExprKind};
pub use operators::Priority;
pub use tokens::{Token, TokenKind};
pub use tree::Ast;
