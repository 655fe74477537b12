//! Rendering of tokens and syntax trees.
//!
//! Tokens render as one `KIND literal` line each. Trees render as JSON
//! objects tagged with the node kind:
//!
//! ```text
//! {{ a ?? b }}
//! ```
//!
//! becomes
//!
//! ```text
//! {
//!   "root": {
//!     "type": "WILDCARD",
//!     "expression": {
//!       "type": "NULL_COALESCE",
//!       "primary": { "type": "LITERAL", "value": "a" },
//!       "fallback": { "type": "LITERAL", "value": "b" }
//!     }
//!   }
//! }
//! ```

use crate::ast::{Ast, Expr, Token};
use serde_json::{Map, Value, json};

/// Formats a token as `KIND literal`.
pub fn format_token(token: &Token) -> String {
    format!("{} {}", token.kind, token.literal)
}

pub fn token_to_json(token: &Token) -> Value {
    json!({
        "type": token.kind.as_str(),
        "literal": token.literal,
    })
}

/// Converts an expression to a `serde_json::Value`, children first.
pub fn expr_to_json(expr: &Expr) -> Value {
    let mut node = Map::new();
    node.insert("type".to_string(), Value::from(expr.kind().as_str()));

    match expr {
        Expr::Literal(text) => {
            node.insert("value".to_string(), Value::from(text.as_str()));
        }
        Expr::Wildcard(inner) => {
            node.insert("expression".to_string(), expr_to_json(inner));
        }
        Expr::Dot { target, key } | Expr::Index { target, key } => {
            node.insert("target".to_string(), expr_to_json(target));
            node.insert("key".to_string(), expr_to_json(key));
        }
        Expr::NullCoalesce { primary, fallback } => {
            node.insert("primary".to_string(), expr_to_json(primary));
            node.insert("fallback".to_string(), expr_to_json(fallback));
        }
        Expr::Function { argument, name } => {
            node.insert("argument".to_string(), expr_to_json(argument));
            node.insert("name".to_string(), expr_to_json(name));
        }
    }

    Value::Object(node)
}

/// Converts a parse result to `{"root": ...}`, with `null` for an empty tree.
pub fn ast_to_json(ast: &Ast) -> Value {
    json!({
        "root": ast.root().map(expr_to_json),
    })
}

/// Compact JSON for a tree.
pub fn to_json(ast: &Ast) -> Result<String, serde_json::Error> {
    serde_json::to_string(&ast_to_json(ast))
}

/// JSON for a tree with 2-space indentation.
pub fn to_json_pretty(ast: &Ast) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ast_to_json(ast))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::TokenKind;

    #[test]
    fn test_format_token() {
        let token = Token::new(TokenKind::WildcardOpen, "{{");
        assert_eq!(format_token(&token), "WILDCARD_OPEN {{");
        assert_eq!(format_token(&Token::eof()), "EOF ");
    }

    #[test]
    fn test_expr_to_json() {
        let expr = Expr::index(Expr::literal_text("a"), Expr::wildcard(Expr::literal_text("b")));
        assert_eq!(
            expr_to_json(&expr),
            json!({
                "type": "INDEX",
                "target": { "type": "LITERAL", "value": "a" },
                "key": {
                    "type": "WILDCARD",
                    "expression": { "type": "LITERAL", "value": "b" },
                },
            })
        );
    }

    #[test]
    fn test_empty_ast() {
        assert_eq!(to_json(&Ast::default()).unwrap(), r#"{"root":null}"#);
    }
}
