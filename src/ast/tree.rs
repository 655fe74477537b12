use std::fmt;

use crate::ast::Expr;

/// Result of a successful top-level parse.
///
/// The root is empty until a parse fills it, and is then always an
/// [`Expr::Wildcard`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ast {
    root: Option<Expr>,
}

impl Ast {
    pub(crate) fn new(root: Expr) -> Self {
        debug_assert!(matches!(root, Expr::Wildcard(_)));
        Ast { root: Some(root) }
    }

    pub fn root(&self) -> Option<&Expr> {
        self.root.as_ref()
    }

    pub fn into_root(self) -> Option<Expr> {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Some(root) => write!(f, "{}", root),
            None => Ok(()),
        }
    }
}
