use std::fmt;

/// Variant tag of an [`Expr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprKind {
    Literal,
    Wildcard,
    Dot,
    Index,
    NullCoalesce,
    Function,
}

impl ExprKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExprKind::Literal => "LITERAL",
            ExprKind::Wildcard => "WILDCARD",
            ExprKind::Dot => "DOT",
            ExprKind::Index => "INDEX",
            ExprKind::NullCoalesce => "NULL_COALESCE",
            ExprKind::Function => "FUNCTION",
        }
    }
}

impl fmt::Display for ExprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Syntax tree node for a placeholder expression.
///
/// Every node owns its children. Nothing here is evaluated: a `Function`
/// names a function, it does not call one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Bare word or quoted text
    ///
    /// # Example
    /// ```text
    /// name
    /// "{{ kept verbatim }}"
    /// ```
    Literal(String),

    /// A `{{ ... }}` placeholder around one expression
    ///
    /// The root of every tree, and allowed anywhere a primary expression is.
    ///
    /// # Example
    /// ```text
    /// {{ user[{{ key }}] }}
    /// ```
    Wildcard(Box<Expr>),

    /// Field access
    ///
    /// # Example
    /// ```text
    /// user.name
    /// ```
    Dot { target: Box<Expr>, key: Box<Expr> },

    /// Bracket access
    ///
    /// # Example
    /// ```text
    /// user[name]
    /// ```
    Index { target: Box<Expr>, key: Box<Expr> },

    /// Fallback when the primary has no value
    ///
    /// # Example
    /// ```text
    /// nickname ?? name
    /// ```
    NullCoalesce {
        primary: Box<Expr>,
        fallback: Box<Expr>,
    },

    /// Pipe application of a named function
    ///
    /// # Example
    /// ```text
    /// name | toUpper
    /// ```
    Function {
        argument: Box<Expr>,
        name: Box<Expr>,
    },
}

impl Expr {
    pub fn literal_text(text: impl Into<String>) -> Self {
        Expr::Literal(text.into())
    }

    pub fn wildcard(inner: Expr) -> Self {
        Expr::Wildcard(Box::new(inner))
    }

    pub fn dot(target: Expr, key: Expr) -> Self {
        Expr::Dot {
            target: Box::new(target),
            key: Box::new(key),
        }
    }

    pub fn index(target: Expr, key: Expr) -> Self {
        Expr::Index {
            target: Box::new(target),
            key: Box::new(key),
        }
    }

    pub fn null_coalesce(primary: Expr, fallback: Expr) -> Self {
        Expr::NullCoalesce {
            primary: Box::new(primary),
            fallback: Box::new(fallback),
        }
    }

    pub fn function(argument: Expr, name: Expr) -> Self {
        Expr::Function {
            argument: Box::new(argument),
            name: Box::new(name),
        }
    }

    pub fn kind(&self) -> ExprKind {
        match self {
            Expr::Literal(_) => ExprKind::Literal,
            Expr::Wildcard(_) => ExprKind::Wildcard,
            Expr::Dot { .. } => ExprKind::Dot,
            Expr::Index { .. } => ExprKind::Index,
            Expr::NullCoalesce { .. } => ExprKind::NullCoalesce,
            Expr::Function { .. } => ExprKind::Function,
        }
    }

    /// Source value of the node.
    ///
    /// Literal text for `Literal`, the inner value for `Wildcard`, and the
    /// rendered form for every composite node.
    pub fn value(&self) -> String {
        match self {
            Expr::Literal(text) => text.clone(),
            Expr::Wildcard(inner) => inner.value(),
            _ => self.literal(),
        }
    }

    /// Normalized textual form, for debugging and round-tripping.
    ///
    /// Binary operators are wrapped in parentheses. For unambiguous trees the
    /// rendering reparses to the same tree; it does not for a dotted key
    /// (`a.(b.c)` renders as `a.b.c`) or for quoted text that holds spaces or
    /// operators, since quotes are dropped.
    pub fn literal(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(text) => f.write_str(text),
            Expr::Wildcard(inner) => write!(f, "{{{{{}}}}}", inner),
            Expr::Dot { target, key } => write!(f, "{}.{}", target, key),
            Expr::Index { target, key } => write!(f, "{}[{}]", target, key),
            Expr::NullCoalesce { primary, fallback } => {
                write!(f, "({} ?? {})", primary, fallback)
            }
            Expr::Function { argument, name } => write!(f, "({} | {})", argument, name),
        }
    }
}
