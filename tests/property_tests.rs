use proptest::prelude::*;
use wildcard_tree::{Expr, Lexer, TokenKind, parse_str};

fn word() -> impl Strategy<Value = Expr> {
    "[a-zA-Z0-9]{1,8}".prop_map(Expr::literal_text)
}

/// Trees whose literal rendering parses back to the same tree.
///
/// Access keys are limited to forms that render as a single primary:
/// words, wildcards, and the parenthesized binary operators.
fn renderable() -> impl Strategy<Value = Expr> {
    word().prop_recursive(4, 48, 2, |inner| {
        let key = prop_oneof![
            word(),
            inner.clone().prop_map(Expr::wildcard),
            (inner.clone(), inner.clone()).prop_map(|(p, f)| Expr::null_coalesce(p, f)),
            (inner.clone(), inner.clone()).prop_map(|(a, n)| Expr::function(a, n)),
        ]
        .boxed();

        prop_oneof![
            inner.clone().prop_map(Expr::wildcard),
            (inner.clone(), key.clone()).prop_map(|(t, k)| Expr::dot(t, k)),
            (inner.clone(), key).prop_map(|(t, k)| Expr::index(t, k)),
            (inner.clone(), inner.clone()).prop_map(|(p, f)| Expr::null_coalesce(p, f)),
            (inner.clone(), inner).prop_map(|(a, n)| Expr::function(a, n)),
        ]
    })
}

proptest! {
    #[test]
    fn prop_bare_word_wildcard(text in "[a-zA-Z0-9]{1,16}") {
        let expected = Expr::wildcard(Expr::literal_text(text.clone()));
        let ast = parse_str(&format!("{{{{{}}}}}", text)).unwrap();
        prop_assert_eq!(ast.root(), Some(&expected));
    }

    #[test]
    fn prop_literal_rendering_round_trips(inner in renderable()) {
        let tree = Expr::wildcard(inner);
        let rendered = tree.literal();
        let reparsed = parse_str(&rendered)
            .unwrap_or_else(|e| panic!("{} failed to reparse: {}", rendered, e));
        prop_assert_eq!(reparsed.root(), Some(&tree));
    }

    #[test]
    fn prop_lexer_reaches_eof(input in any::<String>()) {
        // A NUL byte scans as end of input without ending the stream.
        let input = input.replace('\0', "");
        let mut lexer = Lexer::new(&input);
        let mut seen = 0;
        while lexer.next_token().kind != TokenKind::Eof {
            seen += 1;
            prop_assert!(seen <= input.len());
        }
        prop_assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn prop_parser_never_panics(input in "[{}()\\[\\]?|. a-c\"']{0,24}") {
        let _ = parse_str(&input);
    }
}
