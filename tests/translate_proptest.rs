//! Property-based tests for the lexer and parser
//!
//! These check invariants that must hold for any input: the translator never panics,
//! arrays keep their arity, and comments never turn into output nodes.

use conflang::lexing::tokenize_with_order;
use conflang::translator::translate_document;
use conflang::{tokenize, Node, TokenKind, TokenOrder};
use proptest::prelude::*;

fn identifier() -> impl Strategy<Value = String> {
    "[a-zA-Z][_a-zA-Z0-9]{0,8}"
}

/// Array items that cannot close the array or split an item
fn array_item() -> impl Strategy<Value = String> {
    "[a-z0-9 ]{0,6}"
}

/// Global values without the terminating `;`
fn global_value() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.\"]{1,10}"
}

proptest! {
    #[test]
    fn arbitrary_input_never_panics(source in ".{0,200}") {
        let _ = tokenize_with_order(&source, TokenOrder::PatternPriority);
        let _ = tokenize_with_order(&source, TokenOrder::Source);
        let _ = conflang::translate(&source);
    }

    #[test]
    fn array_keeps_its_arity(items in prop::collection::vec(array_item(), 1..8)) {
        let source = format!("#({})", items.join(","));
        let doc = translate_document(&source).unwrap();

        let expected: Vec<String> = items.iter().map(|s| s.trim().to_string()).collect();
        prop_assert_eq!(doc.nodes, vec![Node::Array { values: expected }]);
    }

    #[test]
    fn declared_global_resolves(name in identifier(), value in global_value()) {
        let source = format!("global {} = {};\n?[{}]", name, value, name);
        let doc = translate_document(&source).unwrap();

        prop_assert_eq!(
            doc.nodes,
            vec![
                Node::global(&name, &value),
                Node::constant_eval(&name, Some(value.clone())),
            ]
        );
    }

    #[test]
    fn undeclared_reference_is_undefined(name in identifier()) {
        let doc = translate_document(&format!("?[{}]", name)).unwrap();
        prop_assert_eq!(doc.nodes.len(), 1);
        prop_assert_eq!(doc.nodes[0].text(), Some("undefined"));
    }

    #[test]
    fn comments_never_become_nodes(body in "[a-z {}]{0,30}") {
        let source = format!("* {}\n%{{ {} %}}", body, body);
        let doc = translate_document(&source).unwrap();
        prop_assert!(doc.is_empty());
    }

    #[test]
    fn source_order_is_sorted(source in "[a-z{}=#()?\\[\\]0-9 ;\n]{0,80}") {
        let tokens = tokenize_with_order(&source, TokenOrder::Source);
        prop_assert!(tokens.windows(2).all(|w| w[0].span.start <= w[1].span.start));
    }

    #[test]
    fn priority_order_groups_kinds(source in "[a-z{}=#()?\\[\\]0-9 ;\n]{0,80}") {
        let ranks: Vec<usize> = tokenize(&source)
            .iter()
            .map(|t| TokenKind::PRIORITY.iter().position(|k| *k == t.kind).unwrap())
            .collect();
        prop_assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
    }
}
