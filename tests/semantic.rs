use gramex::{
    ast::{SemanticNode, TokenNode},
    error::ParseError,
    grammar::{
        Grammar, boolean::boolean_grammar, callable::Arity, real::real_grammar, testing,
        testing::test_grammar,
    },
    interpreter::{
        lexer::TokenType,
        parser::core::tokenize_tree,
        semantic::build_semantic_tree,
        value::core::{Value, ValueKind},
    },
    parse,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn semantic(src: &str, grammar: &Grammar) -> SemanticNode {
    parse(src, grammar).unwrap_or_else(|e| panic!("'{src}' failed to parse: {e}"))
}

#[rstest]
#[case::parentheses_vanish("(a-b)+c", "+[-[a, b], c]")]
#[case::nested_parentheses("((a))", "a")]
#[case::multi_char_group("/** a */ b", "*[a, b]")]
#[case::bracket_enclosure("[a, b, c]", "[[a, b, c]")]
#[case::single_element_enclosure("[a]", "[[a]")]
#[case::function_arguments("max(a, b, 1)", "max[a, b, 1]")]
#[case::prefix_and_postfix("-a!", "-[![a]]")]
fn shapes(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(semantic(src, &test_grammar()).to_string(), expected);
}

#[test]
fn absolute_value_enclosure_is_a_call() {
    let tree = semantic("|x - 1|", &real_grammar());

    assert_eq!(tree.to_string(), "|[-[x, 1]]");
    assert!(matches!(&tree, SemanticNode::Method { callable, .. } if callable.name() == "abs"));
}

#[test]
fn variadic_callables_become_vararg_methods() {
    let tree = semantic("a + b + c", &test_grammar());
    let SemanticNode::VarargMethod { label,
                                     callable,
                                     children, } = &tree
    else {
        panic!("expected a vararg method, got {tree:?}");
    };

    assert_eq!(label, "+");
    assert_eq!(callable.arity(), Arity::Variadic);
    assert_eq!(children.len(), 3);
}

#[test]
fn fixed_arity_callables_become_methods() {
    let tree = semantic("a - b", &test_grammar());

    assert!(matches!(&tree,
                     SemanticNode::Method { label, children, .. } if label == "-" && children.len() == 2));
    assert!(matches!(semantic("-a", &test_grammar()),
                     SemanticNode::Method { callable, .. } if callable.name() == "negate"));
}

#[test]
fn numbers_and_constants() {
    assert_eq!(semantic("1.5e3", &test_grammar()),
               SemanticNode::Constant { label: "1.5e3".to_string(),
                                        value: Value::Number(1500.0), });
    assert_eq!(semantic("pi", &real_grammar()),
               SemanticNode::Constant { label: "pi".to_string(),
                                        value: Value::Number(std::f64::consts::PI), });
    assert_eq!(semantic("TRUE", &boolean_grammar()),
               SemanticNode::Constant { label: "true".to_string(),
                                        value: Value::Bool(true), });
}

#[test]
fn variables_take_the_grammar_kind() {
    assert_eq!(semantic("x", &test_grammar()),
               SemanticNode::Variable { name: "x".to_string(),
                                        kind: ValueKind::Any, });
    assert_eq!(semantic("x", &real_grammar()),
               SemanticNode::Variable { name: "x".to_string(),
                                        kind: ValueKind::Number, });
    assert_eq!(semantic("X", &boolean_grammar()),
               SemanticNode::Variable { name: "x".to_string(),
                                        kind: ValueKind::Bool, });
}

#[test]
fn declared_variables() {
    let grammar = testing::builder().free_variables(false)
                                    .variable("n", ValueKind::Number)
                                    .variable("flag", ValueKind::Bool)
                                    .build()
                                    .unwrap();

    assert_eq!(semantic("flag", &grammar),
               SemanticNode::Variable { name: "flag".to_string(),
                                        kind: ValueKind::Bool, });
    assert_eq!(parse("n + m", &grammar),
               Err(ParseError::UnknownIdentifier { name: "m".to_string() }));
}

#[test]
fn free_variables_are_collected() {
    let tree = semantic("y sin(x) + x - pi", &real_grammar());
    let names: Vec<&str> = tree.variables().into_iter().collect();

    assert_eq!(names, ["x", "y"]);
}

#[test]
fn arity_is_checked_when_binding() {
    assert_eq!(parse("atan2(1)", &test_grammar()),
               Err(ParseError::ArityMismatch { name:     "atan2".to_string(),
                                               expected: "2".to_string(),
                                               found:    1, }));
    assert_eq!(parse("if(a, b)", &real_grammar()),
               Err(ParseError::ArityMismatch { name:     "if".to_string(),
                                               expected: "3".to_string(),
                                               found:    2, }));
    assert!(parse("sum()", &test_grammar()).is_ok());
}

#[test]
fn unknown_names_and_operators() {
    let unknown_operator = TokenNode::top(TokenNode::new("?",
                                                         TokenType::BinaryOperator,
                                                         vec![TokenNode::leaf("a", TokenType::Identifier),
                                                              TokenNode::leaf("b", TokenType::Identifier)]));
    assert_eq!(build_semantic_tree(&unknown_operator, &test_grammar()),
               Err(ParseError::UnknownOperator { symbol: "?".to_string() }));

    // '*' is only registered between operands.
    let wrong_role = TokenNode::top(TokenNode::new("*",
                                                   TokenType::PreUnaryOperator,
                                                   vec![TokenNode::leaf("a", TokenType::Identifier)]));
    assert_eq!(build_semantic_tree(&wrong_role, &test_grammar()),
               Err(ParseError::UnknownOperator { symbol: "*".to_string() }));

    let unknown_function = TokenNode::top(TokenNode::new("frobnicate", TokenType::Function, vec![]));
    assert_eq!(build_semantic_tree(&unknown_function, &test_grammar()),
               Err(ParseError::UnknownIdentifier { name: "frobnicate".to_string() }));
}

#[test]
fn malformed_trees_are_rejected() {
    let two_roots = TokenNode::new("TOP",
                                   TokenType::Top,
                                   vec![TokenNode::leaf("a", TokenType::Identifier),
                                        TokenNode::leaf("b", TokenType::Identifier)]);
    assert_eq!(build_semantic_tree(&two_roots, &test_grammar()),
               Err(ParseError::MalformedTree { node: "TOP".to_string() }));

    let stray_close = TokenNode::top(TokenNode::leaf(")", TokenType::ParentheticalClose));
    assert_eq!(build_semantic_tree(&stray_close, &test_grammar()),
               Err(ParseError::MalformedTree { node: ")".to_string() }));

    let bad_number = TokenNode::top(TokenNode::leaf("1.2.3", TokenType::Number));
    assert!(build_semantic_tree(&bad_number, &test_grammar()).is_err());
}

#[test]
fn semantic_tree_is_independent_of_token_tree() {
    let grammar = test_grammar();
    let tokens = tokenize_tree("a * (b + c)", &grammar).unwrap();

    let first = build_semantic_tree(&tokens, &grammar).unwrap();
    let second = build_semantic_tree(&tokens, &grammar).unwrap();
    drop(tokens);

    assert_eq!(first, second);
    assert_eq!(first.to_string(), "*[a, +[b, c]]");
}

#[test]
fn trees_and_grammars_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Grammar>();
    assert_send_sync::<TokenNode>();
    assert_send_sync::<SemanticNode>();

    let grammar = real_grammar();
    let results: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = ["a + b", "sin(x)^2", "|y|"].into_iter()
                                                           .map(|src| {
                                                               let grammar = &grammar;
                                                               scope.spawn(move || {
                                                                        semantic(src, grammar).to_string()
                                                                    })
                                                           })
                                                           .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results, ["+[a, b]", "^[sin[x], 2]", "|[y]"]);
}
