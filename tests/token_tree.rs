use gramex::{
    ast::TokenNode,
    error::ParseError,
    grammar::{
        Grammar,
        boolean::boolean_grammar,
        callable::Callable,
        real::real_grammar,
        testing::{self, test_grammar},
    },
    interpreter::{
        evaluator::binary::scalar,
        lexer::{Token, TokenType, tokenize},
        parser::core::{build_tree, tokenize_tree},
    },
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn tree(src: &str, grammar: &Grammar) -> String {
    match tokenize_tree(src, grammar) {
        Ok(tree) => tree.to_string(),
        Err(e) => panic!("'{src}' failed to parse: {e}"),
    }
}

fn failure(src: &str, grammar: &Grammar) -> ParseError {
    match tokenize_tree(src, grammar) {
        Ok(tree) => panic!("'{src}' parsed to {tree} but was expected to fail"),
        Err(e) => e,
    }
}

#[rstest]
#[case::multary_over_binary("a+b-c", "TOP[+[a, -[b, c]]]")]
#[case::group_first("(a-b)+c", "TOP[+[([-[a, b]], c]]")]
#[case::mixed_precedence("a+b*c/d-f^g+h", "TOP[+[a, -[*[b, /[c, d]], ^[f, g]], h]]")]
#[case::implicit_multiplication("a b c", "TOP[*[a, b, c]]")]
#[case::prefix_then_binary("-a-b", "TOP[-[-[a], b]]")]
#[case::bracket_list("[a, b, c, d]", "TOP[[[,[a, b, c, d]]]")]
fn precedence_oracles(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(tree(src, &test_grammar()), expected);
}

#[rstest]
#[case::left_fold("a-b-c", "TOP[-[-[a, b], c]]")]
#[case::right_fold("a^b^c", "TOP[^[a, ^[b, c]]]")]
#[case::prefix_chain("---a", "TOP[-[-[-[a]]]]")]
#[case::postfix_chain("a!!", "TOP[![![a]]]")]
#[case::postfix_before_prefix("-a!", "TOP[-[![a]]]")]
#[case::prefix_binds_tightest("-a^2", "TOP[^[-[a], 2]]")]
#[case::prefix_after_binary("a * -b", "TOP[*[a, -[b]]]")]
#[case::implicit_before_group("2(a+b)", "TOP[*[2, ([+[a, b]]]]")]
#[case::implicit_after_group("(a)(b)", "TOP[*[([a], ([b]]]")]
#[case::scientific_literal("1.5e3 x", "TOP[*[1.5e3, x]]")]
#[case::multi_char_delimiters("/** a + b */ * c", "TOP[*[/**[+[a, b]], c]]")]
#[case::logic_levels("a && b || c", "TOP[||[&&[a, b], c]]")]
#[case::nested_groups("((a))", "TOP[([([a]]]")]
fn structure(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(tree(src, &test_grammar()), expected);
}

#[rstest]
#[case::arguments("max(a, b, c)", "TOP[max[a, b, c]]")]
#[case::single_argument("sin(x)", "TOP[sin[x]]")]
#[case::space_before_arguments("sin (x)", "TOP[sin[x]]")]
#[case::no_arguments("atan2()", "TOP[atan2]")]
#[case::grouped_list_argument("min((a, b))", "TOP[min[([,[a, b]]]]")]
#[case::name_without_arguments("sin x", "TOP[*[sin, x]]")]
#[case::call_in_expression("2 sin(x) + 1", "TOP[+[*[2, sin[x]], 1]]")]
fn function_calls(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(tree(src, &test_grammar()), expected);
}

#[rstest]
#[case::comparison_below_arithmetic("a + 1 < 2b", "TOP[<[+[a, 1], *[2, b]]]")]
#[case::word_connective("x > 0 and x < 1", "TOP[and[>[x, 0], <[x, 1]]]")]
#[case::exponent_literal("2e+1", "TOP[2e+1]")]
#[case::constant_after_number("2e", "TOP[*[2, e]]")]
#[case::constant_then_sum("2e + 1", "TOP[+[*[2, e], 1]]")]
fn real_grammar_trees(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(tree(src, &real_grammar()), expected);
}

#[test]
fn absolute_value_bars() {
    assert_eq!(tree("|x|", &real_grammar()), "TOP[|[x]]");
    assert_eq!(tree("2|x|", &real_grammar()), "TOP[*[2, |[x]]]");
    assert_eq!(tree("|a - |b||", &real_grammar()), "TOP[|[-[a, |[b]]]]");
}

#[rstest]
#[case::case_folding("A B OR NOT c", "TOP[or[and[a, b], not[c]]]")]
#[case::implicit_before_prefix("a not b", "TOP[and[a, not[b]]]")]
#[case::word_boundary("a AND android", "TOP[and[a, android]]")]
#[case::right_associative_implication("a -> b -> c", "TOP[->[a, ->[b, c]]]")]
#[case::longest_symbol("a <-> b", "TOP[<->[a, b]]")]
fn boolean_grammar_trees(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(tree(src, &boolean_grammar()), expected);
}

#[test]
fn empty_input() {
    assert_eq!(failure("", &test_grammar()), ParseError::EmptyExpression);
    assert_eq!(failure("   ", &test_grammar()), ParseError::EmptyExpression);
    assert_eq!(failure("()", &test_grammar()), ParseError::EmptyExpression);
    assert_eq!(build_tree(&[], &test_grammar()), Err(ParseError::EmptyExpression));
}

#[test]
fn unbalanced_delimiters() {
    assert_eq!(failure("(a", &test_grammar()),
               ParseError::UnterminatedParenthetical { open:     "(".to_string(),
                                                       close:    ")".to_string(),
                                                       position: 0, });
    assert_eq!(failure("a)", &test_grammar()),
               ParseError::UnmatchedClose { close:    ")".to_string(),
                                            position: 1, });
    assert_eq!(failure("(a]", &test_grammar()),
               ParseError::UnmatchedClose { close:    "]".to_string(),
                                            position: 2, });
    assert!(matches!(failure("/** a", &test_grammar()),
                     ParseError::UnterminatedParenthetical { .. }));
    // '*/' starts with the operator '*' but is still a closer
    assert_eq!(failure("a */ b", &test_grammar()),
               ParseError::UnmatchedClose { close:    "*/".to_string(),
                                            position: 2, });
    assert_eq!(failure("(a */ b)", &test_grammar()),
               ParseError::UnmatchedClose { close:    "*/".to_string(),
                                            position: 3, });
    assert_eq!(tree("a * /** b */", &test_grammar()), "TOP[*[a, /**[b]]]");
}

#[test]
fn unrecognized_input() {
    assert_eq!(failure("a $ b", &test_grammar()),
               ParseError::UnrecognizedToken { token:    "$".to_string(),
                                               position: 2, });
    // '*' has no prefix role
    assert!(matches!(failure("* a", &test_grammar()), ParseError::UnrecognizedToken { .. }));
}

#[test]
fn missing_operands() {
    assert_eq!(failure("a +", &test_grammar()),
               ParseError::MissingOperand { operator: "+".to_string() });
    assert_eq!(failure("a - ", &test_grammar()),
               ParseError::MissingOperand { operator: "-".to_string() });
    assert_eq!(failure("-", &test_grammar()),
               ParseError::MissingOperand { operator: "-".to_string() });
    assert_eq!(failure("(a, )", &test_grammar()),
               ParseError::MissingOperand { operator: ",".to_string() });
}

#[test]
fn operator_without_precedence() {
    let grammar = Grammar::builder().parenthetical("(", ")")
                                    .multary(",", Callable::variadic("add", scalar::add))
                                    .binary("-", Callable::binary("subtract", scalar::subtract))
                                    .order_of_operations([","])
                                    .build()
                                    .unwrap();

    assert!(matches!(failure("a - b", &grammar),
                     ParseError::PrecedenceConflict { operator, .. } if operator == "-"));
    // A lone operand needs no precedence.
    assert_eq!(tree("a", &grammar), "TOP[a]");
}

#[test]
fn depth_limit() {
    let grammar = testing::builder().max_depth(4).build().unwrap();

    assert_eq!(tree("((a))", &grammar), "TOP[([([a]]]");
    assert_eq!(failure("(((((a)))))", &grammar), ParseError::NestingTooDeep { limit: 4 });
    assert_eq!(failure("a^b^c^d^e^f", &grammar), ParseError::NestingTooDeep { limit: 4 });
    assert_eq!(failure("-----a", &grammar), ParseError::NestingTooDeep { limit: 4 });
}

#[test]
fn pathological_nesting_fails_cleanly() {
    let grammar = test_grammar();

    let prefixes = format!("{}a", "-".repeat(10_000));
    assert!(matches!(failure(&prefixes, &grammar), ParseError::NestingTooDeep { .. }));

    let groups = format!("{}a{}", "(".repeat(10_000), ")".repeat(10_000));
    assert!(matches!(failure(&groups, &grammar), ParseError::NestingTooDeep { .. }));

    let sum = vec!["1"; 10_000].join("+");
    let tree = tokenize_tree(&sum, &grammar).unwrap();
    assert_eq!(tree.children[0].children.len(), 10_000);
}

#[test]
fn tokens_carry_kind_and_position() {
    let tokens = tokenize("ab + 12", &test_grammar()).unwrap();

    assert_eq!(tokens,
               [Token::new("ab", TokenType::Identifier, 0),
                Token::new("+", TokenType::MultaryOperator, 3),
                Token::new("12", TokenType::Number, 5)]);
}

#[test]
fn operators_are_classified_by_position() {
    let kinds = |src: &str| -> Vec<TokenType> {
        tokenize(src, &test_grammar()).unwrap()
                                      .into_iter()
                                      .map(|token| token.kind)
                                      .collect()
    };

    assert_eq!(kinds("-a - b"),
               [TokenType::PreUnaryOperator,
                TokenType::Identifier,
                TokenType::BinaryOperator,
                TokenType::Identifier]);
    assert_eq!(kinds("!a!"),
               [TokenType::PreUnaryOperator, TokenType::Identifier, TokenType::PostUnaryOperator]);
    assert_eq!(kinds("sin(x)"),
               [TokenType::Function,
                TokenType::ParentheticalOpen,
                TokenType::Identifier,
                TokenType::ParentheticalClose]);
}

#[test]
fn implicit_operator_takes_next_position() {
    let tokens = tokenize("2 x", &test_grammar()).unwrap();

    assert_eq!(tokens[1], Token::new("*", TokenType::MultaryOperator, 2));
}

#[test]
fn no_implicit_operator_rejects_juxtaposition() {
    let grammar = Grammar::builder().parenthetical("(", ")")
                                    .multary(",", Callable::variadic("add", scalar::add))
                                    .order_of_operations([","])
                                    .build()
                                    .unwrap();

    assert!(matches!(failure("a b", &grammar), ParseError::UnrecognizedToken { .. }));
}

#[test]
fn tokenizing_is_deterministic() {
    let grammar = real_grammar();
    let src = "2pi r + |sin(x) - 1.033e-5| ^ 2 ^ 0.5 / max(a, b, 3)";

    let first = tokenize(src, &grammar).unwrap();
    for _ in 0..10 {
        assert_eq!(tokenize(src, &grammar).unwrap(), first);
    }
}

#[test]
fn built_tree_matches_manual_tree() {
    let expected =
        TokenNode::top(TokenNode::new("+",
                                      TokenType::MultaryOperator,
                                      vec![TokenNode::leaf("a", TokenType::Identifier),
                                           TokenNode::leaf("1", TokenType::Number)]));

    assert_eq!(tokenize_tree("a + 1", &test_grammar()).unwrap(), expected);
    assert_eq!(expected.depth(), 3);
}
