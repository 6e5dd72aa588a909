use gramex::{
    error::{Error, EvalError},
    evaluate_source,
    grammar::{Grammar, boolean::boolean_grammar, real::real_grammar, testing::test_grammar},
    interpreter::{
        evaluator::core::{Bindings, evaluate},
        value::core::{Value, ValueKind},
    },
    parse,
};
use pretty_assertions::assert_eq;

fn bindings(values: &[(&str, Value)]) -> Bindings {
    values.iter()
          .map(|(name, value)| ((*name).to_string(), value.clone()))
          .collect()
}

fn assert_value(src: &str, grammar: &Grammar, expected: impl Into<Value>) {
    assert_value_with(src, grammar, &Bindings::new(), expected);
}

fn assert_value_with(src: &str, grammar: &Grammar, bindings: &Bindings, expected: impl Into<Value>) {
    match evaluate_source(src, grammar, bindings) {
        Ok(value) => assert_eq!(value, expected.into(), "while evaluating '{src}'"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str, grammar: &Grammar) -> Error {
    match evaluate_source(src, grammar, &Bindings::new()) {
        Ok(value) => panic!("'{src}' evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn basic_arithmetic() {
    let real = real_grammar();
    assert_value("1 + 2", &real, 3.0);
    assert_value("7 - 2 - 1", &real, 4.0);
    assert_value("2 * 3 + 4", &real, 10.0);
    assert_value("2 + 3 * 4", &real, 14.0);
    assert_value("10 / 4", &real, 2.5);
    assert_value("7 % 3", &real, 1.0);
    assert_value("1.5e2 + 50", &real, 200.0);
    assert_value("2e+1", &real, 20.0);
    assert_value("2e", &real, 2.0 * std::f64::consts::E);
    assert_value("8 - 2 + 3 - 1", &real, 8.0);
}

#[test]
fn powers_and_factorials() {
    let real = real_grammar();
    assert_value("2^3^2", &real, 512.0);
    assert_value("(2^3)^2", &real, 64.0);
    assert_value("-2^2", &real, 4.0);
    assert_value("-(2^2)", &real, -4.0);
    assert_value("5!", &real, 120.0);
    assert_value("3!!", &real, 720.0);
    assert_value("0!", &real, 1.0);
}

#[test]
fn implicit_multiplication() {
    let real = real_grammar();
    assert_value("2(3 + 4)", &real, 14.0);
    assert_value("2pi", &real, 2.0 * std::f64::consts::PI);
    assert_value_with("3x y", &real, &bindings(&[("x", 2.0.into()), ("y", 5.0.into())]), 30.0);
    assert_value("(1 + 1)(2 + 2)", &real, 8.0);
}

#[test]
fn functions_and_enclosures() {
    let real = real_grammar();
    assert_value("sqrt(16)", &real, 4.0);
    assert_value("|3 - 5|", &real, 2.0);
    assert_value("abs(-2) + |-3|", &real, 5.0);
    assert_value("max(1, 5, 3)", &real, 5.0);
    assert_value("min([4, 2, 8])", &real, 2.0);
    assert_value("mean([1, 2, 3])", &real, 2.0);
    assert_value("sum(1, [2, 3], 4)", &real, 10.0);
    assert_value("log(8, 2)", &real, 3.0);
    assert_value("floor(2.7) + ceil(2.2) + round(2.5)", &real, 8.0);
    assert_value("sign(-4)", &real, -1.0);
    assert_value("sin(0) + cos(0)", &real, 1.0);
    assert_value("if(2 > 1, 10, 20)", &real, 10.0);
}

#[test]
fn comparisons_and_connectives() {
    let real = real_grammar();
    assert_value("1 < 2 and 2 < 3", &real, true);
    assert_value("1 > 2 or 2 >= 2", &real, true);
    assert_value("not (1 > 2)", &real, true);
    assert_value("1 + 1 == 2", &real, true);
    assert_value("1 != 1", &real, false);
    assert_value("0.1 + 0.2 ~= 0.3", &real, true);
    assert_value("0.1 + 0.2 == 0.3", &real, false);
}

#[test]
fn lists() {
    let list = |values: &[f64]| Value::List(values.iter().copied().map(Value::Number).collect());

    assert_value("1, 2, 3", &real_grammar(), list(&[1.0, 2.0, 3.0]));
    assert_value("[1 + 1, 2 * 2]", &real_grammar(), list(&[2.0, 4.0]));
    assert_value("[1, 2], 3", &test_grammar(), Value::List(vec![list(&[1.0, 2.0]), 3.0.into()]));
}

#[test]
fn test_grammar_evaluates() {
    let grammar = test_grammar();
    assert_value("2 3 4", &grammar, 24.0);
    assert_value("-2 - 3", &grammar, -5.0);
    assert_value("1 + 2 * 3", &grammar, 7.0);
    assert_value("/** 1 + 2 */ 3", &grammar, 9.0);
    assert_value("4! / 2", &grammar, 12.0);

    let vars = bindings(&[("a", true.into()), ("b", false.into())]);
    assert_value_with("a && !b", &grammar, &vars, true);
    assert_value_with("!a || b", &grammar, &vars, false);
}

#[test]
fn boolean_algebra() {
    let grammar = boolean_grammar();
    let vars = bindings(&[("a", true.into()), ("b", false.into()), ("c", false.into())]);

    assert_value("true and false", &grammar, false);
    assert_value("TRUE OR false", &grammar, true);
    assert_value_with("A b", &grammar, &vars, false);
    assert_value_with("a !b", &grammar, &vars, true);
    assert_value_with("a -> b", &grammar, &vars, false);
    assert_value_with("b -> c -> b", &grammar, &vars, true);
    assert_value_with("b <-> c", &grammar, &vars, true);
    assert_value_with("not a xor b", &grammar, &vars, false);
    assert_value_with("a && ~b || c", &grammar, &vars, true);
    assert_value_with("if(b, c, a)", &grammar, &vars, true);
    assert_value_with("(a == b) != true", &grammar, &vars, true);
}

#[test]
fn evaluation_errors() {
    let real = real_grammar();

    assert_eq!(assert_failure("1 / 0", &real), Error::Eval(EvalError::DivisionByZero));
    assert_eq!(assert_failure("5 % 0", &real), Error::Eval(EvalError::DivisionByZero));
    assert!(matches!(assert_failure("sqrt(-1)", &real),
                     Error::Eval(EvalError::InvalidArgument { .. })));
    assert!(matches!(assert_failure("(-1)!", &real),
                     Error::Eval(EvalError::InvalidArgument { .. })));
    assert!(matches!(assert_failure("171!", &real),
                     Error::Eval(EvalError::InvalidArgument { .. })));
    assert_eq!(assert_failure("1 + (2 > 1)", &real),
               Error::Eval(EvalError::ExpectedNumber { found: ValueKind::Bool }));
    assert_eq!(assert_failure("not 1", &real),
               Error::Eval(EvalError::ExpectedBool { found: ValueKind::Number }));
    assert_eq!(assert_failure("q + 1", &real),
               Error::Eval(EvalError::UnboundVariable { name: "q".to_string() }));
}

#[test]
fn parse_errors_surface_through_evaluate_source() {
    assert!(matches!(assert_failure("(1 + 2", &real_grammar()), Error::Parse(_)));
    assert!(matches!(assert_failure("", &real_grammar()), Error::Parse(_)));
}

#[test]
fn bound_values_must_fit_the_declared_kind() {
    let tree = parse("x + 1", &real_grammar()).unwrap();
    let result = evaluate(&tree, &bindings(&[("x", true.into())]));

    assert_eq!(result,
               Err(EvalError::TypeMismatch { name:     "x".to_string(),
                                             expected: ValueKind::Number,
                                             found:    ValueKind::Bool, }));
}

#[test]
fn trees_can_be_evaluated_again_after_failure() {
    let tree = parse("1 / x", &real_grammar()).unwrap();

    assert_eq!(tree.evaluate(&bindings(&[("x", 0.0.into())])),
               Err(EvalError::DivisionByZero));
    assert_eq!(tree.evaluate(&bindings(&[("x", 4.0.into())])), Ok(Value::Number(0.25)));
    assert_eq!(tree.to_string(), "/[1, x]");
}

#[test]
fn round_trip_matches_native_arithmetic() {
    let grammar = real_grammar();
    let tree = parse("3x^2 - 2x + 1", &grammar).unwrap();

    for x in [-2.0_f64, -0.5, 0.0, 1.0, 3.25] {
        let expected = 3.0 * x.powi(2) - 2.0 * x + 1.0;
        let value = tree.evaluate(&bindings(&[("x", x.into())])).unwrap();
        assert_eq!(value, Value::Number(expected), "at x = {x}");
    }
}
