use crate::{
    grammar::{Grammar, GrammarBuilder, callable::Callable},
    interpreter::{
        evaluator::{
            binary::{comparison, logic, power, scalar},
            function::{aggregate, builtin, core::with_builtin_functions},
            unary,
        },
        value::core::ValueKind,
    },
};

/// Configures real arithmetic.
///
/// - Parentheticals `( )`, `|x|` (absolute value) and `[ ]` (list).
/// - Arithmetic `+ - * / % ^` with `^` right-associative, comparisons
///   `== != ~= < <= > >=`, and word connectives `and`, `or`, `not`.
/// - Prefix `+` and `-`, postfix `!` (factorial).
/// - Constants `pi`, `e` and `tau`; juxtaposition means `*`.
///
///   Digits followed by `e`, an optional sign and more digits always lex as
///   one literal in scientific notation: `2e+1` is `20`. Without exponent
///   digits the `e` is the constant, so `2e` is `2 * e` and `2e + 1` is
///   `2 * e + 1`.
/// - The builtin functions, including `if(condition, then, else)`.
/// - Free variables are expected to be numbers.
#[must_use]
pub fn builder() -> GrammarBuilder {
    let builder =
        Grammar::builder().parenthetical("(", ")")
                          .parenthetical("|", "|")
                          .parenthetical("[", "]")
                          .argument_list("(", ",")
                          .enclosure("|", Callable::unary("abs", builtin::abs))
                          .enclosure("[", Callable::variadic("list", aggregate::list))
                          .multary(",", Callable::variadic("list", aggregate::list))
                          .multary("or", Callable::variadic("or", logic::or))
                          .multary("and", Callable::variadic("and", logic::and))
                          .binary("==", Callable::binary("equal", comparison::equal))
                          .binary("!=", Callable::binary("not_equal", comparison::not_equal))
                          .binary("~=", Callable::binary("approx_equal", comparison::approx_equal))
                          .binary("<", Callable::binary("less", comparison::less))
                          .binary("<=", Callable::binary("less_equal", comparison::less_equal))
                          .binary(">", Callable::binary("greater", comparison::greater))
                          .binary(">=", Callable::binary("greater_equal", comparison::greater_equal))
                          .multary("+", Callable::variadic("add", scalar::add))
                          .binary("-", Callable::binary("subtract", scalar::subtract))
                          .multary("*", Callable::variadic("multiply", scalar::multiply))
                          .binary("/", Callable::binary("divide", scalar::divide))
                          .binary("%", Callable::binary("remainder", scalar::remainder))
                          .binary("^", Callable::binary("power", power::power))
                          .right_associative("^")
                          .order_of_operations([",", "or", "and", "==", "!=", "~=", "<", "<=", ">",
                                                ">=", "+", "-", "*", "/", "%", "^"])
                          .pre_unary("+", Callable::unary("identity", unary::identity))
                          .pre_unary("-", Callable::unary("negate", unary::negate))
                          .pre_unary("not", Callable::unary("not", unary::not))
                          .post_unary("!", Callable::unary("factorial", unary::factorial))
                          .implicit_operator("*")
                          .constant("pi", std::f64::consts::PI)
                          .constant("e", std::f64::consts::E)
                          .constant("tau", std::f64::consts::TAU)
                          .default_variable_kind(ValueKind::Number);
    with_builtin_functions(builder)
}

/// Builds the real arithmetic grammar described by [`builder`].
///
/// # Example
/// ```
/// use gramex::{evaluate_source, grammar::real::real_grammar, interpreter::{evaluator::core::Bindings, value::core::Value}};
///
/// let grammar = real_grammar();
/// let value = evaluate_source("2^3^2 - |1 - 4|", &grammar, &Bindings::new()).unwrap();
/// assert_eq!(value, Value::Number(509.0));
/// ```
#[must_use]
pub fn real_grammar() -> Grammar {
    builder().assemble()
}
