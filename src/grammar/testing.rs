use crate::{
    grammar::{Grammar, GrammarBuilder, callable::Callable},
    interpreter::evaluator::{
        binary::{logic, power, scalar},
        function::{aggregate, core::with_builtin_functions},
        unary,
    },
};

/// Configures the test grammar.
///
/// - Parentheticals `( )`, `/** */` and `[ ]`; `[ ]` builds a list.
/// - Multary `,` (list), `||`, `&&`, `+` and `*`; binary `-`, `/`, `%` and
///   right-associative `^`.
/// - Order of operations, loosest first: `, || && + - * / % ^`.
/// - Prefix `+`, `-` and `!` (logical not), postfix `!` (factorial).
/// - Juxtaposition means `*`.
/// - The builtin functions; free variables of any kind.
#[must_use]
pub fn builder() -> GrammarBuilder {
    let builder = Grammar::builder().parenthetical("(", ")")
                                    .parenthetical("/**", "*/")
                                    .parenthetical("[", "]")
                                    .argument_list("(", ",")
                                    .enclosure("[", Callable::variadic("list", aggregate::list))
                                    .multary(",", Callable::variadic("list", aggregate::list))
                                    .multary("||", Callable::variadic("or", logic::or))
                                    .multary("&&", Callable::variadic("and", logic::and))
                                    .multary("+", Callable::variadic("add", scalar::add))
                                    .binary("-", Callable::binary("subtract", scalar::subtract))
                                    .multary("*", Callable::variadic("multiply", scalar::multiply))
                                    .binary("/", Callable::binary("divide", scalar::divide))
                                    .binary("%", Callable::binary("remainder", scalar::remainder))
                                    .binary("^", Callable::binary("power", power::power))
                                    .right_associative("^")
                                    .order_of_operations([",", "||", "&&", "+", "-", "*", "/", "%", "^"])
                                    .pre_unary("+", Callable::unary("identity", unary::identity))
                                    .pre_unary("-", Callable::unary("negate", unary::negate))
                                    .pre_unary("!", Callable::unary("not", unary::not))
                                    .post_unary("!", Callable::unary("factorial", unary::factorial))
                                    .implicit_operator("*");
    with_builtin_functions(builder)
}

/// Builds the test grammar described by [`builder`].
///
/// # Example
/// ```
/// use gramex::{grammar::testing::test_grammar, interpreter::parser::core::tokenize_tree};
///
/// let tree = tokenize_tree("(a-b)+c", &test_grammar()).unwrap();
/// assert_eq!(tree.to_string(), "TOP[+[([-[a, b]], c]]");
/// ```
#[must_use]
pub fn test_grammar() -> Grammar {
    builder().assemble()
}
