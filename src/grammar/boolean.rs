use crate::{
    grammar::{Grammar, GrammarBuilder, callable::Callable},
    interpreter::{
        evaluator::{
            binary::{comparison, logic},
            function::{aggregate, conditional},
            unary,
        },
        value::core::ValueKind,
    },
};

/// Configures boolean algebra.
///
/// - Case-insensitive: `A AND b` and `a and B` are the same expression, and
///   variable names are folded to lowercase.
/// - Connectives, loosest first: `<->`, `->`, `or`/`||`, `xor`, `and`/`&&`,
///   with `==` and `!=` comparing truth values.
/// - Prefix `not`, `!` and `~`.
/// - Constants `true` and `false`; juxtaposition means `and`.
/// - The function `if(condition, then, else)`.
/// - Free variables are expected to be booleans.
#[must_use]
pub fn builder() -> GrammarBuilder {
    Grammar::builder().case_sensitive(false)
                      .parenthetical("(", ")")
                      .argument_list("(", ",")
                      .multary(",", Callable::variadic("list", aggregate::list))
                      .binary("<->", Callable::binary("iff", logic::iff))
                      .binary("->", Callable::binary("implies", logic::implies))
                      .multary("or", Callable::variadic("or", logic::or))
                      .multary("||", Callable::variadic("or", logic::or))
                      .binary("xor", Callable::binary("xor", logic::xor))
                      .multary("and", Callable::variadic("and", logic::and))
                      .multary("&&", Callable::variadic("and", logic::and))
                      .binary("==", Callable::binary("equal", comparison::equal))
                      .binary("!=", Callable::binary("not_equal", comparison::not_equal))
                      .order_of_operations([",", "<->", "->", "or", "||", "xor", "and", "&&", "==",
                                            "!="])
                      .right_associative("->")
                      .pre_unary("not", Callable::unary("not", unary::not))
                      .pre_unary("!", Callable::unary("not", unary::not))
                      .pre_unary("~", Callable::unary("not", unary::not))
                      .implicit_operator("and")
                      .constant("true", true)
                      .constant("false", false)
                      .function("if", Callable::ternary("if", conditional::if_else))
                      .default_variable_kind(ValueKind::Bool)
}

/// Builds the boolean grammar described by [`builder`].
///
/// # Example
/// ```
/// use gramex::{grammar::boolean::boolean_grammar, interpreter::parser::core::tokenize_tree};
///
/// let tree = tokenize_tree("A B OR NOT c", &boolean_grammar()).unwrap();
/// assert_eq!(tree.to_string(), "TOP[or[and[a, b], not[c]]]");
/// ```
#[must_use]
pub fn boolean_grammar() -> Grammar {
    builder().assemble()
}
