use crate::{
    grammar::{GrammarBuilder, callable::Callable},
    interpreter::evaluator::function::{aggregate, builtin, conditional, log, min_max},
};

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the callable constructor matching the arity (`unary`, `binary`,
///   `ternary` or `variadic`),
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $arity:ident($func:expr)
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Callable] = &[
            $(
                Callable::$arity($name, $func),
            )*
        ];
        /// Names of every builtin function, in registration order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"     => unary(builtin::sin),
    "cos"     => unary(builtin::cos),
    "tan"     => unary(builtin::tan),
    "asin"    => unary(builtin::asin),
    "acos"    => unary(builtin::acos),
    "atan"    => unary(builtin::atan),
    "sinh"    => unary(builtin::sinh),
    "cosh"    => unary(builtin::cosh),
    "tanh"    => unary(builtin::tanh),
    "exp"     => unary(builtin::exp),
    "ln"      => unary(log::ln),
    "log"     => binary(log::log),
    "sqrt"    => unary(builtin::sqrt),
    "abs"     => unary(builtin::abs),
    "floor"   => unary(builtin::floor),
    "ceil"    => unary(builtin::ceil),
    "round"   => unary(builtin::round),
    "sign"    => unary(builtin::sign),
    "radians" => unary(builtin::radians),
    "degrees" => unary(builtin::degrees),
    "atan2"   => binary(builtin::atan2),
    "min"     => variadic(min_max::min),
    "max"     => variadic(min_max::max),
    "sum"     => variadic(aggregate::sum),
    "mean"    => variadic(aggregate::mean),
    "if"      => ternary(conditional::if_else),
}

/// Looks up a builtin function by name.
///
/// # Example
/// ```
/// use gramex::{grammar::callable::Arity, interpreter::evaluator::function::core::builtin};
///
/// assert_eq!(builtin("atan2").unwrap().arity(), Arity::Exact(2));
/// assert!(builtin("print").is_none());
/// ```
#[must_use]
pub fn builtin(name: &str) -> Option<Callable> {
    BUILTIN_TABLE.iter().find(|callable| callable.name() == name).copied()
}

/// Registers every builtin function with a grammar builder.
#[must_use]
pub fn with_builtin_functions(builder: GrammarBuilder) -> GrammarBuilder {
    BUILTIN_TABLE.iter()
                 .fold(builder, |builder, callable| builder.function(callable.name(), *callable))
}
