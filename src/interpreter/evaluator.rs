/// Binary and multary operator implementations.
///
/// Arithmetic, powers, comparisons and logical connectives.
pub mod binary;

/// Unary operator implementations.
///
/// Implements negation, identity, logical NOT and factorial.
pub mod unary;

/// The tree walker.
///
/// Evaluates a semantic tree against a set of variable bindings.
pub mod core;

/// Numeric helpers shared by the operator and function implementations.
pub mod utils;

/// Builtin function implementations and the table that registers them.
pub mod function;
