/// Entry points and shared state of the token tree builder.
///
/// Contains the result type, [`build_tree`](core::build_tree),
/// [`tokenize_tree`](core::tokenize_tree) and the resolution of parenthetical
/// groups and function calls into single subtrees.
pub mod core;

/// Prefix and postfix operator chains.
///
/// Builds the operand segments that remain once every binary operator has been
/// split off.
pub mod unary;

/// Binary and multary operators.
///
/// Splits a token stream at its loosest-binding operator and folds or
/// flattens the resulting operands.
pub mod binary;

/// Helpers shared by the builder stages.
pub mod utils;
