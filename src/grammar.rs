/// The grammar description and its builder.
///
/// Holds every table the tokenizer, tree builder and semantic binder consult:
/// parentheticals, operators by role, the order of operations, constants,
/// functions and variables.
pub mod core;

/// Callables: named native implementations with an arity.
pub mod callable;

/// Real arithmetic with comparisons, constants and the builtin functions.
pub mod real;

/// Case-insensitive boolean algebra.
pub mod boolean;

/// The small grammar used throughout the documentation and tests.
pub mod testing;

pub use core::{Grammar, GrammarBuilder};
