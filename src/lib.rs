//! # gramex
//!
//! gramex is a grammar-configurable expression parser written in Rust.
//! A [`Grammar`](grammar::Grammar) describes an operator language; input
//! strings are tokenized, built into a precedence-respecting token tree, bound
//! to the grammar's implementations and evaluated.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::SemanticNode,
    error::Error,
    grammar::Grammar,
    interpreter::{
        evaluator::core::{Bindings, evaluate},
        parser::core::{ParseResult, tokenize_tree},
        semantic::build_semantic_tree,
        value::core::Value,
    },
};

/// Defines the trees produced by parsing.
///
/// This module declares `TokenNode`, the structural tree built from tokens,
/// and `SemanticNode`, the tree bound to a grammar's implementations. Both
/// render in the canonical `NAME[child, child]` form.
///
/// # Responsibilities
/// - Defines the node types of both trees.
/// - Provides their display form and simple traversals.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while building a grammar,
/// tokenizing, building trees or evaluating. Parse errors carry byte offsets
/// where a position is known.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (grammar, parse, evaluation).
/// - Wraps parse and evaluation errors in one crate-level `Error`.
pub mod error;
/// Describes parseable languages.
///
/// This module defines `Grammar` and its builder, the `Callable` type that
/// binds operators and functions to native code, and the bundled example
/// grammars.
///
/// # Responsibilities
/// - Holds operator, precedence, delimiter, constant and function tables.
/// - Validates configurations when they are built.
/// - Provides ready-made real, boolean and test grammars.
pub mod grammar;
/// Orchestrates the parsing pipeline.
///
/// This module ties together the lexer, the token tree builder, the semantic
/// binder and the evaluator.
///
/// # Responsibilities
/// - Coordinates all phases: tokenizing, tree building, binding, evaluation.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General numeric helpers.
///
/// This module provides literal parsing and whole-number checks shared by the
/// binder and the bundled implementations.
pub mod util;

/// Parses an input string into a semantic tree.
///
/// This runs the tokenizer, the token tree builder and the semantic binder.
///
/// # Errors
/// Returns the first error any phase raises.
///
/// # Examples
/// ```
/// use gramex::{grammar::testing::test_grammar, parse};
///
/// let tree = parse("a+b*c", &test_grammar()).unwrap();
/// assert_eq!(tree.to_string(), "+[a, *[b, c]]");
///
/// assert!(parse("(a", &test_grammar()).is_err());
/// ```
pub fn parse(input: &str, grammar: &Grammar) -> ParseResult<SemanticNode> {
    let tree = tokenize_tree(input, grammar)?;
    build_semantic_tree(&tree, grammar)
}

/// Parses and evaluates an input string.
///
/// # Errors
/// Returns [`Error::Parse`] if the input cannot be parsed and
/// [`Error::Eval`] if evaluation fails.
///
/// # Examples
/// ```
/// use gramex::{
///     evaluate_source,
///     grammar::real::real_grammar,
///     interpreter::{evaluator::core::Bindings, value::core::Value},
/// };
///
/// let mut bindings = Bindings::new();
/// bindings.insert("r".to_string(), Value::Number(2.0));
///
/// let area = evaluate_source("pi r^2", &real_grammar(), &bindings).unwrap();
/// assert_eq!(area, Value::Number(std::f64::consts::PI * 4.0));
///
/// // 'q' is not bound
/// assert!(evaluate_source("q + 1", &real_grammar(), &bindings).is_err());
/// ```
pub fn evaluate_source(input: &str, grammar: &Grammar, bindings: &Bindings) -> Result<Value, Error> {
    let tree = parse(input, grammar)?;
    Ok(evaluate(&tree, bindings)?)
}
