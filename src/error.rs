/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing an input string,
/// building its token tree, or binding that tree to grammar callables. Parse
/// errors are surfaced immediately; no partial tree is ever returned.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating a semantic
/// tree, such as unbound variables, type mismatches or division by zero.
pub mod eval_error;
/// Grammar construction errors.
///
/// Raised by [`GrammarBuilder::build`](crate::grammar::GrammarBuilder::build)
/// when the configured tables are inconsistent.
pub mod grammar_error;

pub use eval_error::EvalError;
pub use grammar_error::GrammarError;
pub use parse_error::ParseError;

/// Any failure of the full parse-then-evaluate pipeline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The input could not be tokenized, structured or bound.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The semantic tree could not be evaluated.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
