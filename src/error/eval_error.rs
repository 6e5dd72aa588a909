use thiserror::Error;

use crate::interpreter::value::core::ValueKind;

/// Represents all errors that can occur while evaluating a semantic tree.
///
/// Evaluation errors never corrupt the tree; it can be evaluated again with a
/// different set of bindings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A free variable had no entry in the bindings.
    #[error("Unbound variable '{name}'.")]
    UnboundVariable {
        /// The name of the variable.
        name: String,
    },
    /// A bound variable does not have the kind the grammar expects.
    #[error("Variable '{name}' should be {expected} but is bound to {found}.")]
    TypeMismatch {
        /// The name of the variable.
        name:     String,
        /// The declared kind.
        expected: ValueKind,
        /// The kind of the bound value.
        found:    ValueKind,
    },
    /// A numeric value was expected, but not found.
    #[error("Expected number, found {found}.")]
    ExpectedNumber {
        /// The kind that was found instead.
        found: ValueKind,
    },
    /// A boolean value was expected, but not found.
    #[error("Expected boolean, found {found}.")]
    ExpectedBool {
        /// The kind that was found instead.
        found: ValueKind,
    },
    /// Attempted division by zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// An argument was invalid or out of range.
    #[error("Invalid argument: {details}.")]
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
    },
    /// A callable was invoked with the wrong number of arguments.
    #[error("'{function}' expects {expected} argument(s) but received {found}.")]
    ArgumentCountMismatch {
        /// The callable's name.
        function: String,
        /// The declared arity.
        expected: String,
        /// The number of arguments received.
        found:    usize,
    },
}
