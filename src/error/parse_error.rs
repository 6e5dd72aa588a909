use thiserror::Error;

/// Represents all errors that can occur during tokenizing, tree building or
/// semantic binding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// There were no tokens to parse, either in the whole input or inside a
    /// parenthetical group.
    #[error("Empty expression.")]
    EmptyExpression,
    /// An opening delimiter was never closed.
    #[error("Error at position {position}: '{open}' is never closed by '{close}'.")]
    UnterminatedParenthetical {
        /// The opening delimiter.
        open:     String,
        /// The closing delimiter that was expected.
        close:    String,
        /// Byte offset of the opening delimiter.
        position: usize,
    },
    /// A closing delimiter appeared without a matching opener.
    #[error("Error at position {position}: Unmatched closing delimiter '{close}'.")]
    UnmatchedClose {
        /// The closing delimiter found.
        close:    String,
        /// Byte offset of the closing delimiter.
        position: usize,
    },
    /// The scanner could not classify the input at some position.
    #[error("Error at position {position}: Unrecognized token '{token}'.")]
    UnrecognizedToken {
        /// The offending text.
        token:    String,
        /// Byte offset of the offending text.
        position: usize,
    },
    /// The operator tables disagree about an operator.
    #[error("Precedence conflict for operator '{operator}': {details}.")]
    PrecedenceConflict {
        /// The operator symbol.
        operator: String,
        /// What is inconsistent.
        details:  String,
    },
    /// An identifier could not be resolved at binding time.
    #[error("Unknown identifier '{name}'.")]
    UnknownIdentifier {
        /// The identifier.
        name: String,
    },
    /// An operator node has no callable for its role.
    #[error("Operator '{symbol}' has no implementation for this position.")]
    UnknownOperator {
        /// The operator symbol.
        symbol: String,
    },
    /// A bound callable's arity disagrees with the number of children.
    #[error("'{name}' expects {expected} argument(s) but was given {found}.")]
    ArityMismatch {
        /// The operator or function label.
        name:     String,
        /// The declared arity.
        expected: String,
        /// The number of children supplied.
        found:    usize,
    },
    /// An operator is missing one of its operands.
    #[error("Operator '{operator}' is missing an operand.")]
    MissingOperand {
        /// The operator symbol.
        operator: String,
    },
    /// A token tree node appeared somewhere it cannot be bound.
    #[error("Token tree node '{node}' cannot appear here.")]
    MalformedTree {
        /// The node name.
        node: String,
    },
    /// The expression nests deeper than the grammar allows.
    #[error("Expression nesting exceeds the limit of {limit}.")]
    NestingTooDeep {
        /// The configured depth limit.
        limit: usize,
    },
}
