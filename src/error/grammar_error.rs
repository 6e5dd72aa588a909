use thiserror::Error;

/// Represents an inconsistent grammar configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// A delimiter, operator or name was registered as an empty string.
    #[error("Grammar entries must not be empty ({what}).")]
    EmptySymbol {
        /// Which table held the empty entry.
        what: &'static str,
    },
    /// The argument-list opener is not a registered parenthetical opener.
    #[error("Argument list opener '{0}' is not a registered parenthetical.")]
    UnknownArgumentOpener(String),
    /// The argument-list separator is not a registered n-ary operator.
    #[error("Argument list separator '{0}' is not a registered n-ary operator.")]
    UnknownArgumentSeparator(String),
    /// The implicit operator is not a registered n-ary operator.
    #[error("Implicit operator '{0}' is not a registered n-ary operator.")]
    UnknownImplicitOperator(String),
    /// An enclosure callable was bound to something that is not an opener.
    #[error("Enclosure '{0}' is not a registered parenthetical opener.")]
    UnknownEnclosure(String),
    /// The precedence order names a symbol twice.
    #[error("Operator '{0}' appears more than once in the order of operations.")]
    DuplicatePrecedence(String),
    /// A symbol is declared right-associative but also multary.
    #[error("Operator '{0}' cannot be both multary and right-associative.")]
    AssociativityConflict(String),
    /// The depth limit must allow at least one level.
    #[error("Maximum depth must be at least 1.")]
    ZeroDepth,
}
