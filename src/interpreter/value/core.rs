use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value produced by evaluating a semantic tree.
///
/// The bundled grammars cover real arithmetic, boolean algebra and simple
/// lists; a grammar's callables decide which kinds they accept.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// An ordered list of values, built by `,` or `[...]` in the bundled
    /// grammars.
    List(Vec<Self>),
}

/// The kind of a [`Value`], used as the expected type of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`Value::Number`].
    Number,
    /// [`Value::Bool`].
    Bool,
    /// [`Value::List`].
    List,
    /// Any kind of value.
    Any,
}

impl ValueKind {
    /// Tests whether a value fits this kind.
    ///
    /// # Example
    /// ```
    /// use gramex::interpreter::value::core::{Value, ValueKind};
    ///
    /// assert!(ValueKind::Number.admits(&Value::Number(1.0)));
    /// assert!(!ValueKind::Bool.admits(&Value::Number(1.0)));
    /// assert!(ValueKind::Any.admits(&Value::Bool(true)));
    /// ```
    #[must_use]
    pub fn admits(self, value: &Value) -> bool {
        self == Self::Any || self == value.kind()
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number => write!(f, "a number"),
            Self::Bool => write!(f, "a boolean"),
            Self::List => write!(f, "a list"),
            Self::Any => write!(f, "any value"),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(v)
    }
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Number(_) => ValueKind::Number,
            Self::Bool(_) => ValueKind::Bool,
            Self::List(_) => ValueKind::List,
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is a number.
    /// - `Err(EvalError::ExpectedNumber)`: Otherwise.
    ///
    /// # Example
    /// ```
    /// use gramex::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(2.5).as_number().unwrap(), 2.5);
    /// assert!(Value::Bool(true).as_number().is_err());
    /// ```
    pub const fn as_number(&self) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(EvalError::ExpectedNumber { found: self.kind() }),
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// # Returns
    /// - `Ok(bool)`: If the value is a boolean.
    /// - `Err(EvalError::ExpectedBool)`: Otherwise.
    pub const fn as_bool(&self) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(EvalError::ExpectedBool { found: self.kind() }),
        }
    }

    /// Borrows the elements of a list value.
    ///
    /// A non-list value is treated as a one-element list, so callables that
    /// aggregate (`sum`, `mean`, `min`) accept either `f(a, b, c)` or
    /// `f([a, b, c])`.
    #[must_use]
    pub fn elements(&self) -> &[Self] {
        match self {
            Self::List(items) => items,
            other => std::slice::from_ref(other),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::List(items) => {
                write!(f, "[")?;

                for (index, value) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
        }
    }
}
