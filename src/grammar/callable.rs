use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// A native implementation bound to an operator, function or enclosure.
///
/// Fixed-arity variants receive their arguments positionally; `Variadic`
/// receives the whole argument list as one slice. The variant is what the
/// semantic tree builder inspects to choose between a method node and a
/// vararg method node.
#[derive(Clone, Copy)]
pub enum Native {
    /// Takes no arguments.
    Nullary(fn() -> EvalResult<Value>),
    /// Takes exactly one argument.
    Unary(fn(&Value) -> EvalResult<Value>),
    /// Takes exactly two arguments.
    Binary(fn(&Value, &Value) -> EvalResult<Value>),
    /// Takes exactly three arguments.
    Ternary(fn(&Value, &Value, &Value) -> EvalResult<Value>),
    /// Takes any number of arguments as one list.
    Variadic(fn(&[Value]) -> EvalResult<Value>),
}

/// Specifies the number of arguments a callable accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly `n` positional arguments.
    Exact(usize),
    /// Any number of arguments, passed as one list.
    Variadic,
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    #[must_use]
    pub const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::Variadic => true,
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::Variadic => write!(f, "any number of"),
        }
    }
}

/// A named reference to a native implementation.
///
/// Callables are resolved when a grammar is constructed, so binding a token
/// tree never needs any dynamic lookup beyond the grammar's tables.
///
/// # Example
/// ```
/// use gramex::{grammar::callable::{Arity, Callable}, interpreter::value::core::Value};
///
/// let double = Callable::unary("double", |v| Ok(Value::Number(v.as_number()? * 2.0)));
/// assert_eq!(double.arity(), Arity::Exact(1));
/// assert_eq!(double.call(&[Value::Number(4.0)]).unwrap(), Value::Number(8.0));
/// ```
#[derive(Clone, Copy)]
pub struct Callable {
    name:   &'static str,
    native: Native,
}

impl Callable {
    /// Creates a callable from a name and a native implementation.
    #[must_use]
    pub const fn new(name: &'static str, native: Native) -> Self {
        Self { name, native }
    }

    /// Creates a callable that takes no arguments.
    #[must_use]
    pub const fn nullary(name: &'static str, f: fn() -> EvalResult<Value>) -> Self {
        Self::new(name, Native::Nullary(f))
    }

    /// Creates a callable that takes one argument.
    #[must_use]
    pub const fn unary(name: &'static str, f: fn(&Value) -> EvalResult<Value>) -> Self {
        Self::new(name, Native::Unary(f))
    }

    /// Creates a callable that takes two arguments.
    #[must_use]
    pub const fn binary(name: &'static str, f: fn(&Value, &Value) -> EvalResult<Value>) -> Self {
        Self::new(name, Native::Binary(f))
    }

    /// Creates a callable that takes three arguments.
    #[must_use]
    pub const fn ternary(name: &'static str,
                         f: fn(&Value, &Value, &Value) -> EvalResult<Value>)
                         -> Self {
        Self::new(name, Native::Ternary(f))
    }

    /// Creates a callable that takes its arguments as one list.
    #[must_use]
    pub const fn variadic(name: &'static str, f: fn(&[Value]) -> EvalResult<Value>) -> Self {
        Self::new(name, Native::Variadic(f))
    }

    /// The implementation's name, used in error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The native implementation.
    #[must_use]
    pub const fn native(&self) -> Native {
        self.native
    }

    /// Returns the number of arguments this callable accepts.
    #[must_use]
    pub const fn arity(&self) -> Arity {
        match self.native {
            Native::Nullary(_) => Arity::Exact(0),
            Native::Unary(_) => Arity::Exact(1),
            Native::Binary(_) => Arity::Exact(2),
            Native::Ternary(_) => Arity::Exact(3),
            Native::Variadic(_) => Arity::Variadic,
        }
    }

    /// Returns `true` if the callable takes its arguments as one list.
    #[must_use]
    pub const fn is_variadic(&self) -> bool {
        matches!(self.native, Native::Variadic(_))
    }

    /// Invokes the callable.
    ///
    /// Fixed-arity implementations are called with positional arguments,
    /// variadic ones with the whole slice.
    ///
    /// # Errors
    /// Returns `ArgumentCountMismatch` if `args` does not fit the arity, or
    /// whatever error the implementation raises.
    pub fn call(&self, args: &[Value]) -> EvalResult<Value> {
        match (self.native, args) {
            (Native::Nullary(f), []) => f(),
            (Native::Unary(f), [a]) => f(a),
            (Native::Binary(f), [a, b]) => f(a, b),
            (Native::Ternary(f), [a, b, c]) => f(a, b, c),
            (Native::Variadic(f), args) => f(args),
            _ => Err(EvalError::ArgumentCountMismatch { function: self.name.to_string(),
                                                        expected: self.arity().to_string(),
                                                        found:    args.len(), }),
        }
    }
}

impl std::fmt::Debug for Callable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callable")
         .field("name", &self.name)
         .field("arity", &self.arity())
         .finish()
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.arity() == other.arity()
    }
}
