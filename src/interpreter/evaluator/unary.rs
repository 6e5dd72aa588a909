use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{core::EvalResult, utils::euler_gamma},
        value::core::Value,
    },
    util::num::{factorial as whole_factorial, whole_number},
};

/// Arithmetic negation.
///
/// # Example
/// ```
/// use gramex::interpreter::{evaluator::unary::negate, value::core::Value};
///
/// assert_eq!(negate(&Value::Number(5.0)).unwrap(), Value::Number(-5.0));
/// assert!(negate(&Value::Bool(true)).is_err());
/// ```
pub fn negate(value: &Value) -> EvalResult<Value> {
    Ok(Value::Number(-value.as_number()?))
}

/// Unary plus; accepts only numbers.
pub fn identity(value: &Value) -> EvalResult<Value> {
    Ok(Value::Number(value.as_number()?))
}

/// Logical negation.
pub fn not(value: &Value) -> EvalResult<Value> {
    Ok(Value::Bool(!value.as_bool()?))
}

/// Computes `x!`.
///
/// Whole numbers use the exact product. Other non-negative inputs use the
/// gamma function, `x! = Γ(x + 1)`.
///
/// # Parameters
/// - `value`: The operand.
///
/// # Returns
/// The factorial as a number.
///
/// # Errors
/// - `ExpectedNumber` if the operand is not numeric.
/// - `InvalidArgument` for negative operands or results too large to
///   represent.
///
/// # Example
/// ```
/// use gramex::interpreter::{evaluator::unary::factorial, value::core::Value};
///
/// assert_eq!(factorial(&Value::Number(5.0)).unwrap(), Value::Number(120.0));
/// assert!(factorial(&Value::Number(-1.0)).is_err());
/// ```
pub fn factorial(value: &Value) -> EvalResult<Value> {
    let x = value.as_number()?;
    if x < 0.0 {
        return Err(EvalError::InvalidArgument { details: format!("factorial is undefined for {x}") });
    }

    let result = match whole_number(x) {
        Some(n) => whole_factorial(n),
        None => Some(euler_gamma(x + 1.0)).filter(|r| r.is_finite()),
    };

    result.map(Value::Number)
          .ok_or_else(|| EvalError::InvalidArgument { details: format!("{x}! is too large") })
}
