use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{core::EvalResult, utils::numbers},
        value::core::Value,
    },
};

/// Adds any number of numeric arguments.
///
/// Lists are flattened, so `add([1, 2], 3)` is `6`. No arguments sum to `0`.
///
/// # Example
/// ```
/// use gramex::interpreter::{evaluator::binary::scalar::add, value::core::Value};
///
/// let sum = add(&[Value::Number(1.0), Value::Number(2.5)]).unwrap();
/// assert_eq!(sum, Value::Number(3.5));
/// ```
pub fn add(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Number(numbers(args)?.into_iter().sum()))
}

/// Multiplies any number of numeric arguments.
///
/// Lists are flattened. No arguments multiply to `1`.
pub fn multiply(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Number(numbers(args)?.into_iter().product()))
}

/// Subtracts `right` from `left`.
pub fn subtract(left: &Value, right: &Value) -> EvalResult<Value> {
    Ok(Value::Number(left.as_number()? - right.as_number()?))
}

/// Divides `left` by `right`.
///
/// # Errors
/// - `ExpectedNumber` if an operand is not numeric.
/// - `DivisionByZero` if `right` is zero.
///
/// # Example
/// ```
/// use gramex::{
///     error::EvalError,
///     interpreter::{evaluator::binary::scalar::divide, value::core::Value},
/// };
///
/// let q = divide(&Value::Number(7.0), &Value::Number(2.0)).unwrap();
/// assert_eq!(q, Value::Number(3.5));
///
/// let err = divide(&Value::Number(1.0), &Value::Number(0.0)).unwrap_err();
/// assert_eq!(err, EvalError::DivisionByZero);
/// ```
pub fn divide(left: &Value, right: &Value) -> EvalResult<Value> {
    let (left, right) = (left.as_number()?, right.as_number()?);
    if right == 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    Ok(Value::Number(left / right))
}

/// Computes the remainder of `left / right`, with the sign of `left`.
///
/// # Errors
/// - `ExpectedNumber` if an operand is not numeric.
/// - `DivisionByZero` if `right` is zero.
pub fn remainder(left: &Value, right: &Value) -> EvalResult<Value> {
    let (left, right) = (left.as_number()?, right.as_number()?);
    if right == 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    Ok(Value::Number(left % right))
}
