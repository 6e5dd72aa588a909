use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{core::EvalResult, utils::real_result},
        value::core::Value,
    },
};

/// Computes the natural logarithm.
///
/// # Errors
/// Returns `InvalidArgument` for arguments that are not positive.
pub fn ln(value: &Value) -> EvalResult<Value> {
    let x = value.as_number()?;
    real_result("ln", x, x.ln())
}

/// Computes the logarithm of `value` to the given `base`.
///
/// # Parameters
/// - `value`: The number whose logarithm is taken.
/// - `base`: The base of the logarithm.
///
/// # Returns
/// `ln(value) / ln(base)`.
///
/// # Errors
/// - `ExpectedNumber` if an argument is not numeric.
/// - `DivisionByZero` if `base` is `1`.
/// - `InvalidArgument` if `value` or `base` is not positive.
///
/// # Example
/// ```
/// use gramex::interpreter::{evaluator::function::log::log, value::core::Value};
///
/// let v = log(&Value::Number(8.0), &Value::Number(2.0)).unwrap();
/// assert_eq!(v, Value::Number(3.0));
/// ```
pub fn log(value: &Value, base: &Value) -> EvalResult<Value> {
    let (x, b) = (value.as_number()?, base.as_number()?);
    if b <= 0.0 {
        return Err(EvalError::InvalidArgument { details: format!("logarithm base {b} is not positive") });
    }

    let ln_base = b.ln();
    if ln_base == 0.0 {
        return Err(EvalError::DivisionByZero);
    }

    real_result("log", x, x.ln() / ln_base)
}
