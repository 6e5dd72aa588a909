use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Raises `base` to `exponent`.
///
/// Whole exponents use repeated multiplication, so negative bases stay real;
/// other exponents use `powf`.
///
/// # Parameters
/// - `base`: The base.
/// - `exponent`: The exponent.
///
/// # Returns
/// The power as a number.
///
/// # Errors
/// - `ExpectedNumber` if an operand is not numeric.
/// - `DivisionByZero` for zero raised to a negative power.
/// - `InvalidArgument` if the result is not a finite real number, such as a
///   negative base with a fractional exponent, or on overflow.
///
/// # Example
/// ```
/// use gramex::interpreter::{evaluator::binary::power::power, value::core::Value};
///
/// let p = power(&Value::Number(-2.0), &Value::Number(3.0)).unwrap();
/// assert_eq!(p, Value::Number(-8.0));
/// assert!(power(&Value::Number(-8.0), &Value::Number(0.5)).is_err());
/// ```
pub fn power(base: &Value, exponent: &Value) -> EvalResult<Value> {
    let (b, e) = (base.as_number()?, exponent.as_number()?);
    if b == 0.0 && e < 0.0 {
        return Err(EvalError::DivisionByZero);
    }

    let result = if e.fract() == 0.0 && e.abs() <= f64::from(i32::MAX) {
        #[allow(clippy::cast_possible_truncation)]
        b.powi(e as i32)
    } else {
        b.powf(e)
    };

    if !result.is_finite() {
        return Err(EvalError::InvalidArgument { details: format!("{b}^{e} is not a finite real number") });
    }
    Ok(Value::Number(result))
}
