use crate::interpreter::{evaluator::core::EvalResult, value::core::Value};

/// Relative tolerance used by approximate equality.
pub const REL_TOLERANCE: f64 = 1e-10;
/// Absolute tolerance used by approximate equality.
pub const ABS_TOLERANCE: f64 = 0.0;

/// Strict equality of any two values.
///
/// Values of different kinds are never equal.
pub fn equal(left: &Value, right: &Value) -> EvalResult<Value> {
    Ok(Value::Bool(left == right))
}

pub fn not_equal(left: &Value, right: &Value) -> EvalResult<Value> {
    Ok(Value::Bool(left != right))
}

/// Approximate equality of two numbers.
///
/// Uses the rule `|a − b| ≤ max(abs_tol, rel_tol · max(|a|, |b|))` with
/// [`REL_TOLERANCE`] and [`ABS_TOLERANCE`].
///
/// # Example
/// ```
/// use gramex::interpreter::{evaluator::binary::comparison::approx_equal, value::core::Value};
///
/// let close = approx_equal(&Value::Number(0.1 + 0.2), &Value::Number(0.3)).unwrap();
/// assert_eq!(close, Value::Bool(true));
/// ```
pub fn approx_equal(left: &Value, right: &Value) -> EvalResult<Value> {
    let (a, b) = (left.as_number()?, right.as_number()?);
    let tolerance = ABS_TOLERANCE.max(REL_TOLERANCE * a.abs().max(b.abs()));
    Ok(Value::Bool((a - b).abs() <= tolerance))
}

pub fn less(left: &Value, right: &Value) -> EvalResult<Value> {
    Ok(Value::Bool(left.as_number()? < right.as_number()?))
}

pub fn less_equal(left: &Value, right: &Value) -> EvalResult<Value> {
    Ok(Value::Bool(left.as_number()? <= right.as_number()?))
}

pub fn greater(left: &Value, right: &Value) -> EvalResult<Value> {
    Ok(Value::Bool(left.as_number()? > right.as_number()?))
}

pub fn greater_equal(left: &Value, right: &Value) -> EvalResult<Value> {
    Ok(Value::Bool(left.as_number()? >= right.as_number()?))
}
