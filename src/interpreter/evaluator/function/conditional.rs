use crate::interpreter::{evaluator::core::EvalResult, value::core::Value};

/// Chooses between two values by a boolean condition.
///
/// Both branches have already been evaluated when this is called; an error in
/// either branch fails the whole expression.
///
/// # Errors
/// Returns `ExpectedBool` if `condition` is not a boolean.
///
/// # Example
/// ```
/// use gramex::interpreter::{evaluator::function::conditional::if_else, value::core::Value};
///
/// let v = if_else(&Value::Bool(false), &Value::Number(1.0), &Value::Number(2.0)).unwrap();
/// assert_eq!(v, Value::Number(2.0));
/// ```
pub fn if_else(condition: &Value, then: &Value, otherwise: &Value) -> EvalResult<Value> {
    if condition.as_bool()? {
        Ok(then.clone())
    } else {
        Ok(otherwise.clone())
    }
}
