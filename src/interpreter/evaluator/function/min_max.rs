use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{core::EvalResult, utils::numbers},
        value::core::Value,
    },
};

/// Returns the smallest numeric argument, flattening lists.
///
/// # Errors
/// - `ExpectedNumber` if an argument is not numeric.
/// - `InvalidArgument` if there are no numbers at all.
///
/// # Example
/// ```
/// use gramex::interpreter::{evaluator::function::min_max::min, value::core::Value};
///
/// let args = [Value::Number(3.0), Value::Number(-1.0), Value::Number(2.0)];
/// assert_eq!(min(&args).unwrap(), Value::Number(-1.0));
/// ```
pub fn min(args: &[Value]) -> EvalResult<Value> {
    min_max("min", args, f64::min)
}

/// Returns the largest numeric argument, flattening lists.
///
/// # Errors
/// - `ExpectedNumber` if an argument is not numeric.
/// - `InvalidArgument` if there are no numbers at all.
pub fn max(args: &[Value]) -> EvalResult<Value> {
    min_max("max", args, f64::max)
}

fn min_max(name: &str, args: &[Value], pick: fn(f64, f64) -> f64) -> EvalResult<Value> {
    numbers(args)?.into_iter()
                  .reduce(pick)
                  .map(Value::Number)
                  .ok_or_else(|| EvalError::InvalidArgument { details: format!("{name} needs at least one number") })
}
