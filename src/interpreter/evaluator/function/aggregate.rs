use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{core::EvalResult, utils::numbers},
        value::core::Value,
    },
};

/// Sums the numeric arguments, flattening lists.
pub fn sum(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Number(numbers(args)?.into_iter().sum()))
}

/// Computes the arithmetic mean of the numeric arguments, flattening lists.
///
/// # Errors
/// - `ExpectedNumber` if an argument is not numeric.
/// - `InvalidArgument` if there are no numbers at all.
///
/// # Example
/// ```
/// use gramex::interpreter::{evaluator::function::aggregate::mean, value::core::Value};
///
/// let args = [Value::List(vec![Value::Number(1.0), Value::Number(2.0)]), Value::Number(6.0)];
/// assert_eq!(mean(&args).unwrap(), Value::Number(3.0));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn mean(args: &[Value]) -> EvalResult<Value> {
    let values = numbers(args)?;
    if values.is_empty() {
        return Err(EvalError::InvalidArgument { details: "mean needs at least one number".to_string() });
    }
    Ok(Value::Number(values.iter().sum::<f64>() / values.len() as f64))
}

/// Collects the arguments into a list value.
///
/// Bound to `,` and `[...]` in the bundled grammars.
pub fn list(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::List(args.to_vec()))
}
