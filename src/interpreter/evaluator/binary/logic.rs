use crate::interpreter::{evaluator::core::EvalResult, value::core::Value};

/// Conjunction of any number of booleans; `true` for none.
///
/// Every operand must be a boolean, even after the result is known.
///
/// # Example
/// ```
/// use gramex::interpreter::{evaluator::binary::logic::and, value::core::Value};
///
/// let v = and(&[Value::Bool(true), Value::Bool(false)]).unwrap();
/// assert_eq!(v, Value::Bool(false));
/// assert!(and(&[Value::Bool(false), Value::Number(1.0)]).is_err());
/// ```
pub fn and(args: &[Value]) -> EvalResult<Value> {
    let values = args.iter().map(Value::as_bool).collect::<EvalResult<Vec<_>>>()?;
    Ok(Value::Bool(values.into_iter().all(|b| b)))
}

/// Disjunction of any number of booleans; `false` for none.
pub fn or(args: &[Value]) -> EvalResult<Value> {
    let values = args.iter().map(Value::as_bool).collect::<EvalResult<Vec<_>>>()?;
    Ok(Value::Bool(values.into_iter().any(|b| b)))
}

pub fn xor(left: &Value, right: &Value) -> EvalResult<Value> {
    Ok(Value::Bool(left.as_bool()? ^ right.as_bool()?))
}

/// Material implication, `!left || right`.
pub fn implies(left: &Value, right: &Value) -> EvalResult<Value> {
    Ok(Value::Bool(!left.as_bool()? || right.as_bool()?))
}

/// Equivalence: both operands have the same truth value.
pub fn iff(left: &Value, right: &Value) -> EvalResult<Value> {
    Ok(Value::Bool(left.as_bool()? == right.as_bool()?))
}
