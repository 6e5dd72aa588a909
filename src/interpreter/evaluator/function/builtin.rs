use crate::interpreter::{
    evaluator::{core::EvalResult, utils::real_result},
    value::core::Value,
};

/// Defines a one-argument function from an `f64` method.
///
/// The generated function rejects non-numeric arguments and results that are
/// not finite, such as `sqrt(-1)` or `asin(2)`.
macro_rules! real_builtin {
    ($($fname:ident => $real_fn:ident),* $(,)?) => {
        $(
            #[doc = concat!("Computes `", stringify!($fname), "(x)`.")]
            pub fn $fname(value: &Value) -> EvalResult<Value> {
                let x = value.as_number()?;
                real_result(stringify!($fname), x, x.$real_fn())
            }
        )*
    };
}

real_builtin! {
    sin => sin,
    cos => cos,
    tan => tan,
    asin => asin,
    acos => acos,
    atan => atan,
    sinh => sinh,
    cosh => cosh,
    tanh => tanh,
    exp => exp,
    sqrt => sqrt,
    abs => abs,
    floor => floor,
    ceil => ceil,
    round => round,
    radians => to_radians,
    degrees => to_degrees,
}

/// Returns `-1`, `0` or `1` according to the sign of a number.
///
/// # Example
/// ```
/// use gramex::interpreter::{evaluator::function::builtin::sign, value::core::Value};
///
/// assert_eq!(sign(&Value::Number(-3.5)).unwrap(), Value::Number(-1.0));
/// assert_eq!(sign(&Value::Number(0.0)).unwrap(), Value::Number(0.0));
/// ```
pub fn sign(value: &Value) -> EvalResult<Value> {
    let x = value.as_number()?;
    let s = if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    };
    Ok(Value::Number(s))
}

/// Four-quadrant arctangent of `y / x`.
pub fn atan2(y: &Value, x: &Value) -> EvalResult<Value> {
    Ok(Value::Number(y.as_number()?.atan2(x.as_number()?)))
}
