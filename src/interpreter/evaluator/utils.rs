use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Collects the numeric arguments of an aggregate, flattening lists.
///
/// `f(a, b, c)` and `f([a, b, c])` produce the same numbers.
///
/// # Parameters
/// - `args`: Evaluated arguments.
///
/// # Returns
/// Every number in `args`, in order.
///
/// # Errors
/// Returns `ExpectedNumber` if any element is not a number.
///
/// # Example
/// ```
/// use gramex::interpreter::{evaluator::utils::numbers, value::core::Value};
///
/// let args = [Value::Number(1.0),
///             Value::List(vec![Value::Number(2.0), Value::Number(3.0)])];
/// assert_eq!(numbers(&args).unwrap(), [1.0, 2.0, 3.0]);
/// ```
pub fn numbers(args: &[Value]) -> EvalResult<Vec<f64>> {
    args.iter()
        .flat_map(Value::elements)
        .map(Value::as_number)
        .collect()
}

/// Rejects results that are not real numbers.
///
/// Native float functions report domain errors as `NaN` or infinity; this
/// turns them into an `InvalidArgument` naming the function and its input.
///
/// # Parameters
/// - `name`: Function name for the error message.
/// - `input`: The argument the function was applied to.
/// - `result`: The raw result.
///
/// # Returns
/// `result` wrapped as a number.
pub fn real_result(name: &str, input: f64, result: f64) -> EvalResult<Value> {
    if result.is_finite() {
        Ok(Value::Number(result))
    } else {
        Err(EvalError::InvalidArgument { details: format!("{name} is undefined for {input}") })
    }
}

/// Approximates the gamma function using the Lanczos approximation.
///
/// For `z < 0.5` it uses the reflection formula:
/// `Γ(z) = π / (sin(πz) · Γ(1 − z))`.
///
/// For `z ≥ 0.5` it uses a fixed set of Lanczos coefficients with `g = 7`.
///
/// # Parameters
/// - `z`: Input value.
///
/// # Returns
/// The approximated gamma value.
///
/// # Example
/// ```
/// use gramex::interpreter::evaluator::utils::euler_gamma;
///
/// // Γ(5) = 4! = 24
/// let g = euler_gamma(5.0);
/// assert!((g - 24.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn euler_gamma(z: f64) -> f64 {
    // Lanczos coefficients, g = 7, n = 9.
    const COEFFS: [f64; 9] = [0.999_999_999_999_809_9,
                              676.520_368_121_885_1,
                              -1_259.139_216_722_402_8,
                              771.323_428_777_653_1,
                              -176.615_029_162_140_6,
                              12.507_343_278_686_905,
                              -0.138_571_095_265_720_12,
                              9.984_369_578_019_572e-6,
                              1.505_632_735_149_311_6e-7];
    const G: f64 = 7.0;

    if z < 0.5 {
        return std::f64::consts::PI / ((std::f64::consts::PI * z).sin() * euler_gamma(1.0 - z));
    }

    let z_minus_1 = z - 1.0;
    let x = COEFFS.iter()
                  .skip(1)
                  .zip(1_u32..)
                  .fold(COEFFS[0], |x, (c, i)| x + c / (z_minus_1 + f64::from(i)));
    let t = z_minus_1 + G + 0.5;

    std::f64::consts::TAU.sqrt() * t.powf(z_minus_1 + 0.5) * (-t).exp() * x
}
