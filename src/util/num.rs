/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Largest `n` for which `n!` is finite as an `f64`.
pub const MAX_FACTORIAL: u64 = 170;

/// Parses a numeric literal as produced by the tokenizer.
///
/// Accepts plain integers, decimals with or without a leading digit and
/// scientific notation. Returns `None` for anything else, including values
/// that overflow to infinity.
///
/// ## Example
/// ```
/// use gramex::util::num::parse_number;
///
/// assert_eq!(parse_number("42"), Some(42.0));
/// assert_eq!(parse_number("1.033e-5"), Some(1.033e-5));
/// assert_eq!(parse_number(".5"), Some(0.5));
/// assert_eq!(parse_number("abc"), None);
/// assert_eq!(parse_number("1e999"), None);
/// ```
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Converts an `f64` to `u64` if and only if it is a non-negative whole
/// number that is exactly representable.
///
/// ## Example
/// ```
/// use gramex::util::num::whole_number;
///
/// assert_eq!(whole_number(5.0), Some(5));
/// assert_eq!(whole_number(5.5), None);
/// assert_eq!(whole_number(-1.0), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn whole_number(value: f64) -> Option<u64> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= MAX_SAFE_INTEGER {
        Some(value as u64)
    } else {
        None
    }
}

/// Computes `n!` as an `f64`.
///
/// Returns `None` when the result would not be finite.
///
/// ## Example
/// ```
/// use gramex::util::num::factorial;
///
/// assert_eq!(factorial(0), Some(1.0));
/// assert_eq!(factorial(5), Some(120.0));
/// assert_eq!(factorial(171), None);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn factorial(n: u64) -> Option<f64> {
    if n > MAX_FACTORIAL {
        return None;
    }

    Some((2..=n).fold(1.0, |acc, k| acc * k as f64))
}
