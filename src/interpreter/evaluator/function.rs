/// Built-in function implementations.
///
/// Contains the one-argument real functions (trigonometric, hyperbolic,
/// exponential, rounding) and `atan2`.
pub mod builtin;
/// Logarithm function implementations.
///
/// Supports the natural logarithm and logarithms to an arbitrary base.
pub mod log;
/// `min` and `max` function implementations.
///
/// Returns the minimum or maximum value from a list of arguments.
pub mod min_max;
/// `sum`, `mean` and `list` function implementations.
pub mod aggregate;
/// The `if` function implementation.
pub mod conditional;

pub mod core;
