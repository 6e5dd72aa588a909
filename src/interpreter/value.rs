/// Runtime values and their kinds.
///
/// Defines the `Value` enum produced by evaluation, conversions used by the
/// bundled callables, and `ValueKind` for declaring variable types.
pub mod core;
