/// Numeric helpers.
///
/// This module provides the conversions shared by the semantic tree builder
/// and the bundled operator implementations: parsing numeric literals and
/// checking that a real number is a whole number before it is used as one.
pub mod num;
