/// Arithmetic on numbers.
///
/// Sums, products, differences, quotients and remainders. `+` and `*` take
/// argument lists so they can be bound to multary operators.
pub mod scalar;

/// Exponentiation.
pub mod power;

/// Equality and ordering.
///
/// Strict equality works on any pair of values, approximate equality and
/// ordering on numbers only.
pub mod comparison;

/// Boolean connectives.
///
/// Conjunction and disjunction take argument lists; exclusive or,
/// implication and equivalence take exactly two operands.
pub mod logic;
