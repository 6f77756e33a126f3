/// Remainder of `lhs / rhs` with the sign of `lhs`.
///
/// This is the truncated remainder of C's `fmod`, not a Euclidean modulus.
/// A zero divisor yields NaN.
///
/// # Example
/// ```
/// use exprcalc::interpreter::evaluator::function::builtin::modulo;
///
/// assert_eq!(modulo(7.0, 3.0), 1.0);
/// assert_eq!(modulo(-7.0, 3.0), -1.0);
/// assert!(modulo(1.0, 0.0).is_nan());
/// ```
#[must_use]
pub fn modulo(lhs: f64, rhs: f64) -> f64 {
    lhs % rhs
}

/// Rounds to the nearest integer, halfway cases away from zero.
///
/// # Example
/// ```
/// use exprcalc::interpreter::evaluator::function::builtin::round;
///
/// assert_eq!(round(2.5), 3.0);
/// assert_eq!(round(-2.5), -3.0);
/// ```
#[must_use]
pub fn round(x: f64) -> f64 {
    x.round()
}
