//! Numeric value generators.

use crate::bundle::Bundle;
use rand::Rng;
use random_core::RandomValue;

/// Generate a random integer in the bundle (inclusive).
pub fn generate_int_range<R: Rng>(rng: &mut R, bundle: Bundle<i64>) -> RandomValue {
    RandomValue::Int(rng.random_range(bundle.min..=bundle.max))
}

/// Generate a random float from the bundle's span, rounded to `digits`.
///
/// The value is `(|min| + |max|) * U[0, 1) - |min|`. This covers
/// `[min, max]` only when `min <= 0 <= max`; for bundles entirely on one
/// side of zero the result lies in `[-|min|, |max|]`.
pub fn generate_float_span<R: Rng>(rng: &mut R, bundle: Bundle<f64>, digits: u32) -> RandomValue {
    let (low, high) = (bundle.min.abs(), bundle.max.abs());
    let unit = rng.random::<f64>();
    let width = low + high;
    let value = if width.is_finite() {
        width * unit - low
    } else {
        // Same point of the span without forming a width above f64::MAX
        high * unit - low * (1.0 - unit)
    };
    RandomValue::Float(round_to(value, digits))
}

/// Round `value` to `digits` decimal places, ties to even.
///
/// Values too large to scale by `10^digits` are returned unchanged; they
/// have no fractional digits left to round.
pub fn round_to(value: f64, digits: u32) -> f64 {
    if digits > 15 {
        return value;
    }
    let factor = 10f64.powi(digits as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round_ties_even() / factor
}
