//! Random sign flipping.

use rand::Rng;
use random_core::RandomValue;

/// Return `value` unchanged or negated with equal probability.
///
/// Non-numeric input yields null. Uses the thread-local RNG; see
/// [`random_sign_with`] or `DataRandom::random_sign` for seeded flips.
pub fn random_sign(value: &RandomValue) -> RandomValue {
    random_sign_with(&mut rand::rng(), value)
}

/// [`random_sign`] with a caller-supplied RNG.
///
/// Integer negation saturates, so `i64::MIN` negates to `i64::MAX`.
pub fn random_sign_with<R: Rng>(rng: &mut R, value: &RandomValue) -> RandomValue {
    match value {
        RandomValue::Int(i) => {
            if rng.random() {
                RandomValue::Int(*i)
            } else {
                RandomValue::Int(i.saturating_neg())
            }
        }
        RandomValue::Float(f) => {
            if rng.random() {
                RandomValue::Float(*f)
            } else {
                RandomValue::Float(-f)
            }
        }
        _ => RandomValue::Null,
    }
}
