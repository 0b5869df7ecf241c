//! Random string generator.

use rand::Rng;
use random_core::RandomValue;

/// Characters strings are drawn from: ASCII letters, digits and ASCII
/// punctuation.
pub const SYMBOLS: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Generate a string of exactly `length` symbols, drawn with replacement.
pub fn generate_text<R: Rng>(rng: &mut R, length: usize) -> RandomValue {
    let text: String = (0..length)
        .map(|_| SYMBOLS[rng.random_range(0..SYMBOLS.len())] as char)
        .collect();
    RandomValue::Text(text)
}
