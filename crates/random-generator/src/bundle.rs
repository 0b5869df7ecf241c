//! Numeric generation ranges.
//!
//! A bundle is a `(min, max)` pair. Bundles are supplied as plain lists of
//! numbers and classified by content: all integers make an integer bundle,
//! all floats make a float bundle, anything else is malformed.

use crate::generators::numeric::round_to;
use random_core::RandomValue;
use serde::{Deserialize, Serialize};

/// Inclusive `(min, max)` range, always normalized so `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bundle<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> Bundle<T> {
    /// Create a bundle from two bounds given in any order.
    pub fn new(a: T, b: T) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Bundle<i64> {
    pub const DEFAULT: Self = Self { min: -1, max: 1 };
}

impl Bundle<f64> {
    pub const DEFAULT: Self = Self {
        min: -1.0,
        max: 1.0,
    };
}

impl Default for Bundle<i64> {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Default for Bundle<f64> {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Outcome of classifying a supplied bundle.
#[derive(Debug, Clone, PartialEq)]
pub enum BundleKind {
    Int(Bundle<i64>),
    Float(Bundle<f64>),
    Malformed(BundleIssue),
}

/// Why a bundle could not be classified.
#[derive(Debug, Clone, PartialEq)]
pub enum BundleIssue {
    Empty,
    NonNumeric(RandomValue),
    Mixed,
}

/// Classify `values` as an integer or float bundle.
///
/// Bounds are the minimum and maximum over all values, so more than two
/// values are accepted. Float bounds are rounded to `round_digits`.
pub fn classify(values: &[RandomValue], round_digits: u32) -> BundleKind {
    if values.is_empty() {
        return BundleKind::Malformed(BundleIssue::Empty);
    }
    if let Some(value) = values.iter().find(|v| !v.is_numeric()) {
        return BundleKind::Malformed(BundleIssue::NonNumeric(value.clone()));
    }

    if let Some(ints) = values
        .iter()
        .map(RandomValue::as_i64)
        .collect::<Option<Vec<_>>>()
    {
        let min = ints.iter().copied().min().unwrap_or(Bundle::<i64>::DEFAULT.min);
        let max = ints.iter().copied().max().unwrap_or(Bundle::<i64>::DEFAULT.max);
        return BundleKind::Int(Bundle::new(min, max));
    }

    if let Some(floats) = values
        .iter()
        .map(RandomValue::as_f64)
        .collect::<Option<Vec<_>>>()
    {
        let min = floats.iter().copied().fold(f64::INFINITY, f64::min);
        let max = floats.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        return BundleKind::Float(Bundle::new(
            round_to(min, round_digits),
            round_to(max, round_digits),
        ));
    }

    BundleKind::Malformed(BundleIssue::Mixed)
}
