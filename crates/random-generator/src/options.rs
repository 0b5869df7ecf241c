//! Generator configuration.
//!
//! [`GeneratorOptions`] is the caller-facing form: every field optional,
//! readable from YAML. [`Settings`] is the resolved configuration a
//! generator actually uses. Applying options to settings never fails;
//! [`GeneratorOptions::validate`] offers the strict alternative.

use crate::bundle::{self, Bundle, BundleIssue, BundleKind};
use random_core::{RandomValue, TypeSet};
use serde::{Deserialize, Serialize};

/// Error type for strict configuration validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Bundle without any values
    #[error("{field} is empty")]
    EmptyBundle { field: &'static str },

    /// Bundle containing something other than a number
    #[error("{field} contains a non-numeric value: {value}")]
    NonNumericBundle { field: &'static str, value: String },

    /// Bundle mixing integers and floats
    #[error("{field} mixes integers and floats")]
    MixedBundle { field: &'static str },

    /// Bundle of the wrong numeric kind for its field
    #[error("{field} expects {expected} values")]
    BundleKindMismatch {
        field: &'static str,
        expected: &'static str,
    },

    /// Empty allowed-type list
    #[error("types is empty, every generated value would be null")]
    EmptyTypes,

    /// Type tag the generator does not know
    #[error("Unknown type tag: {0}")]
    UnknownType(String),
}

/// Optional configuration fields.
///
/// `None` leaves the corresponding setting unchanged.
///
/// # YAML Format
///
/// ```yaml
/// int_bundle: [-5, 7]
/// float_bundle: [-0.5, 1.0]
/// round_digits: 3
/// length: 8
/// nested_level: 0
/// elem_count: 20
/// nested_elem_count: 10
/// types: [float, int, bool]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Range for integers; classified by content like `float_bundle`
    pub int_bundle: Option<Vec<RandomValue>>,

    /// Range for floats; classified by content like `int_bundle`
    pub float_bundle: Option<Vec<RandomValue>>,

    /// Decimal digits kept on generated floats and float bounds
    pub round_digits: Option<u32>,

    /// Length of generated strings
    pub length: Option<usize>,

    /// Levels of nested lists before primitives are produced
    pub nested_level: Option<u32>,

    /// Element count of top-level lists and maps
    pub elem_count: Option<usize>,

    /// Element count of nested lists and maps
    pub nested_elem_count: Option<usize>,

    /// Allowed primitive types
    pub types: Option<TypeSet>,
}

impl GeneratorOptions {
    pub fn with_int_bundle<V: Into<RandomValue>>(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.int_bundle = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_float_bundle<V: Into<RandomValue>>(
        mut self,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        self.float_bundle = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_round_digits(mut self, digits: u32) -> Self {
        self.round_digits = Some(digits);
        self
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_nested_level(mut self, level: u32) -> Self {
        self.nested_level = Some(level);
        self
    }

    pub fn with_elem_count(mut self, count: usize) -> Self {
        self.elem_count = Some(count);
        self
    }

    pub fn with_nested_elem_count(mut self, count: usize) -> Self {
        self.nested_elem_count = Some(count);
        self
    }

    pub fn with_types(mut self, types: impl Into<TypeSet>) -> Self {
        self.types = Some(types.into());
        self
    }

    /// Overlay `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: GeneratorOptions) -> Self {
        Self {
            int_bundle: other.int_bundle.or(self.int_bundle),
            float_bundle: other.float_bundle.or(self.float_bundle),
            round_digits: other.round_digits.or(self.round_digits),
            length: other.length.or(self.length),
            nested_level: other.nested_level.or(self.nested_level),
            elem_count: other.elem_count.or(self.elem_count),
            nested_elem_count: other.nested_elem_count.or(self.nested_elem_count),
            types: other.types.or(self.types),
        }
    }

    /// Check the options without applying them.
    ///
    /// Rejects everything the permissive path would silently absorb:
    /// malformed bundles, bundles of the wrong kind for their field, an
    /// empty type list and unrecognized tags.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let digits = self.round_digits.unwrap_or(Settings::DEFAULT_ROUND_DIGITS);

        if let Some(values) = &self.int_bundle {
            check_bundle("int_bundle", values, digits, false)?;
        }
        if let Some(values) = &self.float_bundle {
            check_bundle("float_bundle", values, digits, true)?;
        }

        if let Some(types) = &self.types {
            if types.is_empty() {
                return Err(ConfigError::EmptyTypes);
            }
            if let Some(tag) = types.iter().find(|tag| !tag.is_known()) {
                return Err(ConfigError::UnknownType(tag.to_string()));
            }
        }

        Ok(())
    }
}

fn check_bundle(
    field: &'static str,
    values: &[RandomValue],
    digits: u32,
    expect_float: bool,
) -> Result<(), ConfigError> {
    match bundle::classify(values, digits) {
        BundleKind::Int(_) if expect_float => Err(ConfigError::BundleKindMismatch {
            field,
            expected: "float",
        }),
        BundleKind::Float(_) if !expect_float => Err(ConfigError::BundleKindMismatch {
            field,
            expected: "integer",
        }),
        BundleKind::Int(_) | BundleKind::Float(_) => Ok(()),
        BundleKind::Malformed(BundleIssue::Empty) => Err(ConfigError::EmptyBundle { field }),
        BundleKind::Malformed(BundleIssue::NonNumeric(value)) => {
            Err(ConfigError::NonNumericBundle {
                field,
                value: serde_json::to_string(&value).unwrap_or_else(|_| format!("{value:?}")),
            })
        }
        BundleKind::Malformed(BundleIssue::Mixed) => Err(ConfigError::MixedBundle { field }),
    }
}

/// Resolved generator configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub int_bundle: Bundle<i64>,
    pub float_bundle: Bundle<f64>,
    pub round_digits: u32,
    pub length: usize,
    pub nested_level: u32,
    pub elem_count: usize,
    pub nested_elem_count: usize,
    pub types: TypeSet,
}

impl Settings {
    pub const DEFAULT_ROUND_DIGITS: u32 = 3;
    pub const DEFAULT_LENGTH: usize = 8;
    pub const DEFAULT_NESTED_LEVEL: u32 = 1;
    pub const DEFAULT_ELEM_COUNT: usize = 5;
    pub const DEFAULT_NESTED_ELEM_COUNT: usize = 10;

    /// Apply `options` on top of the current settings.
    ///
    /// Precision is applied first so that a float bundle given in the same
    /// options is rounded with it.
    pub fn apply(&mut self, options: &GeneratorOptions) {
        if let Some(digits) = options.round_digits {
            self.round_digits = digits;
        }
        if let Some(values) = &options.int_bundle {
            self.apply_bundle(values);
        }
        if let Some(values) = &options.float_bundle {
            self.apply_bundle(values);
        }
        if let Some(length) = options.length {
            self.length = length;
        }
        if let Some(level) = options.nested_level {
            self.nested_level = level;
        }
        if let Some(count) = options.elem_count {
            self.elem_count = count;
        }
        if let Some(count) = options.nested_elem_count {
            self.nested_elem_count = count;
        }
        if let Some(types) = &options.types {
            self.types = types.clone();
        }
    }

    /// Set whichever bundle `values` classify as; reset both on anything else.
    fn apply_bundle(&mut self, values: &[RandomValue]) {
        match bundle::classify(values, self.round_digits) {
            BundleKind::Int(bundle) => self.int_bundle = bundle,
            BundleKind::Float(bundle) => self.float_bundle = bundle,
            BundleKind::Malformed(issue) => {
                tracing::debug!(?issue, "Malformed bundle, resetting numeric ranges to defaults");
                self.int_bundle = Bundle::<i64>::DEFAULT;
                self.float_bundle = Bundle::<f64>::DEFAULT;
            }
        }
    }

    /// Element count for a top-level or nested container.
    pub fn count(&self, nested: bool) -> usize {
        if nested {
            self.nested_elem_count
        } else {
            self.elem_count
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            int_bundle: Bundle::<i64>::DEFAULT,
            float_bundle: Bundle::<f64>::DEFAULT,
            round_digits: Self::DEFAULT_ROUND_DIGITS,
            length: Self::DEFAULT_LENGTH,
            nested_level: Self::DEFAULT_NESTED_LEVEL,
            elem_count: Self::DEFAULT_ELEM_COUNT,
            nested_elem_count: Self::DEFAULT_NESTED_ELEM_COUNT,
            types: TypeSet::numeric(),
        }
    }
}

impl From<&GeneratorOptions> for Settings {
    fn from(options: &GeneratorOptions) -> Self {
        let mut settings = Self::default();
        settings.apply(options);
        settings
    }
}
