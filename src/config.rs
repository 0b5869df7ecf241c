//! Run configuration files.
//!
//! A run configuration is a YAML file holding generator options at the top
//! level, plus an optional seed, strict flag and inline model:
//!
//! ```yaml
//! seed: 42
//! strict: true
//! int_bundle: [-5, 7]
//! elem_count: 20
//! types: [int, bool]
//! model:
//!   name: str
//!   scores: [float, float]
//! ```

use anyhow::Context;
use random_core::Model;
use random_generator::{DataRandom, GeneratorOptions};
use serde::Deserialize;
use std::path::Path;

/// Everything needed to build a generator for one run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Seed for reproducible output; OS entropy when unset
    pub seed: Option<u64>,

    /// Reject malformed options instead of falling back to defaults
    pub strict: bool,

    /// Generator options
    #[serde(flatten)]
    pub options: GeneratorOptions,

    /// Inline model for the `model` command
    pub model: Option<Model>,
}

impl RunConfig {
    /// Parse a run configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        // An empty file is a valid, empty configuration
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).context("Failed to parse run configuration")
    }

    /// Load a run configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read run configuration {}", path.display()))?;
        Self::from_yaml(&content)
    }

    /// Overlay command-line values; anything given here wins.
    pub fn with_overrides(
        mut self,
        options: GeneratorOptions,
        seed: Option<u64>,
        strict: bool,
    ) -> Self {
        self.options = self.options.merge(options);
        self.seed = seed.or(self.seed);
        self.strict |= strict;
        self
    }

    /// Build the generator this configuration describes.
    pub fn build_generator(&self) -> anyhow::Result<DataRandom> {
        if self.strict {
            self.options
                .validate()
                .context("Invalid generator options")?;
        }

        let generator = match self.seed {
            Some(seed) => DataRandom::with_seed(&self.options, seed),
            None => DataRandom::new(&self.options),
        };
        tracing::debug!(seed = ?self.seed, strict = self.strict, "Built generator");
        Ok(generator)
    }
}
