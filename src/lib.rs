//! data-random library
//!
//! Command-line plumbing around the `random-generator` crate: generator
//! options as command-line arguments and YAML run configuration files.
//!
//! # CLI Usage
//!
//! ```bash
//! # Flat list of 20 ints, floats and bools
//! data-random list --int-bundle=-5,7 --float-bundle=-0.5,1.0 \
//!   --elem-count 20 --nested-level 0 --types float,int,bool
//!
//! # Value shaped like a YAML model, reproducible
//! data-random --seed 42 model --model fixture_model.yaml
//!
//! # Everything from a run configuration file
//! data-random --config data_random.yaml dict
//! ```

use clap::Args;
use random_core::{RandomValue, TypeSet, TypeTag};
use random_generator::GeneratorOptions;

pub mod config;

pub use config::RunConfig;

/// Generator options settable from the command line.
///
/// Every flag is optional; unset flags keep the value from the run
/// configuration file, or the built-in default.
#[derive(Args, Clone, Debug, Default)]
pub struct GeneratorArgs {
    /// Integer range as MIN,MAX (order does not matter)
    #[arg(long, global = true, value_delimiter = ',', allow_hyphen_values = true)]
    pub int_bundle: Option<Vec<i64>>,

    /// Float range as MIN,MAX (order does not matter)
    #[arg(long, global = true, value_delimiter = ',', allow_hyphen_values = true)]
    pub float_bundle: Option<Vec<f64>>,

    /// Decimal digits kept on generated floats
    #[arg(long, global = true)]
    pub round_digits: Option<u32>,

    /// Length of generated strings
    #[arg(long, global = true)]
    pub length: Option<usize>,

    /// Levels of nested lists before primitives
    #[arg(long, global = true)]
    pub nested_level: Option<u32>,

    /// Element count of top-level lists and maps
    #[arg(long, global = true)]
    pub elem_count: Option<usize>,

    /// Element count of nested lists and maps
    #[arg(long, global = true)]
    pub nested_elem_count: Option<usize>,

    /// Allowed types, comma separated (int, float, str, bool, null)
    #[arg(long, global = true, value_delimiter = ',')]
    pub types: Option<Vec<TypeTag>>,
}

impl From<GeneratorArgs> for GeneratorOptions {
    fn from(args: GeneratorArgs) -> Self {
        Self {
            int_bundle: args
                .int_bundle
                .map(|values| values.into_iter().map(RandomValue::Int).collect()),
            float_bundle: args
                .float_bundle
                .map(|values| values.into_iter().map(RandomValue::Float).collect()),
            round_digits: args.round_digits,
            length: args.length,
            nested_level: args.nested_level,
            elem_count: args.elem_count,
            nested_elem_count: args.nested_elem_count,
            types: args.types.map(TypeSet::from),
        }
    }
}
