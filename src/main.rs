//! Command-line interface for data-random
//!
//! # Usage Examples
//!
//! ```bash
//! # One random primitive of any allowed type
//! data-random primitive
//!
//! # A string of 16 characters
//! data-random primitive --type str --length 16
//!
//! # Nested list, two levels deep, reproducible
//! data-random --seed 7 list --nested-level 2 --elem-count 4 --nested-elem-count 3
//!
//! # The same list flattened to its leaves
//! data-random --seed 7 list --nested-level 2 --flat
//!
//! # Map from index to primitive
//! data-random dict --elem-count 3 --types bool
//!
//! # Value shaped like a model file
//! data-random model --model fixture_model.yaml
//! ```
//!
//! Output is pretty-printed JSON on stdout. Logs go to stderr and are
//! controlled by `RUST_LOG`.

use anyhow::Context;
use clap::{Parser, Subcommand};
use data_random::{GeneratorArgs, RunConfig};
use random_core::{expand_nested, Model, RandomValue, TypeTag};
use std::borrow::Cow;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "data-random")]
#[command(about = "Generate random test data as JSON")]
#[command(long_about = None)]
struct Cli {
    /// Run configuration file (YAML)
    #[arg(long, global = true, value_name = "PATH", env = "DATA_RANDOM_CONFIG")]
    config: Option<PathBuf>,

    /// Seed for reproducible output
    #[arg(long, global = true, env = "DATA_RANDOM_SEED")]
    seed: Option<u64>,

    /// Reject malformed options instead of falling back to defaults
    #[arg(long, global = true)]
    strict: bool,

    /// Generator options
    #[command(flatten)]
    generator: GeneratorArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a single primitive value
    Primitive {
        /// Type to generate (defaults to a random allowed type)
        #[arg(long = "type", value_name = "TYPE")]
        target: Option<TypeTag>,

        /// Flip the sign of numeric values at random
        #[arg(long)]
        random_sign: bool,
    },

    /// Generate a list, nested down to the configured level
    List {
        /// Print only the leaves, flattened in order
        #[arg(long)]
        flat: bool,
    },

    /// Generate a map from index to primitive
    Dict {
        /// Use the nested element count
        #[arg(long)]
        nested: bool,
    },

    /// Generate a value shaped like a model template
    Model {
        /// Model file (YAML); defaults to the `model` of the run configuration
        #[arg(long, value_name = "PATH")]
        model: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for generated data
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RunConfig::from_file(path)
            .with_context(|| format!("Failed to load run configuration from {path:?}"))?,
        None => RunConfig::default(),
    };
    let config = config.with_overrides(cli.generator.into(), cli.seed, cli.strict);
    let mut generator = config.build_generator()?;

    let output = match cli.command {
        Commands::Primitive {
            target,
            random_sign: flip,
        } => {
            let value = generator.random_primitive(target.as_ref());
            if flip && value.is_numeric() {
                generator.random_sign(&value)
            } else {
                value
            }
        }
        Commands::List { flat } => {
            let values = generator.random_list();
            if flat {
                RandomValue::List(expand_nested(&values).map(Cow::into_owned).collect())
            } else {
                RandomValue::List(values)
            }
        }
        Commands::Dict { nested } => RandomValue::Map(generator.random_dict(nested)),
        Commands::Model { model } => {
            let model = match model {
                Some(path) => Model::from_file(&path)
                    .with_context(|| format!("Failed to load model from {path:?}"))?,
                None => config
                    .model
                    .clone()
                    .context("No model given: pass --model or set `model` in the run configuration")?,
            };
            tracing::info!(leaves = model.leaf_count(), "Generating from model");
            generator.random_by_model(&model)
        }
    };

    let json = serde_json::to_string_pretty(&output).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
