//! Random test-data generator.
//!
//! This crate provides [`DataRandom`], a configurable generator of random
//! primitives (integers, floats, strings, booleans, null) and of nested
//! lists, flat maps and model-shaped structures built from them.
//!
//! # Architecture
//!
//! ```text
//! GeneratorOptions (YAML / builder)
//!        │  configure()
//!        ▼
//! ┌─────────────────┐
//! │   DataRandom    │
//! │                 │
//! │  - settings     │
//! │  - rng (StdRng) │
//! └────────┬────────┘
//!          │
//!          ├── random_primitive()  -> RandomValue
//!          ├── generate_list()     -> LazyList (lazy, nested)
//!          ├── random_list()       -> Vec<RandomValue>
//!          ├── random_dict()       -> OrderedMap<RandomValue>
//!          ├── random_by_model()   -> RandomValue shaped like the model
//!          └── random_sign()       -> seeded sign flip
//! ```
//!
//! # Example
//!
//! ```rust
//! use random_generator::{DataRandom, GeneratorOptions};
//! use random_core::{expand_nested, TypeTag};
//!
//! let options = GeneratorOptions::default()
//!     .with_int_bundle([-5, 7])
//!     .with_elem_count(20)
//!     .with_nested_level(0)
//!     .with_types(vec![TypeTag::Int, TypeTag::Bool]);
//!
//! let mut generator = DataRandom::with_seed(&options, 42);
//! let values = generator.random_list();
//! assert_eq!(values.len(), 20);
//! assert!(expand_nested(&values).all(|v| v.matches_any(generator.types())));
//! ```
//!
//! # Configuration
//!
//! Malformed bundles never fail: they reset both numeric ranges to their
//! defaults. Callers who prefer an error use [`DataRandom::try_new`] or
//! [`DataRandom::try_configure`], which validate the options first.

pub mod bundle;
pub mod generator;
pub mod generators;
pub mod lazy;
pub mod options;

// Re-exports for convenience
pub use bundle::Bundle;
pub use generator::DataRandom;
pub use generators::sign::{random_sign, random_sign_with};
pub use lazy::{materialize, LazyItem, LazyList};
pub use options::{ConfigError, GeneratorOptions, Settings};
