//! Core types for the data-random generator.
//!
//! This crate provides the foundational types shared by the generator and
//! the command-line front end:
//!
//! - [`TypeTag`] - Primitive categories a generator can be asked for
//! - [`TypeSet`] - Ordered list of allowed tags, accepting a single tag too
//! - [`RandomValue`] - Generated values (primitives, lists, maps)
//! - [`OrderedMap`] - Insertion-ordered map used by models and generated maps
//! - [`Model`] - Caller-supplied templates describing the shape of output
//! - [`expand_nested`] - Lazy flattening of nested values
//!
//! # Architecture
//!
//! ```text
//! random-core (this crate)
//!    │
//!    ├─── random-generator   (DataRandom, options, lazy lists)
//!    │
//!    └─── data-random        (CLI, run configuration)
//! ```
//!
//! # Example
//!
//! ```rust
//! use random_core::{expand_nested, RandomValue};
//!
//! let nested = vec![
//!     RandomValue::Int(1),
//!     RandomValue::List(vec![RandomValue::Int(2), RandomValue::from("ab")]),
//! ];
//! let leaves: Vec<_> = expand_nested(&nested).collect();
//! assert_eq!(leaves.len(), 3);
//! ```

pub mod map;
pub mod model;
pub mod nested;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use map::OrderedMap;
pub use model::{Model, ModelError};
pub use nested::{expand_nested, ExpandNested};
pub use types::{TypeSet, TypeTag};
pub use values::{Key, RandomValue};
