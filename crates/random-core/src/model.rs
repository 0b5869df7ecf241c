//! Model templates describing the shape of data to generate.
//!
//! A model is any nesting of mappings and sequences whose leaves are type
//! tags. Mappings produce maps with the same keys, sequences produce lists
//! of the same length, and leaves produce a primitive of the named type.
//!
//! ```yaml
//! - {0: str, 1: [float, float], 2: bool}
//! - {0: str, 1: [int, int], 2: bool}
//! - name: str
//!   score: ~        # any allowed type
//! ```

use crate::map::OrderedMap;
use crate::types::TypeTag;
use crate::values::Key;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value as YamlValue;
use std::fs;
use std::path::Path;

/// Error type for model loading.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Error reading model file
    #[error("Failed to read model file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Template for `random_by_model`.
#[derive(Debug, Clone, PartialEq)]
pub enum Model {
    /// Produces a map with identical keys, in the same order
    Map(OrderedMap<Model>),

    /// Produces a list with one entry per element, in order
    Seq(Vec<Model>),

    /// Produces one primitive; `None` picks from the allowed types
    Leaf(Option<TypeTag>),
}

impl Model {
    /// Leaf requesting a specific type.
    pub fn tag(tag: TypeTag) -> Self {
        Self::Leaf(Some(tag))
    }

    /// Leaf accepting any allowed type.
    pub fn any() -> Self {
        Self::Leaf(None)
    }

    /// Parse a model from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ModelError> {
        let value: YamlValue = serde_yaml::from_str(yaml)?;
        Ok(Self::from_yaml_value(&value))
    }

    /// Load a model from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Build a model from an already parsed YAML value.
    ///
    /// Strings are read as tag names, `~` and `any` as "any allowed type".
    /// Other scalars are kept as unrecognized tags and generate null.
    /// Mapping keys keep their order; `~` becomes the key `"null"` and
    /// non-scalar keys are written out as inline YAML.
    pub fn from_yaml_value(yaml: &YamlValue) -> Self {
        match yaml {
            YamlValue::Null => Self::any(),
            YamlValue::String(s) if s.eq_ignore_ascii_case("any") => Self::any(),
            YamlValue::String(s) => Self::tag(TypeTag::parse(s)),
            YamlValue::Bool(b) => Self::tag(TypeTag::Other(b.to_string())),
            YamlValue::Number(n) => Self::tag(TypeTag::Other(n.to_string())),
            YamlValue::Sequence(items) => {
                Self::Seq(items.iter().map(Self::from_yaml_value).collect())
            }
            YamlValue::Mapping(map) => {
                let entries: OrderedMap<Model> = map
                    .iter()
                    .map(|(k, v)| (yaml_to_key(k), Self::from_yaml_value(v)))
                    .collect();
                Self::Map(entries)
            }
            YamlValue::Tagged(tagged) => Self::from_yaml_value(&tagged.value),
        }
    }

    /// Number of leaves in this template.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Map(entries) => entries.values().map(Self::leaf_count).sum(),
            Self::Seq(items) => items.iter().map(Self::leaf_count).sum(),
            Self::Leaf(_) => 1,
        }
    }
}

fn yaml_to_key(yaml: &YamlValue) -> Key {
    match yaml {
        YamlValue::Null => Key::Name("null".to_string()),
        YamlValue::String(s) => Key::Name(s.clone()),
        YamlValue::Number(n) => match n.as_i64() {
            Some(i) => Key::Index(i),
            None => Key::Name(n.to_string()),
        },
        YamlValue::Bool(b) => Key::Name(b.to_string()),
        YamlValue::Tagged(tagged) => yaml_to_key(&tagged.value),
        YamlValue::Sequence(_) | YamlValue::Mapping(_) => Key::Name(inline_yaml(yaml)),
    }
}

/// Render a collection key on one line, e.g. `[1, 2]` or `{a: 1}`.
fn inline_yaml(yaml: &YamlValue) -> String {
    match yaml {
        YamlValue::Sequence(items) => {
            let items: Vec<String> = items.iter().map(inline_yaml).collect();
            format!("[{}]", items.join(", "))
        }
        YamlValue::Mapping(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", inline_yaml(k), inline_yaml(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        YamlValue::Tagged(tagged) => inline_yaml(&tagged.value),
        scalar => yaml_to_key(scalar).to_string(),
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = YamlValue::deserialize(deserializer)?;
        Ok(Self::from_yaml_value(&value))
    }
}

impl From<TypeTag> for Model {
    fn from(tag: TypeTag) -> Self {
        Self::tag(tag)
    }
}

impl From<Vec<Model>> for Model {
    fn from(items: Vec<Model>) -> Self {
        Self::Seq(items)
    }
}
