//! Type tags for primitive generation.
//!
//! A [`TypeTag`] names one of the primitive categories the generator knows
//! how to produce. Unknown names are kept as [`TypeTag::Other`] rather than
//! rejected; generating one of those yields null.
//!
//! # YAML Format
//!
//! Tags are written as plain strings:
//! ```yaml
//! types: [int, float, bool]
//! types: str
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Primitive category used to request a generated value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// 64-bit signed integer
    Int,

    /// 64-bit float rounded to the configured precision
    Float,

    /// Fixed-length string over the generator alphabet
    Text,

    /// Boolean value
    Bool,

    /// Null value
    Null,

    /// Unrecognized tag, generates null
    Other(String),
}

impl TypeTag {
    /// Every tag the generator knows how to produce.
    pub const KNOWN: [TypeTag; 5] = [
        TypeTag::Int,
        TypeTag::Float,
        TypeTag::Text,
        TypeTag::Bool,
        TypeTag::Null,
    ];

    /// Parse a tag name. Unknown names become [`TypeTag::Other`].
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "int" | "integer" => Self::Int,
            "float" | "double" => Self::Float,
            "str" | "text" | "string" => Self::Text,
            "bool" | "boolean" => Self::Bool,
            "null" | "none" => Self::Null,
            _ => Self::Other(name.to_string()),
        }
    }

    /// Canonical name of this tag.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Text => "str",
            Self::Bool => "bool",
            Self::Null => "null",
            Self::Other(name) => name,
        }
    }

    /// Whether this tag is one the generator can produce a typed value for.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for TypeTag {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl std::str::FromStr for TypeTag {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Serialize for TypeTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TypeTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{Error, Visitor};

        struct TypeTagVisitor;

        impl<'de> Visitor<'de> for TypeTagVisitor {
            type Value = TypeTag;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a type tag name or null")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                Ok(TypeTag::parse(value))
            }

            // A bare `~` stands for the null type
            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: Error,
            {
                Ok(TypeTag::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: Error,
            {
                Ok(TypeTag::Null)
            }
        }

        deserializer.deserialize_any(TypeTagVisitor)
    }
}

/// Ordered list of allowed type tags.
///
/// Order is kept and duplicates are allowed, so listing a tag twice doubles
/// its chance of being picked. A single tag deserializes into a one-element
/// set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "OneOrMany")]
pub struct TypeSet(Vec<TypeTag>);

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(TypeTag),
    Many(Vec<TypeTag>),
}

impl From<OneOrMany> for TypeSet {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(tag) => Self(vec![tag]),
            OneOrMany::Many(tags) => Self(tags),
        }
    }
}

impl TypeSet {
    /// Create a set from tags, keeping their order.
    pub fn new(tags: impl IntoIterator<Item = TypeTag>) -> Self {
        Self(tags.into_iter().collect())
    }

    /// The default numeric set: `[int, float]`.
    pub fn numeric() -> Self {
        Self(vec![TypeTag::Int, TypeTag::Float])
    }

    /// Every known primitive type except null.
    pub fn simple_without_null() -> Self {
        Self(vec![TypeTag::Int, TypeTag::Float, TypeTag::Text, TypeTag::Bool])
    }

    /// Every known primitive type.
    pub fn all_primitives() -> Self {
        Self(TypeTag::KNOWN.to_vec())
    }

    pub fn as_slice(&self) -> &[TypeTag] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, tag: &TypeTag) -> bool {
        self.0.contains(tag)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TypeTag> {
        self.0.iter()
    }
}

impl Default for TypeSet {
    fn default() -> Self {
        Self::numeric()
    }
}

impl From<TypeTag> for TypeSet {
    fn from(tag: TypeTag) -> Self {
        Self(vec![tag])
    }
}

impl From<Vec<TypeTag>> for TypeSet {
    fn from(tags: Vec<TypeTag>) -> Self {
        Self(tags)
    }
}

impl<'a> IntoIterator for &'a TypeSet {
    type Item = &'a TypeTag;
    type IntoIter = std::slice::Iter<'a, TypeTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
