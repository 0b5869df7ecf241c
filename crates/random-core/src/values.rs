//! Value representations produced by the generator.
//!
//! `RandomValue` is the single output type: a primitive, a list of values,
//! or a map keyed either by position or by the key copied from a model.

use crate::map::OrderedMap;
use crate::types::TypeTag;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of a generated map.
///
/// Index keys come from `random_dict`; model-driven maps copy whatever key
/// the template used.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    /// Positional or integer key
    Index(i64),

    /// Named key
    Name(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Name(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Self::Index(value)
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Self::Index(value as i64)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self::Name(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

/// A generated value.
///
/// Serializes untagged, so a list of values becomes a plain JSON array and
/// `Null` becomes `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RandomValue {
    /// Null value
    Null,

    /// Boolean value
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point
    Float(f64),

    /// String value
    Text(String),

    /// List of values, possibly nested
    List(Vec<RandomValue>),

    /// Map of values, in insertion order
    Map(OrderedMap<RandomValue>),
}

impl RandomValue {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if this value is a number (integer or float).
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    /// Check if this value is a list or a map.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::List(_) | Self::Map(_))
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a list.
    pub fn as_list(&self) -> Option<&Vec<RandomValue>> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get this value as a map.
    pub fn as_map(&self) -> Option<&OrderedMap<RandomValue>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// The primitive type tag of this value, or `None` for containers.
    pub fn type_tag(&self) -> Option<TypeTag> {
        match self {
            Self::Null => Some(TypeTag::Null),
            Self::Bool(_) => Some(TypeTag::Bool),
            Self::Int(_) => Some(TypeTag::Int),
            Self::Float(_) => Some(TypeTag::Float),
            Self::Text(_) => Some(TypeTag::Text),
            Self::List(_) | Self::Map(_) => None,
        }
    }

    /// Whether this value is a primitive of one of the given tags.
    ///
    /// An unrecognized tag is produced as null, so `Other` matches `Null`.
    pub fn matches_any<'a>(&self, tags: impl IntoIterator<Item = &'a TypeTag>) -> bool {
        let Some(own) = self.type_tag() else {
            return false;
        };
        tags.into_iter().any(|tag| match tag {
            TypeTag::Other(_) => own == TypeTag::Null,
            tag => *tag == own,
        })
    }
}

impl From<bool> for RandomValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for RandomValue {
    fn from(value: i32) -> Self {
        Self::Int(value as i64)
    }
}

impl From<i64> for RandomValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for RandomValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for RandomValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RandomValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<RandomValue>> for RandomValue {
    fn from(value: Vec<RandomValue>) -> Self {
        Self::List(value)
    }
}

impl From<OrderedMap<RandomValue>> for RandomValue {
    fn from(value: OrderedMap<RandomValue>) -> Self {
        Self::Map(value)
    }
}

impl From<&Key> for RandomValue {
    fn from(key: &Key) -> Self {
        match key {
            Key::Index(i) => Self::Int(*i),
            Key::Name(s) => Self::Text(s.clone()),
        }
    }
}
