//! Query parameters and their types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Bound parameters, either positional or named.
///
/// Named parameters are kept sorted so their serialization is stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryParams {
    /// `?` placeholders, in order.
    Positional(Vec<Value>),
    /// `:name` placeholders.
    Named(BTreeMap<String, Value>),
}

impl QueryParams {
    /// Returns true if no parameter is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Positional(values) => values.is_empty(),
            Self::Named(values) => values.is_empty(),
        }
    }
}

impl Default for QueryParams {
    fn default() -> Self {
        Self::Positional(Vec::new())
    }
}

impl From<Vec<Value>> for QueryParams {
    fn from(values: Vec<Value>) -> Self {
        Self::Positional(values)
    }
}

impl From<BTreeMap<String, Value>> for QueryParams {
    fn from(values: BTreeMap<String, Value>) -> Self {
        Self::Named(values)
    }
}

/// Types of the bound parameters, shaped like the parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamTypes {
    /// Types of positional parameters, in order.
    Positional(Vec<String>),
    /// Types of named parameters.
    Named(BTreeMap<String, String>),
}

impl Default for ParamTypes {
    fn default() -> Self {
        Self::Positional(Vec::new())
    }
}

impl From<Vec<String>> for ParamTypes {
    fn from(types: Vec<String>) -> Self {
        Self::Positional(types)
    }
}

impl From<BTreeMap<String, String>> for ParamTypes {
    fn from(types: BTreeMap<String, String>) -> Self {
        Self::Named(types)
    }
}
