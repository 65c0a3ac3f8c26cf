//! Event Args - arguments forwarded to listener handlers
//!
//! A dispatch carries positional values and keyword values. Both are kept as
//! `serde_json::Value` so producers and listeners share no Rust types.

use crate::{Error, Result};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Positional and keyword arguments of one dispatch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventArgs {
    positional: Vec<Value>,
    keywords: BTreeMap<String, Value>,
}

impl EventArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from positional values only
    pub fn from_positional(values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            positional: values.into_iter().collect(),
            keywords: BTreeMap::new(),
        }
    }

    // ========================================================================
    // Builders
    // ========================================================================

    /// Append a positional argument
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set a keyword argument, replacing any earlier value for the key
    pub fn kwarg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keywords.insert(key.into(), value.into());
        self
    }

    /// Append any serializable value as a positional argument
    pub fn try_arg<T: Serialize>(self, value: &T) -> Result<Self> {
        Ok(self.arg(serde_json::to_value(value)?))
    }

    /// Set any serializable value as a keyword argument
    pub fn try_kwarg<T: Serialize>(self, key: impl Into<String>, value: &T) -> Result<Self> {
        Ok(self.kwarg(key, serde_json::to_value(value)?))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    pub fn keywords(&self) -> &BTreeMap<String, Value> {
        &self.keywords
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    pub fn keyword(&self, name: &str) -> Option<&Value> {
        self.keywords.get(name)
    }

    /// Total number of arguments (positional + keyword)
    pub fn len(&self) -> usize {
        self.positional.len() + self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keywords.is_empty()
    }

    /// Deserialize the positional argument at `index`
    pub fn get_as<T: DeserializeOwned>(&self, index: usize) -> Result<T> {
        let value = self
            .get(index)
            .ok_or_else(|| Error::MissingArgument(format!("positional #{}", index)))?;
        decode(value, &format!("#{}", index))
    }

    /// Deserialize the keyword argument `name`
    pub fn keyword_as<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let value = self
            .keyword(name)
            .ok_or_else(|| Error::MissingArgument(format!("keyword '{}'", name)))?;
        decode(value, name)
    }
}

fn decode<T: DeserializeOwned>(value: &Value, argument: &str) -> Result<T> {
    T::deserialize(value).map_err(|e| Error::invalid_argument(argument, e.to_string()))
}

impl<V: Into<Value>> FromIterator<V> for EventArgs {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from_positional(iter.into_iter().map(Into::into))
    }
}
