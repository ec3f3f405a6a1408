//! Placeholder bindings supplied at render time

use std::collections::HashMap;

use thiserror::Error;

use crate::parser::is_identifier;

/// Errors from parsing `key=value` binding arguments
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindingError {
    #[error("invalid binding '{arg}': expected KEY=VALUE")]
    MissingSeparator { arg: String },

    #[error("invalid binding key '{key}': only letters, digits and '_' are allowed")]
    InvalidKey { key: String },
}

/// Mapping from placeholder identifier to literal value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    values: HashMap<String, String>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a value, replacing any previous value for the same key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Builder-style variant of [`Bindings::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parse a single `key=value` argument
    ///
    /// Splits on the first `=`, so values may themselves contain `=` and
    /// may be empty.
    pub fn parse_pair(arg: &str) -> Result<(String, String), BindingError> {
        let (key, value) = arg
            .split_once('=')
            .ok_or_else(|| BindingError::MissingSeparator {
                arg: arg.to_string(),
            })?;

        if !is_identifier(key) {
            return Err(BindingError::InvalidKey {
                key: key.to_string(),
            });
        }
        Ok((key.to_string(), value.to_string()))
    }

    /// Build bindings from `key=value` arguments; later keys win
    pub fn from_pairs<I, S>(args: I) -> Result<Self, BindingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut bindings = Self::new();
        for arg in args {
            let (key, value) = Self::parse_pair(arg.as_ref())?;
            bindings.insert(key, value);
        }
        Ok(bindings)
    }
}

impl<K, V> FromIterator<(K, V)> for Bindings
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
