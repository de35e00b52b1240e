//! The merged, read-only settings mapping.

use crate::config::SettingsBuilder;
use crate::error::{ConfigError, Result};
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};
use std::ops::Index;

/// Merged configuration from every layer that was present.
///
/// Built once at startup and handed by reference to whatever needs it. A
/// `Settings` always holds at least one key.
///
/// # Examples
///
/// ```rust,no_run
/// use fynesse::prelude::*;
///
/// # fn example() -> Result<()> {
/// let settings = Settings::load()?;
/// if let Some(url) = settings.get_as::<String>("url")? {
///     println!("fetching {url}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    values: Mapping,
}

impl Settings {
    /// Load from the standard layers: packaged defaults, `machine.yml`, then
    /// `_config.yml` in the working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no layer contributes a key, or if any present
    /// layer fails to read or parse.
    pub fn load() -> Result<Self> {
        SettingsBuilder::new().build()
    }

    /// Create a builder for non-standard paths or extra sources.
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::new()
    }

    /// Wrap an already merged mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] if the mapping is empty, and
    /// [`ConfigError::InvalidKey`] if a key is not a string.
    pub fn from_mapping(values: Mapping) -> Result<Self> {
        if values.is_empty() {
            return Err(ConfigError::Missing { checked: vec![] });
        }
        check_keys("<mapping>", &values)?;
        Ok(Self { values })
    }

    /// Loader-side constructor; the loader has already checked the invariants.
    pub(crate) fn from_merged(values: Mapping) -> Self {
        Self { values }
    }

    /// Raw value for `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Deserialize the value for `key` into `T`.
    ///
    /// Returns `Ok(None)` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Deserialize`] if the value does not fit `T`.
    pub fn get_as<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        self.get(key)
            .map(|value| {
                serde_yaml::from_value(value.clone())
                    .map_err(|e| ConfigError::Deserialize(format!("key '{}': {}", key, e)))
            })
            .transpose()
    }

    /// Deserialize the whole mapping into a typed configuration struct.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Deserialize`] if the mapping does not fit `T`.
    pub fn deserialize<T>(&self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_yaml::from_value(Value::Mapping(self.values.clone()))
            .map_err(|e| ConfigError::Deserialize(e.to_string()))
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Keys in the order they were first defined.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().filter_map(Value::as_str)
    }

    /// `(key, value)` pairs in the order keys were first defined.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values
            .iter()
            .filter_map(|(key, value)| key.as_str().map(|key| (key, value)))
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false` for a constructed `Settings`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The underlying mapping.
    pub fn as_mapping(&self) -> &Mapping {
        &self.values
    }
}

/// Reject any top-level key that is not a string.
pub(crate) fn check_keys(origin: &str, values: &Mapping) -> Result<()> {
    match values.keys().find(|key| !key.is_string()) {
        Some(key) => Err(ConfigError::InvalidKey {
            origin: origin.to_string(),
            key: format!("{:?}", key),
        }),
        None => Ok(()),
    }
}

impl Index<&str> for Settings {
    type Output = Value;

    /// # Panics
    ///
    /// Panics if `key` is not present.
    fn index(&self, key: &str) -> &Value {
        match self.values.get(key) {
            Some(value) => value,
            None => panic!("configuration key '{}' is not set", key),
        }
    }
}
