//! Configuration loader that merges multiple sources.

use crate::config::settings::check_keys;
use crate::config::{EnvExpansion, Settings};
use crate::error::{ConfigError, Result};
use crate::sources::ConfigSource;
use serde_yaml::Mapping;

/// Loads and merges configuration from multiple sources.
///
/// Sources are merged in priority order (lowest first). The merge is shallow:
/// a top-level key from a higher priority source replaces the earlier value
/// wholesale, nested mappings included.
pub struct ConfigLoader {
    sources: Vec<Box<dyn ConfigSource>>,
    expansion: EnvExpansion,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            expansion: EnvExpansion::default(),
        }
    }

    /// Add a configuration source.
    pub fn add_source(&mut self, source: Box<dyn ConfigSource>) {
        self.sources.push(source);
    }

    /// Set the environment variable expansion policy applied after merging.
    pub fn set_env_expansion(&mut self, expansion: EnvExpansion) {
        self.expansion = expansion;
    }

    /// Sources in merge order. Equal priorities keep insertion order.
    fn sorted_sources(&self) -> Vec<&dyn ConfigSource> {
        let mut sorted: Vec<&dyn ConfigSource> = self.sources.iter().map(|s| s.as_ref()).collect();
        sorted.sort_by_key(|s| s.priority());
        sorted
    }

    /// Load and merge configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any present source fails to read or parse (even when others are valid)
    /// - No source contributed a key; the error names every source checked
    pub fn load(&self) -> Result<Settings> {
        let sorted = self.sorted_sources();
        let mut merged = Mapping::new();

        for source in &sorted {
            match source.load()? {
                Some(values) => {
                    check_keys(&source.name(), &values)?;
                    tracing::debug!(
                        source = %source.name(),
                        keys = values.len(),
                        "merging configuration layer"
                    );
                    for (key, value) in values {
                        merged.insert(key, value);
                    }
                }
                None => {
                    tracing::debug!(source = %source.name(), "configuration layer not present");
                }
            }
        }

        if merged.is_empty() {
            return Err(ConfigError::Missing {
                checked: sorted.iter().rev().map(|s| s.name()).collect(),
            });
        }

        self.expansion.apply(&mut merged);

        tracing::info!(keys = merged.len(), "configuration loaded");
        Ok(Settings::from_merged(merged))
    }

    /// Get the list of source names in merge order.
    pub fn source_names(&self) -> Vec<String> {
        self.sorted_sources().iter().map(|s| s.name()).collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    struct MockSource {
        name: String,
        priority: i32,
        values: Option<Mapping>,
    }

    impl MockSource {
        fn absent(name: &str, priority: i32) -> Self {
            Self {
                name: name.to_string(),
                priority,
                values: None,
            }
        }

        fn new(name: &str, priority: i32) -> Self {
            Self {
                values: Some(Mapping::new()),
                ..Self::absent(name, priority)
            }
        }

        fn with_value(mut self, key: &str, value: impl Into<Value>) -> Self {
            self.values
                .get_or_insert_with(Mapping::new)
                .insert(Value::from(key), value.into());
            self
        }
    }

    impl ConfigSource for MockSource {
        fn load(&self) -> Result<Option<Mapping>> {
            Ok(self.values.clone())
        }

        fn name(&self) -> String {
            self.name.clone()
        }

        fn priority(&self) -> i32 {
            self.priority
        }
    }

    struct BrokenSource;

    impl ConfigSource for BrokenSource {
        fn load(&self) -> Result<Option<Mapping>> {
            Err(ConfigError::LoadError("broken".to_string()))
        }

        fn name(&self) -> String {
            "broken".to_string()
        }
    }

    #[test]
    fn test_empty_loader() {
        let loader = ConfigLoader::new();
        let err = loader.load().unwrap_err();
        assert!(matches!(err, ConfigError::Missing { ref checked } if checked.is_empty()));
    }

    #[test]
    fn test_single_source() {
        let mut loader = ConfigLoader::new();
        let source = MockSource::new("test", 100)
            .with_value("port", 8080)
            .with_value("host", "localhost");
        loader.add_source(Box::new(source));

        let settings = loader.load().unwrap();
        assert_eq!(settings["port"], Value::from(8080));
        assert_eq!(settings["host"], Value::from("localhost"));
    }

    #[test]
    fn test_precedence() {
        let mut loader = ConfigLoader::new();

        // Added out of order on purpose
        loader.add_source(Box::new(MockSource::new("override", 200).with_value("port", 9090)));
        loader.add_source(Box::new(
            MockSource::new("default", 100)
                .with_value("port", 8080)
                .with_value("host", "localhost"),
        ));

        let settings = loader.load().unwrap();
        assert_eq!(settings["port"], Value::from(9090)); // Overridden
        assert_eq!(settings["host"], Value::from("localhost")); // From default
    }

    #[test]
    fn test_all_absent_names_every_source() {
        let mut loader = ConfigLoader::new();
        loader.add_source(Box::new(MockSource::absent("low", 100)));
        loader.add_source(Box::new(MockSource::absent("high", 300)));
        loader.add_source(Box::new(MockSource::new("empty", 200)));

        match loader.load().unwrap_err() {
            ConfigError::Missing { checked } => {
                assert_eq!(checked, vec!["high", "empty", "low"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_failing_source_aborts_load() {
        let mut loader = ConfigLoader::new();
        loader.add_source(Box::new(MockSource::new("default", 100).with_value("a", 1)));
        loader.add_source(Box::new(BrokenSource));

        assert!(matches!(loader.load(), Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_non_string_key_from_custom_source() {
        let mut loader = ConfigLoader::new();
        let mut source = MockSource::new("numeric", 100);
        source
            .values
            .get_or_insert_with(Mapping::new)
            .insert(Value::from(1), Value::from("one"));
        loader.add_source(Box::new(source));

        match loader.load().unwrap_err() {
            ConfigError::InvalidKey { origin, key } => {
                assert_eq!(origin, "numeric");
                assert!(key.contains('1'));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_override_keeps_first_position() {
        let mut loader = ConfigLoader::new();
        loader.add_source(Box::new(
            MockSource::new("default", 100)
                .with_value("a", 1)
                .with_value("b", 2),
        ));
        loader.add_source(Box::new(
            MockSource::new("user", 300)
                .with_value("c", 4)
                .with_value("a", 5),
        ));

        let settings = loader.load().unwrap();
        assert_eq!(settings.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(settings["a"], Value::from(5));
    }

    #[test]
    fn test_source_names() {
        let mut loader = ConfigLoader::new();
        loader.add_source(Box::new(MockSource::new("source1", 100)));
        loader.add_source(Box::new(MockSource::new("source2", 200)));
        loader.add_source(Box::new(MockSource::new("source3", 50)));

        let names = loader.source_names();
        // Should be sorted by priority
        assert_eq!(names, vec!["source3", "source1", "source2"]);
    }
}
