//! Builder for loading [`Settings`] from non-standard locations.

use crate::config::{ConfigLayer, ConfigLoader, ConfigPaths, EnvExpansion, Settings, SharedSettings};
use crate::error::Result;
use crate::sources::{ConfigSource, FileSource};
use std::path::PathBuf;

/// Builder for loading layered configuration.
///
/// Starts from the standard layer paths; each can be overridden, and extra
/// sources can be slotted in by priority.
///
/// # Examples
///
/// ```rust,no_run
/// use fynesse::prelude::*;
///
/// # fn example() -> Result<()> {
/// let settings = Settings::builder()
///     .with_local_file("/etc/fynesse/machine.yml")
///     .with_user_file("analysis/_config.yml")
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct SettingsBuilder {
    paths: ConfigPaths,
    custom_sources: Vec<Box<dyn ConfigSource>>,
    expansion: EnvExpansion,
}

impl SettingsBuilder {
    /// Create a builder using the standard paths.
    pub fn new() -> Self {
        Self {
            paths: ConfigPaths::standard(),
            custom_sources: Vec::new(),
            expansion: EnvExpansion::default(),
        }
    }

    /// Replace all three layer paths.
    pub fn with_paths(mut self, paths: ConfigPaths) -> Self {
        self.paths = paths;
        self
    }

    /// Override the packaged defaults file.
    pub fn with_default_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.set(ConfigLayer::Default, path);
        self
    }

    /// Override the per-machine file.
    pub fn with_local_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.set(ConfigLayer::Local, path);
        self
    }

    /// Override the per-project file.
    pub fn with_user_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.set(ConfigLayer::User, path);
        self
    }

    /// Add a custom configuration source.
    ///
    /// It is merged according to its [`ConfigSource::priority`]; the standard
    /// layers sit at 100, 200 and 300.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use fynesse::prelude::*;
    /// use fynesse::sources::FileSource;
    ///
    /// let builder = Settings::builder()
    ///     .with_source(FileSource::new("team.yml").with_priority(250));
    /// ```
    pub fn with_source<S: ConfigSource + 'static>(mut self, source: S) -> Self {
        self.custom_sources.push(Box::new(source));
        self
    }

    /// Choose how `$VAR` references in top-level string values are handled.
    pub fn with_env_expansion(mut self, expansion: EnvExpansion) -> Self {
        self.expansion = expansion;
        self
    }

    fn into_loader(self) -> ConfigLoader {
        let mut loader = ConfigLoader::new();
        loader.set_env_expansion(self.expansion);

        for (layer, path) in self.paths.iter() {
            loader.add_source(Box::new(FileSource::for_layer(layer, path)));
        }

        for source in self.custom_sources {
            loader.add_source(source);
        }

        loader
    }

    /// Load and merge every layer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A present file cannot be read or parsed
    /// - No layer contributed any key
    pub fn build(self) -> Result<Settings> {
        self.into_loader().load()
    }

    /// Load and merge every layer into a reloadable handle.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build).
    pub fn build_shared(self) -> Result<SharedSettings> {
        let loader = self.into_loader();
        let initial = loader.load()?;
        Ok(SharedSettings::with_loader(initial, loader))
    }
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
