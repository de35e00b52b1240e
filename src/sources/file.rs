//! File-based configuration source.

use super::ConfigSource;
use crate::config::ConfigLayer;
use crate::error::{ConfigError, Result};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// YAML file configuration source.
///
/// A missing file is not an error: [`ConfigSource::load`] returns `Ok(None)`
/// and the loader moves on to the next layer. A file that exists but does not
/// parse is always fatal.
///
/// # Examples
///
/// ```rust,no_run
/// use fynesse::sources::FileSource;
///
/// let source = FileSource::new("config/defaults.yml");
/// ```
pub struct FileSource {
    path: PathBuf,
    priority: i32,
}

impl FileSource {
    /// Create a new file source with the default priority (100).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            priority: 100,
        }
    }

    /// Create a file source carrying the priority of a standard layer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fynesse::config::ConfigLayer;
    /// use fynesse::sources::{ConfigSource, FileSource};
    ///
    /// let source = FileSource::for_layer(ConfigLayer::User, "_config.yml");
    /// assert_eq!(source.priority(), 300);
    /// ```
    pub fn for_layer(layer: ConfigLayer, path: impl Into<PathBuf>) -> Self {
        Self::new(path).with_priority(layer.priority())
    }

    /// Set the priority for this source.
    ///
    /// Higher priority sources override lower priority ones.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// The path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parse a YAML document into a top-level mapping.
///
/// `null` documents (empty, or comments only) yield `None`. Merge keys are
/// resolved; key types are left for the loader to check.
pub(crate) fn parse_document(path: &Path, contents: &str) -> Result<Option<Mapping>> {
    let parse_error = |source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let mut document: Value = serde_yaml::from_str(contents).map_err(parse_error)?;
    // `<<: *anchor` merge keys
    document.apply_merge().map_err(parse_error)?;

    match document {
        Value::Null => Ok(None),
        Value::Mapping(mapping) => Ok(Some(mapping)),
        _ => Err(ConfigError::NotAMapping {
            path: path.to_path_buf(),
        }),
    }
}

impl ConfigSource for FileSource {
    fn load(&self) -> Result<Option<Mapping>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        parse_document(&self.path, &contents)
    }

    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}
