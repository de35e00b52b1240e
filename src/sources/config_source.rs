//! Configuration source trait.

use crate::error::Result;
use serde_yaml::Mapping;

/// Trait for configuration sources.
///
/// Implement this trait to feed the loader from somewhere other than a file
/// on disk (an embedded string, a test fixture, a secrets store).
pub trait ConfigSource: Send + Sync {
    /// Load the source's top-level mapping.
    ///
    /// Returns `Ok(None)` when the source is absent, which is not an error:
    /// the loader skips it. An empty mapping is treated the same way.
    ///
    /// # Errors
    ///
    /// Returns an error if the source exists but cannot be read or parsed.
    fn load(&self) -> Result<Option<Mapping>>;

    /// Get a human-readable name for this source (for logging and errors).
    fn name(&self) -> String;

    /// Get the priority of this source (higher = takes precedence).
    ///
    /// Standard layer priorities:
    /// - User file (`_config.yml`): 300
    /// - Local machine file (`machine.yml`): 200
    /// - Packaged defaults (`defaults.yml`): 100
    fn priority(&self) -> i32 {
        100
    }
}
