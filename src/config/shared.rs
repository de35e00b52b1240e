//! A shareable settings handle that can be reloaded in place.

use crate::config::{ConfigLoader, Settings};
use crate::error::Result;
use arc_swap::ArcSwap;
use std::sync::Arc;

/// Cheaply clonable handle to the current [`Settings`] snapshot.
///
/// Reads never block. [`reload`](Self::reload) re-runs the same load and
/// swaps the new snapshot in atomically; if the load fails the old snapshot
/// stays in place.
///
/// # Examples
///
/// ```rust,no_run
/// use fynesse::prelude::*;
///
/// # fn example() -> Result<()> {
/// let shared = Settings::builder().build_shared()?;
///
/// let settings = shared.get();
/// println!("{} keys", settings.len());
///
/// // Pick up edits to _config.yml
/// shared.reload()?;
/// # Ok(())
/// # }
/// ```
pub struct SharedSettings {
    /// The current snapshot, wrapped in ArcSwap for atomic updates
    current: Arc<ArcSwap<Settings>>,
    /// Loader used for reloads
    loader: Arc<ConfigLoader>,
}

impl SharedSettings {
    /// Create a handle from an initial snapshot and the loader that produced it.
    pub(crate) fn with_loader(initial: Settings, loader: ConfigLoader) -> Self {
        Self {
            current: Arc::new(ArcSwap::new(Arc::new(initial))),
            loader: Arc::new(loader),
        }
    }

    /// Get a reference-counted handle to the current snapshot.
    pub fn get(&self) -> Arc<Settings> {
        self.current.load_full()
    }

    /// Reload from all sources.
    ///
    /// # Errors
    ///
    /// Returns the load error and keeps the previous snapshot if any source
    /// fails to parse or no source contributes a key.
    pub fn reload(&self) -> Result<()> {
        let settings = self.loader.load().inspect_err(|e| {
            tracing::warn!(error = %e, "configuration reload failed, keeping previous settings");
        })?;

        self.current.store(Arc::new(settings));
        Ok(())
    }
}

impl Clone for SharedSettings {
    fn clone(&self) -> Self {
        Self {
            current: Arc::clone(&self.current),
            loader: Arc::clone(&self.loader),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::sources::ConfigSource;
    use serde_yaml::{Mapping, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Yields `port: 1`, `port: 2`, ... then nothing once exhausted.
    struct CountingSource {
        calls: AtomicUsize,
        limit: usize,
    }

    impl ConfigSource for CountingSource {
        fn load(&self) -> Result<Option<Mapping>> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if n > self.limit {
                return Ok(None);
            }
            let mut values = Mapping::new();
            values.insert(Value::from("port"), Value::from(n as u64));
            Ok(Some(values))
        }

        fn name(&self) -> String {
            "counting".to_string()
        }
    }

    fn shared(limit: usize) -> SharedSettings {
        let mut loader = ConfigLoader::new();
        loader.add_source(Box::new(CountingSource {
            calls: AtomicUsize::new(0),
            limit,
        }));
        let initial = loader.load().unwrap();
        SharedSettings::with_loader(initial, loader)
    }

    #[test]
    fn test_reload_swaps_snapshot() {
        let shared = shared(5);
        assert_eq!(shared.get()["port"], Value::from(1u64));

        shared.reload().unwrap();
        assert_eq!(shared.get()["port"], Value::from(2u64));
    }

    #[test]
    fn test_failed_reload_keeps_previous() {
        let shared = shared(1);
        let before = shared.get();

        let err = shared.reload().unwrap_err();
        assert!(matches!(err, ConfigError::Missing { .. }));
        assert_eq!(*shared.get(), *before);
    }

    #[test]
    fn test_clone_shares_snapshot() {
        let shared = shared(5);
        let other = shared.clone();

        shared.reload().unwrap();
        assert_eq!(other.get()["port"], Value::from(2u64));
    }
}
