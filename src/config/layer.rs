//! The three standard configuration layers and where they live.

use std::fmt;
use std::path::{Path, PathBuf};

/// Directory the packaged `defaults.yml` and the per-machine `machine.yml` live in.
const PACKAGE_DIR: &str = env!("CARGO_MANIFEST_DIR");

/// A standard configuration layer, ordered from lowest to highest priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigLayer {
    /// Defaults bundled with the package.
    Default,
    /// Per-machine overrides next to the package.
    Local,
    /// Per-project overrides in the working directory.
    User,
}

impl ConfigLayer {
    /// All layers in merge order.
    pub const ALL: [ConfigLayer; 3] = [Self::Default, Self::Local, Self::User];

    /// Conventional file name for this layer.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Default => "defaults.yml",
            Self::Local => "machine.yml",
            Self::User => "_config.yml",
        }
    }

    /// Loader priority for this layer (higher wins).
    pub fn priority(self) -> i32 {
        match self {
            Self::Default => 100,
            Self::Local => 200,
            Self::User => 300,
        }
    }
}

impl fmt::Display for ConfigLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Local => write!(f, "local"),
            Self::User => write!(f, "user"),
        }
    }
}

/// Candidate paths for the three layers.
///
/// # Examples
///
/// ```rust
/// use fynesse::config::{ConfigLayer, ConfigPaths};
/// use std::path::Path;
///
/// let paths = ConfigPaths::standard();
/// assert_eq!(paths.get(ConfigLayer::User), Path::new("_config.yml"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    default: PathBuf,
    local: PathBuf,
    user: PathBuf,
}

impl ConfigPaths {
    /// Explicit paths for each layer.
    pub fn new(
        default: impl Into<PathBuf>,
        local: impl Into<PathBuf>,
        user: impl Into<PathBuf>,
    ) -> Self {
        Self {
            default: default.into(),
            local: local.into(),
            user: user.into(),
        }
    }

    /// The standard locations.
    ///
    /// `defaults.yml` and `machine.yml` sit in the package directory (the
    /// latter as an absolute path); `_config.yml` stays relative so it is
    /// resolved against the working directory when the load happens.
    pub fn standard() -> Self {
        let package_dir = Path::new(PACKAGE_DIR);
        let local = package_dir.join(ConfigLayer::Local.file_name());
        let local = std::path::absolute(&local).unwrap_or(local);

        Self {
            default: package_dir.join(ConfigLayer::Default.file_name()),
            local,
            user: PathBuf::from(ConfigLayer::User.file_name()),
        }
    }

    /// Path for one layer.
    pub fn get(&self, layer: ConfigLayer) -> &Path {
        match layer {
            ConfigLayer::Default => &self.default,
            ConfigLayer::Local => &self.local,
            ConfigLayer::User => &self.user,
        }
    }

    /// Replace the path for one layer.
    pub fn set(&mut self, layer: ConfigLayer, path: impl Into<PathBuf>) {
        let slot = match layer {
            ConfigLayer::Default => &mut self.default,
            ConfigLayer::Local => &mut self.local,
            ConfigLayer::User => &mut self.user,
        };
        *slot = path.into();
    }

    /// `(layer, path)` pairs in merge order.
    pub fn iter(&self) -> impl Iterator<Item = (ConfigLayer, &Path)> {
        ConfigLayer::ALL.into_iter().map(|layer| (layer, self.get(layer)))
    }
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self::standard()
    }
}
