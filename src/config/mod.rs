//! Layered configuration: packaged defaults, per-machine overrides, per-project overrides.

mod builder;
mod expand;
mod layer;
mod loader;
mod settings;
mod shared;

pub use builder::SettingsBuilder;
pub use expand::EnvExpansion;
pub use layer::{ConfigLayer, ConfigPaths};
pub use loader::ConfigLoader;
pub use settings::Settings;
pub use shared::SharedSettings;
