//! # fynesse
//!
//! A scaffold for the *access, assess, address* data-science workflow.
//!
//! ## Overview
//!
//! - **Access**: get the data in, legally and ethically.
//! - **Assess**: understand it, check its quality, label it.
//! - **Address**: answer the question and communicate the result.
//!
//! The stages are traits in [`stages`] whose methods report
//! [`StageError::NotImplemented`](error::StageError::NotImplemented) until a
//! project fills them in. What is implemented is the layered configuration
//! they read from.
//!
//! ## Configuration
//!
//! [`Settings`](config::Settings) merges up to three YAML files, later ones
//! overriding earlier ones key by key:
//!
//! 1. `defaults.yml` shipped with the package
//! 2. `machine.yml` next to it, for per-machine overrides
//! 3. `_config.yml` in the working directory, for per-project overrides
//!
//! The merge is shallow: a top-level key in a later file replaces the earlier
//! value outright, even when both are mappings. Loading fails if a present
//! file does not parse, or if no file contributes a key.
//!
//! ```rust,no_run
//! use fynesse::prelude::*;
//! use fynesse::stages::Pipeline;
//!
//! # fn example() -> Result<()> {
//! let settings = Settings::load()?;
//! let url: Option<String> = settings.get_as("url")?;
//!
//! let pipeline = Pipeline::unimplemented(&settings);
//! if let Err(e) = pipeline.run() {
//!     println!("not there yet: {e}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `env-expand` (default): expand `$VAR` and `${VAR}` in top-level string
//!   values after merging. See [`EnvExpansion`](config::EnvExpansion).

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod sources;
pub mod stages;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::config::{EnvExpansion, Settings, SettingsBuilder, SharedSettings};
    pub use crate::error::{ConfigError, Result, StageError, StageResult};
    pub use crate::stages::{Access, Address, Assess};
}
