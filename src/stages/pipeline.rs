//! Composes access, assess and address into one run.

use crate::config::Settings;
use crate::error::StageResult;
use crate::stages::{Access, Address, Assess, Report};

/// Stage implementation that provides nothing yet.
///
/// Every operation returns [`StageError::NotImplemented`](crate::error::StageError::NotImplemented).
#[derive(Debug, Clone, Copy, Default)]
pub struct Unimplemented;

impl Access for Unimplemented {}
impl Assess for Unimplemented {}
impl Address for Unimplemented {}

/// The access → assess → address chain.
///
/// # Examples
///
/// ```rust
/// use fynesse::prelude::*;
/// use fynesse::stages::{Pipeline, Unimplemented};
/// use serde_yaml::Mapping;
///
/// let mut values = Mapping::new();
/// values.insert("url".into(), "https://example.com/data.csv".into());
/// let settings = Settings::from_mapping(values).unwrap();
///
/// let pipeline = Pipeline::new(&settings, Unimplemented, Unimplemented, Unimplemented);
/// assert!(pipeline.run().unwrap_err().is_not_implemented());
/// ```
pub struct Pipeline<'a, A, S, D> {
    settings: &'a Settings,
    access: A,
    assess: S,
    address: D,
}

impl<'a, A, S, D> Pipeline<'a, A, S, D>
where
    A: Access,
    S: Assess,
    D: Address,
{
    /// Assemble a pipeline from its stages.
    pub fn new(settings: &'a Settings, access: A, assess: S, address: D) -> Self {
        Self {
            settings,
            access,
            assess,
            address,
        }
    }

    /// The settings every stage reads from.
    pub fn settings(&self) -> &Settings {
        self.settings
    }

    /// Run access, then assess (query and label), then address.
    ///
    /// # Errors
    ///
    /// Returns the first stage error unchanged, including
    /// [`StageError::NotImplemented`](crate::error::StageError::NotImplemented).
    pub fn run(&self) -> StageResult<Report> {
        let raw = self.access.data(self.settings)?;
        tracing::debug!(records = raw.len(), "access complete");

        let checked = self.assess.query(&raw)?;
        let labelled = self.assess.labelled(&checked)?;
        tracing::debug!(records = labelled.labels().len(), "assess complete");

        self.address.answer(&labelled)
    }
}

impl<'a> Pipeline<'a, Unimplemented, Unimplemented, Unimplemented> {
    /// A pipeline whose stages are all still to be written.
    pub fn unimplemented(settings: &'a Settings) -> Self {
        Self::new(settings, Unimplemented, Unimplemented, Unimplemented)
    }
}
