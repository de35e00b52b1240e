//! Assess: understanding the data.
//!
//! Quality checks (missing values, outliers, encodings, dates and time
//! zones), interactive queries and views that let a person verify the data
//! before any question is answered.

use crate::config::Settings;
use crate::error::{Stage, StageError, StageResult};
use crate::stages::{Dataset, LabelledDataset, View};

/// Port for assessing loaded data.
///
/// Every method has a default that returns [`StageError::NotImplemented`].
pub trait Assess {
    /// Load the data and check it, returning a cleaned dataset.
    fn data(&self, settings: &Settings) -> StageResult<Dataset> {
        let _ = settings;
        Err(StageError::not_implemented(Stage::Assess, "data"))
    }

    /// Request user input for some aspect of the data.
    fn query(&self, data: &Dataset) -> StageResult<Dataset> {
        let _ = data;
        Err(StageError::not_implemented(Stage::Assess, "query"))
    }

    /// Provide a view of the data that allows the user to verify some aspect of its quality.
    fn view(&self, data: &Dataset) -> StageResult<View> {
        let _ = data;
        Err(StageError::not_implemented(Stage::Assess, "view"))
    }

    /// Provide a labelled set of data ready for supervised learning.
    fn labelled(&self, data: &Dataset) -> StageResult<LabelledDataset> {
        let _ = data;
        Err(StageError::not_implemented(Stage::Assess, "labelled"))
    }
}
