//! Address: answering the question.
//!
//! Confirmatory analysis, predictive models and the plots, dashboards or
//! exported tables that communicate the result.

use crate::error::{Stage, StageError, StageResult};
use crate::stages::{LabelledDataset, Report};

/// Port for turning assessed data into an answer.
pub trait Address {
    /// Analyse the labelled data and report the conclusion.
    ///
    /// # Errors
    ///
    /// The default implementation returns [`StageError::NotImplemented`].
    fn answer(&self, data: &LabelledDataset) -> StageResult<Report> {
        let _ = data;
        Err(StageError::not_implemented(Stage::Address, "answer"))
    }
}
