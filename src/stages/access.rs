//! Access: getting the data in.
//!
//! Loading from the web, local files or databases, with the legal side
//! (intellectual property, privacy, GDPR) and the ethical side of using the
//! data settled before anything is fetched. Credentials and URLs come from
//! [`Settings`].

use crate::config::Settings;
use crate::error::{Stage, StageError, StageResult};
use crate::stages::Dataset;

/// Port for loading raw data.
pub trait Access {
    /// Read the data from the web or a local file and return it as records.
    ///
    /// # Errors
    ///
    /// The default implementation returns [`StageError::NotImplemented`].
    fn data(&self, settings: &Settings) -> StageResult<Dataset> {
        let _ = settings;
        Err(StageError::not_implemented(Stage::Access, "data"))
    }
}
