//! The access, assess and address workflow stages.
//!
//! Each stage is a trait whose methods default to
//! [`StageError::NotImplemented`](crate::error::StageError::NotImplemented),
//! so composition code and its tests can be written before any analysis is.

mod access;
mod address;
mod assess;
mod data;
mod pipeline;

pub use access::Access;
pub use address::Address;
pub use assess::Assess;
pub use data::{Dataset, LabelledDataset, Record, Report, View};
pub use pipeline::{Pipeline, Unimplemented};
