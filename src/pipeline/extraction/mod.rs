pub mod types;
pub mod sanitize;
pub mod value;
pub mod plausibility;
pub mod positional;
pub mod sequential;
pub mod orchestrator;

pub use types::*;
pub use sanitize::*;
pub use value::*;
pub use plausibility::*;
pub use orchestrator::*;

use thiserror::Error;

/// Malformed invocations only. Heuristic misses are never errors: they show up as
/// indicators missing from `ExtractionResult::values`.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Extraction request has no text")]
    MissingText,

    #[error("Unknown indicator requested: {0}")]
    UnknownIndicator(String),
}
