pub mod catalog;
pub mod config;
pub mod pipeline;

pub use catalog::{CatalogError, IndicatorCatalog, IndicatorName, PlausibilityRange};
pub use config::EngineConfig;
pub use pipeline::extraction::{
    extract, ExtractionEngine, ExtractionError, ExtractionRequest, ExtractionResult,
};

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. Only binaries call this; the library
/// itself never installs one.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
