use std::io::Read;
use std::process::ExitCode;

use thiserror::Error;
use thyrolab::{
    config, init_tracing, CatalogError, ExtractionEngine, ExtractionError, ExtractionRequest,
    IndicatorCatalog, IndicatorName,
};

#[derive(Error, Debug)]
enum CliError {
    #[error("Failed to read stdin: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("Failed to serialize result: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads an OCR transcript on stdin and prints the extraction result as JSON.
/// Positional arguments (comma or space separated) restrict the indicators.
fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Extraction failed");
            eprintln!("{}: {e}", config::APP_NAME.to_lowercase());
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    tracing::info!("{} v{}", config::APP_NAME, config::APP_VERSION);

    let loaded;
    let catalog = match config::catalog_override_path() {
        Some(path) => {
            loaded = IndicatorCatalog::load(&path)?;
            &loaded
        }
        None => IndicatorCatalog::builtin(),
    };

    let expected: Vec<IndicatorName> = std::env::args()
        .skip(1)
        .flat_map(|arg| {
            arg.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(IndicatorName::new)
                .collect::<Vec<_>>()
        })
        .collect();

    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;

    let result = ExtractionEngine::new(catalog).extract_request(ExtractionRequest {
        text: Some(text),
        expected,
    })?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
