use crate::catalog::{IndicatorCatalog, IndicatorEntry, IndicatorName};
use crate::config::EngineConfig;

use super::plausibility::RangeValidator;
use super::positional::PositionalMatcher;
use super::sanitize::normalize_lines;
use super::sequential::SequentialMatcher;
use super::types::{ExtractionRequest, ExtractionResult, Resolutions};
use super::ExtractionError;

/// Turns an OCR transcript into indicator values.
///
/// Holds only a borrowed, immutable catalog and copyable configuration, so one engine
/// can serve any number of threads. Every call builds its own accumulator.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionEngine<'c> {
    catalog: &'c IndicatorCatalog,
    config: EngineConfig,
}

impl Default for ExtractionEngine<'static> {
    fn default() -> Self {
        Self::new(IndicatorCatalog::builtin())
    }
}

impl<'c> ExtractionEngine<'c> {
    pub fn new(catalog: &'c IndicatorCatalog) -> Self {
        Self {
            catalog,
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Extract every catalog indicator. Never fails: an empty mapping means nothing
    /// plausible was found.
    pub fn extract(&self, text: &str) -> ExtractionResult {
        let indicators: Vec<&IndicatorEntry> = self.catalog.indicators.iter().collect();
        self.run(text, &indicators)
    }

    /// Extract only the indicators expected for the current report type.
    /// An empty `expected` slice means the whole catalog.
    pub fn extract_for(
        &self,
        text: &str,
        expected: &[IndicatorName],
    ) -> Result<ExtractionResult, ExtractionError> {
        if expected.is_empty() {
            return Ok(self.extract(text));
        }

        if let Some(unknown) = expected.iter().find(|n| !self.catalog.contains(n)) {
            return Err(ExtractionError::UnknownIndicator(unknown.to_string()));
        }

        let indicators: Vec<&IndicatorEntry> = self
            .catalog
            .indicators
            .iter()
            .filter(|e| expected.contains(&e.name))
            .collect();
        Ok(self.run(text, &indicators))
    }

    /// Entry point for requests arriving from outside the process. Absent text is a
    /// malformed invocation, distinct from text that yields no indicators.
    pub fn extract_request(
        &self,
        request: ExtractionRequest,
    ) -> Result<ExtractionResult, ExtractionError> {
        let text = request.text.ok_or(ExtractionError::MissingText)?;
        self.extract_for(&text, &request.expected)
    }

    fn run(&self, text: &str, indicators: &[&IndicatorEntry]) -> ExtractionResult {
        let lines = normalize_lines(text);
        tracing::debug!(
            line_count = lines.len(),
            indicator_count = indicators.len(),
            "Starting indicator extraction"
        );

        let validator = RangeValidator::new(self.catalog);
        let mut resolutions = Resolutions::default();

        PositionalMatcher::new(validator, self.config.window_size).resolve(
            &lines,
            indicators,
            &mut resolutions,
        );
        let positional_count = resolutions.len();

        let fallback_used = positional_count < self.config.fallback_threshold;
        if fallback_used {
            tracing::debug!(
                positional_count,
                threshold = self.config.fallback_threshold,
                "Positional matching insufficient, running sequential fallback"
            );
            let order: Vec<&IndicatorName> = self
                .catalog
                .sequential_order
                .iter()
                .filter(|name| indicators.iter().any(|e| &e.name == *name))
                .collect();
            SequentialMatcher::new(validator).resolve(&lines, &order, &mut resolutions);
        }

        let provenance = resolutions.into_entries();
        let values = provenance
            .iter()
            .map(|p| (p.indicator.clone(), p.token.magnitude))
            .collect();

        tracing::debug!(
            resolved = provenance.len(),
            positional_count,
            fallback_used,
            "Indicator extraction complete"
        );

        ExtractionResult {
            values,
            lines,
            raw_text: text.to_string(),
            provenance,
            fallback_used,
        }
    }
}

/// Extract with the bundled catalog and default configuration.
pub fn extract(text: &str) -> ExtractionResult {
    ExtractionEngine::default().extract(text)
}
