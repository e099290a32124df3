use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::IndicatorName;

/// Threshold marker printed in front of a lab value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Qualifier {
    #[default]
    None,
    LessThan,
    GreaterThan,
}

/// A number read off one line. `magnitude` never carries the qualifier:
/// `<1.3` is stored as `1.3` with `Qualifier::LessThan`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericToken {
    pub qualifier: Qualifier,
    pub magnitude: f64,
}

/// How an indicator value was located.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchSource {
    /// Label found on `label_line`, value found within the forward window.
    Positional { label_line: usize, alias: String },
    /// Paired by position against the canonical report order.
    Sequential { slot: usize },
}

/// Where a resolved value came from, kept for debugging extraction misses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorProvenance {
    pub indicator: IndicatorName,
    pub token: NumericToken,
    pub value_line: usize,
    pub value_text: String,
    pub source: MatchSource,
}

/// Output of one extraction call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub values: BTreeMap<IndicatorName, f64>,
    pub lines: Vec<String>,
    pub raw_text: String,
    pub provenance: Vec<IndicatorProvenance>,
    pub fallback_used: bool,
}

impl ExtractionResult {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(&IndicatorName::new(name)).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn provenance_for(&self, name: &str) -> Option<&IndicatorProvenance> {
        self.provenance.iter().find(|p| p.indicator.as_str() == name)
    }
}

/// Request envelope used at the process boundary (JSON from the OCR front end).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionRequest {
    pub text: Option<String>,
    /// Indicators expected for this report type. Empty means the whole catalog.
    #[serde(default)]
    pub expected: Vec<IndicatorName>,
}

/// Per-call accumulator. First assignment per indicator wins.
#[derive(Debug, Default)]
pub(crate) struct Resolutions {
    entries: Vec<IndicatorProvenance>,
}

impl Resolutions {
    pub(crate) fn is_resolved(&self, name: &IndicatorName) -> bool {
        self.entries.iter().any(|p| &p.indicator == name)
    }

    /// Returns `false` when the indicator already had a value.
    pub(crate) fn record(&mut self, provenance: IndicatorProvenance) -> bool {
        if self.is_resolved(&provenance.indicator) {
            return false;
        }
        tracing::trace!(
            indicator = %provenance.indicator,
            value = provenance.token.magnitude,
            line = provenance.value_line,
            "Indicator resolved"
        );
        self.entries.push(provenance);
        true
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn into_entries(self) -> Vec<IndicatorProvenance> {
        self.entries
    }
}
