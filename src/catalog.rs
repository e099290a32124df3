//! Indicator catalog: canonical names, alias sets and plausibility ranges.
//!
//! The catalog is plain data. The bundled copy lives in
//! `resources/indicator_catalog.json` and is compiled into the binary; a replacement
//! can be loaded from disk with [`IndicatorCatalog::load`] so new indicators or
//! aliases never require touching matcher code.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bundled catalog JSON.
const BUNDLED_CATALOG: &str = include_str!("../resources/indicator_catalog.json");

/// Range applied to indicators the catalog knows nothing about.
pub const DEFAULT_RANGE: PlausibilityRange = PlausibilityRange {
    min: 0.0,
    max: 1000.0,
};

static BUILTIN: LazyLock<IndicatorCatalog> = LazyLock::new(|| {
    IndicatorCatalog::from_json(BUNDLED_CATALOG).expect("bundled indicator catalog is valid")
});

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog {0}: {1}")]
    Io(String, String),

    #[error("Failed to parse catalog {0}: {1}")]
    Parse(String, String),

    #[error("Indicator {0} is declared more than once")]
    DuplicateIndicator(String),

    #[error("Indicator {0} has no aliases or a blank alias")]
    EmptyAliases(String),

    #[error("Indicator {name} has an inverted range [{min}, {max}]")]
    InvertedRange { name: String, min: f64, max: f64 },

    #[error("Sequential order names unknown indicator {0}")]
    UnknownInSequentialOrder(String),

    #[error("Sequential order lists {0} more than once")]
    DuplicateInSequentialOrder(String),
}

/// Canonical indicator identifier (`FT3`, `TSH`, ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndicatorName(String);

impl IndicatorName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IndicatorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IndicatorName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Inclusive bounds a value must fall within to be accepted for an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlausibilityRange {
    pub min: f64,
    pub max: f64,
}

impl PlausibilityRange {
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }
}

/// One catalog entry: the canonical name plus every surface form that refers to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorEntry {
    pub name: IndicatorName,
    pub aliases: Vec<String>,
    pub range: PlausibilityRange,
}

impl IndicatorEntry {
    /// First alias contained in `line`, in declaration order. Case-sensitive.
    pub fn matching_alias<'a>(&'a self, line: &str) -> Option<&'a str> {
        self.aliases
            .iter()
            .map(String::as_str)
            .find(|alias| line.contains(alias))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorCatalog {
    #[serde(default)]
    pub version: u32,
    pub indicators: Vec<IndicatorEntry>,
    /// Assumed top-to-bottom order of indicators on the report, used by the
    /// sequential fallback.
    pub sequential_order: Vec<IndicatorName>,
}

impl IndicatorCatalog {
    /// The catalog compiled into the crate.
    pub fn builtin() -> &'static IndicatorCatalog {
        &BUILTIN
    }

    /// Parse and validate a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: IndicatorCatalog = serde_json::from_str(json)
            .map_err(|e| CatalogError::Parse("<inline>".into(), e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load and validate a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Io(path.display().to_string(), e.to_string()))?;
        let catalog: IndicatorCatalog = serde_json::from_str(&json)
            .map_err(|e| CatalogError::Parse(path.display().to_string(), e.to_string()))?;
        catalog.validate()?;

        tracing::debug!(
            path = %path.display(),
            version = catalog.version,
            indicator_count = catalog.indicators.len(),
            "Loaded indicator catalog"
        );
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for entry in &self.indicators {
            if !seen.insert(&entry.name) {
                return Err(CatalogError::DuplicateIndicator(entry.name.to_string()));
            }
            if entry.aliases.is_empty() || entry.aliases.iter().any(|a| a.trim().is_empty()) {
                return Err(CatalogError::EmptyAliases(entry.name.to_string()));
            }
            if entry.range.min > entry.range.max {
                return Err(CatalogError::InvertedRange {
                    name: entry.name.to_string(),
                    min: entry.range.min,
                    max: entry.range.max,
                });
            }
        }

        if let Some(unknown) = self.sequential_order.iter().find(|n| !seen.contains(n)) {
            return Err(CatalogError::UnknownInSequentialOrder(unknown.to_string()));
        }

        let mut ordered = HashSet::new();
        if let Some(repeated) = self.sequential_order.iter().find(|n| !ordered.insert(*n)) {
            return Err(CatalogError::DuplicateInSequentialOrder(repeated.to_string()));
        }

        Ok(())
    }

    pub fn get(&self, name: &IndicatorName) -> Option<&IndicatorEntry> {
        self.indicators.iter().find(|e| &e.name == name)
    }

    pub fn contains(&self, name: &IndicatorName) -> bool {
        self.get(name).is_some()
    }

    /// Plausibility range for `name`, falling back to [`DEFAULT_RANGE`].
    pub fn range_for(&self, name: &IndicatorName) -> PlausibilityRange {
        self.get(name).map(|e| e.range).unwrap_or(DEFAULT_RANGE)
    }
}
