use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Thyrolab";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable pointing at a replacement indicator catalog (JSON).
pub const CATALOG_ENV_VAR: &str = "THYROLAB_CATALOG";

/// Lines scanned from a label (inclusive) when looking for its value.
pub const DEFAULT_WINDOW_SIZE: usize = 10;

/// Sequential fallback runs when positional matching resolved fewer indicators.
pub const DEFAULT_FALLBACK_THRESHOLD: usize = 3;

/// Debug builds log at debug level, release builds at info.
pub fn is_dev() -> bool {
    cfg!(debug_assertions)
}

/// Filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    if is_dev() {
        "thyrolab=debug"
    } else {
        "thyrolab=info"
    }
}

/// Catalog override path from the environment, if set and non-empty.
pub fn catalog_override_path() -> Option<PathBuf> {
    std::env::var(CATALOG_ENV_VAR)
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
}

/// Tunable matcher heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub window_size: usize,
    pub fallback_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            fallback_threshold: DEFAULT_FALLBACK_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_thyrolab() {
        assert_eq!(APP_NAME, "Thyrolab");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn default_engine_config() {
        let config = EngineConfig::default();
        assert_eq!(config.window_size, 10);
        assert_eq!(config.fallback_threshold, 3);
    }

    #[test]
    fn log_filter_targets_crate() {
        assert!(default_log_filter().starts_with("thyrolab="));
    }
}
