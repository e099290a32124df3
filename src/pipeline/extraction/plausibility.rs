use crate::catalog::{IndicatorCatalog, IndicatorName};

/// Rejects values that cannot be a real result for the indicator (page numbers,
/// dates, reference-range bounds read as values). Filter only, never corrects.
#[derive(Debug, Clone, Copy)]
pub struct RangeValidator<'c> {
    catalog: &'c IndicatorCatalog,
}

impl<'c> RangeValidator<'c> {
    pub fn new(catalog: &'c IndicatorCatalog) -> Self {
        Self { catalog }
    }

    pub fn is_plausible(&self, value: f64, indicator: &IndicatorName) -> bool {
        self.catalog.range_for(indicator).contains(value)
    }
}

/// [`RangeValidator::is_plausible`] against the bundled catalog.
pub fn is_plausible(value: f64, indicator: &IndicatorName) -> bool {
    RangeValidator::new(IndicatorCatalog::builtin()).is_plausible(value, indicator)
}
