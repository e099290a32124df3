//! Last-resort alignment of unlabeled numbers against the canonical report order.
//!
//! The canonical order comes from the catalog and reflects a single clinic's layout.
//! Reports that list indicators differently will be misaligned; the range check is
//! the only guard.

use crate::catalog::IndicatorName;

use super::plausibility::RangeValidator;
use super::types::{IndicatorProvenance, MatchSource, NumericToken, Resolutions};
use super::value::parse_value;

/// Every line carrying a parseable number, in document order.
pub fn numeric_candidates(lines: &[String]) -> Vec<(usize, NumericToken)> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(index, line)| parse_value(line).map(|token| (index, token)))
        .collect()
}

pub struct SequentialMatcher<'c> {
    validator: RangeValidator<'c>,
}

impl<'c> SequentialMatcher<'c> {
    pub fn new(validator: RangeValidator<'c>) -> Self {
        Self { validator }
    }

    /// Pair the k-th unresolved indicator of `order` with the k-th numeric line.
    /// Indicators already resolved are neither overwritten nor given a slot.
    pub(crate) fn resolve(
        &self,
        lines: &[String],
        order: &[&IndicatorName],
        resolutions: &mut Resolutions,
    ) {
        let candidates = numeric_candidates(lines);
        let unresolved: Vec<&IndicatorName> = order
            .iter()
            .copied()
            .filter(|name| !resolutions.is_resolved(name))
            .collect();

        tracing::debug!(
            candidate_count = candidates.len(),
            unresolved_count = unresolved.len(),
            "Sequential fallback alignment"
        );

        for (slot, (name, (value_line, token))) in
            unresolved.into_iter().zip(candidates).enumerate()
        {
            if !self.validator.is_plausible(token.magnitude, name) {
                tracing::trace!(
                    indicator = %name,
                    value = token.magnitude,
                    slot,
                    "Sequential pairing rejected"
                );
                continue;
            }
            resolutions.record(IndicatorProvenance {
                indicator: name.clone(),
                token,
                value_line,
                value_text: lines[value_line].clone(),
                source: MatchSource::Sequential { slot },
            });
        }
    }
}
