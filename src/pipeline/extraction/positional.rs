use crate::catalog::IndicatorEntry;

use super::plausibility::RangeValidator;
use super::types::{IndicatorProvenance, MatchSource, Resolutions};
use super::value::parse_value;

/// Finds indicator labels and reads the first plausible value at or below them.
pub struct PositionalMatcher<'c> {
    validator: RangeValidator<'c>,
    window_size: usize,
}

impl<'c> PositionalMatcher<'c> {
    pub fn new(validator: RangeValidator<'c>, window_size: usize) -> Self {
        Self {
            validator,
            window_size,
        }
    }

    /// Scan `lines` top to bottom. `indicators` is iterated in catalog order so
    /// repeated runs on the same input resolve identically.
    pub(crate) fn resolve(
        &self,
        lines: &[String],
        indicators: &[&IndicatorEntry],
        resolutions: &mut Resolutions,
    ) {
        for (label_line, line) in lines.iter().enumerate() {
            for entry in indicators {
                if resolutions.is_resolved(&entry.name) {
                    continue;
                }
                let Some(alias) = entry.matching_alias(line) else {
                    continue;
                };

                let end = label_line.saturating_add(self.window_size).min(lines.len());
                let found = lines[label_line..end]
                    .iter()
                    .enumerate()
                    .find_map(|(offset, candidate)| {
                        let token = parse_value(candidate)?;
                        if self.validator.is_plausible(token.magnitude, &entry.name) {
                            Some((label_line + offset, token))
                        } else {
                            tracing::trace!(
                                indicator = %entry.name,
                                value = token.magnitude,
                                line = label_line + offset,
                                "Implausible value skipped"
                            );
                            None
                        }
                    });

                if let Some((value_line, token)) = found {
                    resolutions.record(IndicatorProvenance {
                        indicator: entry.name.clone(),
                        token,
                        value_line,
                        value_text: lines[value_line].clone(),
                        source: MatchSource::Positional {
                            label_line,
                            alias: alias.to_string(),
                        },
                    });
                }
            }
        }
    }
}
