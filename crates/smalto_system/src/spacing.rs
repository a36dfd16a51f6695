//! Spacing scale resolution.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::soft_warn;

/// Options accepted by [`Spacing::new`]: a scaling factor applied per step,
/// or a fixed scale indexed by step count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpacingOptions {
    Factor(f64),
    Scale(SmallVec<[f64; 8]>),
}

impl Default for SpacingOptions {
    fn default() -> Self {
        Self::Factor(8.0)
    }
}

/// Converts abstract step counts into absolute pixel amounts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Spacing {
    options: SpacingOptions,
}

impl Default for Spacing {
    fn default() -> Self {
        Self::new(SpacingOptions::default())
    }
}

impl Spacing {
    pub fn new(options: SpacingOptions) -> Self {
        Self { options }
    }

    /// Resolves a step count to a pixel amount. Negative steps mirror their
    /// positive counterpart.
    pub fn resolve(&self, step: f64) -> f64 {
        match &self.options {
            SpacingOptions::Factor(unit) => step * unit,
            SpacingOptions::Scale(scale) => {
                let index = step.abs() as usize;

                let value = match scale.get(index) {
                    Some(value) => *value,
                    None => {
                        soft_warn!(
                            "spacing step {step} is outside the configured scale; resolving to 0"
                        );
                        0.0
                    }
                };

                if step < 0.0 { -value } else { value }
            }
        }
    }

    /// The CSS form of [`Spacing::resolve`].
    pub fn css(&self, step: f64) -> String {
        format!("{}px", self.resolve(step))
    }
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use super::*;

    #[test]
    fn test_default_factor_is_eight() {
        let spacing = Spacing::default();
        assert_eq!(spacing.resolve(2.0), 16.0);
        assert_eq!(spacing.css(2.0), "16px");
    }

    #[test]
    fn test_custom_factor() {
        let spacing = Spacing::new(SpacingOptions::Factor(4.0));
        assert_eq!(spacing.css(3.0), "12px");
    }

    #[test]
    fn test_scale_indexes_by_step() {
        let spacing = Spacing::new(SpacingOptions::Scale(smallvec![0.0, 4.0, 10.0]));
        assert_eq!(spacing.resolve(2.0), 10.0);
        assert_eq!(spacing.resolve(-1.0), -4.0);
    }

    #[test]
    fn test_scale_out_of_range_resolves_to_zero() {
        let spacing = Spacing::new(SpacingOptions::Scale(smallvec![0.0, 4.0]));
        assert_eq!(spacing.resolve(5.0), 0.0);
    }

    #[test]
    fn test_deserializes_from_number_or_list() {
        let factor: Spacing = serde_json::from_str("6").expect("number should deserialize");
        assert_eq!(factor.css(1.0), "6px");

        let scale: Spacing = serde_json::from_str("[0, 2, 4]").expect("list should deserialize");
        assert_eq!(scale.css(2.0), "4px");
    }
}
