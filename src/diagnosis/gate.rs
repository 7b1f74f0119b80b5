use crate::diagnosis::label::normalize_label;
use crate::image_classifier::interface::Classification;

pub const MAX_THRESHOLD: u8 = 100;

#[derive(Debug, Clone, PartialEq)]
pub enum GateOutcome {
    /// Top score fell below the threshold; nothing is looked up.
    Inconclusive { score: f32, threshold: u8 },
    Conclusive(Conclusive),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Conclusive {
    pub label: String,
    pub score: f32,
}

/// Decides whether the top prediction is trustworthy enough to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfidenceGate {
    threshold: u8,
}

impl ConfidenceGate {
    /// `threshold` is a percentage; values above 100 are clamped.
    pub fn new(threshold: u8) -> Self {
        Self {
            threshold: threshold.min(MAX_THRESHOLD),
        }
    }

    pub fn evaluate(&self, top: &Classification) -> GateOutcome {
        let score = top.confidence * 100.0;

        if score < f32::from(self.threshold) {
            GateOutcome::Inconclusive {
                score,
                threshold: self.threshold,
            }
        } else {
            GateOutcome::Conclusive(Conclusive {
                label: normalize_label(&top.label),
                score,
            })
        }
    }
}
