use crate::image_classifier::interface::Classification;
use std::cmp::Ordering;

pub fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|&logit| (logit - max).exp()).collect();
    let sum: f32 = exps.iter().sum();

    if sum > 0.0 && sum.is_finite() {
        exps.into_iter().map(|e| e / sum).collect()
    } else {
        vec![0.0; logits.len()]
    }
}

/// Pairs each score with its label, highest first. Ties keep model order.
pub fn rank(labels: &[String], scores: &[f32]) -> Vec<Classification> {
    let mut classifications: Vec<Classification> = labels
        .iter()
        .zip(scores)
        .map(|(label, &confidence)| Classification {
            label: label.clone(),
            confidence,
        })
        .collect();

    classifications.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });

    classifications
}
