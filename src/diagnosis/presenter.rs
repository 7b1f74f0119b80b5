use crate::diagnosis::gate::Conclusive;
use crate::diagnosis::label::normalize_label;
use crate::diagnosis::prediction::PredictionResult;
use crate::reference_table::condition::{Severity, SeverityStyle};
use crate::reference_table::table::ReferenceTable;

pub const DIFFERENTIAL_SIZE: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct DifferentialEntry {
    pub condition: String,
    pub probability: f32,
}

/// Everything a display needs to show a conclusive result.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosisView {
    pub label: String,
    pub severity: Severity,
    pub style: SeverityStyle,
    pub headline: String,
    pub risk_label: String,
    pub confidence: String,
    pub description: String,
    pub features: String,
    pub causes: String,
    pub treatment: String,
    pub action: String,
    pub differential: Vec<DifferentialEntry>,
    pub used_fallback: bool,
}

pub fn present(
    conclusive: &Conclusive,
    prediction: &PredictionResult,
    table: &ReferenceTable,
) -> DiagnosisView {
    let (record, used_fallback) = table.get_or_unknown(&conclusive.label);
    let style = record.severity.style();

    DiagnosisView {
        label: conclusive.label.clone(),
        severity: record.severity,
        style,
        headline: format!(
            "{} DETECTION: {}",
            style.marker,
            conclusive.label.to_uppercase()
        ),
        risk_label: record.risk_label.to_string(),
        confidence: format!("{:.2}%", conclusive.score),
        description: record.description.to_string(),
        features: record.features.to_string(),
        causes: record.causes.to_string(),
        treatment: record.treatment.to_string(),
        action: record.action.to_string(),
        differential: differential(prediction),
        used_fallback,
    }
}

/// Leading candidates in the classifier's own order, as percentages.
pub fn differential(prediction: &PredictionResult) -> Vec<DifferentialEntry> {
    prediction
        .leading(DIFFERENTIAL_SIZE)
        .iter()
        .map(|c| DifferentialEntry {
            condition: normalize_label(&c.label),
            probability: c.confidence * 100.0,
        })
        .collect()
}
