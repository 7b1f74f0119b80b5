use crate::diagnosis::presenter::DiagnosisView;
use crate::session::render::{InconclusiveView, ScannerPanel, Screen};
use std::fmt::Write;

const BAR_WIDTH: usize = 30;

/// Plain-text rendering of a screen for headless runs.
pub fn format_screen(screen: &Screen) -> String {
    let mut out = String::new();

    if let Some(name) = &screen.specimen_name {
        let _ = writeln!(out, "Specimen: {}", name);
    }
    let _ = writeln!(out, "Accuracy threshold: {}%", screen.threshold);
    out.push('\n');

    match &screen.panel {
        ScannerPanel::AwaitingInput => {
            out.push_str("Upload an image to begin diagnostic analysis.\n");
        }
        ScannerPanel::Decoding { file_name } => {
            let _ = writeln!(out, "Reading {}...", file_name);
        }
        ScannerPanel::Ready => out.push_str("Specimen loaded. Run diagnostics to analyze it.\n"),
        ScannerPanel::Classifying => out.push_str("Processing neural network layers...\n"),
        ScannerPanel::Failed { message } => {
            let _ = writeln!(out, "❌ ANALYSIS FAILED\n{}", message);
        }
        ScannerPanel::Inconclusive(view) => format_inconclusive(&mut out, view),
        ScannerPanel::Conclusive(view) => format_diagnosis(&mut out, view),
    }

    out
}

fn format_inconclusive(out: &mut String, view: &InconclusiveView) {
    let _ = writeln!(out, "{}", view.headline);
    let _ = writeln!(out, "{}", view.detail);
    let _ = writeln!(out, "{}", view.guidance);
}

fn format_diagnosis(out: &mut String, view: &DiagnosisView) {
    let _ = writeln!(out, "{}", view.headline);
    let _ = writeln!(out, "Severity tier: {}", view.severity);
    let _ = writeln!(out, "Risk Assessment: {}", view.risk_label);
    let _ = writeln!(out, "AI Confidence Probability: {}", view.confidence);

    out.push_str("\n📋 Clinical Breakdown\n");
    let _ = writeln!(out, "Condition: {}", view.description);
    let _ = writeln!(out, "Typical Features:\n{}", view.features);
    let _ = writeln!(out, "\nEtiology:\n{}", view.causes);
    let _ = writeln!(out, "\nTreatment:\n{}", view.treatment);
    let _ = writeln!(out, "\nRECOMMENDED ACTION PLAN:\n{}", view.action);

    out.push_str("\n📊 Differential Diagnosis\n");
    let width = view
        .differential
        .iter()
        .map(|entry| entry.condition.chars().count())
        .max()
        .unwrap_or(0);
    for entry in &view.differential {
        let filled = ((entry.probability / 100.0).clamp(0.0, 1.0) * BAR_WIDTH as f32).round() as usize;
        let _ = writeln!(
            out,
            "{:<width$} {}{} {:>6.2}%",
            entry.condition,
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH - filled),
            entry.probability,
            width = width
        );
    }
}
