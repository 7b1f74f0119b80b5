use crate::diagnosis::gate::{ConfidenceGate, GateOutcome};
use crate::diagnosis::presenter::{present, DiagnosisView};
use crate::reference_table::condition::SeverityStyle;
use crate::reference_table::table::ReferenceTable;
use crate::session::core::{Stage, State};

pub const INCONCLUSIVE_GUIDANCE: &str =
    "The AI is not confident. Please use a clearer image of a skin lesion.";

#[derive(Debug, Clone, PartialEq)]
pub struct InconclusiveView {
    pub headline: String,
    pub detail: String,
    pub guidance: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScannerPanel {
    AwaitingInput,
    Decoding { file_name: String },
    Ready,
    Classifying,
    Failed { message: String },
    Inconclusive(InconclusiveView),
    Conclusive(Box<DiagnosisView>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub threshold: u8,
    pub specimen_name: Option<String>,
    pub can_run_diagnostics: bool,
    pub busy: bool,
    pub panel: ScannerPanel,
}

/// Gate and presenter run here on every render, so a threshold change
/// re-evaluates the last prediction without classifying again.
pub fn render(state: &State, table: &ReferenceTable) -> Screen {
    let panel = match &state.stage {
        Stage::AwaitingInput => ScannerPanel::AwaitingInput,
        Stage::Decoding { file_name } => ScannerPanel::Decoding {
            file_name: file_name.clone(),
        },
        Stage::SpecimenReady => ScannerPanel::Ready,
        Stage::Classifying => ScannerPanel::Classifying,
        Stage::Failed { message } => ScannerPanel::Failed {
            message: message.clone(),
        },
        Stage::Classified { prediction } => {
            match ConfidenceGate::new(state.threshold).evaluate(prediction.top()) {
                GateOutcome::Inconclusive { score, threshold } => {
                    ScannerPanel::Inconclusive(InconclusiveView {
                        headline: "⚠️ ANALYSIS INCONCLUSIVE".to_string(),
                        detail: format!(
                            "Confidence Level: {:.1}% (Below required {}%)",
                            score, threshold
                        ),
                        guidance: INCONCLUSIVE_GUIDANCE.to_string(),
                    })
                }
                GateOutcome::Conclusive(conclusive) => ScannerPanel::Conclusive(Box::new(
                    present(&conclusive, prediction, table),
                )),
            }
        }
    };

    Screen {
        threshold: state.threshold,
        specimen_name: state.specimen.as_ref().map(|s| s.file_name.clone()),
        can_run_diagnostics: state.can_run_diagnostics(),
        busy: state.is_busy(),
        panel,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EncyclopediaEntry {
    pub name: String,
    pub style: SeverityStyle,
    pub risk_label: String,
    pub description: String,
    pub features: String,
    pub causes: String,
    pub treatment: String,
    pub action: String,
}

pub fn encyclopedia_entry(table: &ReferenceTable, name: &str) -> Option<EncyclopediaEntry> {
    table.get(name).map(|record| EncyclopediaEntry {
        name: name.to_string(),
        style: record.severity.style(),
        risk_label: record.risk_label.to_string(),
        description: record.description.to_string(),
        features: record.features.to_string(),
        causes: record.causes.to_string(),
        treatment: record.treatment.to_string(),
        action: record.action.to_string(),
    })
}
