use crate::diagnosis::label::normalize_label;
use crate::reference_table::condition::{ConditionRecord, Severity};

const BUNDLED: [(&str, ConditionRecord); 7] = [
    (
        "Actinic Keratoses",
        ConditionRecord {
            severity: Severity::High,
            risk_label: "PRE-CANCEROUS / HIGH RISK",
            description: "A rough, scaly patch on the skin caused by years of sun exposure.",
            features: "• Sandpaper-like texture\n• Red, pink, or brown scaly patch\n• Itching or burning sensation",
            causes: "☀️ Specific Cause: Cumulative UV damage from sunlight or tanning beds. The skin cells have been damaged over many years.",
            treatment: "💊 Treatment Protocol: Cryotherapy (freezing), 5-fluorouracil cream, or chemical peels.",
            action: "⚠️ Consult Dermatologist: These can turn into Squamous Cell Carcinoma if ignored.",
        },
    ),
    (
        "Basal Cell Carcinoma",
        ConditionRecord {
            severity: Severity::High,
            risk_label: "MALIGNANT / HIGH RISK",
            description: "The most common form of skin cancer. It grows slowly and rarely spreads.",
            features: "• Pearly or waxy bump\n• Visible blood vessels on the growth\n• A sore that bleeds, heals, and returns",
            causes: "☀️ Specific Cause: Intense, intermittent sun exposure (like sunburns) causing DNA mutations in basal cells.",
            treatment: "💊 Treatment Protocol: Mohs Surgery (gold standard), Excision, or Electrodessication.",
            action: "🚨 Schedule Biopsy: Highly treatable if caught now. Do not wait.",
        },
    ),
    (
        "Benign Keratosis",
        ConditionRecord {
            severity: Severity::Low,
            risk_label: "BENIGN / HARMLESS",
            description: "A non-cancerous skin growth (Seborrheic Keratosis) common in older adults.",
            features: "• Waxy, 'stuck-on' appearance\n• Well-defined borders\n• Tan, brown, or black color",
            causes: "🧬 Specific Cause: Genetic aging process. These are NOT caused by sun and are NOT contagious.",
            treatment: "✅ Treatment Protocol: None needed. Can be frozen off if it gets irritated by clothing.",
            action: "✅ Safe: No action needed unless it changes shape rapidly.",
        },
    ),
    (
        "Dermatofibroma",
        ConditionRecord {
            severity: Severity::Low,
            risk_label: "BENIGN / HARMLESS",
            description: "A firm, non-cancerous bump that often forms after a minor injury.",
            features: "• Firm, hard nodule under the skin\n• Dimples inward when pinched\n• Pink or brown color",
            causes: "🐜 Specific Cause: Often scar tissue reacting to a bug bite, splinter, or shaving nick.",
            treatment: "✅ Treatment Protocol: Harmless. Surgical removal leaves a scar, so doctors usually leave it alone.",
            action: "✅ Safe: It may persist for years but is not dangerous.",
        },
    ),
    (
        "Melanocytic Nevi",
        ConditionRecord {
            severity: Severity::Low,
            risk_label: "BENIGN / MONITOR REQUIRED",
            description: "A common mole. A benign cluster of pigment cells.",
            features: "• Uniform brown or black color\n• Round/Oval shape\n• Sharp, clean borders",
            causes: "🧬 Specific Cause: Genetic clustering of melanocytes. Sun exposure in childhood increases the count.",
            treatment: "✅ Treatment Protocol: No treatment. Removal is only for cosmetic reasons.",
            action: "🔍 Monitor: Watch for the 'ABCDEs' (Asymmetry, Border, Color, Diameter, Evolving).",
        },
    ),
    (
        "Melanoma",
        ConditionRecord {
            severity: Severity::Critical,
            risk_label: "🔴 MALIGNANT / CRITICAL LIFE THREAT",
            description: "The most dangerous skin cancer. Uncontrolled growth of pigment cells.",
            features: "• ASYMMETRICAL shape\n• IRREGULAR, jagged borders\n• MULTIPLE colors (black, blue, red)\n• LARGER than a pencil eraser",
            causes: "⚠️ Specific Cause: Severe DNA damage from UV rays triggering rapid, uncontrolled cell growth.",
            treatment: "🚨 Treatment Protocol: IMMEDIATE wide excision surgery. May require immunotherapy or radiation.",
            action: "🚨 EMERGENCY: See a doctor IMMEDIATELY. Early detection is vital for survival.",
        },
    ),
    (
        "Vascular Lesions",
        ConditionRecord {
            severity: Severity::Low,
            risk_label: "BENIGN / HARMLESS",
            description: "Abnormal bunching of blood vessels near the skin surface.",
            features: "• Bright red or purple color\n• Turns white (blanches) when pressed\n• Soft to the touch",
            causes: "🩸 Specific Cause: Aging (Cherry Angiomas), pregnancy hormones, or liver issues.",
            treatment: "✅ Treatment Protocol: Laser therapy (Vascular Laser) if removal is desired.",
            action: "✅ Safe: Usually harmless. See a doctor only if it bleeds extensively.",
        },
    ),
];

/// Read-only mapping from canonical condition name to its record.
///
/// Built once at startup and shared behind an `Arc`; entries keep their
/// insertion order so the encyclopedia lists them predictably.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    entries: Vec<(&'static str, ConditionRecord)>,
}

impl ReferenceTable {
    pub fn bundled() -> Self {
        Self {
            entries: BUNDLED.to_vec(),
        }
    }

    #[cfg(test)]
    pub fn from_entries(entries: Vec<(&'static str, ConditionRecord)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&ConditionRecord> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, record)| record)
    }

    /// Record for `name`, or [`ConditionRecord::UNKNOWN`] when missing.
    pub fn get_or_unknown(&self, name: &str) -> (&ConditionRecord, bool) {
        match self.get(name) {
            Some(record) => (record, false),
            None => (&ConditionRecord::UNKNOWN, true),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Raw model labels whose normalized form has no entry.
    pub fn unmapped_labels<'a>(&self, raw_labels: &'a [String]) -> Vec<&'a str> {
        raw_labels
            .iter()
            .filter(|raw| self.get(&normalize_label(raw)).is_none())
            .map(String::as_str)
            .collect()
    }
}
