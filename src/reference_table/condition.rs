use std::fmt;

/// Coarse risk bucket for a condition, driving how urgently a result is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Low,
    High,
    Critical,
}

/// Visual tone a display maps to its own colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityStyle {
    pub tone: Tone,
    pub marker: &'static str,
}

impl Severity {
    pub const fn style(self) -> SeverityStyle {
        match self {
            Self::Critical => SeverityStyle {
                tone: Tone::Error,
                marker: "🔴",
            },
            Self::High => SeverityStyle {
                tone: Tone::Warning,
                marker: "🟠",
            },
            Self::Low => SeverityStyle {
                tone: Tone::Success,
                marker: "🟢",
            },
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clinical metadata for one known condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionRecord {
    pub severity: Severity,
    pub risk_label: &'static str,
    pub description: &'static str,
    /// One feature per line, shown verbatim.
    pub features: &'static str,
    pub causes: &'static str,
    pub treatment: &'static str,
    pub action: &'static str,
}

impl ConditionRecord {
    /// Stand-in for labels the table does not know.
    pub const UNKNOWN: ConditionRecord = ConditionRecord {
        severity: Severity::Low,
        risk_label: "UNKNOWN",
        description: "N/A",
        features: "N/A",
        causes: "N/A",
        treatment: "N/A",
        action: "Consult doctor",
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_styles_are_distinct() {
        assert_eq!(Severity::Critical.style().tone, Tone::Error);
        assert_eq!(Severity::High.style().tone, Tone::Warning);
        assert_eq!(Severity::Low.style().tone, Tone::Success);
    }

    #[test]
    fn test_unknown_record() {
        let record = ConditionRecord::UNKNOWN;
        assert_eq!(record.severity, Severity::Low);
        assert_eq!(record.risk_label, "UNKNOWN");
        assert_eq!(record.action, "Consult doctor");
        assert_eq!(record.treatment, "N/A");
    }
}
