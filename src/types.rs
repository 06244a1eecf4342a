//! Result and classification types shared by the scoring engine.

use std::fmt;

/// Priority attached to a failed check, used to order remediation tips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// All severities in report order (high first).
    pub const ALL: [Severity; 3] = [Severity::High, Severity::Medium, Severity::Low];

    /// Capitalized label used to introduce a tip group in the report.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Qualitative band derived from the score percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SecurityLevel {
    VeryWeak,
    Weak,
    Medium,
    Strong,
}

impl SecurityLevel {
    /// Maps a percentage to a band. Thresholds match 3/8, 5/8 and 7/8
    /// of the default check set.
    pub fn from_percent(percent: u32) -> Self {
        match percent {
            0..=37 => SecurityLevel::VeryWeak,
            38..=62 => SecurityLevel::Weak,
            63..=87 => SecurityLevel::Medium,
            _ => SecurityLevel::Strong,
        }
    }
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SecurityLevel::VeryWeak => "Very Weak",
            SecurityLevel::Weak => "Weak",
            SecurityLevel::Medium => "Medium",
            SecurityLevel::Strong => "Strong",
        };
        write!(f, "{}", label)
    }
}

/// Outcome of one credential evaluation.
///
/// Produced fresh on every [`crate::evaluate`] call and never mutated
/// afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    /// Sum of the weights of passed checks.
    pub score: u32,
    /// Sum of all registered check weights.
    pub total_weight: u32,
    /// `floor(score / total_weight * 100)`, `0` when no checks ran.
    pub percent: u32,
    /// Formatted multi-line report: header, one line per check, and a
    /// "Recommended fixes" section when at least one check failed.
    pub report: String,
}

impl ScoreResult {
    pub fn level(&self) -> SecurityLevel {
        SecurityLevel::from_percent(self.percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_bands_match_eighth_thresholds() {
        // 3/8 = 37%, 5/8 = 62%, 7/8 = 87%
        assert_eq!(SecurityLevel::from_percent(0), SecurityLevel::VeryWeak);
        assert_eq!(SecurityLevel::from_percent(37), SecurityLevel::VeryWeak);
        assert_eq!(SecurityLevel::from_percent(50), SecurityLevel::Weak);
        assert_eq!(SecurityLevel::from_percent(62), SecurityLevel::Weak);
        assert_eq!(SecurityLevel::from_percent(75), SecurityLevel::Medium);
        assert_eq!(SecurityLevel::from_percent(87), SecurityLevel::Medium);
        assert_eq!(SecurityLevel::from_percent(100), SecurityLevel::Strong);
    }

    #[test]
    fn test_severity_labels() {
        assert_eq!(Severity::High.label(), "High");
        assert_eq!(Severity::Medium.label(), "Medium");
        assert_eq!(Severity::Low.label(), "Low");
    }

    #[test]
    fn test_level_display() {
        assert_eq!(SecurityLevel::VeryWeak.to_string(), "Very Weak");
        assert_eq!(SecurityLevel::Strong.to_string(), "Strong");
    }
}
