use serde::{Deserialize, Serialize};

/// How narrative statements are chosen from the status counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativePolicy {
    /// Every threshold rule that holds contributes a statement, in rule order.
    #[default]
    Thresholds,
    /// A single statement for the largest status band; ties favor green, then amber.
    Dominant,
}

impl NarrativePolicy {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Thresholds => "thresholds",
            Self::Dominant => "dominant",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "thresholds" | "threshold" | "multi" => Some(Self::Thresholds),
            "dominant" | "single" => Some(Self::Dominant),
            _ => None,
        }
    }
}

/// Ratio cut-offs for the threshold policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub policy: NarrativePolicy,
    /// Green share at or above which progress is called positive.
    pub strong_green_ratio: f64,
    /// Green share below which delivery is called weak.
    pub weak_green_ratio: f64,
    /// Amber share strictly above which moderate delays are flagged.
    pub amber_delay_ratio: f64,
    /// Red share at or above which intervention is urgent.
    pub red_urgent_ratio: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            policy: NarrativePolicy::Thresholds,
            strong_green_ratio: 0.5,
            weak_green_ratio: 0.3,
            amber_delay_ratio: 0.3,
            red_urgent_ratio: 0.2,
        }
    }
}

impl AnalysisConfig {
    pub fn with_policy(policy: NarrativePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }
}
