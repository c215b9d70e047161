mod config;
mod policy;
mod recommendations;
mod rules;

pub use config::{AnalysisConfig, NarrativePolicy};
pub use recommendations::{outlook_statements, recommendations_for};

use super::domain::{Pillar, ReviewInput};
use policy::dominant_implication;
use rules::threshold_implications;
use serde::Serialize;
use tracing::debug;

/// Stateless evaluator that turns counters into ratios and narrative.
#[derive(Debug, Clone, Default)]
pub struct AnalysisEngine {
    config: AnalysisConfig,
}

impl AnalysisEngine {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn analyze(&self, input: &ReviewInput) -> ReviewResult {
        self.analyze_with_policy(input, self.config.policy)
    }

    /// Same as [`AnalysisEngine::analyze`] with the narrative policy overridden
    /// for this call only.
    pub fn analyze_with_policy(&self, input: &ReviewInput, policy: NarrativePolicy) -> ReviewResult {
        let not_completed = i64::from(input.total) - i64::from(input.completed);
        let ratios = StatusRatios::from_input(input);

        let implications = match (ratios, policy) {
            // Nothing tracked means no majority band either, so the dominant
            // policy stays silent here instead of defaulting to green.
            (None, _) => Vec::new(),
            (Some(ratios), NarrativePolicy::Thresholds) => {
                threshold_implications(&ratios, &self.config)
            }
            (Some(_), NarrativePolicy::Dominant) => vec![dominant_implication(input)],
        };

        let outlook = if input.total > 0 {
            outlook_statements().to_vec()
        } else {
            Vec::new()
        };

        debug!(
            pillar = input.pillar.key(),
            policy = policy.label(),
            implications = implications.len(),
            "analyzed pillar review"
        );

        ReviewResult {
            pillar: input.pillar,
            policy,
            not_completed,
            ratios,
            implications,
            recommendations: recommendations_for(input.pillar),
            outlook,
        }
    }
}

/// Share of `total` in each status band. The bands are independent estimates
/// and need not add up to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatusRatios {
    pub green: f64,
    pub amber: f64,
    pub red: f64,
}

impl StatusRatios {
    /// `None` when no projects are tracked.
    pub fn from_input(input: &ReviewInput) -> Option<Self> {
        if input.total == 0 {
            return None;
        }

        let total = f64::from(input.total);
        Some(Self {
            green: f64::from(input.green) / total,
            amber: f64::from(input.amber) / total,
            red: f64::from(input.red) / total,
        })
    }
}

/// Canned narrative sentence selected by the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Implication {
    PositiveProgress,
    WeakDelivery,
    ModerateDelay,
    UrgentIntervention,
    GreenMajority,
    AmberMajority,
    RedMajority,
}

impl Implication {
    pub const fn statement(self) -> &'static str {
        match self {
            Self::PositiveProgress => "Half or more of the projects are in green status, showing positive progress towards the pillar's objectives.",
            Self::WeakDelivery => "Fewer than 30% of the projects are in green status, pointing to weak delivery that needs corrective action.",
            Self::ModerateDelay => "More than 30% of the projects are in amber status, indicating moderate delays that should be streamlined before they escalate.",
            Self::UrgentIntervention => "At least 20% of the projects are in red status; urgent intervention is required to protect the 2025 targets.",
            Self::GreenMajority => "The majority of the projects are progressing well, with green status indicating timely completion. However, attention should still be given to the red and amber projects to ensure any delays are managed effectively.",
            Self::AmberMajority => "A significant portion of the projects are in the amber status, meaning there are slight delays. Focus on streamlining processes to avoid further delays and get these projects back on track.",
            Self::RedMajority => "The red status indicates serious delays across multiple projects. Immediate intervention is required to understand the bottlenecks and correct course to avoid jeopardizing the objective for 2025.",
        }
    }
}

/// Derived view of one review. Rebuilt on every action and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewResult {
    pub pillar: Pillar,
    pub policy: NarrativePolicy,
    /// `total - completed`, left signed and unclamped.
    pub not_completed: i64,
    pub ratios: Option<StatusRatios>,
    pub implications: Vec<Implication>,
    pub recommendations: [&'static str; 3],
    pub outlook: Vec<&'static str>,
}

impl ReviewResult {
    pub fn implication_statements(&self) -> Vec<&'static str> {
        self.implications
            .iter()
            .map(|implication| implication.statement())
            .collect()
    }
}
