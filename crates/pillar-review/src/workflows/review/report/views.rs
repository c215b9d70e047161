use super::super::analysis::{NarrativePolicy, ReviewResult, StatusRatios};
use super::super::domain::{Pillar, ReviewInput};
use super::summary::ReviewSummary;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CounterEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub value: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewView {
    pub pillar: Pillar,
    pub pillar_label: &'static str,
    pub title: String,
    pub policy: NarrativePolicy,
    pub counters: Vec<CounterEntry>,
    pub not_completed: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratios: Option<StatusRatios>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub implications: Vec<&'static str>,
    pub recommendations: [&'static str; 3],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub outlook: Vec<&'static str>,
    pub text: String,
}

impl ReviewView {
    pub fn new(input: &ReviewInput, result: &ReviewResult) -> Self {
        let summary = ReviewSummary::new(input, result);
        let counter = |key: &'static str, label: &'static str, value: u32| CounterEntry {
            key,
            label,
            value: i64::from(value),
        };

        let counters = vec![
            counter("total", "Total Projects", input.total),
            counter("not_started", "Not Started", input.not_started),
            counter("in_progress", "In Progress", input.in_progress),
            counter("completed", "Completed", input.completed),
            CounterEntry {
                key: "not_completed",
                label: "Not Completed",
                value: result.not_completed,
            },
            counter("green", "Green Projects (80-100%)", input.green),
            counter("amber", "Amber Projects (60-79%)", input.amber),
            counter("red", "Red Projects (0-59%)", input.red),
        ];

        Self {
            pillar: input.pillar,
            pillar_label: input.pillar.label(),
            title: summary.title(),
            policy: result.policy,
            counters,
            not_completed: result.not_completed,
            ratios: result.ratios,
            implications: result.implication_statements(),
            recommendations: result.recommendations,
            outlook: result.outlook.clone(),
            text: summary.render_text(),
        }
    }
}
