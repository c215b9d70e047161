use crate::workflows::review::{
    AnalysisConfig, NarrativePolicy, Pillar, ReportExporter, ReviewForm, ReviewInput,
    ReviewService,
};
use std::path::Path;
use std::sync::Arc;

pub(crate) fn input(pillar: Pillar, total: u32, completed: u32, green: u32, amber: u32, red: u32) -> ReviewInput {
    ReviewInput {
        pillar,
        total,
        not_started: 0,
        in_progress: total.saturating_sub(completed),
        completed,
        green,
        amber,
        red,
    }
}

pub(crate) fn governance_scenario() -> ReviewInput {
    input(Pillar::Governance, 10, 6, 6, 3, 1)
}

pub(crate) fn form(pillar: &str, total: i64, completed: i64, green: i64, amber: i64, red: i64) -> ReviewForm {
    ReviewForm {
        pillar: pillar.to_string(),
        total,
        not_started: 0,
        in_progress: total - completed,
        completed,
        green,
        amber,
        red,
        policy: None,
    }
}

pub(crate) fn service(output_dir: &Path, policy: NarrativePolicy) -> Arc<ReviewService> {
    let exporter = ReportExporter::new(output_dir);
    exporter.ensure_output_dir().expect("output dir created");
    Arc::new(ReviewService::new(
        AnalysisConfig::with_policy(policy),
        exporter,
    ))
}
