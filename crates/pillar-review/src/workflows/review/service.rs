use super::analysis::{AnalysisConfig, AnalysisEngine, NarrativePolicy, ReviewResult};
use super::domain::{InputError, ReviewForm, ReviewInput};
use super::export::{chart, encode_png, ExportArtifacts, ExportError, ReportExporter};
use super::report::{ReviewSummary, ReviewView};
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum ReviewServiceError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Input and result of one "generate" action.
#[derive(Debug, Clone)]
pub struct ReviewOutcome {
    pub input: ReviewInput,
    pub result: ReviewResult,
}

impl ReviewOutcome {
    pub fn summary(&self) -> ReviewSummary<'_> {
        ReviewSummary::new(&self.input, &self.result)
    }

    pub fn view(&self) -> ReviewView {
        ReviewView::new(&self.input, &self.result)
    }
}

/// Runs collect, analyze and export for the interactive surfaces.
pub struct ReviewService {
    engine: AnalysisEngine,
    exporter: ReportExporter,
}

impl ReviewService {
    pub fn new(config: AnalysisConfig, exporter: ReportExporter) -> Self {
        Self {
            engine: AnalysisEngine::new(config),
            exporter,
        }
    }

    pub fn exporter(&self) -> &ReportExporter {
        &self.exporter
    }

    pub fn default_policy(&self) -> NarrativePolicy {
        self.engine.config().policy
    }

    pub fn analyze(&self, form: &ReviewForm) -> Result<ReviewOutcome, InputError> {
        let input = form.collect().inspect_err(|err| {
            warn!(error = %err, "rejected review input");
        })?;
        let policy = form.policy.unwrap_or(self.engine.config().policy);
        let result = self.engine.analyze_with_policy(&input, policy);
        Ok(ReviewOutcome { input, result })
    }

    pub fn export(
        &self,
        form: &ReviewForm,
    ) -> Result<(ReviewOutcome, ExportArtifacts), ReviewServiceError> {
        let outcome = self.analyze(form)?;
        let artifacts = self.exporter.export(&outcome.input, &outcome.result)?;
        info!(
            pillar = outcome.input.pillar.key(),
            files = artifacts.file_names().len(),
            "review export complete"
        );
        Ok((outcome, artifacts))
    }

    /// Chart PNG rendered in memory; nothing is written to disk.
    pub fn chart_png(&self, form: &ReviewForm) -> Result<Vec<u8>, ReviewServiceError> {
        let input = form.collect()?;
        let image = chart::render_pie_chart(&input);
        encode_png(&image).map_err(|err| ReviewServiceError::Export(ExportError::from(err)))
    }
}
