use clap::Args;
use pillar_review::config::AppConfig;
use pillar_review::error::AppError;
use pillar_review::workflows::review::{
    AnalysisConfig, NarrativePolicy, ReportExporter, ReviewForm, ReviewService,
};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone)]
pub(crate) struct CounterArgs {
    /// Pillar name or key (e.g. "Effective Governance", "governance")
    #[arg(long)]
    pub(crate) pillar: String,
    /// Total number of projects tracked under the pillar
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub(crate) total: i64,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub(crate) not_started: i64,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub(crate) in_progress: i64,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub(crate) completed: i64,
    /// Projects at 80-100% delivery
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub(crate) green: i64,
    /// Projects at 60-79% delivery
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub(crate) amber: i64,
    /// Projects below 60% delivery
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub(crate) red: i64,
    /// Narrative policy (thresholds or dominant); defaults to REVIEW_NARRATIVE_POLICY
    #[arg(long, value_parser = crate::infra::parse_policy)]
    pub(crate) policy: Option<NarrativePolicy>,
}

impl From<CounterArgs> for ReviewForm {
    fn from(args: CounterArgs) -> Self {
        Self {
            pillar: args.pillar,
            total: args.total,
            not_started: args.not_started,
            in_progress: args.in_progress,
            completed: args.completed,
            green: args.green,
            amber: args.amber,
            red: args.red,
            policy: args.policy,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    #[command(flatten)]
    pub(crate) counters: CounterArgs,
    /// Print the review view as JSON instead of the flat summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    pub(crate) counters: CounterArgs,
    /// Override REVIEW_OUTPUT_DIR
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with one review per row
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Override REVIEW_OUTPUT_DIR
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let service = review_service(None)?;
    let outcome = service.analyze(&ReviewForm::from(args.counters))?;

    if args.json {
        let payload =
            serde_json::to_string_pretty(&outcome.view()).map_err(std::io::Error::from)?;
        println!("{payload}");
    } else {
        println!("{}", outcome.summary().render_text());
    }

    Ok(())
}

pub(crate) fn run_export(args: ExportArgs) -> Result<(), AppError> {
    let service = review_service(args.output_dir)?;
    service.exporter().ensure_output_dir()?;

    let (outcome, artifacts) = service.export(&ReviewForm::from(args.counters))?;
    println!("{}", outcome.summary().title());
    for path in [&artifacts.summary_image, &artifacts.slides, &artifacts.chart] {
        println!("  {}", path.display());
    }

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let service = review_service(args.output_dir)?;
    service.exporter().ensure_output_dir()?;

    let forms = read_batch(&args.csv)?;
    for (row, form) in forms.iter().enumerate() {
        let (outcome, artifacts) = service
            .export(form)
            .map_err(|err| AppError::Batch(format!("row {}: {err}", row + 1)))?;
        println!(
            "{}: {} files written to {}",
            outcome.input.pillar.label(),
            artifacts.file_names().len(),
            service.exporter().output_dir().display()
        );
    }

    Ok(())
}

/// Rows are numbered from 1, not counting the header.
pub(crate) fn read_batch(path: &Path) -> Result<Vec<ReviewForm>, AppError> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);

    let mut forms = Vec::new();
    for (index, record) in reader.deserialize::<ReviewForm>().enumerate() {
        let form =
            record.map_err(|err| AppError::Batch(format!("row {}: {err}", index + 1)))?;
        forms.push(form);
    }

    if forms.is_empty() {
        return Err(AppError::Batch(format!(
            "{} contains no review rows",
            path.display()
        )));
    }

    Ok(forms)
}

fn review_service(output_dir: Option<PathBuf>) -> Result<ReviewService, AppError> {
    let config = AppConfig::load()?;
    let output_dir = output_dir.unwrap_or(config.review.output_dir);
    Ok(ReviewService::new(
        AnalysisConfig::with_policy(config.review.narrative_policy),
        ReportExporter::new(output_dir),
    ))
}
