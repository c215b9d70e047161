//! Pillar performance review: input collection, analysis and export.
//!
//! Every operator action flows one immutable [`ReviewInput`] through the
//! [`AnalysisEngine`] and, when requested, the [`ReportExporter`].

pub mod analysis;
pub mod domain;
pub mod export;
pub mod report;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use analysis::{
    AnalysisConfig, AnalysisEngine, Implication, NarrativePolicy, ReviewResult, StatusRatios,
};
pub use domain::{InputError, Pillar, ReviewForm, ReviewInput};
pub use export::{ExportArtifacts, ExportError, ReportExporter};
pub use report::{format_percent, ReviewSummary, ReviewView};
pub use router::review_router;
pub use service::{ReviewOutcome, ReviewService, ReviewServiceError};
