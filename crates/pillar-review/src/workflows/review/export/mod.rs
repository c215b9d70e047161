mod canvas;
pub mod chart;
mod parts;
pub mod slides;
pub mod summary_image;

pub use canvas::encode_png;

use super::analysis::ReviewResult;
use super::domain::{Pillar, ReviewInput};
use super::report::ReviewSummary;
use image::RgbImage;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("unable to prepare output directory {path:?}: {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("failed to assemble slide deck: {0}")]
    Slides(#[from] zip::result::ZipError),
}

/// Files produced by one export, all keyed by pillar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportArtifacts {
    pub chart: PathBuf,
    pub summary_image: PathBuf,
    pub slides: PathBuf,
}

impl ExportArtifacts {
    pub fn file_names(&self) -> Vec<String> {
        [&self.summary_image, &self.slides, &self.chart]
            .into_iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect()
    }
}

/// Writes chart, summary image and slide deck into a fixed directory.
///
/// Names depend only on the pillar, so a repeat export overwrites the last one.
#[derive(Debug, Clone)]
pub struct ReportExporter {
    output_dir: PathBuf,
}

impl ReportExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Called once at process start.
    pub fn ensure_output_dir(&self) -> Result<(), ExportError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| ExportError::OutputDir {
            path: self.output_dir.clone(),
            source,
        })
    }

    pub fn artifact_paths(&self, pillar: Pillar) -> ExportArtifacts {
        let stem = pillar.file_stem();
        ExportArtifacts {
            chart: self.output_dir.join(format!("{stem}_chart.png")),
            summary_image: self.output_dir.join(format!("{stem}_summary.png")),
            slides: self.output_dir.join(format!("{stem}_summary.pptx")),
        }
    }

    /// Resolves a bare file name inside the output directory. Anything that
    /// could escape the directory yields `None`.
    pub fn resolve_artifact(&self, file_name: &str) -> Option<PathBuf> {
        let plain = !file_name.is_empty()
            && !file_name.contains(|c: char| c == '/' || c == '\\')
            && file_name != "."
            && !file_name.contains("..");
        plain.then(|| self.output_dir.join(file_name))
    }

    pub fn export(
        &self,
        input: &ReviewInput,
        result: &ReviewResult,
    ) -> Result<ExportArtifacts, ExportError> {
        let summary = ReviewSummary::new(input, result);
        let title = summary.title();
        let lines = summary.lines();
        let paths = self.artifact_paths(input.pillar);

        save_png(&chart::render_pie_chart(input), &paths.chart)?;
        save_png(
            &summary_image::render_summary_image(&title, &lines),
            &paths.summary_image,
        )?;

        let write_error = |source| ExportError::Write {
            path: paths.slides.clone(),
            source,
        };
        let file = File::create(&paths.slides).map_err(write_error)?;
        let mut writer = slides::write_slide_deck(BufWriter::new(file), &title, &lines)?;
        writer.flush().map_err(write_error)?;

        info!(
            pillar = input.pillar.key(),
            output_dir = %self.output_dir.display(),
            "exported review artifacts"
        );

        Ok(paths)
    }
}

fn save_png(image: &RgbImage, path: &Path) -> Result<(), ExportError> {
    let bytes = encode_png(image)?;
    fs::write(path, bytes).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
