use crate::error::Result;
use crate::rules::{Finding, FindingKind, evaluate};
use indicatif::{ProgressBar, ProgressStyle};
use seokit_scanner::{ExtractedFields, HtmlFileWalker, ScanError, extract_fields, read_document};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Options for configuring an analysis batch
#[derive(Debug, Clone, Default)]
pub struct AnalysisOptions {
    pub show_progress_bar: bool,
}

/// Callback for reporting each file as it is picked up
pub type AnalysisProgressCallback = Arc<dyn Fn(&Path) + Send + Sync>;

/// Per-file outcome: a summary of the extracted fields and the classified
/// findings, each list in rule order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub file: String,
    pub title: Option<String>,
    pub meta_description: String,
    pub h1_count: usize,
    pub h1_content: Vec<String>,
    pub total_headings: usize,
    pub total_images: usize,
    pub images_without_alt: usize,
    pub total_links: usize,
    pub has_og_tags: bool,
    pub has_twitter_tags: bool,
    pub has_schema: bool,
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
    pub good_practices: Vec<String>,
}

impl AnalysisResult {
    pub fn new(file: impl Into<String>, fields: &ExtractedFields, findings: Vec<Finding>) -> Self {
        let mut result = Self {
            file: file.into(),
            title: fields.title.clone(),
            meta_description: fields.meta_description().unwrap_or_default().to_string(),
            h1_count: fields.h1_count(),
            h1_content: fields.headings(1).to_vec(),
            total_headings: fields.total_headings(),
            total_images: fields.images.len(),
            images_without_alt: fields.images_without_alt(),
            total_links: fields.links.len(),
            has_og_tags: !fields.og_tags.is_empty(),
            has_twitter_tags: !fields.twitter_tags.is_empty(),
            has_schema: !fields.schema_markup.is_empty(),
            issues: Vec::new(),
            warnings: Vec::new(),
            good_practices: Vec::new(),
        };

        for finding in findings {
            match finding.kind {
                FindingKind::Issue => result.issues.push(finding.message),
                FindingKind::Warning => result.warnings.push(finding.message),
                FindingKind::GoodPractice => result.good_practices.push(finding.message),
            }
        }

        result
    }
}

/// A file that could not be analysed, and why.
#[derive(Debug)]
pub struct AnalysisFailure {
    pub file: PathBuf,
    pub error: ScanError,
}

/// Everything one run produced: successful results in input order plus the
/// files that were skipped.
#[derive(Debug, Default)]
pub struct AnalysisBatch {
    pub results: Vec<AnalysisResult>,
    pub failures: Vec<AnalysisFailure>,
}

impl AnalysisBatch {
    /// A batch fails only when files were attempted and none succeeded.
    pub fn is_success(&self) -> bool {
        !self.results.is_empty() || self.failures.is_empty()
    }
}

/// Analyse markup that is already in memory.
pub fn analyze_document(file: &str, content: &str) -> AnalysisResult {
    let fields = extract_fields(content);
    let findings = evaluate(&fields, content);
    AnalysisResult::new(file, &fields, findings)
}

pub fn analyze_file(path: &Path) -> std::result::Result<AnalysisResult, ScanError> {
    let content = read_document(path)?;
    Ok(analyze_document(&path.to_string_lossy(), &content))
}

/// Resolve the analyzer target: a single file is taken as-is, a directory is
/// walked for HTML files.
pub fn collect_targets(target: &Path) -> Result<Vec<PathBuf>> {
    if target.is_file() {
        return Ok(vec![target.to_path_buf()]);
    }
    if !target.is_dir() {
        return Err(ScanError::NotADirectory(target.to_path_buf()).into());
    }
    Ok(HtmlFileWalker::new(target)?.collect())
}

/// Analyse every file in order. A file that cannot be read is recorded as a
/// failure and the batch moves on.
pub fn execute_analysis(
    files: &[PathBuf],
    options: &AnalysisOptions,
    progress_callback: Option<AnalysisProgressCallback>,
) -> AnalysisBatch {
    info!("Analyzing {} file(s)", files.len());

    let progress_bar = if options.show_progress_bar && files.len() > 1 {
        let pb = ProgressBar::new(files.len() as u64);
        if let Ok(style) =
            ProgressStyle::default_bar().template("{spinner:.cyan} [{bar:30}] {pos}/{len} {msg}")
        {
            pb.set_style(style);
        }
        Some(pb)
    } else {
        None
    };

    let mut batch = AnalysisBatch::default();
    for file in files {
        if let Some(ref callback) = progress_callback {
            callback(file);
        }
        if let Some(ref pb) = progress_bar {
            pb.set_message(file.display().to_string());
        }

        match analyze_file(file) {
            Ok(result) => batch.results.push(result),
            Err(error) => {
                debug!("Error analyzing {}: {}", file.display(), error);
                batch.failures.push(AnalysisFailure {
                    file: file.clone(),
                    error,
                });
            }
        }

        if let Some(ref pb) = progress_bar {
            pb.inc(1);
        }
    }

    if let Some(ref pb) = progress_bar {
        pb.finish_and_clear();
    }

    info!(
        "Analysis complete. {} succeeded, {} failed",
        batch.results.len(),
        batch.failures.len()
    );
    batch
}
