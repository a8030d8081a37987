// Report generation from analysis results

use crate::analyze::AnalysisResult;
use crate::error::Result;
use serde::{Deserialize, Serialize};

const RULE_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
}

/// Totals across every analysed file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTotals {
    pub files: usize,
    pub issues: usize,
    pub warnings: usize,
    pub good_practices: usize,
}

impl ReportTotals {
    pub fn from_results(results: &[AnalysisResult]) -> Self {
        Self {
            files: results.len(),
            issues: results.iter().map(|r| r.issues.len()).sum(),
            warnings: results.iter().map(|r| r.warnings.len()).sum(),
            good_practices: results.iter().map(|r| r.good_practices.len()).sum(),
        }
    }

    pub fn closing_remark(&self) -> &'static str {
        if self.issues > 0 {
            "⚠️  Action required: Fix critical issues first"
        } else if self.warnings > 0 {
            "✓ Good foundation. Consider addressing warnings for optimal SEO"
        } else {
            "✅ Excellent! SEO best practices are being followed"
        }
    }
}

pub fn generate_report(results: &[AnalysisResult], format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(generate_text_report(results)),
        ReportFormat::Json => generate_json_report(results),
    }
}

/// Every result serialized as-is, two-space indented.
pub fn generate_json_report(results: &[AnalysisResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

pub fn generate_text_report(results: &[AnalysisResult]) -> String {
    let heavy_rule = "=".repeat(RULE_WIDTH);
    let light_rule = "-".repeat(RULE_WIDTH);
    let mut report = String::new();

    // Header
    report.push_str(&format!("{heavy_rule}\n"));
    report.push_str("SEO ANALYSIS REPORT\n");
    report.push_str(&format!("{heavy_rule}\n\n"));

    for result in results {
        report.push_str(&format!("\nFile: {}\n", result.file));
        report.push_str(&format!("{light_rule}\n"));

        // Summary
        report.push_str(&format!(
            "\nTitle: {}\n",
            result.title.as_deref().filter(|t| !t.is_empty()).unwrap_or("(missing)")
        ));
        report.push_str(&format!(
            "Meta Description: {}\n",
            or_missing(&result.meta_description)
        ));
        report.push_str(&format!("H1 Count: {}\n", result.h1_count));
        if !result.h1_content.is_empty() {
            report.push_str(&format!("H1 Content: {}\n", result.h1_content.join(", ")));
        }
        report.push_str(&format!("Total Headings: {}\n", result.total_headings));
        report.push_str(&format!("Total Images: {}\n", result.total_images));
        report.push_str(&format!("Images without alt: {}\n", result.images_without_alt));
        report.push_str(&format!("Total Links: {}\n", result.total_links));

        push_section(&mut report, "🔴 CRITICAL ISSUES:", &result.issues);
        push_section(&mut report, "⚠️  WARNINGS:", &result.warnings);
        push_section(&mut report, "✅ GOOD PRACTICES:", &result.good_practices);

        report.push('\n');
    }

    // Overall summary
    let totals = ReportTotals::from_results(results);
    report.push_str(&format!("\n{heavy_rule}\n"));
    report.push_str("OVERALL SUMMARY\n");
    report.push_str(&format!("{heavy_rule}\n"));

    report.push_str(&format!("\nTotal files analyzed: {}\n", totals.files));
    report.push_str(&format!("Total critical issues: {}\n", totals.issues));
    report.push_str(&format!("Total warnings: {}\n", totals.warnings));
    report.push_str(&format!("Total good practices: {}\n", totals.good_practices));

    report.push_str(&format!("\n{}\n", totals.closing_remark()));

    report
}

fn or_missing(value: &str) -> &str {
    if value.is_empty() { "(missing)" } else { value }
}

fn push_section(report: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    report.push_str(&format!("\n{heading}\n"));
    for item in items {
        report.push_str(&format!("  - {item}\n"));
    }
}
