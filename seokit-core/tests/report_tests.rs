use seokit_core::analyze::{AnalysisResult, analyze_document};
use seokit_core::report::{
    ReportFormat, ReportTotals, generate_json_report, generate_report, generate_text_report,
};

const GOOD_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>A reasonably sized page title for the report</title>
  <meta name="description" content="A description that is long enough to pass the minimum length check for meta descriptions, which wants at least one hundred and twenty chars.">
  <link rel="canonical" href="https://example.com/">
  <meta property="og:title" content="T">
  <meta property="og:description" content="D">
  <meta property="og:image" content="I">
  <meta property="og:url" content="U">
  <meta name="twitter:card" content="summary">
</head>
<body itemscope itemtype="https://schema.org/WebPage">
  <h1>Welcome</h1>
  <img src="hero.png" alt="Hero">
  <a href="/about">About</a>
</body>
</html>"#;

fn bare_result() -> AnalysisResult {
    analyze_document("bare.html", "<html><body><h2>Sub</h2></body></html>")
}

#[test]
fn test_text_report_layout() {
    let report = generate_text_report(&[bare_result()]);
    let heavy = "=".repeat(80);
    let light = "-".repeat(80);

    assert!(report.starts_with(&format!("{heavy}\nSEO ANALYSIS REPORT\n{heavy}\n\n")));
    assert!(report.contains(&format!("\nFile: bare.html\n{light}\n")));
    assert!(report.contains("\nTitle: (missing)\n"));
    assert!(report.contains("Meta Description: (missing)\n"));
    assert!(report.contains("H1 Count: 0\n"));
    assert!(!report.contains("H1 Content:"));
    assert!(report.contains("Total Headings: 1\n"));
    assert!(report.contains("\n🔴 CRITICAL ISSUES:\n  - Missing <title> tag\n"));
    assert!(report.contains("\n⚠️  WARNINGS:\n  - Missing charset meta tag\n"));
    assert!(!report.contains("GOOD PRACTICES:"));
    assert!(report.contains(&format!("\n{heavy}\nOVERALL SUMMARY\n{heavy}\n")));
    assert!(report.contains("\nTotal files analyzed: 1\n"));
    assert!(report.ends_with("\n⚠️  Action required: Fix critical issues first\n"));
}

#[test]
fn test_text_report_lists_h1_content() {
    let result = analyze_document("good.html", GOOD_PAGE);
    let report = generate_text_report(&[result]);

    assert!(report.contains("H1 Count: 1\nH1 Content: Welcome\n"));
    assert!(report.contains("\n✅ GOOD PRACTICES:\n"));
    assert!(report.contains("  - Exactly one H1 heading\n"));
    assert!(report.contains("  - Schema.org markup found: https://schema.org/WebPage\n"));
}

#[test]
fn test_text_report_contains_no_ansi_escapes() {
    let report = generate_text_report(&[bare_result(), analyze_document("good.html", GOOD_PAGE)]);
    assert!(!report.contains('\u{1b}'));
}

#[test]
fn test_closing_remarks() {
    let issues = ReportTotals {
        files: 1,
        issues: 2,
        warnings: 5,
        good_practices: 0,
    };
    let warnings = ReportTotals {
        issues: 0,
        ..issues
    };
    let clean = ReportTotals {
        warnings: 0,
        ..warnings
    };

    assert_eq!(
        issues.closing_remark(),
        "⚠️  Action required: Fix critical issues first"
    );
    assert_eq!(
        warnings.closing_remark(),
        "✓ Good foundation. Consider addressing warnings for optimal SEO"
    );
    assert_eq!(
        clean.closing_remark(),
        "✅ Excellent! SEO best practices are being followed"
    );
}

#[test]
fn test_totals_sum_every_result() {
    let bare = bare_result();
    let good = analyze_document("good.html", GOOD_PAGE);
    let totals = ReportTotals::from_results(&[bare.clone(), good.clone()]);

    assert_eq!(totals.files, 2);
    assert_eq!(totals.issues, bare.issues.len() + good.issues.len());
    assert_eq!(totals.warnings, bare.warnings.len() + good.warnings.len());
    assert_eq!(
        totals.good_practices,
        bare.good_practices.len() + good.good_practices.len()
    );
}

#[test]
fn test_empty_report_still_has_summary() {
    let report = generate_text_report(&[]);
    assert!(report.contains("Total files analyzed: 0\n"));
    assert!(report.ends_with("\n✅ Excellent! SEO best practices are being followed\n"));
}

#[test]
fn test_json_report_field_names() {
    let json = generate_json_report(&[bare_result()]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let record = &value[0];

    assert_eq!(record["file"], "bare.html");
    assert!(record["title"].is_null());
    assert_eq!(record["meta_description"], "");
    assert_eq!(record["h1_count"], 0);
    assert_eq!(record["h1_content"], serde_json::json!([]));
    assert_eq!(record["total_headings"], 1);
    assert_eq!(record["total_images"], 0);
    assert_eq!(record["images_without_alt"], 0);
    assert_eq!(record["total_links"], 0);
    assert_eq!(record["has_og_tags"], false);
    assert_eq!(record["has_twitter_tags"], false);
    assert_eq!(record["has_schema"], false);
    assert_eq!(record["issues"][0], "Missing <title> tag");
    assert!(record["warnings"].is_array());
    assert!(record["good_practices"].is_array());
    assert!(json.contains("\n  {\n    \"file\""));
}

#[test]
fn test_json_report_round_trips() {
    let results = vec![bare_result(), analyze_document("good.html", GOOD_PAGE)];
    let json = generate_report(&results, ReportFormat::Json).unwrap();
    let parsed: Vec<AnalysisResult> = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, results);
}
