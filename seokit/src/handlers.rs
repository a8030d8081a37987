use anyhow::Context;
use clap::ArgMatches;
use colored::Colorize;
use seokit_core::analyze::{AnalysisOptions, collect_targets, execute_analysis};
use seokit_core::report::{ReportFormat, generate_report};
use seokit_core::sitemap::{SitemapOptions, collect_sources, generate_sitemap_xml};
use seokit_core::SeoError;
use seokit_scanner::ScanError;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

use crate::commands::DEFAULT_SITEMAP_FILE;

/// Number of URLs echoed back after a sitemap is written.
pub const URL_PREVIEW_LIMIT: usize = 10;

/// Parsed `generate_sitemap` arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapArgs {
    pub directory: PathBuf,
    pub base_url: String,
    pub output: PathBuf,
    pub options: SitemapOptions,
}

impl SitemapArgs {
    pub fn from_matches(args: &ArgMatches) -> Result<Self, String> {
        let directory = args
            .get_one::<PathBuf>("DIRECTORY")
            .cloned()
            .ok_or("A directory to scan is required")?;
        let base_url = args
            .get_one::<String>("BASE_URL")
            .cloned()
            .ok_or("A base URL is required")?;
        let output = args
            .get_one::<PathBuf>("OUTPUT_FILE")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SITEMAP_FILE));

        Ok(Self {
            directory,
            base_url,
            output,
            options: SitemapOptions {
                include_priority: !args.get_flag("no-priority"),
                include_changefreq: !args.get_flag("no-changefreq"),
            },
        })
    }
}

/// Parsed `seo_analyzer` arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerArgs {
    pub target: PathBuf,
    pub format: ReportFormat,
}

impl AnalyzerArgs {
    pub fn from_matches(args: &ArgMatches) -> Result<Self, String> {
        let target = args
            .get_one::<PathBuf>("TARGET")
            .cloned()
            .ok_or("A file or directory to analyze is required")?;
        let format = if args.get_flag("json") {
            ReportFormat::Json
        } else {
            ReportFormat::Text
        };

        Ok(Self { target, format })
    }
}

/// URLs are joined verbatim, so a base that does not parse as an absolute
/// URL only earns a warning.
pub fn base_url_warning(base_url: &str) -> Option<String> {
    match Url::parse(base_url) {
        Ok(url) if !url.cannot_be_a_base() => None,
        Ok(_) => Some(format!(
            "Base URL '{base_url}' cannot carry a path; sitemap URLs may be invalid"
        )),
        Err(e) => Some(format!(
            "Base URL '{base_url}' is not an absolute URL ({e}); sitemap URLs may be invalid"
        )),
    }
}

/// The first few URLs of the sitemap plus a count of the rest.
pub fn format_url_preview<S: AsRef<str>>(urls: &[S]) -> String {
    let mut preview = String::from("\nURLs included:\n");
    for url in urls.iter().take(URL_PREVIEW_LIMIT) {
        preview.push_str(&format!("  - {}\n", url.as_ref()));
    }
    if urls.len() > URL_PREVIEW_LIMIT {
        preview.push_str(&format!(
            "  ... and {} more\n",
            urls.len() - URL_PREVIEW_LIMIT
        ));
    }
    preview
}

pub fn format_next_steps(output: &Path, base_url: &str) -> String {
    format!(
        "\nNext steps:\n\
         1. Upload {} to your website root\n\
         2. Add to robots.txt: Sitemap: {base_url}/sitemap.xml\n\
         3. Submit to search engines (Google Search Console, Bing Webmaster Tools)\n",
        output.display()
    )
}

pub fn write_sitemap_file(path: &Path, xml: &str) -> anyhow::Result<()> {
    fs::write(path, xml)
        .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;
    debug!("Wrote {} bytes to {}", xml.len(), path.display());
    Ok(())
}

/// Files the analyzer should look at, or the message to exit with.
pub fn resolve_targets(target: &Path) -> Result<Vec<PathBuf>, String> {
    match collect_targets(target) {
        Ok(files) if files.is_empty() => {
            Err(format!("No HTML files found in {}", target.display()))
        }
        Ok(files) => Ok(files),
        Err(SeoError::Scan(ScanError::NotADirectory(_))) => Err(format!(
            "Error: {} is not a valid file or directory",
            target.display()
        )),
        Err(e) => Err(format!("Error: {e}")),
    }
}

fn fail(message: &str) -> ! {
    println!("{}", message.red());
    std::process::exit(1);
}

pub fn handle_generate_sitemap(args: &ArgMatches) {
    let args = SitemapArgs::from_matches(args).unwrap_or_else(|e| fail(&e));

    if let Some(warning) = base_url_warning(&args.base_url) {
        eprintln!("{} {}", "⚠".yellow().bold(), warning.yellow());
    }

    if !args.directory.is_dir() {
        fail(&format!(
            "Error: {} is not a valid directory",
            args.directory.display()
        ));
    }

    println!("Scanning {} for HTML files...", args.directory.display());
    let mut sources = collect_sources(&args.directory, &args.base_url)
        .unwrap_or_else(|e| fail(&format!("Error: {e}")));

    if sources.is_empty() {
        fail("No HTML files found");
    }
    println!("Found {} HTML file(s)", sources.len());

    println!("Generating sitemap...");
    let xml = generate_sitemap_xml(&mut sources, &args.options)
        .unwrap_or_else(|e| fail(&format!("Error: {e}")));

    if let Err(e) = write_sitemap_file(&args.output, &xml) {
        fail(&format!("Error: {e:#}"));
    }

    println!(
        "{} {}",
        "✅ Sitemap generated successfully:".green().bold(),
        args.output.display()
    );

    let urls: Vec<&str> = sources.iter().map(|source| source.url.as_str()).collect();
    print!("{}", format_url_preview(&urls));
    print!("{}", format_next_steps(&args.output, &args.base_url));
}

/// Analyse `files`, write the report to `out` and one line per unreadable
/// file to `err`. Returns whether the run counts as a success.
pub fn run_analysis<O: Write, E: Write>(
    files: &[PathBuf],
    format: ReportFormat,
    options: &AnalysisOptions,
    out: &mut O,
    err: &mut E,
) -> anyhow::Result<bool> {
    let batch = execute_analysis(files, options, None);

    for failure in &batch.failures {
        writeln!(
            err,
            "{} {}: {}",
            "Error analyzing".red(),
            failure.file.display(),
            failure.error
        )?;
    }

    let report = generate_report(&batch.results, format).context("Failed to render report")?;
    writeln!(out, "{}", report.trim_end_matches('\n'))?;

    Ok(batch.is_success())
}

pub fn handle_seo_analyzer(args: &ArgMatches) {
    let args = AnalyzerArgs::from_matches(args).unwrap_or_else(|e| fail(&e));
    let files = resolve_targets(&args.target).unwrap_or_else(|e| fail(&e));

    let options = AnalysisOptions {
        show_progress_bar: true,
    };
    let succeeded = run_analysis(
        &files,
        args.format,
        &options,
        &mut io::stdout(),
        &mut io::stderr(),
    )
    .unwrap_or_else(|e| fail(&format!("Error: {e:#}")));

    if !succeeded {
        std::process::exit(1);
    }
}
