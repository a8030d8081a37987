use crate::CLAP_STYLING;
use clap::{arg, value_parser};
use std::path::PathBuf;

pub const DEFAULT_SITEMAP_FILE: &str = "sitemap.xml";

pub fn sitemap_command() -> clap::Command {
    clap::Command::new("generate_sitemap")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("generate_sitemap")
        .about("Generates an XML sitemap for all HTML files in the directory")
        .styles(CLAP_STYLING)
        .arg_required_else_help(true)
        .arg(
            arg!(<DIRECTORY>)
                .help("Directory to scan for HTML files")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(arg!(<BASE_URL>).help("Base URL of the website (e.g., https://example.com)"))
        .arg(
            arg!([OUTPUT_FILE])
                .help("Output file path")
                .value_parser(value_parser!(PathBuf))
                .default_value(DEFAULT_SITEMAP_FILE),
        )
        .arg(arg!(--"no-priority" "Exclude priority tags").required(false))
        .arg(arg!(--"no-changefreq" "Exclude changefreq tags").required(false))
        .arg(arg!(-v --"verbose" "Log scanning details to stderr").required(false))
        .after_help("Example:\n  generate_sitemap ./public https://example.com")
}

pub fn analyzer_command() -> clap::Command {
    clap::Command::new("seo_analyzer")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("seo_analyzer")
        .about("Analyzes HTML files for SEO issues")
        .styles(CLAP_STYLING)
        .arg_required_else_help(true)
        .arg(
            arg!(<TARGET>)
                .help("An HTML file, or a directory to scan for HTML files")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(arg!(--"json" "Output results in JSON format").required(false))
        .arg(arg!(-v --"verbose" "Log analysis details to stderr").required(false))
}
