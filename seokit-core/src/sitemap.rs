// Sitemap generation: file paths to canonical URLs, heuristics, XML output

use crate::error::{Result, SeoError};
use chrono::{DateTime, Local, NaiveDate};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use seokit_scanner::{HtmlFileWalker, ScanError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, warn};

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

const FREQUENT_KEYWORDS: &[&str] = &["blog", "news", "article", "post"];
const OCCASIONAL_KEYWORDS: &[&str] = &["index", "home", "about", "contact"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
    Yearly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
        }
    }
}

impl FromStr for ChangeFrequency {
    type Err = SeoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Ok(ChangeFrequency::Weekly),
            "monthly" => Ok(ChangeFrequency::Monthly),
            "yearly" => Ok(ChangeFrequency::Yearly),
            _ => Err(SeoError::InvalidSitemap(format!("Invalid changefreq value: {s}"))),
        }
    }
}

/// Which optional elements each `<url>` carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SitemapOptions {
    pub include_priority: bool,
    pub include_changefreq: bool,
}

impl Default for SitemapOptions {
    fn default() -> Self {
        Self {
            include_priority: true,
            include_changefreq: true,
        }
    }
}

/// An HTML file found on disk together with the URL it is published at.
#[derive(Debug, Clone)]
pub struct SitemapSource {
    pub file_path: PathBuf,
    /// `file_path` relative to the scanned root; the heuristics only see this.
    pub relative_path: PathBuf,
    pub url: String,
    pub last_modified: DateTime<Local>,
}

/// One `<url>` element of a sitemap.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: Option<NaiveDate>,
    pub changefreq: Option<ChangeFrequency>,
    pub priority: Option<f32>,
}

impl SitemapEntry {
    pub fn from_source(source: &SitemapSource, options: &SitemapOptions) -> Self {
        Self {
            loc: source.url.clone(),
            lastmod: Some(source.last_modified.date_naive()),
            changefreq: options
                .include_changefreq
                .then(|| estimate_changefreq(&source.relative_path)),
            priority: options
                .include_priority
                .then(|| estimate_priority(&source.url, &source.relative_path)),
        }
    }
}

/// Walk `root` and pair every HTML file with its URL under `base_url`.
///
/// Files are returned in walk order; nothing is deduplicated, so two files
/// that map to the same URL both appear.
pub fn collect_sources(root: &Path, base_url: &str) -> Result<Vec<SitemapSource>> {
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()).into());
    }
    let root = root.canonicalize()?;
    info!("Collecting HTML files under {}", root.display());

    let mut sources = Vec::new();
    for file_path in HtmlFileWalker::new(&root)? {
        let modified = match fs::metadata(&file_path).and_then(|meta| meta.modified()) {
            Ok(modified) => modified,
            Err(e) => {
                warn!("Skipping {}: {}", file_path.display(), e);
                continue;
            }
        };

        let relative_path = file_path
            .strip_prefix(&root)
            .unwrap_or(file_path.as_path())
            .to_path_buf();
        let url = url_for_path(&relative_path, base_url);
        debug!("{} -> {}", file_path.display(), url);

        sources.push(SitemapSource {
            url,
            relative_path,
            last_modified: DateTime::<Local>::from(modified),
            file_path,
        });
    }

    Ok(sources)
}

/// Canonical URL for a file path relative to the site root.
///
/// `index.html`/`index.htm` map to their directory, other files lose their
/// extension, and the result is joined to `base_url` with a single `/`.
pub fn url_for_path(relative: &Path, base_url: &str) -> String {
    let file_name = relative
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let url_path = if file_name == "index.html" || file_name == "index.htm" {
        relative.parent().map(join_components).unwrap_or_default()
    } else {
        strip_html_extension(&join_components(relative)).to_string()
    };

    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        url_path.trim_start_matches('/')
    )
}

fn join_components(path: &Path) -> String {
    path.components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn strip_html_extension(url_path: &str) -> &str {
    match url_path.rsplit_once('.') {
        Some((stem, ext))
            if ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm") =>
        {
            stem
        }
        _ => url_path,
    }
}

/// Priority from URL depth: the non-empty `/`-separated pieces of the URL
/// (scheme and host included) before any query or fragment. `file_path` is
/// relative to the site root.
pub fn estimate_priority(url: &str, file_path: &Path) -> f32 {
    let path = url.split(|c: char| c == '?' || c == '#').next().unwrap_or_default();
    let segments = path.split('/').filter(|s| !s.is_empty()).count();
    let is_index = file_path.to_string_lossy().to_lowercase().contains("index");

    if segments <= 1 || is_index {
        1.0
    } else if segments == 2 {
        0.8
    } else if segments == 3 {
        0.6
    } else {
        0.4
    }
}

/// Keyword match on the lowercased path relative to the site root.
pub fn estimate_changefreq(file_path: &Path) -> ChangeFrequency {
    let path = file_path.to_string_lossy().to_lowercase();

    if FREQUENT_KEYWORDS.iter().any(|k| path.contains(k)) {
        ChangeFrequency::Weekly
    } else if OCCASIONAL_KEYWORDS.iter().any(|k| path.contains(k)) {
        ChangeFrequency::Monthly
    } else {
        ChangeFrequency::Yearly
    }
}

pub fn format_priority(priority: f32) -> String {
    format!("{priority:.1}")
}

/// Sort `sources` by URL in place and render them as a sitemap document.
pub fn generate_sitemap_xml(
    sources: &mut [SitemapSource],
    options: &SitemapOptions,
) -> Result<String> {
    sources.sort_by(|a, b| a.url.cmp(&b.url));

    let entries: Vec<SitemapEntry> = sources
        .iter()
        .map(|source| SitemapEntry::from_source(source, options))
        .collect();

    write_sitemap(&entries)
}

/// Serialize entries in the given order, indented by two spaces.
pub fn write_sitemap(entries: &[SitemapEntry]) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NAMESPACE));
    writer.write_event(Event::Start(urlset))?;

    for entry in entries {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        write_text_element(&mut writer, "loc", &entry.loc)?;
        if let Some(lastmod) = entry.lastmod {
            write_text_element(&mut writer, "lastmod", &lastmod.format("%Y-%m-%d").to_string())?;
        }
        if let Some(changefreq) = entry.changefreq {
            write_text_element(&mut writer, "changefreq", changefreq.as_str())?;
        }
        if let Some(priority) = entry.priority {
            write_text_element(&mut writer, "priority", &format_priority(priority))?;
        }
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;

    let xml = String::from_utf8(writer.into_inner())
        .map_err(|e| SeoError::InvalidSitemap(e.to_string()))?;

    Ok(xml
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n"))
}

fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Read the `<url>` entries of a sitemap document back.
///
/// Unknown elements are ignored; a `<url>` without `<loc>` is dropped.
pub fn parse_sitemap(xml: &str) -> Result<Vec<SitemapEntry>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut current: Option<SitemapEntry> = None;
    let mut current_element: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                match name.as_str() {
                    "url" => {
                        current = Some(SitemapEntry {
                            loc: String::new(),
                            lastmod: None,
                            changefreq: None,
                            priority: None,
                        });
                    }
                    "loc" | "lastmod" | "changefreq" | "priority" if current.is_some() => {
                        current_element = Some(name);
                    }
                    _ => {}
                }
            }
            Ok(Event::End(e)) => {
                if e.local_name().as_ref() == b"url" {
                    if let Some(entry) = current.take() {
                        if !entry.loc.is_empty() {
                            entries.push(entry);
                        }
                    }
                }
                current_element = None;
            }
            Ok(Event::Text(e)) => {
                if let (Some(element), Some(entry)) = (current_element.as_deref(), current.as_mut())
                {
                    let text = e
                        .unescape()
                        .map_err(|e| SeoError::InvalidSitemap(e.to_string()))?;
                    let text = text.trim();

                    match element {
                        "loc" => entry.loc = text.to_string(),
                        "lastmod" => {
                            entry.lastmod = NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
                        }
                        "changefreq" => entry.changefreq = text.parse().ok(),
                        "priority" => entry.priority = text.parse().ok(),
                        _ => {}
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(SeoError::InvalidSitemap(format!(
                    "XML parse error at position {}: {e}",
                    reader.buffer_position()
                )));
            }
            _ => {}
        }
    }

    Ok(entries)
}
