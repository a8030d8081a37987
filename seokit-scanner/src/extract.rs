use crate::error::{Result, ScanError};
use crate::result::ExtractedFields;
use crate::tags::{MetaTag, Tag, heading_level, schema_marker};
use scraper::{ElementRef, Html};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Where the next text run is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextTarget {
    Neutral,
    InTitle,
    InHeading(u8),
}

struct Extractor {
    fields: ExtractedFields,
    target: TextTarget,
    /// Text runs of the heading currently open.
    heading_text: Vec<String>,
}

/// Read an HTML file as UTF-8.
pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a document and collect the fields the SEO rules look at.
///
/// Parsing never fails: malformed markup is repaired by the HTML5 tree
/// builder and whatever survives is extracted.
pub fn extract_fields(html: &str) -> ExtractedFields {
    let document = Html::parse_document(html);
    let mut extractor = Extractor {
        fields: ExtractedFields::new(),
        target: TextTarget::Neutral,
        heading_text: Vec::new(),
    };
    extractor.walk(document.root_element());

    debug!(
        title = ?extractor.fields.title,
        headings = extractor.fields.total_headings(),
        images = extractor.fields.images.len(),
        links = extractor.fields.links.len(),
        "Extracted SEO fields"
    );
    extractor.fields
}

impl Extractor {
    fn walk(&mut self, element: ElementRef<'_>) {
        self.start_tag(element);

        for child in element.children() {
            if let Some(child_element) = ElementRef::wrap(child) {
                self.walk(child_element);
            } else if let Some(text) = child.value().as_text() {
                self.text(text);
            }
        }

        self.end_tag(element.value().name());
    }

    fn start_tag(&mut self, element: ElementRef<'_>) {
        let value = element.value();

        match Tag::classify(value) {
            Tag::Html { has_lang } => {
                if has_lang {
                    self.fields.has_lang = true;
                }
            }
            Tag::Title => self.target = TextTarget::InTitle,
            Tag::Meta(meta) => self.meta(meta),
            Tag::Heading(level) => {
                self.heading_text.clear();
                self.target = TextTarget::InHeading(level);
            }
            Tag::Img(image) => self.fields.images.push(image),
            Tag::Anchor(link) => {
                if !link.href.is_empty() {
                    self.fields.links.push(link);
                }
            }
            Tag::Other => {}
        }

        if let Some(marker) = schema_marker(value) {
            self.fields.schema_markup.push(marker);
        }
    }

    fn meta(&mut self, meta: MetaTag) {
        match meta.name.as_str() {
            "description" | "keywords" | "robots" => {
                self.fields
                    .meta_tags
                    .insert(meta.name.clone(), meta.content.clone());
            }
            "viewport" => self.fields.has_viewport = true,
            _ => {
                if !meta.charset.is_empty() {
                    self.fields.has_charset = true;
                }
            }
        }

        if meta.property.starts_with("og:") {
            self.fields
                .og_tags
                .insert(meta.property.clone(), meta.content.clone());
        }

        if meta.name.starts_with("twitter:") {
            self.fields.twitter_tags.insert(meta.name, meta.content);
        }
    }

    fn text(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        match self.target {
            // Later runs overwrite earlier ones.
            TextTarget::InTitle => self.fields.title = Some(text.to_string()),
            TextTarget::InHeading(_) => self.heading_text.push(text.to_string()),
            TextTarget::Neutral => {}
        }
    }

    fn end_tag(&mut self, name: &str) {
        match self.target {
            TextTarget::InHeading(level) if heading_level(name).is_some() => {
                self.flush_heading(level)
            }
            _ => {}
        }
        if name == "title" || heading_level(name).is_some() {
            self.target = TextTarget::Neutral;
        }
    }

    /// One entry per heading element, inline markup included.
    fn flush_heading(&mut self, level: u8) {
        let text = self.heading_text.join(" ");
        self.heading_text.clear();
        if !text.is_empty() {
            self.fields.headings[usize::from(level - 1)].push(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_outside_title_and_headings_is_ignored() {
        let fields = extract_fields("<html><body><p>Just a paragraph</p></body></html>");
        assert_eq!(fields.title, None);
        assert_eq!(fields.total_headings(), 0);
    }

    #[test]
    fn test_inline_markup_stays_in_one_heading() {
        let fields = extract_fields("<body><h2>Hello <em>world</em> again</h2></body>");
        assert_eq!(fields.headings(2), ["Hello world again"]);
        assert_eq!(fields.total_headings(), 1);
    }

    #[test]
    fn test_whitespace_only_heading_is_skipped() {
        let fields = extract_fields("<body><h1>   </h1><h1>Real</h1></body>");
        assert_eq!(fields.headings(1), ["Real"]);
    }

    #[test]
    fn test_text_after_heading_close_is_not_captured() {
        let fields = extract_fields("<body><h1>Top</h1><p>Body text</p></body>");
        assert_eq!(fields.headings(1), ["Top"]);
    }
}
