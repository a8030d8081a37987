use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const HEADING_LEVELS: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub src: String,
    pub alt: String,
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkInfo {
    pub href: String,
    pub rel: String,
    pub title: String,
}

/// Everything the SEO rules need from one parsed document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub title: Option<String>,
    /// Only `description`, `keywords` and `robots` are recorded.
    pub meta_tags: HashMap<String, String>,
    /// Index 0 holds `<h1>` texts, index 5 holds `<h6>` texts, in document order.
    pub headings: [Vec<String>; HEADING_LEVELS],
    pub images: Vec<ImageInfo>,
    pub links: Vec<LinkInfo>,
    pub has_lang: bool,
    pub has_viewport: bool,
    pub has_charset: bool,
    pub og_tags: HashMap<String, String>,
    pub twitter_tags: HashMap<String, String>,
    pub schema_markup: Vec<String>,
}

impl ExtractedFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texts of the given heading level (1..=6). Out-of-range levels are empty.
    pub fn headings(&self, level: u8) -> &[String] {
        match level {
            1..=6 => &self.headings[usize::from(level - 1)],
            _ => &[],
        }
    }

    pub fn h1_count(&self) -> usize {
        self.headings[0].len()
    }

    pub fn total_headings(&self) -> usize {
        self.headings.iter().map(Vec::len).sum()
    }

    /// Level of the first heading tier that has any content.
    pub fn first_heading_level(&self) -> Option<u8> {
        self.headings
            .iter()
            .position(|texts| !texts.is_empty())
            .and_then(|idx| u8::try_from(idx + 1).ok())
    }

    pub fn meta_description(&self) -> Option<&str> {
        self.meta_tags.get("description").map(String::as_str)
    }

    pub fn images_without_alt(&self) -> usize {
        self.images.iter().filter(|img| img.alt.is_empty()).count()
    }

    /// Distinct structured-data types in first-seen order.
    pub fn schema_types(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for item in &self.schema_markup {
            if !seen.contains(&item.as_str()) {
                seen.push(item);
            }
        }
        seen
    }
}
