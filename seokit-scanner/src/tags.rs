// Typed views over the start tags the extractor cares about

use crate::result::{ImageInfo, LinkInfo};
use scraper::node::Element;

/// A `<meta>` tag with its name and property lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaTag {
    pub name: String,
    pub property: String,
    pub content: String,
    pub charset: String,
}

/// Start tags classified by kind. Anything not listed is `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    Html { has_lang: bool },
    Title,
    Meta(MetaTag),
    Heading(u8),
    Img(ImageInfo),
    Anchor(LinkInfo),
    Other,
}

impl Tag {
    pub fn classify(element: &Element) -> Self {
        let attr = |name: &str| element.attr(name).unwrap_or_default().to_string();

        match element.name() {
            "html" => Tag::Html {
                has_lang: element.attr("lang").is_some(),
            },
            "title" => Tag::Title,
            "meta" => Tag::Meta(MetaTag {
                name: attr("name").to_lowercase(),
                property: attr("property").to_lowercase(),
                content: attr("content"),
                charset: attr("charset"),
            }),
            "img" => Tag::Img(ImageInfo {
                src: attr("src"),
                alt: attr("alt"),
                title: attr("title"),
            }),
            "a" => Tag::Anchor(LinkInfo {
                href: attr("href"),
                rel: attr("rel"),
                title: attr("title"),
            }),
            name => match heading_level(name) {
                Some(level) => Tag::Heading(level),
                None => Tag::Other,
            },
        }
    }
}

/// Structured-data marker carried by any element: the `itemtype` value, or
/// the literal `itemscope` when only that attribute is present.
pub fn schema_marker(element: &Element) -> Option<String> {
    match (element.attr("itemtype"), element.attr("itemscope")) {
        (Some(item_type), _) => Some(item_type.to_string()),
        (None, Some(_)) => Some("itemscope".to_string()),
        (None, None) => None,
    }
}

/// Level of an `h1`..`h6` tag name.
pub fn heading_level(name: &str) -> Option<u8> {
    match name {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}
