// Tests for SEO field extraction

use seokit_scanner::{ImageInfo, LinkInfo, extract_fields, read_document};
use std::fs;
use tempfile::TempDir;

const FULL_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>  Summer Festival 2024 | Live Music and Workshops  </title>
    <meta name="Description" content="Three days of concerts.">
    <meta name="keywords" content="festival, music">
    <meta name="robots" content="index, follow">
    <meta property="og:title" content="Summer Festival">
    <meta property="OG:Image" content="/og.png">
    <meta name="twitter:card" content="summary_large_image">
    <link rel="canonical" href="https://example.com/">
</head>
<body itemscope itemtype="https://schema.org/Event">
    <h1>Summer Festival</h1>
    <h2>Line-up</h2>
    <h2>Tickets</h2>
    <img src="/hero.jpg" alt="Main stage" title="Stage">
    <img src="/map.png">
    <a href="/tickets" rel="nofollow" title="Buy">Tickets</a>
    <a href="">Empty</a>
    <a>No href</a>
    <div itemscope></div>
</body>
</html>"#;

// ============================================================================
// Document-Level Fields
// ============================================================================

#[test]
fn test_extract_title_is_trimmed() {
    let fields = extract_fields(FULL_PAGE);
    assert_eq!(
        fields.title.as_deref(),
        Some("Summer Festival 2024 | Live Music and Workshops")
    );
}

#[test]
fn test_extract_flags() {
    let fields = extract_fields(FULL_PAGE);
    assert!(fields.has_lang);
    assert!(fields.has_charset);
    assert!(fields.has_viewport);
}

#[test]
fn test_extract_flags_absent() {
    let fields = extract_fields("<html><head><title>x</title></head><body></body></html>");
    assert!(!fields.has_lang);
    assert!(!fields.has_charset);
    assert!(!fields.has_viewport);
}

#[test]
fn test_empty_charset_does_not_count() {
    let fields = extract_fields(r#"<html><head><meta charset=""></head></html>"#);
    assert!(!fields.has_charset);
}

#[test]
fn test_last_title_run_wins() {
    let fields =
        extract_fields("<html><head><title>First</title><title>Second</title></head></html>");
    assert_eq!(fields.title.as_deref(), Some("Second"));
}

// ============================================================================
// Meta, Open Graph and Twitter
// ============================================================================

#[test]
fn test_extract_meta_tags_case_insensitive_names() {
    let fields = extract_fields(FULL_PAGE);
    assert_eq!(fields.meta_description(), Some("Three days of concerts."));
    assert_eq!(
        fields.meta_tags.get("keywords").map(String::as_str),
        Some("festival, music")
    );
    assert_eq!(
        fields.meta_tags.get("robots").map(String::as_str),
        Some("index, follow")
    );
    assert!(!fields.meta_tags.contains_key("viewport"));
}

#[test]
fn test_extract_open_graph_and_twitter() {
    let fields = extract_fields(FULL_PAGE);
    assert_eq!(
        fields.og_tags.get("og:title").map(String::as_str),
        Some("Summer Festival")
    );
    assert_eq!(
        fields.og_tags.get("og:image").map(String::as_str),
        Some("/og.png")
    );
    assert_eq!(fields.og_tags.len(), 2);
    assert_eq!(
        fields.twitter_tags.get("twitter:card").map(String::as_str),
        Some("summary_large_image")
    );
}

#[test]
fn test_description_without_content_is_recorded_empty() {
    let fields = extract_fields(r#"<html><head><meta name="description"></head></html>"#);
    assert_eq!(fields.meta_description(), Some(""));
}

// ============================================================================
// Headings, Images, Links, Structured Data
// ============================================================================

#[test]
fn test_extract_headings_in_order() {
    let fields = extract_fields(FULL_PAGE);
    assert_eq!(fields.headings(1), ["Summer Festival"]);
    assert_eq!(fields.headings(2), ["Line-up", "Tickets"]);
    assert_eq!(fields.total_headings(), 3);
    assert_eq!(fields.first_heading_level(), Some(1));
}

#[test]
fn test_heading_with_inline_markup_is_one_entry() {
    let fields =
        extract_fields("<html><body><h1>Welcome to <strong>Acme</strong></h1></body></html>");
    assert_eq!(fields.headings(1), ["Welcome to Acme"]);
    assert_eq!(fields.h1_count(), 1);
    assert_eq!(fields.total_headings(), 1);
}

#[test]
fn test_extract_images() {
    let fields = extract_fields(FULL_PAGE);
    assert_eq!(
        fields.images,
        vec![
            ImageInfo {
                src: "/hero.jpg".to_string(),
                alt: "Main stage".to_string(),
                title: "Stage".to_string(),
            },
            ImageInfo {
                src: "/map.png".to_string(),
                alt: String::new(),
                title: String::new(),
            },
        ]
    );
    assert_eq!(fields.images_without_alt(), 1);
}

#[test]
fn test_extract_links_requires_href() {
    let fields = extract_fields(FULL_PAGE);
    assert_eq!(
        fields.links,
        vec![LinkInfo {
            href: "/tickets".to_string(),
            rel: "nofollow".to_string(),
            title: "Buy".to_string(),
        }]
    );
}

#[test]
fn test_extract_schema_markup() {
    let fields = extract_fields(FULL_PAGE);
    assert_eq!(
        fields.schema_markup,
        vec!["https://schema.org/Event", "itemscope"]
    );
}

#[test]
fn test_malformed_markup_is_tolerated() {
    let fields = extract_fields("<html><body><h1>Unclosed<h2>Next");
    assert_eq!(fields.headings(1), ["Unclosed"]);
    assert_eq!(fields.headings(2), ["Next"]);
}

// ============================================================================
// Reading Documents
// ============================================================================

#[test]
fn test_read_document_rejects_invalid_utf8() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.html");
    fs::write(&path, [0x3c, 0x68, 0xff, 0xfe, 0x3e]).unwrap();

    let err = read_document(&path).unwrap_err();
    assert!(err.to_string().contains("bad.html"));
}

#[test]
fn test_read_document_missing_file() {
    let dir = TempDir::new().unwrap();
    assert!(read_document(&dir.path().join("missing.html")).is_err());
}
