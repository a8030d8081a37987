// Heuristic SEO checks over extracted document fields

use seokit_scanner::ExtractedFields;
use serde::{Deserialize, Serialize};

pub const TITLE_MIN_CHARS: usize = 30;
pub const TITLE_MAX_CHARS: usize = 60;
pub const DESCRIPTION_MIN_CHARS: usize = 120;
pub const DESCRIPTION_MAX_CHARS: usize = 160;
pub const MIN_CONTENT_CHARS: usize = 300;
pub const REQUIRED_OG_TAGS: &[&str] = &["og:title", "og:description", "og:image", "og:url"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// A hard SEO defect.
    Issue,
    /// A soft recommendation.
    Warning,
    GoodPractice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Title,
    MetaDescription,
    Lang,
    Charset,
    Viewport,
    H1Count,
    HeadingHierarchy,
    ImageAlt,
    OpenGraph,
    TwitterCard,
    SchemaMarkup,
    Canonical,
    ContentLength,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub rule: Rule,
    pub kind: FindingKind,
    pub message: String,
}

impl Finding {
    fn new(rule: Rule, kind: FindingKind, message: impl Into<String>) -> Self {
        Self {
            rule,
            kind,
            message: message.into(),
        }
    }
}

pub fn check_title(fields: &ExtractedFields) -> Vec<Finding> {
    let finding = match fields.title.as_deref() {
        None | Some("") => Finding::new(Rule::Title, FindingKind::Issue, "Missing <title> tag"),
        Some(title) => {
            let len = title.chars().count();
            if len < TITLE_MIN_CHARS {
                Finding::new(
                    Rule::Title,
                    FindingKind::Warning,
                    format!("Title too short ({len} chars). Recommended: 50-60 characters"),
                )
            } else if len > TITLE_MAX_CHARS {
                Finding::new(
                    Rule::Title,
                    FindingKind::Warning,
                    format!("Title too long ({len} chars). May be truncated in search results"),
                )
            } else {
                Finding::new(
                    Rule::Title,
                    FindingKind::GoodPractice,
                    format!("Title length optimal ({len} chars)"),
                )
            }
        }
    };

    vec![finding]
}

pub fn check_meta_description(fields: &ExtractedFields) -> Vec<Finding> {
    let Some(description) = fields.meta_description() else {
        return vec![Finding::new(
            Rule::MetaDescription,
            FindingKind::Issue,
            "Missing meta description",
        )];
    };

    let len = description.chars().count();
    let finding = if len < DESCRIPTION_MIN_CHARS {
        Finding::new(
            Rule::MetaDescription,
            FindingKind::Warning,
            format!("Meta description too short ({len} chars). Recommended: 150-160 characters"),
        )
    } else if len > DESCRIPTION_MAX_CHARS {
        Finding::new(
            Rule::MetaDescription,
            FindingKind::Warning,
            format!("Meta description too long ({len} chars). May be truncated in search results"),
        )
    } else {
        Finding::new(
            Rule::MetaDescription,
            FindingKind::GoodPractice,
            format!("Meta description length optimal ({len} chars)"),
        )
    };

    vec![finding]
}

pub fn check_lang(fields: &ExtractedFields) -> Vec<Finding> {
    if fields.has_lang {
        vec![Finding::new(
            Rule::Lang,
            FindingKind::GoodPractice,
            "HTML lang attribute present",
        )]
    } else {
        vec![Finding::new(
            Rule::Lang,
            FindingKind::Issue,
            "Missing 'lang' attribute on <html> tag",
        )]
    }
}

pub fn check_charset(fields: &ExtractedFields) -> Vec<Finding> {
    if fields.has_charset {
        return Vec::new();
    }
    vec![Finding::new(
        Rule::Charset,
        FindingKind::Warning,
        "Missing charset meta tag",
    )]
}

pub fn check_viewport(fields: &ExtractedFields) -> Vec<Finding> {
    if fields.has_viewport {
        vec![Finding::new(
            Rule::Viewport,
            FindingKind::GoodPractice,
            "Viewport meta tag present",
        )]
    } else {
        vec![Finding::new(
            Rule::Viewport,
            FindingKind::Warning,
            "Missing viewport meta tag (important for mobile SEO)",
        )]
    }
}

pub fn check_h1_count(fields: &ExtractedFields) -> Vec<Finding> {
    let finding = match fields.h1_count() {
        0 => Finding::new(Rule::H1Count, FindingKind::Issue, "Missing H1 heading"),
        1 => Finding::new(
            Rule::H1Count,
            FindingKind::GoodPractice,
            "Exactly one H1 heading",
        ),
        count => Finding::new(
            Rule::H1Count,
            FindingKind::Warning,
            format!("Multiple H1 headings ({count}). Recommended: exactly 1 H1 per page"),
        ),
    };

    vec![finding]
}

pub fn check_heading_hierarchy(fields: &ExtractedFields) -> Vec<Finding> {
    match fields.first_heading_level() {
        Some(level) if level > 1 => vec![Finding::new(
            Rule::HeadingHierarchy,
            FindingKind::Warning,
            format!("Heading hierarchy starts at H{level} instead of H1"),
        )],
        _ => Vec::new(),
    }
}

pub fn check_image_alt(fields: &ExtractedFields) -> Vec<Finding> {
    if fields.images.is_empty() {
        return Vec::new();
    }

    match fields.images_without_alt() {
        0 => vec![Finding::new(
            Rule::ImageAlt,
            FindingKind::GoodPractice,
            "All images have alt attributes",
        )],
        missing => vec![Finding::new(
            Rule::ImageAlt,
            FindingKind::Issue,
            format!("{missing} image(s) missing alt attributes"),
        )],
    }
}

pub fn check_open_graph(fields: &ExtractedFields) -> Vec<Finding> {
    let missing: Vec<&str> = REQUIRED_OG_TAGS
        .iter()
        .copied()
        .filter(|tag| !fields.og_tags.contains_key(*tag))
        .collect();

    if missing.is_empty() {
        vec![Finding::new(
            Rule::OpenGraph,
            FindingKind::GoodPractice,
            "All essential Open Graph tags present",
        )]
    } else {
        vec![Finding::new(
            Rule::OpenGraph,
            FindingKind::Warning,
            format!("Missing Open Graph tags: {}", missing.join(", ")),
        )]
    }
}

pub fn check_twitter_card(fields: &ExtractedFields) -> Vec<Finding> {
    if fields.twitter_tags.contains_key("twitter:card") {
        vec![Finding::new(
            Rule::TwitterCard,
            FindingKind::GoodPractice,
            "Twitter Card tags present",
        )]
    } else {
        vec![Finding::new(
            Rule::TwitterCard,
            FindingKind::Warning,
            "Missing Twitter Card tags",
        )]
    }
}

pub fn check_schema_markup(fields: &ExtractedFields) -> Vec<Finding> {
    if fields.schema_markup.is_empty() {
        vec![Finding::new(
            Rule::SchemaMarkup,
            FindingKind::Warning,
            "No schema.org structured data found",
        )]
    } else {
        vec![Finding::new(
            Rule::SchemaMarkup,
            FindingKind::GoodPractice,
            format!(
                "Schema.org markup found: {}",
                fields.schema_types().join(", ")
            ),
        )]
    }
}

/// Plain substring search over the lowercased markup; attribute order and
/// quoting matter.
pub fn check_canonical(content: &str) -> Vec<Finding> {
    if content.to_lowercase().contains(r#"<link rel="canonical""#) {
        return Vec::new();
    }
    vec![Finding::new(
        Rule::Canonical,
        FindingKind::Warning,
        "Missing canonical URL",
    )]
}

pub fn check_content_length(content: &str) -> Vec<Finding> {
    if content.chars().count() >= MIN_CONTENT_CHARS {
        return Vec::new();
    }
    vec![Finding::new(
        Rule::ContentLength,
        FindingKind::Warning,
        "Page content is very short (< 300 characters). Search engines prefer substantial content",
    )]
}

/// Run every check in its fixed order.
pub fn evaluate(fields: &ExtractedFields, content: &str) -> Vec<Finding> {
    let mut all_findings = Vec::new();

    all_findings.extend(check_title(fields));
    all_findings.extend(check_meta_description(fields));
    all_findings.extend(check_lang(fields));
    all_findings.extend(check_charset(fields));
    all_findings.extend(check_viewport(fields));
    all_findings.extend(check_h1_count(fields));
    all_findings.extend(check_heading_hierarchy(fields));
    all_findings.extend(check_image_alt(fields));
    all_findings.extend(check_open_graph(fields));
    all_findings.extend(check_twitter_card(fields));
    all_findings.extend(check_schema_markup(fields));
    all_findings.extend(check_canonical(content));
    all_findings.extend(check_content_length(content));

    all_findings
}
