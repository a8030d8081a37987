use seokit_scanner::ScanError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeoError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("XML error: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("Invalid sitemap: {0}")]
    InvalidSitemap(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SeoError>;
