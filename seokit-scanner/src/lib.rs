pub mod error;
pub mod extract;
pub mod result;
pub mod tags;
pub mod walker;

pub use error::ScanError;
pub use extract::{extract_fields, read_document};
pub use result::{ExtractedFields, ImageInfo, LinkInfo};
pub use walker::{HtmlFileWalker, is_html_file};
