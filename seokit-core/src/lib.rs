pub mod analyze;
pub mod error;
pub mod report;
pub mod rules;
pub mod sitemap;

pub use error::SeoError;
