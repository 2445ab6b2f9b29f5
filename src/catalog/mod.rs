mod catalog;
mod config;

pub use catalog::Catalog;
pub use config::{AppSection, CatalogFile, VideoSection, parse_duration};
