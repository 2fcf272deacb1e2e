//! Project card extraction and rendering for a portfolio projects section.
//! Pure and synchronous: callers hand in scraped text, get markup back.

pub mod category;
pub mod config;
pub mod extract;
pub mod logging;
pub mod model;
pub mod render;
pub mod section;

pub use category::{category_for_icon, ProjectCategory, CATEGORY_TABLE};
pub use config::{load_config, ConfigError, ConfigResult, PortfolioConfig};
pub use extract::{
    extract, BlockKind, ExtractError, ExtractResult, ExtractionReport, KeywordExtractor,
    ProjectCardExtractor,
};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::project::{ExtractedProjectData, ProjectMeta};
pub use model::source::{ProjectSource, ProjectsDocument};
pub use render::{CardHeader, CardRenderer};
pub use section::{initialize, initialize_with, CardSummary, RenderedSection, SectionError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
