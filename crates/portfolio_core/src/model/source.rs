//! Scraped project input.
//!
//! The host walks its markup and hands over plain strings; nothing here
//! knows about element structure.

use serde::{Deserialize, Serialize};

/// One project as scraped from the source section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSource {
    /// Full class list of the icon element, e.g. `icon solid fa-brain`.
    #[serde(default)]
    pub icon_class: String,
    #[serde(default)]
    pub title: String,
    /// Paragraph texts in document order. The first is the metadata line.
    #[serde(default)]
    pub blocks: Vec<String>,
}

impl ProjectSource {
    pub fn new(
        icon_class: impl Into<String>,
        title: impl Into<String>,
        blocks: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            icon_class: icon_class.into(),
            title: title.into(),
            blocks: blocks.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns whether the project has both an icon and a title.
    ///
    /// Projects missing either are skipped when the section is composed.
    pub fn is_renderable(&self) -> bool {
        !self.icon_class.trim().is_empty() && !self.title.trim().is_empty()
    }

    /// Borrows the blocks as string slices for extraction.
    pub fn block_refs(&self) -> Vec<&str> {
        self.blocks.iter().map(String::as_str).collect()
    }
}

/// The scraped projects section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectsDocument {
    /// Overrides the configured section heading when set.
    #[serde(default)]
    pub heading: Option<String>,
    /// Overrides the configured intro paragraph when set.
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub projects: Vec<ProjectSource>,
}
