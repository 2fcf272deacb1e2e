//! Extracted project record.
//!
//! # Responsibility
//! - Hold the semantic fields pulled out of one project's text blocks.
//! - Keep the wire shape stable for JSON output (`techStack`, omitted meta keys).
//!
//! # Invariants
//! - `meta` keys are `None` rather than `Some("")`.
//! - `achievements` never contains empty or whitespace-only entries.

use serde::{Deserialize, Serialize};

/// Optional header metadata parsed from the `Role: .. | Duration: .. | ..` line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Trailing free text after the duration, usually a team size or metric.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

impl ProjectMeta {
    /// Returns whether no metadata key is present.
    pub fn is_empty(&self) -> bool {
        self.role.is_none() && self.duration.is_none() && self.extra.is_none()
    }
}

/// Semantic fields extracted from one project card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedProjectData {
    #[serde(default)]
    pub meta: ProjectMeta,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    /// Serialized as `techStack`.
    #[serde(default)]
    pub tech_stack: String,
    #[serde(default)]
    pub impact: String,
}

impl ExtractedProjectData {
    /// Returns whether extraction produced nothing at all.
    pub fn is_empty(&self) -> bool {
        self.meta.is_empty()
            && self.overview.is_empty()
            && self.achievements.is_empty()
            && self.tech_stack.is_empty()
            && self.impact.is_empty()
    }
}
