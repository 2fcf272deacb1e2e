//! Icon-driven project categories.
//!
//! # Responsibility
//! - Map an icon class list onto one visual category label.
//!
//! # Invariants
//! - Lookup walks [`CATEGORY_TABLE`] in order; the first substring hit wins.
//! - Unmatched icons fall back to [`ProjectCategory::Clinical`].

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Visual category assigned to a project card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectCategory {
    #[default]
    #[serde(rename = "clinical-project")]
    Clinical,
    #[serde(rename = "ai-project")]
    Ai,
    #[serde(rename = "infrastructure-project")]
    Infrastructure,
    #[serde(rename = "healthcare-project")]
    Healthcare,
    #[serde(rename = "research-project")]
    Research,
    #[serde(rename = "automation-project")]
    Automation,
    #[serde(rename = "integration-project")]
    Integration,
    #[serde(rename = "analytics-project")]
    Analytics,
}

impl ProjectCategory {
    /// CSS class / `data-category` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clinical => "clinical-project",
            Self::Ai => "ai-project",
            Self::Infrastructure => "infrastructure-project",
            Self::Healthcare => "healthcare-project",
            Self::Research => "research-project",
            Self::Automation => "automation-project",
            Self::Integration => "integration-project",
            Self::Analytics => "analytics-project",
        }
    }
}

impl Display for ProjectCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered `(icon substring, category)` pairs.
///
/// Order matters: `fa-file-medical` precedes `fa-file-medical-alt`, and both
/// map to the same category, so containment never misroutes them.
pub const CATEGORY_TABLE: &[(&str, ProjectCategory)] = &[
    ("fa-database", ProjectCategory::Clinical),
    ("fa-chart-line", ProjectCategory::Clinical),
    ("fa-brain", ProjectCategory::Ai),
    ("fa-robot", ProjectCategory::Ai),
    ("fa-file-medical", ProjectCategory::Clinical),
    ("fa-file-medical-alt", ProjectCategory::Clinical),
    ("fa-shield-alt", ProjectCategory::Infrastructure),
    ("fa-shield-halved", ProjectCategory::Infrastructure),
    ("fa-heartbeat", ProjectCategory::Healthcare),
    ("fa-heart-pulse", ProjectCategory::Healthcare),
    ("fa-server", ProjectCategory::Infrastructure),
    ("fa-eye", ProjectCategory::Research),
    ("fa-microscope", ProjectCategory::Research),
    ("fa-dna", ProjectCategory::Research),
    ("fa-cube", ProjectCategory::Infrastructure),
    ("fa-cubes", ProjectCategory::Infrastructure),
    ("fa-exchange-alt", ProjectCategory::Automation),
    ("fa-arrows-spin", ProjectCategory::Automation),
    ("fa-layer-group", ProjectCategory::Infrastructure),
    ("fa-rocket", ProjectCategory::Automation),
    ("fa-sitemap", ProjectCategory::Integration),
    ("fa-network-wired", ProjectCategory::Integration),
    ("fa-search", ProjectCategory::Analytics),
    ("fa-magnifying-glass-chart", ProjectCategory::Analytics),
    ("fa-camera", ProjectCategory::Ai),
    ("fa-camera-retro", ProjectCategory::Ai),
    ("fa-file-alt", ProjectCategory::Automation),
    ("fa-file-lines", ProjectCategory::Automation),
    ("fa-sync-alt", ProjectCategory::Integration),
    ("fa-rotate", ProjectCategory::Integration),
    ("fa-graduation-cap", ProjectCategory::Infrastructure),
    ("fa-user-graduate", ProjectCategory::Infrastructure),
    ("fa-comments", ProjectCategory::Ai),
    ("fa-message", ProjectCategory::Ai),
];

/// Resolves the category for an icon identifier or full class list.
pub fn category_for_icon(icon_class: &str) -> ProjectCategory {
    CATEGORY_TABLE
        .iter()
        .find(|(needle, _)| icon_class.contains(needle))
        .map(|(_, category)| *category)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{category_for_icon, ProjectCategory, CATEGORY_TABLE};

    #[test]
    fn maps_known_icons() {
        assert_eq!(category_for_icon("fa-brain"), ProjectCategory::Ai);
        assert_eq!(category_for_icon("fa-dna"), ProjectCategory::Research);
        assert_eq!(category_for_icon("fa-sitemap"), ProjectCategory::Integration);
        assert_eq!(category_for_icon("fa-heart-pulse"), ProjectCategory::Healthcare);
    }

    #[test]
    fn unknown_icon_defaults_to_clinical() {
        assert_eq!(
            category_for_icon("fa-unknown-thing"),
            ProjectCategory::Clinical
        );
        assert_eq!(category_for_icon(""), ProjectCategory::Clinical);
    }

    #[test]
    fn matches_inside_full_class_list() {
        assert_eq!(
            category_for_icon("icon solid fa-robot major"),
            ProjectCategory::Ai
        );
    }

    #[test]
    fn first_table_entry_wins_on_multiple_hits() {
        // `fa-database` precedes `fa-brain` in the table.
        assert_eq!(
            category_for_icon("icon fa-brain fa-database"),
            ProjectCategory::Clinical
        );
    }

    #[test]
    fn containment_routes_longer_class_names() {
        assert_eq!(
            category_for_icon("fa-magnifying-glass-chart"),
            ProjectCategory::Analytics
        );
        assert_eq!(category_for_icon("fa-cubes"), ProjectCategory::Infrastructure);
    }

    #[test]
    fn labels_round_trip_through_serde() {
        let json = serde_json::to_string(&ProjectCategory::Automation).expect("serialize");
        assert_eq!(json, "\"automation-project\"");
        assert_eq!(ProjectCategory::Automation.to_string(), "automation-project");
    }

    #[test]
    fn table_has_no_duplicate_needles() {
        let mut needles = CATEGORY_TABLE
            .iter()
            .map(|(needle, _)| *needle)
            .collect::<Vec<_>>();
        needles.sort_unstable();
        needles.dedup();
        assert_eq!(needles.len(), CATEGORY_TABLE.len());
    }
}
