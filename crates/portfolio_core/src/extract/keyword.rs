//! Keyword/prefix extraction strategy.
//!
//! # Responsibility
//! - Parse the `Role: .. | Duration: .. | ..` metadata line.
//! - Classify each block into one keyword family and keep the text after
//!   its marker.
//!
//! # Invariants
//! - Family precedence is overview, achievements, tech stack, impact.
//! - A block feeds at most one family; later blocks overwrite earlier ones.
//! - Overview, achievements and tech stack keep the text after the last
//!   marker in a block; impact keeps the text after the first `Impact:`.
//! - Marker checks are case-sensitive and wording-exact.

use super::{ExtractionReport, ProjectCardExtractor};
use crate::model::project::{ExtractedProjectData, ProjectMeta};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

const OVERVIEW_MARKER: &str = "Project Overview:";
const ACHIEVEMENT_MARKERS: &[&str] = &["Key Achievements:", "Key Features:", "Key Innovations:"];
const TECH_STACK_MARKERS: &[&str] = &[
    "Technical Architecture:",
    "Technical Stack:",
    "Tech Stack:",
];
const IMPACT_MARKERS: &[&str] = &["Impact:", "Business Impact:", "Industry Impact:"];
const IMPACT_STRIP_MARKER: &str = "Impact:";
const ACHIEVEMENT_BULLET: char = '•';

static META_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Role:\s*([^|]+)\|?\s*Duration:\s*([^|]+)\|?\s*(.+)?")
        .expect("valid meta line regex")
});
static ACHIEVEMENTS_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Key\s+(?:Achievements|Features|Innovations):\s*")
        .expect("valid achievements regex")
});
static TECH_STACK_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Technical\s+(?:Architecture|Stack):\s*|Tech Stack:\s*")
        .expect("valid tech stack regex")
});

/// Keyword family a block was classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Overview,
    Achievements,
    TechStack,
    Impact,
}

/// Classifies one block by the first matching keyword family.
pub fn classify_block(block: &str) -> Option<BlockKind> {
    if block.contains(OVERVIEW_MARKER) {
        Some(BlockKind::Overview)
    } else if contains_any(block, ACHIEVEMENT_MARKERS) {
        Some(BlockKind::Achievements)
    } else if contains_any(block, TECH_STACK_MARKERS) {
        Some(BlockKind::TechStack)
    } else if contains_any(block, IMPACT_MARKERS) {
        Some(BlockKind::Impact)
    } else {
        None
    }
}

/// Parses the combined metadata line.
///
/// Returns `None` when the line does not match. Captured groups are trimmed;
/// groups that are missing or blank stay `None`.
pub fn parse_meta_line(line: &str) -> Option<ProjectMeta> {
    let caps = META_LINE_RE.captures(line)?;
    let field = |index: usize| {
        caps.get(index)
            .map(|m| m.as_str().trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    };

    Some(ProjectMeta {
        role: field(1),
        duration: field(2),
        extra: field(3),
    })
}

/// Default extractor: prefix/keyword matching over free text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeywordExtractor;

impl ProjectCardExtractor for KeywordExtractor {
    fn extract_report(&self, blocks: &[&str]) -> ExtractionReport {
        let mut data = ExtractedProjectData::default();
        let mut unmatched = Vec::new();

        let meta_matched = match blocks.first().and_then(|line| parse_meta_line(line)) {
            Some(meta) => {
                data.meta = meta;
                true
            }
            None => false,
        };

        for (index, block) in blocks.iter().enumerate() {
            match classify_block(block) {
                Some(kind) => apply_block(&mut data, kind, block),
                None if index == 0 && meta_matched => {}
                None => unmatched.push(index),
            }
        }

        debug!(
            "event=project_extract module=extract status=ok blocks={} unmatched={} achievements={}",
            blocks.len(),
            unmatched.len(),
            data.achievements.len()
        );

        ExtractionReport { data, unmatched }
    }
}

fn apply_block(data: &mut ExtractedProjectData, kind: BlockKind, block: &str) {
    match kind {
        BlockKind::Overview => {
            data.overview = text_after_last_literal(block, OVERVIEW_MARKER).to_string();
        }
        BlockKind::Achievements => {
            data.achievements =
                split_achievements(text_after_last_match(block, &ACHIEVEMENTS_PREFIX_RE));
        }
        BlockKind::TechStack => {
            data.tech_stack = text_after_last_match(block, &TECH_STACK_PREFIX_RE).to_string();
        }
        BlockKind::Impact => {
            data.impact = text_after_first_literal(block, IMPACT_STRIP_MARKER).to_string();
        }
    }
}

fn contains_any(block: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| block.contains(marker))
}

/// Trimmed text after the first occurrence of `marker`.
fn text_after_first_literal<'a>(block: &'a str, marker: &str) -> &'a str {
    match block.find(marker) {
        Some(start) => block[start + marker.len()..].trim(),
        None => block.trim(),
    }
}

/// Trimmed text after the last occurrence of `marker`.
fn text_after_last_literal<'a>(block: &'a str, marker: &str) -> &'a str {
    match block.rfind(marker) {
        Some(start) => block[start + marker.len()..].trim(),
        None => block.trim(),
    }
}

/// Trimmed text after the last match of `prefix`.
fn text_after_last_match<'a>(block: &'a str, prefix: &Regex) -> &'a str {
    match prefix.find_iter(block).last() {
        Some(m) => block[m.end()..].trim(),
        None => block.trim(),
    }
}

fn split_achievements(text: &str) -> Vec<String> {
    text.split(ACHIEVEMENT_BULLET)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
