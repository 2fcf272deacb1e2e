//! Project text extraction.
//!
//! # Responsibility
//! - Turn a project's free-text blocks into [`ExtractedProjectData`].
//! - Keep the parsing strategy behind [`ProjectCardExtractor`] so renderers
//!   never depend on how fields were obtained.
//!
//! # Invariants
//! - Lenient extraction is total: any input yields a record, never an error.
//! - Strict extraction only adds reporting; it never changes extracted values.

use crate::model::project::ExtractedProjectData;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod keyword;

pub use keyword::{classify_block, parse_meta_line, BlockKind, KeywordExtractor};

/// Result type for strict extraction.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Extraction output plus the blocks that contributed nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    pub data: ExtractedProjectData,
    /// Zero-based indices of unmatched blocks, in input order.
    pub unmatched: Vec<usize>,
}

impl ExtractionReport {
    /// Returns whether every block was consumed.
    pub fn is_complete(&self) -> bool {
        self.unmatched.is_empty()
    }
}

/// Error surfaced by strict extraction only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// Some blocks matched neither the metadata line nor any keyword family.
    UnmatchedBlocks {
        indices: Vec<usize>,
        total: usize,
    },
}

impl Display for ExtractError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnmatchedBlocks { indices, total } => write!(
                f,
                "{} of {total} blocks matched no known marker (indices {:?})",
                indices.len(),
                indices
            ),
        }
    }
}

impl Error for ExtractError {}

/// Parsing strategy for one project's text blocks.
pub trait ProjectCardExtractor {
    /// Extracts fields and records unmatched blocks.
    fn extract_report(&self, blocks: &[&str]) -> ExtractionReport;

    /// Lenient extraction; unmatched content is dropped silently.
    fn extract(&self, blocks: &[&str]) -> ExtractedProjectData {
        self.extract_report(blocks).data
    }

    /// Strict extraction; fails when any block went unused.
    fn extract_strict(&self, blocks: &[&str]) -> ExtractResult<ExtractedProjectData> {
        let report = self.extract_report(blocks);
        if report.is_complete() {
            return Ok(report.data);
        }
        Err(ExtractError::UnmatchedBlocks {
            indices: report.unmatched,
            total: blocks.len(),
        })
    }
}

/// Lenient extraction with the default keyword strategy.
pub fn extract(blocks: &[&str]) -> ExtractedProjectData {
    KeywordExtractor.extract(blocks)
}

#[cfg(test)]
mod tests {
    use super::{extract, ExtractError, KeywordExtractor, ProjectCardExtractor};

    #[test]
    fn lenient_extract_matches_report_data() {
        let blocks = ["Project Overview: x", "noise"];
        let report = KeywordExtractor.extract_report(&blocks);
        assert_eq!(extract(&blocks), report.data);
        assert_eq!(report.unmatched, vec![1]);
    }

    #[test]
    fn strict_extract_reports_unmatched_indices() {
        let blocks = ["just text", "Impact: big", "more text"];
        let err = KeywordExtractor
            .extract_strict(&blocks)
            .expect_err("unmatched blocks must fail in strict mode");
        assert_eq!(
            err,
            ExtractError::UnmatchedBlocks {
                indices: vec![0, 2],
                total: 3,
            }
        );
        assert!(err.to_string().contains("2 of 3 blocks"));
    }

    #[test]
    fn strict_extract_accepts_fully_matched_input() {
        let blocks = ["Role: A | Duration: B", "Tech Stack: Rust"];
        let data = KeywordExtractor
            .extract_strict(&blocks)
            .expect("all blocks should match");
        assert_eq!(data.tech_stack, "Rust");
    }

    #[test]
    fn strict_extract_accepts_empty_input() {
        let data = KeywordExtractor
            .extract_strict(&[])
            .expect("no blocks means nothing unmatched");
        assert!(data.is_empty());
    }
}
