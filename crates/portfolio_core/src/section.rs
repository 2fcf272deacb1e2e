//! Projects section composition.
//!
//! # Responsibility
//! - Provide the explicit [`initialize`] entry point the host calls once.
//! - Run category lookup, extraction and rendering per project, in order.
//!
//! # Invariants
//! - Projects without an icon or title are skipped but keep their position,
//!   so stagger delays match the source order.
//! - The config is validated before any card is rendered.
//! - Lenient mode never fails on text; strict mode stops at the first
//!   incomplete card.

use crate::category::{category_for_icon, ProjectCategory};
use crate::config::{ConfigError, PortfolioConfig};
use crate::extract::{ExtractError, KeywordExtractor, ProjectCardExtractor};
use crate::model::source::{ProjectSource, ProjectsDocument};
use crate::render::{html_escape, CardHeader, CardRenderer};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for section composition.
pub type SectionResult<T> = Result<T, SectionError>;

/// Section composition error.
#[derive(Debug)]
pub enum SectionError {
    /// The supplied config failed validation.
    Config(ConfigError),
    /// Strict mode found unmatched blocks in one project.
    Extraction {
        position: usize,
        title: String,
        source: ExtractError,
    },
}

impl Display for SectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid section config: {err}"),
            Self::Extraction {
                position,
                title,
                source,
            } => write!(f, "project #{position} `{title}`: {source}"),
        }
    }
}

impl Error for SectionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Extraction { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for SectionError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

/// Summary of one rendered card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSummary {
    pub position: usize,
    pub title: String,
    pub category: ProjectCategory,
    /// Blocks that contributed nothing (always zero in strict mode).
    pub unmatched_blocks: usize,
}

/// Rendered section markup plus per-card summaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSection {
    pub html: String,
    pub cards: Vec<CardSummary>,
    /// Positions of projects skipped for missing icon or title.
    pub skipped: Vec<usize>,
}

/// Composes the projects section with the default keyword extractor.
pub fn initialize(
    document: &ProjectsDocument,
    config: &PortfolioConfig,
) -> SectionResult<RenderedSection> {
    initialize_with(&KeywordExtractor, document, config)
}

/// Composes the projects section with a caller-provided extractor.
pub fn initialize_with<E: ProjectCardExtractor>(
    extractor: &E,
    document: &ProjectsDocument,
    config: &PortfolioConfig,
) -> SectionResult<RenderedSection> {
    config.validate()?;
    let renderer = CardRenderer::new(config.stagger_seconds);
    let mut cards_html = String::new();
    let mut cards = Vec::new();
    let mut skipped = Vec::new();

    for (position, project) in document.projects.iter().enumerate() {
        if !project.is_renderable() {
            debug!(
                "event=card_skip module=section status=skipped position={} reason=missing_icon_or_title",
                position
            );
            skipped.push(position);
            continue;
        }

        let (html, summary) = render_project(extractor, &renderer, project, position, config.strict)?;
        cards_html.push_str(&html);
        cards.push(summary);
    }

    let heading = document.heading.as_deref().unwrap_or(&config.heading);
    let intro = document.intro.as_deref().unwrap_or(&config.intro);
    let html = format!(
        r#"<div class="inner"><h2>{}</h2><p>{}</p><div class="projects-container"><div class="projects-grid">{cards_html}</div></div></div>"#,
        html_escape(heading),
        html_escape(intro)
    );

    info!(
        "event=section_render module=section status=ok cards={} skipped={} strict={}",
        cards.len(),
        skipped.len(),
        config.strict
    );

    Ok(RenderedSection {
        html,
        cards,
        skipped,
    })
}

fn render_project<E: ProjectCardExtractor>(
    extractor: &E,
    renderer: &CardRenderer,
    project: &ProjectSource,
    position: usize,
    strict: bool,
) -> SectionResult<(String, CardSummary)> {
    let category = category_for_icon(&project.icon_class);
    let blocks = project.block_refs();

    let (data, unmatched_blocks) = if strict {
        let data = extractor
            .extract_strict(&blocks)
            .map_err(|source| SectionError::Extraction {
                position,
                title: project.title.clone(),
                source,
            })?;
        (data, 0)
    } else {
        let report = extractor.extract_report(&blocks);
        if !report.is_complete() {
            warn!(
                "event=card_extract module=section status=partial position={} unmatched={:?}",
                position, report.unmatched
            );
        }
        (report.data, report.unmatched.len())
    };

    let header = CardHeader::new(project.icon_class.trim(), project.title.trim(), position);
    let html = renderer.render(category, &header, &data);

    Ok((
        html,
        CardSummary {
            position,
            title: header.title,
            category,
            unmatched_blocks,
        },
    ))
}
