//! Project card markup.

use super::html_escape;
use crate::category::ProjectCategory;
use crate::model::project::{ExtractedProjectData, ProjectMeta};

/// Seconds of animation delay added per card position.
pub const DEFAULT_STAGGER_SECONDS: f64 = 0.15;

const ROLE_GLYPH: &str = "👤";
const DURATION_GLYPH: &str = "⏱️";
const EXTRA_GLYPH: &str = "📊";
const ACHIEVEMENT_GLYPH: &str = "✨";

/// Card header inputs that do not come from text extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardHeader {
    /// Icon class list, copied onto the `<i>` element.
    pub icon_class: String,
    pub title: String,
    /// Zero-based position in the source section; drives the stagger delay.
    pub position: usize,
}

impl CardHeader {
    pub fn new(icon_class: impl Into<String>, title: impl Into<String>, position: usize) -> Self {
        Self {
            icon_class: icon_class.into(),
            title: title.into(),
            position,
        }
    }
}

/// Renders extracted project data as a card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardRenderer {
    stagger_seconds: f64,
}

impl Default for CardRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_STAGGER_SECONDS)
    }
}

impl CardRenderer {
    pub fn new(stagger_seconds: f64) -> Self {
        Self { stagger_seconds }
    }

    /// Renders the full card: wrapper, header and non-empty sections.
    pub fn render(
        &self,
        category: ProjectCategory,
        header: &CardHeader,
        data: &ExtractedProjectData,
    ) -> String {
        let category = category.as_str();
        let delay = self.animation_delay(header.position);

        let mut html = String::new();
        html.push_str(&format!(
            r#"<div class="project-card {category}" data-category="{category}" style="animation-delay: {delay}s">"#
        ));
        html.push_str(r#"<div class="project-header">"#);
        html.push_str(&format!(
            r#"<div class="project-icon"><i class="{}"></i></div>"#,
            html_escape(&header.icon_class)
        ));
        html.push_str(r#"<div class="project-title-section">"#);
        html.push_str(&format!("<h2>{}</h2>", html_escape(&header.title)));
        html.push_str(&format!(
            r#"<div class="project-meta-info">{}</div>"#,
            self.render_meta_badges(&data.meta)
        ));
        html.push_str("</div></div>");
        html.push_str(&format!(
            r#"<div class="project-content">{}</div>"#,
            self.render_sections(data)
        ));
        html.push_str("</div>");
        html
    }

    /// Renders one badge per present meta key, in role/duration/extra order.
    pub fn render_meta_badges(&self, meta: &ProjectMeta) -> String {
        [
            (ROLE_GLYPH, meta.role.as_deref()),
            (DURATION_GLYPH, meta.duration.as_deref()),
            (EXTRA_GLYPH, meta.extra.as_deref()),
        ]
        .into_iter()
        .filter_map(|(glyph, value)| {
            value.map(|value| {
                format!(
                    r#"<span class="meta-item">{glyph} {}</span>"#,
                    html_escape(value)
                )
            })
        })
        .collect()
    }

    /// Renders overview, achievements, tech stack and impact, skipping empties.
    pub fn render_sections(&self, data: &ExtractedProjectData) -> String {
        let mut html = String::new();

        if !data.overview.is_empty() {
            push_section(
                &mut html,
                "Project Overview",
                &format!(
                    r#"<div class="section-content">{}</div>"#,
                    html_escape(&data.overview)
                ),
            );
        }

        if !data.achievements.is_empty() {
            let items = data
                .achievements
                .iter()
                .map(|achievement| {
                    format!(
                        r#"<li class="achievement-item"><span class="achievement-icon">{ACHIEVEMENT_GLYPH}</span><span class="achievement-text">{}</span></li>"#,
                        html_escape(achievement)
                    )
                })
                .collect::<String>();
            push_section(
                &mut html,
                "Key Achievements",
                &format!(r#"<ul class="achievements-list">{items}</ul>"#),
            );
        }

        if !data.tech_stack.is_empty() {
            push_section(
                &mut html,
                "Technology Stack",
                &format!(
                    r#"<div class="tech-stack">{}</div>"#,
                    html_escape(&data.tech_stack)
                ),
            );
        }

        if !data.impact.is_empty() {
            push_section(
                &mut html,
                "Impact &amp; Results",
                &format!(
                    r#"<div class="impact-metric">{}</div>"#,
                    html_escape(&data.impact)
                ),
            );
        }

        html
    }

    fn animation_delay(&self, position: usize) -> String {
        let seconds = position as f64 * self.stagger_seconds;
        // Two decimals keep 3 * 0.15 from printing as 0.44999999999999996.
        let formatted = format!("{seconds:.2}");
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

fn push_section(html: &mut String, title: &str, body: &str) {
    html.push_str(&format!(
        r#"<div class="project-section"><div class="section-title">{title}</div>{body}</div>"#
    ));
}
