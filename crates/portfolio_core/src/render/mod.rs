//! HTML rendering for project cards.
//!
//! # Responsibility
//! - Render one [`ExtractedProjectData`](crate::ExtractedProjectData) into a
//!   fixed-structure card.
//!
//! # Invariants
//! - Sections with empty content emit no markup at all.
//! - Every scraped string is HTML-escaped before insertion.

mod card;

pub use card::{CardHeader, CardRenderer, DEFAULT_STAGGER_SECONDS};

pub(crate) fn html_escape(value: &str) -> String {
    v_htmlescape::escape(value).to_string()
}
