//! Domain model for project cards.
//!
//! # Responsibility
//! - Define the scraped input shape handed over by the host.
//! - Define the extracted record consumed by the renderer.
//!
//! # Invariants
//! - Extracted fields default to empty/absent, never to placeholder text.
//! - Records are built per card and never persisted.

pub mod project;
pub mod source;
