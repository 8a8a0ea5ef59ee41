//! Best-effort AI enrichment of business records.
//!
//! Pass A asks a language model for an official website when the places
//! provider had none; pass B asks for social profile links for every record
//! that has a website. Model output is untrusted text: it is unwrapped from
//! code fences, parsed, and URL-filtered before anything touches a record.
//! No failure inside a pass escapes it.

pub mod error;
pub mod extract;
pub mod gemini;
pub mod model;
pub mod passes;
mod prompts;

pub use error::EnrichError;
pub use extract::Extraction;
pub use gemini::GeminiClient;
pub use model::TextModel;
pub use passes::{EnrichmentSummary, Enricher, PassStats};
