//! Reasoning-service integration
//!
//! This module contains the client for the external text-completion
//! endpoint and the three generators built on top of it:
//! - Topical-gap Q&A discovery
//! - Title tag recommendations
//! - Content-structure (heading) suggestions
//!
//! Each generator is independently callable and independently failable:
//! a failure in one surfaces as an error value in its own result slot and
//! never blocks or corrupts the others.

mod client;
mod gaps;
mod structure;
mod titles;

pub use client::ReasoningClient;
pub use gaps::{discover_topical_gaps, parse_qna_lines, QnaPair, TopicalGaps};
pub use structure::suggest_content_structure;
pub use titles::recommend_titles;
