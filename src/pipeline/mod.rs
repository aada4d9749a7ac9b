//! Attachment enrichment pipeline.
//!
//! A message context flows through:
//! 1. Classification — pick out image attachments (type tag or extension)
//! 2. Per-attachment analysis — one sequential service call each
//! 3. Merge — numbered blocks appended to the context's additional text
//!
//! **The pipeline never fails.** Per-attachment errors become error
//! blocks in the merged output; a context with nothing to analyze passes
//! through unchanged.

pub mod enricher;
pub mod types;

pub use enricher::Enricher;
