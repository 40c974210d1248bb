//! # vig-core
//!
//! Core types and pure pipeline stages for Vigia.
//!
//! This crate provides the foundational pieces shared across all Vigia crates:
//! - Source definitions and the per-source record-shape variants
//! - Candidate / identified / seen record structs
//! - Record extraction from raw agent text
//! - Deterministic identity fingerprinting for deduplication
//!
//! Everything here is pure and synchronous — no I/O, no store access.

pub mod extract;
pub mod fingerprint;
pub mod record;
pub mod source;

pub use extract::extract;
pub use fingerprint::fingerprint;
pub use record::{CandidateRecord, IdentifiedRecord, SeenEntry};
pub use source::{Source, SourceSchema};
