//! # vig-watch
//!
//! Reconciliation engine for Vigia.
//!
//! Orchestrates one pass over the configured sources: agent call →
//! extraction → identity fingerprinting → seen-set reconciliation → digest
//! dispatch. Per-source failures degrade to zero candidates and the pass
//! continues; a store failure aborts the pass to protect the seen-set.

pub mod error;
pub mod pass;
pub mod reconcile;

pub use error::WatchError;
pub use pass::{PassSummary, SourceOutcome, Watcher};
pub use reconcile::reconcile;
