//! Watch pass error types.

use thiserror::Error;

/// Fatal errors for a watch pass.
///
/// Per-source agent and extraction failures are not represented here — they
/// degrade to zero candidates for the source and the pass continues. Only a
/// seen-set store failure aborts the pass.
#[derive(Debug, Error)]
pub enum WatchError {
    /// Seen-set store access failed; the pass is aborted to avoid an
    /// inconsistent seen-set. Entries committed before the failure stand.
    #[error("store error: {0}")]
    Store(#[from] vig_db::error::DatabaseError),
}
