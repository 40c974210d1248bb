//! Candidate reconciliation against the seen-set.

use chrono::Utc;
use vig_core::{CandidateRecord, IdentifiedRecord, Source, fingerprint};
use vig_db::WatchDb;
use vig_db::error::DatabaseError;

/// Filter the candidates down to the ones never seen before, persisting each
/// new one as it is found.
///
/// Candidates are processed in input order. A candidate with an empty title
/// is not a valid record and is skipped silently. The insert happens
/// synchronously before the next candidate is examined, so identity
/// collisions within one batch deduplicate through the same store check as
/// cross-run duplicates.
///
/// # Errors
///
/// Returns `DatabaseError` on any store read/write failure. No
/// partial-insert recovery is attempted; entries inserted before the failure
/// remain committed.
pub async fn reconcile(
    db: &WatchDb,
    source: &Source,
    candidates: Vec<CandidateRecord>,
) -> Result<Vec<IdentifiedRecord>, DatabaseError> {
    let mut new_records = Vec::new();

    for candidate in candidates {
        if candidate.title.trim().is_empty() {
            continue;
        }

        let identity = fingerprint(&source.name, &candidate.title, &candidate.deadline);
        if db.get_seen(&identity).await?.is_some() {
            continue;
        }

        let identified = IdentifiedRecord {
            identity,
            source_name: source.name.clone(),
            record: candidate,
        };
        db.insert_seen(&identified.to_seen_entry(Utc::now())).await?;
        new_records.push(identified);
    }

    Ok(new_records)
}
