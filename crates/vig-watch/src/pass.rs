//! Per-source pass orchestration.

use std::sync::Arc;

use vig_agent::{Agent, listing_prompt};
use vig_core::{IdentifiedRecord, Source, extract};
use vig_db::WatchDb;
use vig_notify::{Mailer, compose};

use crate::error::WatchError;
use crate::reconcile::reconcile;

/// Outcome of one source within a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOutcome {
    pub source_name: String,
    /// Candidates extracted from the agent text (before reconciliation).
    pub candidates: usize,
    /// Records never seen before, now persisted.
    pub new_records: usize,
    /// The agent call itself failed; the source contributed nothing.
    pub agent_failed: bool,
}

/// Result of a completed pass.
#[derive(Debug, Default)]
pub struct PassSummary {
    pub outcomes: Vec<SourceOutcome>,
    pub new_records: Vec<IdentifiedRecord>,
    /// Whether a digest was handed to the mailer.
    pub notified: bool,
}

impl PassSummary {
    #[must_use]
    pub fn total_new(&self) -> usize {
        self.new_records.len()
    }
}

/// The reconciliation engine.
///
/// Owns the seen-set store and takes its collaborators by injection so tests
/// can substitute fakes. One `Watcher` performs one pass over the configured
/// sources, strictly sequentially in configured order, then is done.
pub struct Watcher {
    agent: Arc<dyn Agent>,
    db: WatchDb,
    mailer: Option<Arc<dyn Mailer>>,
    recipient: String,
}

impl Watcher {
    /// Create a watcher without a notification channel (dry deliveries).
    #[must_use]
    pub fn new(agent: Arc<dyn Agent>, db: WatchDb) -> Self {
        Self {
            agent,
            db,
            mailer: None,
            recipient: String::new(),
        }
    }

    /// Attach the outbound channel and recipient address.
    #[must_use]
    pub fn with_mailer(mut self, mailer: Arc<dyn Mailer>, recipient: &str) -> Self {
        self.mailer = Some(mailer);
        self.recipient = recipient.to_string();
        self
    }

    /// Access the underlying store (used by the CLI for history queries).
    #[must_use]
    pub const fn db(&self) -> &WatchDb {
        &self.db
    }

    /// Run one pass over the given sources.
    ///
    /// Per source: prompt the agent, extract candidates, reconcile against
    /// the seen-set. An agent failure or an unparseable payload degrades to
    /// zero candidates for that source; the pass continues with the next
    /// one. After all sources, the batch of new records is composed and sent
    /// when a mailer is attached — an empty batch suppresses the send
    /// entirely, and a send failure is logged without rolling anything back.
    ///
    /// # Errors
    ///
    /// Returns [`WatchError::Store`] on a seen-set read/write failure, which
    /// aborts the remainder of the pass.
    pub async fn run_pass(&self, sources: &[Source]) -> Result<PassSummary, WatchError> {
        let mut summary = PassSummary::default();

        for source in sources {
            let outcome = self.watch_source(source, &mut summary.new_records).await?;
            tracing::info!(
                source = %outcome.source_name,
                candidates = outcome.candidates,
                new = outcome.new_records,
                "source processed"
            );
            summary.outcomes.push(outcome);
        }

        summary.notified = self.notify(&summary.new_records, sources).await;
        Ok(summary)
    }

    async fn watch_source(
        &self,
        source: &Source,
        new_records: &mut Vec<IdentifiedRecord>,
    ) -> Result<SourceOutcome, WatchError> {
        let prompt = listing_prompt(source);
        let raw = match self.agent.generate(&prompt).await {
            Ok(raw) => raw,
            Err(error) => {
                tracing::warn!(source = %source.name, %error, "agent call failed");
                return Ok(SourceOutcome {
                    source_name: source.name.clone(),
                    candidates: 0,
                    new_records: 0,
                    agent_failed: true,
                });
            }
        };

        let candidates = extract(&raw);
        let candidate_count = candidates.len();
        let new = reconcile(&self.db, source, candidates).await?;
        let new_count = new.len();
        new_records.extend(new);

        Ok(SourceOutcome {
            source_name: source.name.clone(),
            candidates: candidate_count,
            new_records: new_count,
            agent_failed: false,
        })
    }

    /// Compose and send the digest. Returns whether a send was attempted
    /// and accepted. Never fails the pass.
    async fn notify(&self, new_records: &[IdentifiedRecord], sources: &[Source]) -> bool {
        let Some(mailer) = self.mailer.as_ref() else {
            if !new_records.is_empty() {
                tracing::info!(
                    new = new_records.len(),
                    "no notification channel configured; new records recorded only"
                );
            }
            return false;
        };

        let Some(digest) = compose(new_records, sources) else {
            return false;
        };

        match mailer.send(&self.recipient, &digest).await {
            Ok(()) => true,
            Err(error) => {
                // Already-committed seen entries stand: the records stay
                // seen even though this notification was missed.
                tracing::error!(%error, "digest delivery failed");
                false
            }
        }
    }
}
