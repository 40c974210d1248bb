//! `vigia run` — one watch pass over the configured sources.

use std::sync::Arc;

use anyhow::Context;

use vig_agent::ChatClient;
use vig_config::VigiaConfig;
use vig_core::Source;
use vig_db::WatchDb;
use vig_notify::ResendMailer;
use vig_watch::Watcher;

/// Execute one pass.
///
/// Missing agent credentials are a startup failure; a missing mail recipient
/// degrades to "no notification sent". Exit is 0 on a completed pass no
/// matter how many new records were found.
pub async fn handle(config: &VigiaConfig, source_filter: Option<&str>) -> anyhow::Result<()> {
    config.require_agent()?;

    let sources = select_sources(config.effective_sources(), source_filter)?;

    let db = WatchDb::open_local(&config.store.path)
        .await
        .with_context(|| format!("failed to open seen-set store at '{}'", config.store.path))?;

    let agent = Arc::new(ChatClient::new(
        &config.agent.api_key,
        &config.agent.base_url,
        &config.agent.model,
        config.agent.timeout_secs,
    ));

    let mut watcher = Watcher::new(agent, db);
    if config.mail.is_configured() {
        let mailer = Arc::new(ResendMailer::new(&config.mail.api_key, &config.mail.from));
        watcher = watcher.with_mailer(mailer, &config.mail.to);
    } else {
        tracing::info!("mail not fully configured; running without notifications");
    }

    let summary = watcher.run_pass(&sources).await?;

    for outcome in &summary.outcomes {
        let status = if outcome.agent_failed { " (agent failed)" } else { "" };
        println!(
            "{}: {} candidates, {} new{status}",
            outcome.source_name, outcome.candidates, outcome.new_records
        );
    }
    for record in &summary.new_records {
        println!("  new: [{}] {}", record.source_name, record.record.title);
    }
    println!(
        "pass complete: {} new record(s){}",
        summary.total_new(),
        if summary.notified { ", digest sent" } else { "" }
    );

    Ok(())
}

/// Apply the optional `--source` filter.
fn select_sources(
    sources: Vec<Source>,
    filter: Option<&str>,
) -> anyhow::Result<Vec<Source>> {
    let Some(name) = filter else {
        return Ok(sources);
    };
    let selected: Vec<Source> = sources.into_iter().filter(|s| s.name == name).collect();
    anyhow::ensure!(!selected.is_empty(), "no configured source named '{name}'");
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vig_core::SourceSchema;

    use super::*;

    fn source(name: &str) -> Source {
        Source {
            name: name.to_string(),
            location: "https://example.test".to_string(),
            schema: SourceSchema::Plain,
            label: String::new(),
            color: "#4a5568".to_string(),
        }
    }

    #[test]
    fn no_filter_keeps_all_sources() {
        let selected = select_sources(vec![source("A"), source("B")], None).unwrap();
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn filter_selects_single_source() {
        let selected = select_sources(vec![source("A"), source("B")], Some("B")).unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "B");
    }

    #[test]
    fn unknown_filter_is_an_error() {
        assert!(select_sources(vec![source("A")], Some("Z")).is_err());
    }
}
