//! `vigia history` — list the most recently seen entries.

use anyhow::Context;

use vig_config::VigiaConfig;
use vig_db::WatchDb;

pub async fn handle(config: &VigiaConfig, limit: u32) -> anyhow::Result<()> {
    let db = WatchDb::open_local(&config.store.path)
        .await
        .with_context(|| format!("failed to open seen-set store at '{}'", config.store.path))?;

    let entries = db.list_seen(limit).await?;
    if entries.is_empty() {
        println!("no entries seen yet");
        return Ok(());
    }

    let total = db.count_seen().await?;
    for entry in &entries {
        println!(
            "{}  {:<8} {}",
            entry.first_seen_at.format("%Y-%m-%d %H:%M"),
            entry.source_name,
            entry.title
        );
    }
    println!("showing {} of {total} entries", entries.len());
    Ok(())
}
