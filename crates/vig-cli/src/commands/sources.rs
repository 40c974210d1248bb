//! `vigia sources` — print the configured source catalog.

use vig_config::VigiaConfig;

pub fn handle(config: &VigiaConfig) {
    for source in config.effective_sources() {
        println!(
            "{:<8} {:?}  {}",
            source.name, source.schema, source.location
        );
    }
}
