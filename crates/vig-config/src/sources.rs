//! Built-in source catalog.
//!
//! Used when the configuration lists no `[[sources]]` of its own. The
//! catalog covers the Brazilian research-funding listings the watcher was
//! built around; each entry's label and color are cosmetic digest
//! attributes only.

use vig_core::{Source, SourceSchema};

/// The default monitored sources, in processing order.
#[must_use]
pub fn default_sources() -> Vec<Source> {
    vec![
        Source {
            name: "IPEA".to_string(),
            location: "https://www.ipea.gov.br/portal/bolsas-de-pesquisa".to_string(),
            schema: SourceSchema::Labeled,
            label: "IPEA — Bolsas de Pesquisa".to_string(),
            color: "#1a5276".to_string(),
        },
        Source {
            name: "FINEP".to_string(),
            location: "http://www.finep.gov.br/chamadas-publicas".to_string(),
            schema: SourceSchema::Labeled,
            label: "FINEP — Chamadas Públicas".to_string(),
            color: "#196f3d".to_string(),
        },
        Source {
            name: "CNPq".to_string(),
            location: "https://memoria2.cnpq.br/web/guest/chamadas-publicas".to_string(),
            schema: SourceSchema::Plain,
            label: "CNPq — Chamadas Públicas".to_string(),
            color: "#7d6608".to_string(),
        },
        Source {
            name: "CAPES".to_string(),
            location: "https://www.gov.br/capes/pt-br/acesso-a-informacao/acoes-e-programas/bolsas/editais".to_string(),
            schema: SourceSchema::Plain,
            label: "CAPES — Editais".to_string(),
            color: "#6c3483".to_string(),
        },
    ]
}
