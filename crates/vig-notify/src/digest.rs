//! Digest composition.
//!
//! Renders the batch of newly detected records into one message, grouped per
//! source. Display attributes (label, accent color) come from the source
//! definitions and are cosmetic only — they never affect identity or dedup.

use vig_core::{IdentifiedRecord, Source};

/// A rendered notification, ready for the outbound channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Render the batch of new records.
///
/// Returns `None` for an empty batch — empty notifications are suppressed
/// entirely, the channel is never invoked.
#[must_use]
pub fn compose(new_records: &[IdentifiedRecord], sources: &[Source]) -> Option<Digest> {
    if new_records.is_empty() {
        return None;
    }

    let subject = if new_records.len() == 1 {
        "Vigia: 1 new listing".to_string()
    } else {
        format!("Vigia: {} new listings", new_records.len())
    };

    let mut html = String::from("<h1>New listings</h1>\n");
    let mut text = String::from("New listings\n\n");

    // Group per source, preserving configured source order.
    for source in sources {
        let group: Vec<&IdentifiedRecord> = new_records
            .iter()
            .filter(|r| r.source_name == source.name)
            .collect();
        if group.is_empty() {
            continue;
        }

        html.push_str(&format!(
            "<h2 style=\"color: {}\">{}</h2>\n<ul>\n",
            escape(&source.color),
            escape(source.display_label()),
        ));
        text.push_str(&format!("== {} ==\n", source.display_label()));

        for record in group {
            let mut line = record.record.title.clone();
            if let Some(label) = record.record.label.as_deref() {
                if !label.is_empty() {
                    line = format!("[{label}] {line}");
                }
            }
            if !record.record.deadline.is_empty() {
                line.push_str(&format!(" (until {})", record.record.deadline));
            }

            html.push_str(&format!("  <li>{}", escape(&line)));
            if let Some(summary) = record.record.summary.as_deref() {
                if !summary.is_empty() {
                    html.push_str(&format!("<br><small>{}</small>", escape(summary)));
                }
            }
            html.push_str("</li>\n");
            text.push_str(&format!("- {line}\n"));
        }

        html.push_str("</ul>\n");
        text.push('\n');
    }

    Some(Digest {
        subject,
        html,
        text,
    })
}

/// Minimal HTML escaping for untrusted agent-derived strings.
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vig_core::{CandidateRecord, SourceSchema};

    use super::*;

    fn source(name: &str) -> Source {
        Source {
            name: name.to_string(),
            location: "https://example.test".to_string(),
            schema: SourceSchema::Plain,
            label: String::new(),
            color: "#123456".to_string(),
        }
    }

    fn record(source_name: &str, title: &str, deadline: &str) -> IdentifiedRecord {
        IdentifiedRecord {
            identity: format!("{source_name}|{title}|{deadline}"),
            source_name: source_name.to_string(),
            record: CandidateRecord {
                title: title.to_string(),
                deadline: deadline.to_string(),
                label: None,
                summary: None,
            },
        }
    }

    #[test]
    fn empty_batch_is_suppressed() {
        assert_eq!(compose(&[], &[source("IPEA")]), None);
    }

    #[test]
    fn single_record_digest() {
        let records = vec![record("IPEA", "Edital 01/2025", "15/12/2025")];
        let digest = compose(&records, &[source("IPEA")]).unwrap();

        assert_eq!(digest.subject, "Vigia: 1 new listing");
        assert!(digest.html.contains("Edital 01/2025"));
        assert!(digest.html.contains("#123456"));
        assert!(digest.text.contains("== IPEA =="));
        assert!(digest.text.contains("- Edital 01/2025 (until 15/12/2025)"));
    }

    #[test]
    fn groups_follow_configured_source_order() {
        let sources = vec![source("FINEP"), source("IPEA")];
        let records = vec![
            record("IPEA", "A", "2025"),
            record("FINEP", "B", "2025"),
        ];
        let digest = compose(&records, &sources).unwrap();

        let finep_pos = digest.text.find("== FINEP ==").unwrap();
        let ipea_pos = digest.text.find("== IPEA ==").unwrap();
        assert!(finep_pos < ipea_pos);
        assert_eq!(digest.subject, "Vigia: 2 new listings");
    }

    #[test]
    fn label_and_summary_rendered_when_present() {
        let mut identified = record("IPEA", "Edital 01/2025", "");
        identified.record.label = Some("01/2025".to_string());
        identified.record.summary = Some("Bolsas de pesquisa aplicada".to_string());

        let digest = compose(&[identified], &[source("IPEA")]).unwrap();
        assert!(digest.text.contains("- [01/2025] Edital 01/2025"));
        assert!(digest.html.contains("<small>Bolsas de pesquisa aplicada</small>"));
        // Empty deadline renders no "(until ...)" suffix.
        assert!(!digest.text.contains("until"));
    }

    #[test]
    fn html_escapes_agent_derived_text() {
        let records = vec![record("IPEA", "Edital <b>01</b> & more", "")];
        let digest = compose(&records, &[source("IPEA")]).unwrap();
        assert!(digest.html.contains("Edital &lt;b&gt;01&lt;/b&gt; &amp; more"));
        assert!(!digest.html.contains("<b>01</b>"));
    }

    #[test]
    fn records_without_matching_source_definition_are_not_rendered() {
        // Cosmetic grouping needs a source definition; records from an
        // unknown source are dropped from the digest body.
        let records = vec![record("UNKNOWN", "X", "")];
        let digest = compose(&records, &[source("IPEA")]).unwrap();
        assert!(!digest.text.contains("- X"));
    }
}
