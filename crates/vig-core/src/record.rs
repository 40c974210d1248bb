//! Record types flowing through the novelty-detection pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry extracted from a source's raw agent text, not yet identified.
///
/// Deserialized from untrusted agent output: unknown fields are ignored and
/// the common field-name drift (`date` vs `deadline`, `numero`/`number` for
/// the label) is absorbed with aliases. Missing fields default to empty so a
/// structurally valid object always parses — semantic validation (empty
/// title) happens during reconciliation, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    #[serde(default, alias = "titulo")]
    pub title: String,
    #[serde(default, alias = "date", alias = "data", alias = "prazo")]
    pub deadline: String,
    /// Identifier-like label carried by `SourceSchema::Labeled` sources.
    #[serde(default, alias = "numero", alias = "number", alias = "id")]
    pub label: Option<String>,
    /// One-line summary carried by `SourceSchema::Labeled` sources.
    #[serde(default, alias = "descricao", alias = "description")]
    pub summary: Option<String>,
}

/// A candidate record with its deduplication identity resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifiedRecord {
    pub identity: String,
    pub source_name: String,
    pub record: CandidateRecord,
}

/// Persisted row of the append-only seen-set.
///
/// Created once per distinct identity on first detection; never updated,
/// never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeenEntry {
    pub identity: String,
    pub title: String,
    pub deadline: String,
    pub source_name: String,
    pub first_seen_at: DateTime<Utc>,
}

impl IdentifiedRecord {
    /// Build the seen-set row for this record.
    #[must_use]
    pub fn to_seen_entry(&self, first_seen_at: DateTime<Utc>) -> SeenEntry {
        SeenEntry {
            identity: self.identity.clone(),
            title: self.record.title.clone(),
            deadline: self.record.deadline.clone(),
            source_name: self.source_name.clone(),
            first_seen_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn candidate_parses_with_missing_fields() {
        let record: CandidateRecord = serde_json::from_str(r#"{"title": "Edital 01/2025"}"#)
            .expect("partial object should parse");
        assert_eq!(record.title, "Edital 01/2025");
        assert_eq!(record.deadline, "");
        assert_eq!(record.label, None);
    }

    #[test]
    fn candidate_absorbs_field_name_drift() {
        let record: CandidateRecord = serde_json::from_str(
            r#"{"titulo": "Chamada CNPq", "data": "15/12/2025", "numero": "26/2025"}"#,
        )
        .unwrap();
        assert_eq!(record.title, "Chamada CNPq");
        assert_eq!(record.deadline, "15/12/2025");
        assert_eq!(record.label.as_deref(), Some("26/2025"));
    }

    #[test]
    fn candidate_ignores_unknown_fields() {
        let record: CandidateRecord =
            serde_json::from_str(r#"{"title": "X", "deadline": "2025", "extra": {"a": 1}}"#)
                .unwrap();
        assert_eq!(record.title, "X");
    }

    #[test]
    fn seen_entry_from_identified_record() {
        let identified = IdentifiedRecord {
            identity: "IPEA|edital012025|15122025".to_string(),
            source_name: "IPEA".to_string(),
            record: CandidateRecord {
                title: "Edital 01/2025".to_string(),
                deadline: "15/12/2025".to_string(),
                label: None,
                summary: None,
            },
        };
        let now = Utc::now();
        let entry = identified.to_seen_entry(now);
        assert_eq!(entry.identity, identified.identity);
        assert_eq!(entry.title, "Edital 01/2025");
        assert_eq!(entry.first_seen_at, now);
    }
}
