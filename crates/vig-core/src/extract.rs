//! Candidate record extraction from raw agent text.
//!
//! Agent output is unpredictable free text that usually contains a JSON
//! array. Extraction is maximally permissive about the surrounding noise
//! (prose, code fences) and maximally strict about the payload once
//! isolated: a truncated or garbled array yields nothing, not a partial
//! parse.

use crate::record::CandidateRecord;

/// Extract candidate records from raw agent text.
///
/// Never fails the caller: any absent or malformed payload degrades to an
/// empty result with a `tracing::warn!` diagnostic.
#[must_use]
pub fn extract(raw: &str) -> Vec<CandidateRecord> {
    let stripped = strip_code_fences(raw);

    let (Some(start), Some(end)) = (stripped.find('['), stripped.rfind(']')) else {
        tracing::warn!("agent text contains no structured payload");
        return Vec::new();
    };
    if end < start {
        tracing::warn!("agent text contains no structured payload");
        return Vec::new();
    }

    match serde_json::from_str::<Vec<CandidateRecord>>(&stripped[start..=end]) {
        Ok(records) => records,
        Err(error) => {
            tracing::warn!(%error, "failed to parse agent payload as a record array");
            Vec::new()
        }
    }
}

/// Drop code-fence marker lines, keeping the fenced content.
///
/// Handles both bare ``` fences and ones with a language tag (```json).
fn strip_code_fences(raw: &str) -> String {
    if !raw.contains("```") {
        return raw.to_string();
    }
    raw.lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n")
}
