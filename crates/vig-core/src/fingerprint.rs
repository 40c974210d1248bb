//! Deterministic identity fingerprinting for deduplication.
//!
//! The identity must survive the formatting drift an LLM introduces between
//! runs over the same page: case changes, punctuation, extra whitespace,
//! accents dropped or restored, date separators swapped. It must still change
//! when the substantive wording changes, and when the source differs.

/// Normalized title length kept in the fingerprint.
///
/// Long enough to be sensitive to the substantive wording, short enough to
/// tolerate trailing annotations the agent sometimes appends.
const TITLE_FINGERPRINT_LEN: usize = 60;

/// Placeholder for records that carry no date at all.
const EMPTY_DEADLINE: &str = "0000";

/// Build the stable identity for a record.
///
/// Pure and total: empty or garbage inputs still produce a value. The result
/// is `source_name|title_fingerprint|deadline_digits`.
#[must_use]
pub fn fingerprint(source_name: &str, title: &str, deadline: &str) -> String {
    let title_part: String = title
        .chars()
        .flat_map(fold_diacritic)
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_alphanumeric)
        .take(TITLE_FINGERPRINT_LEN)
        .collect();

    let mut deadline_part: String = deadline.chars().filter(char::is_ascii_digit).collect();
    if deadline_part.is_empty() {
        deadline_part = EMPTY_DEADLINE.to_string();
    }

    format!("{source_name}|{title_part}|{deadline_part}")
}

/// Fold a Latin accented character to its base letter.
///
/// Covers the precomposed Latin-1 / Latin Extended-A range seen in the
/// monitored listings (Portuguese) plus stray combining marks from already
/// decomposed input, which are dropped entirely. Anything else passes
/// through unchanged; the ASCII filter in [`fingerprint`] discards what is
/// left over.
fn fold_diacritic(c: char) -> Option<char> {
    let folded = match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' | 'Á' | 'À' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'a',
        'é' | 'è' | 'ê' | 'ë' | 'É' | 'È' | 'Ê' | 'Ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' | 'Í' | 'Ì' | 'Î' | 'Ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' | 'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' | 'Ú' | 'Ù' | 'Û' | 'Ü' => 'u',
        'ç' | 'Ç' => 'c',
        'ñ' | 'Ñ' => 'n',
        'ý' | 'ÿ' | 'Ý' => 'y',
        // Combining marks (already-decomposed input): drop.
        '\u{0300}'..='\u{036f}' => return None,
        other => other,
    };
    Some(folded)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn deterministic_across_calls() {
        let a = fingerprint("IPEA", "Edital 01/2025", "15/12/2025");
        let b = fingerprint("IPEA", "Edital 01/2025", "15/12/2025");
        assert_eq!(a, b);
    }

    #[test]
    fn stable_under_formatting_drift() {
        let canonical = fingerprint("X", "Edital 01/2025", "15/12/2025");
        assert_eq!(fingerprint("X", "  EDITAL 01/2025!! ", "15-12-2025"), canonical);
        assert_eq!(fingerprint("X", "edital   01 2025", "15.12.2025"), canonical);
    }

    #[test]
    fn stable_under_accent_variation() {
        assert_eq!(
            fingerprint("X", "Seleção de bolsistas", "2025"),
            fingerprint("X", "Selecao de bolsistas", "2025"),
        );
    }

    #[test]
    fn drops_combining_marks_from_decomposed_input() {
        // "Seleção" with the cedilla and tilde as combining marks.
        let decomposed = "Selec\u{0327}a\u{0303}o";
        assert_eq!(
            fingerprint("X", decomposed, "2025"),
            fingerprint("X", "Selecao", "2025"),
        );
    }

    #[test]
    fn source_name_participates_in_identity() {
        let a = fingerprint("IPEA", "Edital 01/2025", "15/12/2025");
        let b = fingerprint("FINEP", "Edital 01/2025", "15/12/2025");
        assert_ne!(a, b);
    }

    #[test]
    fn title_truncated_to_fingerprint_length() {
        let base = "a".repeat(TITLE_FINGERPRINT_LEN);
        let longer = format!("{base}extra words past the cutoff");
        assert_eq!(
            fingerprint("X", &base, "2025"),
            fingerprint("X", &longer, "2025"),
        );

        // A difference inside the first 60 characters still distinguishes.
        let mut changed = base.clone();
        changed.replace_range(0..1, "b");
        assert_ne!(
            fingerprint("X", &base, "2025"),
            fingerprint("X", &changed, "2025"),
        );
    }

    #[test]
    fn empty_deadline_gets_placeholder() {
        assert_eq!(fingerprint("X", "Edital", ""), "X|edital|0000");
        assert_eq!(fingerprint("X", "Edital", "sem data"), "X|edital|0000");
    }

    #[test]
    fn total_on_garbage_input() {
        assert_eq!(fingerprint("", "", ""), "||0000");
        assert_eq!(fingerprint("X", "!!!", "abc"), "X||0000");
    }
}
