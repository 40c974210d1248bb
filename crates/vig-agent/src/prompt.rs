//! Per-source prompt construction.
//!
//! The prompt names the target page and pins down the required output
//! shape. The shape varies with the source's record schema: labeled sources
//! additionally ask for the call number and a one-line summary. Whatever the
//! model actually returns is still treated as untrusted text downstream.

use vig_core::{Source, SourceSchema};

/// Build the extraction prompt for one source.
#[must_use]
pub fn listing_prompt(source: &Source) -> String {
    let fields = match source.schema {
        SourceSchema::Plain => {
            r#"[{"title": "<listing title>", "deadline": "<deadline or publication date, empty string if none>"}]"#
        }
        SourceSchema::Labeled => {
            r#"[{"title": "<listing title>", "deadline": "<deadline or publication date, empty string if none>", "label": "<call or notice number>", "summary": "<one-line summary>"}]"#
        }
    };

    format!(
        "Read the listing page at {location} and list every currently published entry \
         (grants, tenders, calls, job postings).\n\
         Respond with ONLY a JSON array in exactly this shape, no commentary:\n\
         {fields}\n\
         If the page lists nothing, respond with [].",
        location = source.location,
    )
}
