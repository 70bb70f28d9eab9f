//! Human-readable rendering of retrieval hits.

use crate::response::{display_value, RetrievalHit};

/// Metadata keys shown for each hit, in display order.
pub const METADATA_KEYS: [&str; 10] = [
    "layer",
    "studio_id",
    "user_id",
    "doc_type",
    "x-amz-bedrock-kb-source-uri",
    "x-amz-bedrock-kb-document-page-number",
    "source",
    "page",
    "title",
    "language",
];

pub const SNIPPET_CHARS: usize = 600;
pub const ELLIPSIS: &str = "…";
pub const HIT_SEPARATOR: &str = "\n\n---\n\n";
pub const NO_SOURCES: &str = "_No sources returned_";

/// `key=value` pairs for the allow-listed keys present on `hit`.
pub fn metadata_line(hit: &RetrievalHit) -> String {
    METADATA_KEYS
        .iter()
        .filter_map(|key| {
            hit.metadata
                .get(*key)
                .map(|value| format!("{key}={}", display_value(value)))
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Hit text cut to [`SNIPPET_CHARS`], with an ellipsis when cut.
pub fn snippet(text: &str) -> String {
    match text.char_indices().nth(SNIPPET_CHARS) {
        Some((idx, _)) => format!("{}{ELLIPSIS}", &text[..idx]),
        None => text.to_string(),
    }
}

/// Number and render every hit; a placeholder when there are none.
pub fn format_sources(hits: &[RetrievalHit]) -> String {
    if hits.is_empty() {
        return NO_SOURCES.to_string();
    }
    hits.iter()
        .enumerate()
        .map(|(i, hit)| {
            format!(
                "**#{}**  {}\n\n{}",
                i + 1,
                metadata_line(hit),
                snippet(&hit.content.text)
            )
        })
        .collect::<Vec<_>>()
        .join(HIT_SEPARATOR)
}
