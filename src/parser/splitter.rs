// src/parser/splitter.rs

use regex::Regex;
use std::sync::LazyLock;

/// "MLS#", optional whitespace (spaces or tabs), then the numeric listing id.
static MLS_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"MLS#\s*(\d+)").expect("static MLS marker pattern"));

/// One listing's slice of the export, starting at its MLS marker and running
/// up to (not including) the next marker or the end of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingBlock<'a> {
    pub mls_id: &'a str,
    pub text: &'a str,
}

/// Segments an export into listing blocks, in document order.
///
/// Anything before the first marker is dropped. A document without markers
/// yields an empty vector.
pub fn split_listings(document: &str) -> Vec<ListingBlock<'_>> {
    let markers: Vec<(usize, &str)> = MLS_MARKER_RE
        .captures_iter(document)
        .filter_map(|caps| {
            let start = caps.get(0)?.start();
            let id = caps.get(1)?.as_str().trim();
            Some((start, id))
        })
        .collect();

    markers
        .iter()
        .enumerate()
        .map(|(i, &(start, mls_id))| {
            let end = markers
                .get(i + 1)
                .map(|&(next, _)| next)
                .unwrap_or(document.len());

            ListingBlock {
                mls_id,
                text: &document[start..end],
            }
        })
        .collect()
}

/// True when the text holds at least one MLS marker.
pub fn has_markers(document: &str) -> bool {
    MLS_MARKER_RE.is_match(document)
}
