use crate::config::Config;
use crate::domain::RecordMeta;
use crate::parser::ListingParser;
use crate::router::AppState;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Three listings behind a report header: a full one, a sparse one, and one
/// with nothing but its marker.
pub const SAMPLE_EXPORT: &str = include_str!("../../fixtures/sample_export.txt");

pub const MINIMAL_EXPORT: &str =
    "MLS# 12345\nList Price:\t$250,000\nLO: Jane Doe (Phone): 555-1111 (Email): jane@x.com\n";

pub fn test_meta() -> RecordMeta {
    RecordMeta::new("10/17/26", "Standard")
}

pub fn test_parser() -> ListingParser {
    ListingParser::new().unwrap_or_else(|e| panic!("Field catalogue failed to compile: {e}"))
}

pub fn test_state() -> AppState {
    AppState::new(test_parser(), Config::default())
}

/// A path under the temp dir that no other test uses.
pub fn temp_path(prefix: &str, ext: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "{prefix}_{}.{ext}",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}
