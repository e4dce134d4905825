pub mod contacts;
pub mod fields;
mod parser;
mod parser_error;
pub mod rules;
pub mod splitter;

pub use contacts::{extract_contact_set, parse_contacts_segment};
pub use fields::extract_fields;
pub use parser::{contains_listings, ListingParser};
pub use parser_error::ParserError;
pub use rules::{CaptureMode, CompiledRule, FieldRule, FIELD_RULES};
pub use splitter::{split_listings, ListingBlock};
