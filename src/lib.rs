//! Parser for semi-structured MLS sales exports.
//!
//! An export is one text blob holding many listings, each opened by an
//! `MLS# <digits>` marker. [`ListingParser::parse`] turns it into one
//! [`Record`] per listing with a fixed, ordered column set, ready to be
//! written out as a table.

pub mod config;
pub mod domain;
pub mod errors;
pub mod parser;
pub mod responses;
pub mod router;
pub mod spreadsheets;
pub mod templates;

#[cfg(test)]
mod tests;

pub use domain::{AgentRole, ContactChannel, ContactSet, Record, RecordMeta};
pub use parser::{ListingParser, ParserError};
