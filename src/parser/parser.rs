// src/parser/parser.rs

use rayon::prelude::*;

use crate::domain::{AgentRole, Record, RecordMeta, CREATED_ON_COLUMN, FORMAT_COLUMN};
use crate::parser::contacts::extract_contact_set;
use crate::parser::fields::extract_fields;
use crate::parser::rules::{compile_rules, CompiledRule, FieldRule, FIELD_RULES};
use crate::parser::splitter::{has_markers, split_listings, ListingBlock};
use crate::parser::ParserError;

/// Turns a raw listing export into one `Record` per MLS marker.
///
/// Patterns are compiled once in `new`; `parse` is a pure function of its
/// input and can be called concurrently from any number of threads.
#[derive(Debug, Clone)]
pub struct ListingParser {
    rules: Vec<CompiledRule>,
}

impl ListingParser {
    pub fn new() -> Result<Self, ParserError> {
        Self::with_rules(FIELD_RULES)
    }

    pub fn with_rules(rules: &[FieldRule]) -> Result<Self, ParserError> {
        let rules = compile_rules(rules)?;
        tracing::debug!(rules = rules.len(), "compiled field rules");
        Ok(Self { rules })
    }

    pub fn parse(&self, document: &str, meta: &RecordMeta) -> Vec<Record> {
        let blocks = split_listings(document);

        if blocks.is_empty() {
            if !document.trim().is_empty() {
                tracing::warn!(bytes = document.len(), "no MLS# markers found in text");
            }
            return Vec::new();
        }

        // Blocks share nothing, order is restored by the indexed collect.
        let records: Vec<Record> = blocks
            .par_iter()
            .map(|block| self.parse_block(block, meta))
            .collect();

        tracing::info!(listings = records.len(), "parsed listing export");
        records
    }

    pub fn parse_block(&self, block: &ListingBlock<'_>, meta: &RecordMeta) -> Record {
        tracing::debug!(mls = block.mls_id, "parsing listing block");

        let mut record = Record::new(meta);

        for (name, value) in extract_fields(block.text, &self.rules) {
            record.insert(name, value);
        }

        for role in AgentRole::ALL {
            let set = extract_contact_set(block.text, role);
            if set.is_empty() {
                tracing::trace!(mls = block.mls_id, role = role.label(), "no roster line");
            }
            record.insert_contacts(role, &set);
        }

        record
    }

    /// Header row shared by every record this parser produces.
    pub fn columns(&self) -> Vec<String> {
        let mut columns = vec![CREATED_ON_COLUMN.to_string(), FORMAT_COLUMN.to_string()];
        columns.extend(self.rules.iter().map(|rule| rule.name.to_string()));
        for role in AgentRole::ALL {
            columns.extend(role.columns());
        }
        columns
    }
}

/// Whether the text contains anything that could be a listing.
pub fn contains_listings(document: &str) -> bool {
    has_markers(document)
}
