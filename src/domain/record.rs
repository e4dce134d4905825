// src/domain/record.rs

use chrono::{DateTime, FixedOffset, Utc};
use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::agent::{AgentRole, ContactChannel, ContactSet};

pub const CREATED_ON_COLUMN: &str = "Created on";
pub const FORMAT_COLUMN: &str = "Format";

/// Run-wide values stamped onto every record ahead of the parsed fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordMeta {
    pub created_on: String,
    pub format: String,
}

impl RecordMeta {
    pub fn new(created_on: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            created_on: created_on.into(),
            format: format.into(),
        }
    }

    /// Stamps today's date (`mm/dd/yy`) in the given offset.
    pub fn now(offset: FixedOffset, format: impl Into<String>) -> Self {
        Self::at(Utc::now().with_timezone(&offset), format)
    }

    pub fn at(moment: DateTime<FixedOffset>, format: impl Into<String>) -> Self {
        Self::new(moment.format("%m/%d/%y").to_string(), format)
    }
}

/// One parsed listing: column name -> value, in column order.
///
/// Every record produced by one parser carries the same key set, so a
/// sequence of records always renders as a rectangular table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, String>,
}

impl Record {
    pub fn new(meta: &RecordMeta) -> Self {
        let mut fields = IndexMap::new();
        fields.insert(CREATED_ON_COLUMN.to_string(), meta.created_on.clone());
        fields.insert(FORMAT_COLUMN.to_string(), meta.format.clone());
        Self { fields }
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    /// Flattens a contact set under `<designation> Name`, `<designation> Phone`, ...
    pub fn insert_contacts(&mut self, role: AgentRole, set: &ContactSet) {
        self.insert(role.name_column(), set.name.clone());
        for channel in ContactChannel::ALL {
            self.insert(role.channel_column(channel), set.get(channel));
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.values().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Values laid out against a foreign header row; unknown columns are empty.
    pub fn values_for<'a>(&'a self, header: &'a [String]) -> Vec<&'a str> {
        header
            .iter()
            .map(|column| self.get(column).unwrap_or(""))
            .collect()
    }
}
