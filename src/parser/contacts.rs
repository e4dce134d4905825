// src/parser/contacts.rs

use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

use crate::domain::{AgentRole, ContactChannel, ContactSet};

// (label) or (label:) then an optional ':' and a value running to the next '('.
static CONTACT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(([^):]+):?\)\s*:?\s*([^()]+)?").expect("static contact pattern")
});

/// Pulls the name and contact channels for `role` out of a listing block.
///
/// Every line opening with `<designation>:` contributes; repeated lines are
/// joined with a space before parsing. A role with no line yields an empty set.
pub fn extract_contact_set(block: &str, role: AgentRole) -> ContactSet {
    let line = designation_lines(block, role.designation()).join(" ");
    let line = line.trim();

    if line.is_empty() {
        return empty_contact_set();
    }

    let (name, segment) = match line.find('(') {
        Some(idx) => (line[..idx].trim(), &line[idx..]),
        None => (line, ""),
    };

    let mut set = empty_contact_set();
    set.name = name.to_string();

    for (label, value) in parse_contacts_segment(segment) {
        match ContactChannel::from_label(&label) {
            // Later occurrences win, matching how repeated lines are concatenated.
            Some(channel) => {
                set.contacts.insert(channel, value);
            }
            None => tracing::trace!(role = role.label(), %label, "ignoring unknown contact channel"),
        }
    }

    set
}

/// Splits `(Phone): 555-1111 (Email): a@b.com` into label/value pairs.
/// Labels and values are trimmed; a label with nothing after it maps to "".
pub fn parse_contacts_segment(segment: &str) -> Vec<(String, String)> {
    CONTACT_RE
        .captures_iter(segment)
        .filter_map(|caps| {
            let label = caps.get(1)?.as_str().trim().to_string();
            let value = caps
                .get(2)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();
            Some((label, value))
        })
        .collect()
}

/// Contents of every line starting with `designation:`, in block order.
fn designation_lines<'a>(block: &'a str, designation: &str) -> Vec<&'a str> {
    let prefix = format!("{designation}:");

    block
        .lines()
        .filter_map(|line| line.strip_prefix(prefix.as_str()))
        .map(str::trim)
        .collect()
}

fn empty_contact_set() -> ContactSet {
    let contacts: IndexMap<ContactChannel, String> = ContactChannel::ALL
        .iter()
        .map(|channel| (*channel, String::new()))
        .collect();

    ContactSet {
        name: String::new(),
        contacts,
    }
}
