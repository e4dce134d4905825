// src/parser/fields.rs

use crate::parser::rules::CompiledRule;

/// Applies every rule to the block. One entry per rule, in catalogue order;
/// unmatched rules produce an empty value.
pub fn extract_fields(block: &str, rules: &[CompiledRule]) -> Vec<(&'static str, String)> {
    rules
        .iter()
        .map(|rule| (rule.name, rule.extract(block)))
        .collect()
}
