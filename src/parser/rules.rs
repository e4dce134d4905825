// src/parser/rules.rs

use regex::Regex;

use crate::domain::AgentRole;
use crate::parser::ParserError;

/// How a rule's first capture group becomes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMode {
    /// First match of `pattern`, capture trimmed.
    Single,
    /// Multi-line text after the label, ending at the line before the next
    /// catalogue label or roster line, or at the end of the block.
    FreeText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    /// Literal label the value hangs off in the export.
    pub label: &'static str,
    /// Full expression for `Single` rules; unused for `FreeText`.
    pub pattern: &'static str,
    pub mode: CaptureMode,
}

const fn single(name: &'static str, pattern: &'static str) -> FieldRule {
    single_after(name, name, pattern)
}

const fn single_after(name: &'static str, label: &'static str, pattern: &'static str) -> FieldRule {
    FieldRule {
        name,
        label,
        pattern,
        mode: CaptureMode::Single,
    }
}

const fn free_text(name: &'static str) -> FieldRule {
    FieldRule {
        name,
        label: name,
        pattern: "",
        mode: CaptureMode::FreeText,
    }
}

// Labels are followed by ':' or a tab (or both) in the export.
pub static FIELD_RULES: &[FieldRule] = &[
    single("MLS#", r"MLS#\s*(\d+)"),
    single("DOM/CDOM", r"DOM/CDOM[:\t]+[ \t]*([\d/]+)"),
    // The street address trails the DOM/CDOM value on the same header line.
    single_after("Address", "DOM/CDOM", r"DOM/CDOM[:\t]+[ \t]*[\d/]+[ \t]*([^\t\n]+)"),
    single("County", r"County[:\t]+[ \t]*([^\t\n]+)"),
    single("List Price", r"List Price[:\t]+[ \t]*\$?([\d,]+)"),
    single("Close Price", r"Close Price[ \t]*:[ \t]*\$?([\d,]+)"),
    single("Year Built", r"Year Built[:\t]+[ \t]*(\d+)"),
    single("Living Area", r"Living Area[:\t]+[ \t]*([\d,]+)"),
    single("Bedrooms Total", r"Bedrooms Total[:\t]+[ \t]*(\d+)"),
    single("Bathrooms Total", r"Bathrooms Total[:\t]+[ \t]*(\d+)"),
    single("Garage Spaces", r"Garage Spaces[:\t]+[ \t]*(\d+)"),
    single("Parcel Number", r"Parcel Number[:\t]+[ \t]*(\d+)"),
    single("Subdivision Name", r"Subdivision Name[:\t]+[ \t]*([^\t\n]+)"),
    single("CDD Fee", r"CDD Fee[:\t]+[ \t]*(Yes|No)"),
    single("New Construction", r"New Construction[:\t]+[ \t]*(Yes|No)"),
    single("Waterfront", r"Waterfront[:\t]+[ \t]*(Yes|No)"),
    single("Directions", r"Directions[:\t]+[ \t]*([^\t\n]+)"),
    free_text("Public Remarks"),
    free_text("Private Remarks"),
    single("Appliances", r"Appliances[:\t]+[ \t]*([\w ;,\-]+)"),
    single("Approx Parcel Size", r"Approx Parcel Size[:\t]+[ \t]*([^\t\n]+)"),
    single("Architectural Style", r"Architectural Style[:\t]+[ \t]*([^\t\n]+)"),
    single("Construction Materials", r"Construction Materials[:\t]+[ \t]*([^\t\n]+)"),
    single("Cooling", r"Cooling[:\t]+[ \t]*([^\t\n]+)"),
    single("Current Use", r"Current Use[:\t]+[ \t]*([^\t\n]+)"),
    single("DPR Eligible", r"DPR Eligible[:\t]+[ ]*([^\t\n]*)"),
    single("Fencing", r"Fencing[:\t]+[ \t]*([^\t\n]+)"),
    single("Fireplace Features", r"Fireplace Features[:\t]+[ \t]*([^\t\n]+)"),
    single("Heating", r"Heating[:\t]+[ \t]*([^\t\n]+)"),
    single("Interior Features", r"Interior Features[:\t]+[ \t]*([^\t\n]+)"),
    single("Laundry Features", r"Laundry Features[:\t]+[ \t]*([^\t\n]+)"),
    single("Listing Terms", r"Listing Terms[:\t]+[ \t]*([^\t\n]+)"),
    single("Lot Features", r"Lot Features[:\t]+[ \t]*([^\t\n]+)"),
    single("Parking Features", r"Parking Features[:\t]+[ \t]*([^\t\n]+)"),
    single("Patio And Porch Features", r"Patio And Porch Features[:\t]+[ \t]*([^\t\n]+)"),
    single("Pool Features", r"Pool Features[:\t]+[ \t]*([^\t\n]+)"),
    single("Possession", r"Possession[:\t]+[ \t]*([^\t\n]+)"),
    single("Road Surface Type", r"Road Surface Type[:\t]+[ \t]*([^\t\n]+)"),
    single("Roof", r"Roof[:\t]+[ \t]*([^\t\n]+)"),
    single("Security Features", r"Security Features[:\t]+[ \t]*([^\t\n]+)"),
    single("Sewer", r"Sewer[:\t]+[ \t]*([^\t\n]+)"),
    single("Special Listing Conditions", r"Special Listing Conditions[:\t]+[ \t]*([^\t\n]+)"),
    single("Utilities", r"Utilities[:\t]+[ \t]*([^\t\n]+)"),
    single("Water Source", r"Water Source[:\t]+[ \t]*([^\t\n]+)"),
    single("Showing Requirements", r"Showing Requirements[:\t]+[ \t]*([^\t\n]+)"),
    single("Showing Considerations", r"Showing Considerations[:\t]+[ \t]*([^\t\n]+)"),
    single("Listing Contract Date", r"Listing Contract Date[:\t]+[ \t]*([\d/]+)"),
    single("Purchase Contract Date", r"Purchase Contract Date[:\t]+[ \t]*([\d/]+)"),
    single("Close Date", r"Close Date[:\t]+[ \t]*([\d/]+)"),
    single("Listing Service", r"Listing Service[:\t]+[ \t]*([^\t\n]+)"),
    single("Original List Price", r"Original List Price[:\t]+[ \t]*\$?([\d,]+)"),
    single("List Price/SqFt", r"List Price/SqFt[:\t]+[ \t]*\$?([\d.]+)"),
    single("Sold Price/SqFt", r"Sold Price/SqFt[:\t]+[ \t]*\$?([\d.]+)"),
    single("Listing Agreement", r"Listing Agreement[:\t]+[ \t]*([^\t\n]+)"),
    single("Contingency Reason", r"Contingency Reason[:\t]+[ \t]*([^\t\n]+)"),
    single("Buyer Financing", r"Buyer Financing[:\t]+[ \t]*([^\t\n]+)"),
    single("Concessions", r"Concessions[:\t]+[ \t]*(Yes|No)"),
    single("BuyersCountryReside", r"BuyersCountryReside[:\t]+[ \t]*([^\t\n]+)"),
    single("SellersCountryReside", r"SellersCountryReside[:\t]+[ \t]*([^\t\n]+)"),
];

/// A catalogue rule with its pattern compiled.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub name: &'static str,
    pub mode: CaptureMode,
    pub regex: Regex,
    /// Leading parts of longer labels ending in this one, e.g. "Original "
    /// for "List Price". A match right after one of them is the other field.
    shadowing_prefixes: Vec<&'static str>,
}

impl CompiledRule {
    /// Compiles `rule` against the catalogue it belongs to; the catalogue
    /// supplies free-text terminators and shadowing labels.
    pub fn compile(rule: &FieldRule, catalogue: &[FieldRule]) -> Result<Self, ParserError> {
        let source = match rule.mode {
            CaptureMode::Single => rule.pattern.to_string(),
            CaptureMode::FreeText => free_text_pattern(rule.label, &known_labels(catalogue)),
        };

        let regex = Regex::new(&source).map_err(|source| ParserError::InvalidPattern {
            field: rule.name.to_string(),
            source,
        })?;

        let mut shadowing_prefixes: Vec<&'static str> = catalogue
            .iter()
            .map(|other| other.label)
            .filter(|other| other.len() > rule.label.len() && other.ends_with(rule.label))
            .map(|other| &other[..other.len() - rule.label.len()])
            .collect();
        shadowing_prefixes.sort_unstable();
        shadowing_prefixes.dedup();

        Ok(Self {
            name: rule.name,
            mode: rule.mode,
            regex,
            shadowing_prefixes,
        })
    }

    /// First capture of the rule in `text`, or an empty string.
    pub fn extract(&self, text: &str) -> String {
        let Some(value) = self
            .regex
            .captures_iter(text)
            .filter(|caps| {
                let start = caps.get(0).map(|m| m.start()).unwrap_or(0);
                !self
                    .shadowing_prefixes
                    .iter()
                    .any(|prefix| text[..start].ends_with(prefix))
            })
            .find_map(|caps| caps.get(1))
            .map(|m| m.as_str())
        else {
            return String::new();
        };

        match self.mode {
            CaptureMode::Single => value.trim().to_string(),
            CaptureMode::FreeText => value.replace("\r\n", "\n").trim().to_string(),
        }
    }
}

/// Every catalogue label plus the roster designations, longest first so the
/// alternation prefers "Original List Price" over "List Price".
fn known_labels(catalogue: &[FieldRule]) -> Vec<&'static str> {
    let mut labels: Vec<&'static str> = catalogue
        .iter()
        .map(|rule| rule.label)
        .chain(AgentRole::ALL.iter().map(|role| role.designation()))
        .collect();
    labels.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    labels.dedup();
    labels
}

/// `label`, a ':'/tab delimiter, then the shortest span up to a line that
/// opens with another label, or to the end of the block. The delimiter never
/// crosses a line, so an empty value stays empty.
fn free_text_pattern(label: &str, terminators: &[&str]) -> String {
    let label = regex::escape(label);
    let terminators = terminators
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");

    format!(r"{label}[:\t]+[ \t]*([\s\S]*?)\s*(?:\r?\n(?:{terminators})[ \t]*[:\t]|\z)")
}

pub fn compile_rules(rules: &[FieldRule]) -> Result<Vec<CompiledRule>, ParserError> {
    rules
        .iter()
        .map(|rule| CompiledRule::compile(rule, rules))
        .collect()
}
