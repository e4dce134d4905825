use crate::parser::rules::{compile_rules, CaptureMode, CompiledRule, FieldRule, FIELD_RULES};
use crate::parser::splitter::split_listings;
use crate::parser::{extract_fields, ParserError};
use crate::tests::utils::{MINIMAL_EXPORT, SAMPLE_EXPORT};
use std::collections::HashSet;

fn compiled() -> Vec<CompiledRule> {
    compile_rules(FIELD_RULES).expect("catalogue compiles")
}

fn field<'a>(fields: &'a [(&'static str, String)], name: &str) -> &'a str {
    fields
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| v.as_str())
        .unwrap_or_else(|| panic!("no field named {name}"))
}

#[test]
fn catalogue_names_are_unique() {
    let mut seen = HashSet::new();
    for rule in FIELD_RULES {
        assert!(seen.insert(rule.name), "duplicate rule {}", rule.name);
    }
    assert!(FIELD_RULES.len() >= 50);
}

#[test]
fn every_rule_produces_exactly_one_entry() {
    let rules = compiled();
    let blocks = split_listings(SAMPLE_EXPORT);

    for block in blocks {
        let fields = extract_fields(block.text, &rules);
        let names: Vec<&str> = fields.iter().map(|(n, _)| *n).collect();
        let expected: Vec<&str> = FIELD_RULES.iter().map(|r| r.name).collect();
        assert_eq!(names, expected);
    }
}

#[test]
fn extracts_tab_and_colon_delimited_values() {
    let rules = compiled();
    let blocks = split_listings(SAMPLE_EXPORT);
    let fields = extract_fields(blocks[0].text, &rules);

    assert_eq!(field(&fields, "MLS#"), "11223344");
    assert_eq!(field(&fields, "DOM/CDOM"), "12/45");
    assert_eq!(field(&fields, "Address"), "1450 Heron Bay Dr");
    assert_eq!(field(&fields, "County"), "Collier");
    assert_eq!(field(&fields, "List Price"), "475,000");
    assert_eq!(field(&fields, "Close Price"), "462,500");
    assert_eq!(field(&fields, "Original List Price"), "489,000");
    assert_eq!(field(&fields, "List Price/SqFt"), "251.32");
    assert_eq!(field(&fields, "Sold Price/SqFt"), "244.71");
    assert_eq!(field(&fields, "Year Built"), "2004");
    assert_eq!(field(&fields, "Living Area"), "1,890");
    assert_eq!(field(&fields, "Bedrooms Total"), "3");
    assert_eq!(field(&fields, "Bathrooms Total"), "2");
    assert_eq!(field(&fields, "Parcel Number"), "23456789012");
    assert_eq!(field(&fields, "Subdivision Name"), "Heron Bay");
    assert_eq!(field(&fields, "Waterfront"), "Yes");
    assert_eq!(field(&fields, "CDD Fee"), "No");
    assert_eq!(
        field(&fields, "Directions"),
        "US-41 north to Heron Bay Dr, east to home on left"
    );
    assert_eq!(
        field(&fields, "Appliances"),
        "Dishwasher, Dryer, Range, Refrigerator, Washer"
    );
    assert_eq!(field(&fields, "Cooling"), "Central Air");
    assert_eq!(field(&fields, "Heating"), "Electric");
    assert_eq!(field(&fields, "Roof"), "Shingle");
    assert_eq!(field(&fields, "Sewer"), "Public Sewer");
    assert_eq!(
        field(&fields, "Interior Features"),
        "Cathedral Ceiling(s), Walk-In Closet(s)"
    );
    assert_eq!(field(&fields, "Close Date"), "08/20/2026");
    assert_eq!(field(&fields, "Buyer Financing"), "Conventional");
    assert_eq!(field(&fields, "Concessions"), "No");
}

#[test]
fn unmatched_rules_are_empty_strings() {
    let rules = compiled();
    let blocks = split_listings(SAMPLE_EXPORT);
    let fields = extract_fields(blocks[2].text, &rules);

    assert_eq!(field(&fields, "MLS#"), "33445566");
    for (name, value) in fields.iter().filter(|(n, _)| *n != "MLS#") {
        assert_eq!(value, "", "{name} should be empty");
    }
}

#[test]
fn tolerates_spaces_around_delimiters() {
    let rules = compiled();
    let blocks = split_listings(SAMPLE_EXPORT);
    let fields = extract_fields(blocks[1].text, &rules);

    assert_eq!(field(&fields, "DOM/CDOM"), "3/3");
    assert_eq!(field(&fields, "Address"), "88 Palm Ct");
    assert_eq!(field(&fields, "List Price"), "310,000");
    assert_eq!(field(&fields, "Close Price"), "305,000");
    assert_eq!(field(&fields, "Possession"), "");
}

#[test]
fn free_text_keeps_embedded_newlines() {
    let rules = compiled();
    let blocks = split_listings(SAMPLE_EXPORT);
    let fields = extract_fields(blocks[0].text, &rules);

    assert_eq!(
        field(&fields, "Public Remarks"),
        "Beautifully updated lakefront home with open floor plan.\n\
         New roof 2022 and impact windows throughout.\n\
         \n\
         Walk to community pool and tennis."
    );
    assert_eq!(
        field(&fields, "Private Remarks"),
        "Seller prefers 30 day close.\nLockbox on side door."
    );
}

#[test]
fn private_remarks_stop_at_roster_lines() {
    let rules = compiled();
    let blocks = split_listings(SAMPLE_EXPORT);
    let fields = extract_fields(blocks[1].text, &rules);

    assert_eq!(field(&fields, "Public Remarks"), "Cozy villa close to the beach.");
    assert_eq!(field(&fields, "Private Remarks"), "Vacant, show anytime.");
}

#[test]
fn public_remarks_stop_at_any_following_label() {
    let rules = compiled();
    let fields = extract_fields("MLS# 9\nPublic Remarks: nice home\nAppliances:\tDishwasher", &rules);

    assert_eq!(field(&fields, "Public Remarks"), "nice home");
    assert_eq!(field(&fields, "Appliances"), "Dishwasher");
}

#[test]
fn public_remarks_without_a_following_label_run_to_end_of_block() {
    let rules = compiled();
    let fields = extract_fields("MLS# 9\nPublic Remarks: dangling text\nmore", &rules);

    assert_eq!(field(&fields, "Public Remarks"), "dangling text\nmore");
}

#[test]
fn private_remarks_stop_at_the_next_catalogue_label() {
    let rules = compiled();
    let text = "MLS# 9\nPrivate Remarks: show anytime\nCooling:\tCentral Air\nRoof:\tShingle\nLA: Bob";
    let fields = extract_fields(text, &rules);

    assert_eq!(field(&fields, "Private Remarks"), "show anytime");
    assert_eq!(field(&fields, "Cooling"), "Central Air");
    assert_eq!(field(&fields, "Roof"), "Shingle");
}

#[test]
fn empty_private_remarks_do_not_take_the_next_line() {
    let rules = compiled();
    let text = "MLS# 9\nPrivate Remarks:\nAppliances:\tDishwasher\nCooling:\tCentral\nLA: Bob";
    let fields = extract_fields(text, &rules);

    assert_eq!(field(&fields, "Private Remarks"), "");
    assert_eq!(field(&fields, "Appliances"), "Dishwasher");
    assert_eq!(field(&fields, "Cooling"), "Central");
}

#[test]
fn remarks_keep_lines_that_only_mention_a_label() {
    let rules = compiled();
    let text = "MLS# 9\nPublic Remarks: first line\nRoof replaced in 2022\nSee Directions below\nPrivate Remarks: none";
    let fields = extract_fields(text, &rules);

    assert_eq!(
        field(&fields, "Public Remarks"),
        "first line\nRoof replaced in 2022\nSee Directions below"
    );
}

#[test]
fn label_inside_a_longer_label_is_not_matched() {
    let rules = compiled();
    let text = "MLS# 9\nOriginal List Price:\t$489,000\nList Price:\t$475,000";
    let fields = extract_fields(text, &rules);

    assert_eq!(field(&fields, "List Price"), "475,000");
    assert_eq!(field(&fields, "Original List Price"), "489,000");

    let only_original = extract_fields("MLS# 9\nOriginal List Price:\t$489,000", &rules);
    assert_eq!(field(&only_original, "List Price"), "");
    assert_eq!(field(&only_original, "Original List Price"), "489,000");
}

#[test]
fn blank_values_stay_empty() {
    let rules = compiled();
    let text = "MLS# 9\nCounty:\t\nSubdivision Name:\tHeron Bay\nCooling:\nHeating:\tElectric\nClose Price:\nClose Date:\t08/20/2026";
    let fields = extract_fields(text, &rules);

    assert_eq!(field(&fields, "County"), "");
    assert_eq!(field(&fields, "Subdivision Name"), "Heron Bay");
    assert_eq!(field(&fields, "Cooling"), "");
    assert_eq!(field(&fields, "Heating"), "Electric");
    assert_eq!(field(&fields, "Close Price"), "");
    assert_eq!(field(&fields, "Close Date"), "08/20/2026");
}

#[test]
fn private_remarks_may_run_to_end_of_block() {
    let rules = compiled();
    let fields = extract_fields("MLS# 9\nPrivate Remarks:\tline one\nline two\n\n", &rules);

    assert_eq!(field(&fields, "Private Remarks"), "line one\nline two");
}

#[test]
fn minimal_fixture_strips_dollar_sign() {
    let rules = compiled();
    let fields = extract_fields(MINIMAL_EXPORT, &rules);

    assert_eq!(field(&fields, "MLS#"), "12345");
    assert_eq!(field(&fields, "List Price"), "250,000");
}

#[test]
fn rule_order_does_not_change_values() {
    let rules = compiled();
    let mut reversed = rules.clone();
    reversed.reverse();
    let blocks = split_listings(SAMPLE_EXPORT);

    for block in blocks {
        let mut forward = extract_fields(block.text, &rules);
        let mut backward = extract_fields(block.text, &reversed);
        forward.sort();
        backward.sort();
        assert_eq!(forward, backward);
    }
}

#[test]
fn bad_pattern_is_a_configuration_error() {
    let rules = [FieldRule {
        name: "Broken",
        label: "Broken",
        pattern: r"Broken[:\t+\s*(\d+)",
        mode: CaptureMode::Single,
    }];

    match compile_rules(&rules) {
        Err(ParserError::InvalidPattern { field, .. }) => assert_eq!(field, "Broken"),
        other => panic!("expected InvalidPattern, got {other:?}"),
    }
}
