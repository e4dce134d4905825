use crate::config::{parse_utc_offset, Config};

#[test]
fn parses_signed_offsets() {
    assert_eq!(parse_utc_offset("-05:00").unwrap().local_minus_utc(), -5 * 3600);
    assert_eq!(parse_utc_offset("+0530").unwrap().local_minus_utc(), 5 * 3600 + 30 * 60);
    assert_eq!(parse_utc_offset(" +00:00 ").unwrap().local_minus_utc(), 0);
}

#[test]
fn rejects_malformed_offsets() {
    assert!(parse_utc_offset("05:00").is_err());
    assert!(parse_utc_offset("-5").is_err());
    assert!(parse_utc_offset("-ab:cd").is_err());
    assert!(parse_utc_offset("+99:00").is_err());
}

#[test]
fn defaults_match_the_exporting_office() {
    let config = Config::default();

    assert_eq!(config.format, "Standard");
    assert_eq!(config.utc_offset.local_minus_utc(), -5 * 3600);
    assert_eq!(config.preview_rows, 5);
    assert_eq!(config.addr.port(), 3000);
}
