use anyhow::{bail, Context, Result};
use chrono::FixedOffset;
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;

/// Eastern standard time, where the exports are produced.
const DEFAULT_UTC_OFFSET: &str = "-05:00";

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub workers: usize,
    /// Value written to the "Format" column.
    pub format: String,
    /// Local offset for "Created on" and output file timestamps.
    pub utc_offset: FixedOffset,
    pub max_upload_bytes: usize,
    pub preview_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            workers: 8,
            format: "Standard".to_string(),
            utc_offset: FixedOffset::west_opt(5 * 3600).expect("static offset"),
            max_upload_bytes: 10 * 1024 * 1024,
            preview_rows: 5,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let defaults = Self::default();

        Ok(Self {
            addr: env::var("MLS_PARSER_ADDR")
                .unwrap_or_else(|_| defaults.addr.to_string())
                .parse()
                .context("MLS_PARSER_ADDR must be a socket address like 127.0.0.1:3000")?,
            workers: env::var("MLS_PARSER_WORKERS")
                .unwrap_or_else(|_| defaults.workers.to_string())
                .parse()
                .context("MLS_PARSER_WORKERS must be a valid number")?,
            format: env::var("MLS_PARSER_FORMAT").unwrap_or(defaults.format),
            utc_offset: parse_utc_offset(
                &env::var("MLS_PARSER_UTC_OFFSET").unwrap_or_else(|_| DEFAULT_UTC_OFFSET.into()),
            )
            .context("MLS_PARSER_UTC_OFFSET must look like -05:00")?,
            max_upload_bytes: env::var("MLS_PARSER_MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| defaults.max_upload_bytes.to_string())
                .parse()
                .context("MLS_PARSER_MAX_UPLOAD_BYTES must be a valid number")?,
            preview_rows: env::var("MLS_PARSER_PREVIEW_ROWS")
                .unwrap_or_else(|_| defaults.preview_rows.to_string())
                .parse()
                .context("MLS_PARSER_PREVIEW_ROWS must be a valid number")?,
        })
    }
}

/// Parses `+HH:MM` / `-HH:MM` (the colon is optional).
pub fn parse_utc_offset(raw: &str) -> Result<FixedOffset> {
    let raw = raw.trim();
    let (sign, rest) = match raw.chars().next() {
        Some('+') => (1, &raw[1..]),
        Some('-') => (-1, &raw[1..]),
        _ => bail!("offset '{raw}' must start with + or -"),
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        bail!("offset '{raw}' must have the form +HH:MM");
    }

    let hours: i32 = digits[..2].parse()?;
    let minutes: i32 = digits[2..].parse()?;

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .with_context(|| format!("offset '{raw}' is out of range"))
}
