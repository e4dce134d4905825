use crate::config::Config;
use crate::domain::{Record, RecordMeta};
use crate::errors::ServerError;
use crate::parser::{contains_listings, ListingParser};
use crate::responses::{csv_response, html_response, json_response, xlsx_response, ResultResp};
use crate::spreadsheets::{
    export_records_xlsx, records_to_csv, timestamped_filename, DEFAULT_BASENAME,
};
use crate::templates;
use crate::templates::pages::home::LISTINGS_FIELD;
use astra::Request;
use chrono::Utc;
use std::io::Read;

/// Everything a request handler needs; built once at startup.
pub struct AppState {
    pub parser: ListingParser,
    pub config: Config,
}

impl AppState {
    pub fn new(parser: ListingParser, config: Config) -> Self {
        Self { parser, config }
    }
}

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    tracing::debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(templates::pages::home_page()),

        ("POST", "/preview") => {
            let records = parse_submission(&mut req, state)?;
            let columns = state.parser.columns();
            html_response(templates::pages::preview_page(&templates::pages::PreviewVm {
                columns: &columns,
                records: &records,
                rows: state.config.preview_rows,
            }))
        }

        ("POST", "/parse.xlsx") => {
            let records = parse_submission(&mut req, state)?;
            let buffer = export_records_xlsx(&state.parser.columns(), &records)?;
            xlsx_response(buffer, &output_filename(state, "xlsx"))
        }

        ("POST", "/parse.csv") => {
            let records = parse_submission(&mut req, state)?;
            let buffer = records_to_csv(&state.parser.columns(), &records)?;
            csv_response(buffer, &output_filename(state, "csv"))
        }

        ("POST", "/parse.json") => {
            let records = parse_submission(&mut req, state)?;
            json_response(&records)
        }

        _ => Err(ServerError::NotFound),
    }
}

/// Reads the export text from the request and parses it.
///
/// Blank text and text without any MLS marker are both rejected, with
/// different messages, so a user can tell a bad paste from an empty one.
fn parse_submission(req: &mut Request, state: &AppState) -> Result<Vec<Record>, ServerError> {
    let text = read_submission(req, state.config.max_upload_bytes)?;

    if text.trim().is_empty() {
        return Err(ServerError::BadRequest("no text submitted".into()));
    }

    if !contains_listings(&text) {
        return Err(ServerError::BadRequest("no MLS# markers found".into()));
    }

    let meta = RecordMeta::now(state.config.utc_offset, state.config.format.clone());
    Ok(state.parser.parse(&text, &meta))
}

/// Accepts either a urlencoded form (the upload page) or a raw text body.
fn read_submission(req: &mut Request, limit: usize) -> Result<String, ServerError> {
    let is_form = req
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false);

    let mut bytes = Vec::new();
    req.body_mut()
        .reader()
        .take(limit as u64 + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| ServerError::BadRequest(format!("Failed to read body: {e}")))?;

    if bytes.len() > limit {
        return Err(ServerError::PayloadTooLarge(limit));
    }

    if is_form {
        return Ok(url::form_urlencoded::parse(&bytes)
            .find(|(key, _)| key == LISTINGS_FIELD)
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default());
    }

    String::from_utf8(bytes).map_err(|_| ServerError::BadRequest("body is not valid UTF-8".into()))
}

fn output_filename(state: &AppState, ext: &str) -> String {
    let now = Utc::now().with_timezone(&state.config.utc_offset);
    timestamped_filename(DEFAULT_BASENAME, ext, now)
}
