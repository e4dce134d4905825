// errors.rs
use thiserror::Error;

/// Errors raised by the HTTP surface and the table writers.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Payload Too Large: limit is {0} bytes")]
    PayloadTooLarge(usize),
    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),
    #[error("CSV Error: {0}")]
    CsvError(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::PayloadTooLarge(_) => 413,
            ServerError::XlsxError(_) | ServerError::CsvError(_) | ServerError::InternalError => 500,
        }
    }
}
