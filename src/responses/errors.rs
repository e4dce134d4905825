use crate::errors::ServerError;
use astra::Response;

// Errors are rendered by templates::html_error_response at the server edge.
pub type ResultResp = Result<Response, ServerError>;
