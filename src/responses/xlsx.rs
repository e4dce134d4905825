// responses/xlsx.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// Return XLSX file as HTTP response
pub fn xlsx_response(buffer: Vec<u8>, filename: &str) -> ResultResp {
    attachment_response(
        buffer,
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        filename,
    )
}

pub fn csv_response(buffer: Vec<u8>, filename: &str) -> ResultResp {
    attachment_response(buffer, "text/csv; charset=utf-8", filename)
}

fn attachment_response(buffer: Vec<u8>, content_type: &str, filename: &str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        )
        .body(Body::from(buffer))
        .map_err(|_| ServerError::InternalError)?; // Convert any builder error

    Ok(resp)
}
