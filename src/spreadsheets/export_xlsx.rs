use crate::domain::Record;
use crate::errors::ServerError;
use rust_xlsxwriter::{Format, Workbook};

/// Renders records as a single-sheet workbook: header row, then one row per listing.
pub fn export_records_xlsx(columns: &[String], records: &[Record]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    worksheet
        .set_name("Listings")
        .map_err(|e| ServerError::XlsxError(format!("Failed to name worksheet: {}", e)))?;

    // Headers
    for (col, header) in columns.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, header, &bold)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    // Rows
    for (i, record) in records.iter().enumerate() {
        let r = (i + 1) as u32;

        for (col, value) in record.values_for(columns).into_iter().enumerate() {
            worksheet.write_string(r, col as u16, value).map_err(|e| {
                ServerError::XlsxError(format!(
                    "Failed to write '{}' on row {}: {}",
                    columns[col], r, e
                ))
            })?;
        }
    }

    worksheet
        .set_freeze_panes(1, 0)
        .map_err(|e| ServerError::XlsxError(format!("Failed to freeze header: {}", e)))?;

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}
