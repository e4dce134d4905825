use crate::domain::Record;
use crate::errors::ServerError;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

pub fn write_records_csv<W: Write>(
    writer: W,
    columns: &[String],
    records: &[Record],
) -> Result<(), ServerError> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(columns)
        .map_err(|e| ServerError::CsvError(format!("Failed to write header: {e}")))?;

    for record in records {
        wtr.write_record(record.values_for(columns))
            .map_err(|e| ServerError::CsvError(format!("Failed to write row: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| ServerError::CsvError(format!("Failed to flush: {e}")))
}

pub fn records_to_csv(columns: &[String], records: &[Record]) -> Result<Vec<u8>, ServerError> {
    let mut buffer = Vec::new();
    write_records_csv(&mut buffer, columns, records)?;
    Ok(buffer)
}

/// Appends records to an existing table, laying each row out against the
/// file's own header row. A missing or empty file is created with `columns`
/// as its header. Returns the number of rows written.
pub fn append_records_csv(
    path: &Path,
    columns: &[String],
    records: &[Record],
) -> Result<usize, ServerError> {
    let existing_header = read_header(path)?;

    let Some(header) = existing_header else {
        let file = File::create(path)
            .map_err(|e| ServerError::CsvError(format!("Failed to create {}: {e}", path.display())))?;
        write_records_csv(file, columns, records)?;
        return Ok(records.len());
    };

    let dropped: Vec<&String> = columns.iter().filter(|c| !header.contains(c)).collect();
    if !dropped.is_empty() {
        tracing::warn!(
            file = %path.display(),
            ?dropped,
            "existing table lacks columns, their values are not appended"
        );
    }

    let file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| ServerError::CsvError(format!("Failed to open {}: {e}", path.display())))?;

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    for record in records {
        wtr.write_record(record.values_for(&header))
            .map_err(|e| ServerError::CsvError(format!("Failed to append row: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| ServerError::CsvError(format!("Failed to flush: {e}")))?;

    Ok(records.len())
}

fn read_header(path: &Path) -> Result<Option<Vec<String>>, ServerError> {
    if !path.exists() {
        return Ok(None);
    }

    let mut rdr = csv::Reader::from_path(path)
        .map_err(|e| ServerError::CsvError(format!("Failed to read {}: {e}", path.display())))?;

    let header = rdr
        .headers()
        .map_err(|e| ServerError::CsvError(format!("Failed to read header: {e}")))?;

    if header.is_empty() {
        return Ok(None);
    }

    Ok(Some(header.iter().map(str::to_string).collect()))
}
