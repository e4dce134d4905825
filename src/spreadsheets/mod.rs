pub mod export_csv;
pub mod export_xlsx;

use chrono::{DateTime, FixedOffset};

pub use export_csv::{append_records_csv, records_to_csv, write_records_csv};
pub use export_xlsx::export_records_xlsx;

pub const DEFAULT_BASENAME: &str = "parsed_sales_data";

/// `parsed_sales_data` + `csv` -> `parsed_sales_data_101726-143005.csv`
pub fn timestamped_filename(base: &str, ext: &str, now: DateTime<FixedOffset>) -> String {
    format!("{base}_{}.{ext}", now.format("%m%d%y-%H%M%S"))
}
