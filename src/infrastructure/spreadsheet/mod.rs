//! Spreadsheet export of link records.

mod xlsx_report;

pub use xlsx_report::{SHEET_NAME, XLSX_CONTENT_TYPE, XLSX_FILENAME, render_xlsx};
