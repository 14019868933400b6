//! XLSX rendering of link records with `rust_xlsxwriter`.

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::domain::entities::LinkRecord;

/// Name of the single worksheet in the export.
pub const SHEET_NAME: &str = "URLs";

/// Attachment filename offered to the browser.
pub const XLSX_FILENAME: &str = "url_status.xlsx";

/// MIME type of the export.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const HEADERS: [&str; 2] = ["URL", "Status"];

/// Renders records into an in-memory XLSX workbook.
///
/// # Layout
///
/// - One worksheet named [`SHEET_NAME`]
/// - Bold header row `URL | Status`
/// - One row per record, in input order
/// - Columns auto-fitted to their content
///
/// # Errors
///
/// Returns [`XlsxError`] if a cell cannot be written (e.g. a string longer
/// than the 32767 character cell limit) or the workbook cannot be assembled.
pub fn render_xlsx(records: &[LinkRecord]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (index, record) in records.iter().enumerate() {
        let row = index as u32 + 1;
        worksheet.write_string(row, 0, &record.url)?;
        worksheet.write_string(row, 1, &record.status)?;
    }

    worksheet.autofit();

    workbook.save_to_buffer()
}
