use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use thiserror::Error;

use super::{Cell, ReportGrid, Sheet};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write xlsx report: {0}")]
    Xlsx(#[from] XlsxError),
}

/// Render the report grid as an in-memory XLSX workbook.
pub fn render_xlsx(grid: &ReportGrid) -> Result<Vec<u8>, ReportError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    for sheet in grid.sheets() {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name)?;
        write_sheet(worksheet, sheet, &header)?;
    }

    Ok(workbook.save_to_buffer()?)
}

fn write_sheet(worksheet: &mut Worksheet, sheet: &Sheet, header: &Format) -> Result<(), XlsxError> {
    for (r, row) in sheet.rows.iter().enumerate() {
        let is_header = sheet.header_rows.contains(&r);
        let r = r as u32;

        for (c, cell) in row.iter().enumerate() {
            let c = c as u16;
            match (cell, is_header) {
                (Cell::Blank, _) => {}
                (Cell::Text(s), true) => {
                    worksheet.write_string_with_format(r, c, s, header)?;
                }
                (Cell::Text(s), false) => {
                    worksheet.write_string(r, c, s)?;
                }
                (Cell::Int(n), _) => {
                    worksheet.write_number(r, c, *n as f64)?;
                }
            }
        }
    }
    Ok(())
}
