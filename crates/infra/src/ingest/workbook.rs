use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};

use restock_transfer::{CellValue, RawStockRow};

use super::{ColumnMap, IngestError, is_blank};

/// Read the first worksheet of an in-memory workbook.
pub fn read_workbook(bytes: &[u8]) -> Result<Vec<RawStockRow>, IngestError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;
    let range = workbook.worksheet_range_at(0).ok_or(IngestError::NoWorksheet)??;

    let mut records = range
        .rows()
        .map(|row| row.iter().map(cell_value).collect::<Vec<_>>())
        .filter(|cells| !is_blank(cells));

    let headers: Vec<String> = records
        .next()
        .ok_or(IngestError::NoHeader)?
        .iter()
        .map(CellValue::as_text)
        .collect();
    let columns = ColumnMap::from_headers(&headers)?;

    Ok(records.map(|cells| columns.row(&cells)).collect())
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) if s.trim().is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        _ => CellValue::Empty,
    }
}
