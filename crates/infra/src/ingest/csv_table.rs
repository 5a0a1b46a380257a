use std::io::Read;

use restock_transfer::{CellValue, RawStockRow};

use super::{ColumnMap, IngestError, is_blank};

/// Read a CSV table with a header line.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<RawStockRow>, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(IngestError::NoHeader);
    }
    let columns = ColumnMap::from_headers(&headers)?;

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let cells: Vec<CellValue> = record
            .iter()
            .map(|field| {
                if field.is_empty() {
                    CellValue::Empty
                } else {
                    CellValue::text(field)
                }
            })
            .collect();

        if is_blank(&cells) {
            continue;
        }
        rows.push(columns.row(&cells));
    }

    Ok(rows)
}
