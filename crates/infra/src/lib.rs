//! Infrastructure layer: spreadsheet adapters around the transfer planner.
//!
//! - [`ingest`]: input table (XLSX/XLS/ODS via calamine, CSV via csv) to raw rows.
//! - [`report`]: report layout and XLSX rendering.

pub mod ingest;
pub mod report;

pub use ingest::{IngestError, SourceFormat, read_csv, read_table, read_workbook};
pub use report::{Cell, ReportError, ReportGrid, Sheet, render_xlsx, report_file_name};
