pub mod cell_ref;
pub mod delimited;
pub mod engine;
pub mod flattener;
pub mod service;
pub mod spreadsheet;

pub use crate::domain::model::{Employee, FlatExportRow};
pub use crate::domain::ports::{EmployeeExporter, SpreadsheetDocument, Storage};
pub use crate::utils::error::Result;
