pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::xlsx::XlsxDocument;
pub use config::{cli::LocalStorage, ExportOptions, HeaderLocale};
pub use core::{
    engine::ExportEngine,
    service::{generate_employees_csv, generate_employees_excel, ExportFormat, ExportService},
};
pub use domain::model::{parse_employees, Address, Employee, FlatExportRow};
pub use domain::ports::EmployeeExporter;
pub use utils::error::{ExportError, Result};
