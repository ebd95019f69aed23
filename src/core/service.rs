use crate::adapters::xlsx::XlsxDocument;
use crate::config::ExportOptions;
use crate::core::{delimited, spreadsheet};
use crate::domain::model::Employee;
use crate::domain::ports::EmployeeExporter;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    Excel,
    Csv,
}

impl ExportFormat {
    pub fn file_extension(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "xlsx",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Csv => "text/csv; charset=utf-8",
        }
    }
}

/// 員工匯出服務，每次呼叫各自建立文件與緩衝區，不共享可變狀態
#[derive(Debug, Clone, Default)]
pub struct ExportService {
    options: ExportOptions,
}

impl ExportService {
    pub fn new(options: ExportOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    pub fn generate(&self, format: ExportFormat, employees: &[Employee]) -> Result<Vec<u8>> {
        match format {
            ExportFormat::Excel => self.generate_employees_excel(employees),
            ExportFormat::Csv => self.generate_employees_csv(employees),
        }
    }
}

impl EmployeeExporter for ExportService {
    fn generate_employees_excel(&self, employees: &[Employee]) -> Result<Vec<u8>> {
        spreadsheet::generate_with(XlsxDocument::new(), employees, &self.options)
    }

    fn generate_employees_csv(&self, employees: &[Employee]) -> Result<Vec<u8>> {
        delimited::generate(employees, &self.options)
    }
}

/// Spreadsheet export with default options.
pub fn generate_employees_excel(employees: &[Employee]) -> Result<Vec<u8>> {
    ExportService::default().generate_employees_excel(employees)
}

/// `;`-separated UTF-8 export with default options.
pub fn generate_employees_csv(employees: &[Employee]) -> Result<Vec<u8>> {
    ExportService::default().generate_employees_csv(employees)
}
