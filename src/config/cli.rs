use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
use crate::config::HeaderLocale;
#[cfg(feature = "cli")]
use crate::core::service::ExportFormat;
#[cfg(feature = "cli")]
use crate::utils::logger::LogFormat;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "employee-export")]
#[command(about = "Export employee records to XLSX and CSV")]
pub struct CliConfig {
    #[arg(long, help = "JSON file with an array of employees")]
    pub input: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, help = "Optional TOML configuration file")]
    pub config: Option<String>,

    // 未指定時依設定檔 `[output] formats`，再退回 excel,csv
    #[arg(long, value_enum, value_delimiter = ',', help = "Formats to export [default: excel,csv]")]
    pub formats: Option<Vec<ExportFormat>>,

    #[arg(long, value_enum, help = "Spreadsheet header language")]
    pub header_locale: Option<HeaderLocale>,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("output_path", &self.output_path)?;
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        if self.formats.as_ref().is_some_and(|formats| formats.is_empty()) {
            return Err(crate::utils::error::ExportError::MissingConfigError {
                field: "formats".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        let full_path = self.full_path(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, data)?;
        Ok(full_path.to_string_lossy().into_owned())
    }
}
