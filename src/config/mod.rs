pub mod cli;
pub mod toml_config;

use crate::core::service::ExportFormat;
use crate::utils::error::{ExportError, Result};
use crate::utils::validation::{
    validate_datetime_format, validate_delimiter, validate_sheet_name, Validate,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_DELIMITER: u8 = b';';
pub const DEFAULT_SHEET_NAME: &str = "Employees";
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DEFAULT_FORMATS: [ExportFormat; 2] = [ExportFormat::Excel, ExportFormat::Csv];

/// 試算表標題列使用的語系
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum HeaderLocale {
    #[default]
    #[serde(rename = "en")]
    #[cfg_attr(feature = "cli", value(name = "en"))]
    English,
    #[serde(rename = "pl")]
    #[cfg_attr(feature = "cli", value(name = "pl"))]
    Polish,
}

impl FromStr for HeaderLocale {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(HeaderLocale::English),
            "pl" | "polish" => Ok(HeaderLocale::Polish),
            other => Err(ExportError::InvalidConfigValueError {
                field: "header_locale".to_string(),
                value: other.to_string(),
                reason: "Supported locales: en, pl".to_string(),
            }),
        }
    }
}

/// 匯出行為的設定，預設值即為下載端點所需的格式
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    pub delimiter: u8,
    pub sheet_name: String,
    pub header_locale: HeaderLocale,
    pub datetime_format: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            header_locale: HeaderLocale::default(),
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
        }
    }
}

impl Validate for ExportOptions {
    fn validate(&self) -> Result<()> {
        validate_delimiter("export.delimiter", self.delimiter)?;
        validate_sheet_name("export.sheet_name", &self.sheet_name)?;
        validate_datetime_format("export.datetime_format", &self.datetime_format)?;
        Ok(())
    }
}

/// 輸出格式的優先順序：CLI 參數、設定檔 `[output] formats`、預設兩種格式
pub fn resolve_formats(
    cli: Option<&[ExportFormat]>,
    file: Option<&[ExportFormat]>,
) -> Vec<ExportFormat> {
    cli.or(file).unwrap_or(&DEFAULT_FORMATS).to_vec()
}

#[cfg(feature = "cli")]
pub use cli::CliConfig;
