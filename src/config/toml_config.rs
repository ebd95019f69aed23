use crate::config::{ExportOptions, HeaderLocale};
use crate::core::service::ExportFormat;
use crate::utils::error::{ExportError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub export: ExportSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportSection {
    pub delimiter: Option<String>,
    pub sheet_name: Option<String>,
    pub header_locale: Option<HeaderLocale>,
    pub datetime_format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub output_path: Option<String>,
    pub formats: Option<Vec<ExportFormat>>,
    pub excel_filename: Option<String>,
    pub csv_filename: Option<String>,
}

/// 輸出檔名，副檔名與 MIME 類型由呼叫端（這裡是 CLI）決定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFilenames {
    pub excel: String,
    pub csv: String,
}

impl Default for OutputFilenames {
    fn default() -> Self {
        Self {
            excel: format!("employees.{}", ExportFormat::Excel.file_extension()),
            csv: format!("employees.{}", ExportFormat::Csv.file_extension()),
        }
    }
}

impl OutputFilenames {
    pub fn for_format(&self, format: ExportFormat) -> &str {
        match format {
            ExportFormat::Excel => &self.excel,
            ExportFormat::Csv => &self.csv,
        }
    }
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex is valid"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        let config: TomlConfig = toml::from_str(&processed_content)?;
        config.validate_config()?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${EXPORT_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        self.export_options()?.validate()?;

        if let Some(path) = &self.output.output_path {
            validate_path("output.output_path", path)?;
        }
        if let Some(name) = &self.output.excel_filename {
            validate_non_empty_string("output.excel_filename", name)?;
        }
        if let Some(name) = &self.output.csv_filename {
            validate_non_empty_string("output.csv_filename", name)?;
        }
        if let Some(formats) = &self.output.formats {
            if formats.is_empty() {
                return Err(ExportError::InvalidConfigValueError {
                    field: "output.formats".to_string(),
                    value: "[]".to_string(),
                    reason: "At least one output format is required".to_string(),
                });
            }
        }

        Ok(())
    }

    /// 將 `[export]` 區段套用在預設值上
    pub fn export_options(&self) -> Result<ExportOptions> {
        let mut options = ExportOptions::default();

        if let Some(delimiter) = &self.export.delimiter {
            options.delimiter = parse_delimiter(delimiter)?;
        }
        if let Some(sheet_name) = &self.export.sheet_name {
            options.sheet_name = sheet_name.clone();
        }
        if let Some(locale) = self.export.header_locale {
            options.header_locale = locale;
        }
        if let Some(format) = &self.export.datetime_format {
            options.datetime_format = format.clone();
        }

        Ok(options)
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.output_path.as_deref()
    }

    pub fn formats(&self) -> Option<&[ExportFormat]> {
        self.output.formats.as_deref()
    }

    pub fn filenames(&self) -> OutputFilenames {
        let defaults = OutputFilenames::default();
        OutputFilenames {
            excel: self.output.excel_filename.clone().unwrap_or(defaults.excel),
            csv: self.output.csv_filename.clone().unwrap_or(defaults.csv),
        }
    }
}

/// `"\t"` 可寫成跳脫序列，其餘必須是單一字元
fn parse_delimiter(raw: &str) -> Result<u8> {
    let value = match raw {
        "\\t" => "\t",
        other => other,
    };

    let mut bytes = value.bytes();
    match (bytes.next(), bytes.next()) {
        (Some(b), None) => Ok(b),
        _ => Err(ExportError::InvalidConfigValueError {
            field: "export.delimiter".to_string(),
            value: raw.to_string(),
            reason: "Delimiter must be exactly one ASCII character".to_string(),
        }),
    }
}
