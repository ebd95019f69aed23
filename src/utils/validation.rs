use crate::utils::error::{ExportError, Result};
use chrono::format::{Item, StrftimeItems};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub const MAX_SHEET_NAME_LEN: usize = 31;

const FORBIDDEN_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ExportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ExportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 分隔符號必須是單一 ASCII 字元，且不能與引號或換行衝突
pub fn validate_delimiter(field_name: &str, delimiter: u8) -> Result<()> {
    let reason = match delimiter {
        b'"' => Some("Delimiter cannot be the quote character"),
        b'\n' | b'\r' => Some("Delimiter cannot be a line break"),
        d if !d.is_ascii() => Some("Delimiter must be an ASCII character"),
        _ => None,
    };

    match reason {
        Some(reason) => Err(ExportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: (delimiter as char).escape_default().to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

pub fn validate_sheet_name(field_name: &str, name: &str) -> Result<()> {
    validate_non_empty_string(field_name, name)?;

    if name.chars().count() > MAX_SHEET_NAME_LEN {
        return Err(ExportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: format!("Sheet name must be at most {} characters", MAX_SHEET_NAME_LEN),
        });
    }

    if let Some(c) = name.chars().find(|c| FORBIDDEN_SHEET_CHARS.contains(c)) {
        return Err(ExportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: format!("Sheet name cannot contain '{}'", c),
        });
    }

    Ok(())
}

/// chrono 在格式字串無效時會於輸出階段 panic，因此事先檢查
pub fn validate_datetime_format(field_name: &str, format: &str) -> Result<()> {
    validate_non_empty_string(field_name, format)?;

    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ExportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format.to_string(),
            reason: "Invalid strftime format".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ExportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
