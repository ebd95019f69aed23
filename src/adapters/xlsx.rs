//! [`SpreadsheetDocument`] backed by `rust_xlsxwriter`.
//!
//! The trait addresses cells 1-based; `rust_xlsxwriter` is 0-based, the conversion
//! happens here and nowhere else.

use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook};

use crate::core::cell_ref::in_bounds;
use crate::domain::ports::{CellStyle, CellValue, SheetId, SpreadsheetDocument};
use crate::utils::error::{ExportError, Result};
use crate::utils::validation::validate_sheet_name;

pub const AMOUNT_NUM_FORMAT: &str = "#,##0.00";

pub struct XlsxDocument {
    workbook: Workbook,
    sheet_names: Vec<String>,
    header_format: Format,
    amount_format: Format,
}

impl Default for XlsxDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl XlsxDocument {
    pub fn new() -> Self {
        Self {
            workbook: Workbook::new(),
            sheet_names: Vec::new(),
            header_format: Format::new().set_bold(),
            amount_format: Format::new().set_num_format(AMOUNT_NUM_FORMAT),
        }
    }

    fn format_for(&self, style: CellStyle) -> Option<&Format> {
        match style {
            CellStyle::Plain => None,
            CellStyle::Header => Some(&self.header_format),
            CellStyle::Amount => Some(&self.amount_format),
        }
    }
}

impl SpreadsheetDocument for XlsxDocument {
    fn add_sheet(&mut self, name: &str) -> Result<SheetId> {
        validate_sheet_name("sheet_name", name)?;

        if self
            .sheet_names
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(name))
        {
            return Err(ExportError::InvalidConfigValueError {
                field: "sheet_name".to_string(),
                value: name.to_string(),
                reason: "Sheet name already exists in the workbook".to_string(),
            });
        }

        self.workbook.add_worksheet().set_name(name)?;
        self.sheet_names.push(name.to_string());
        Ok(SheetId(self.sheet_names.len() - 1))
    }

    fn set_styled_cell(
        &mut self,
        sheet: SheetId,
        row: u32,
        col: u32,
        value: CellValue,
        style: CellStyle,
    ) -> Result<()> {
        if !in_bounds(row, col) {
            return Err(ExportError::serialization(format!(
                "cell ({}, {}) is outside the worksheet",
                row, col
            )));
        }
        if sheet.0 >= self.sheet_names.len() {
            return Err(ExportError::serialization(format!(
                "unknown sheet index {}",
                sheet.0
            )));
        }

        let (xl_row, xl_col) = (row - 1, (col - 1) as u16);
        let format = self.format_for(style).cloned();
        let worksheet = self.workbook.worksheet_from_index(sheet.0)?;

        match (value, format) {
            (CellValue::Empty, None) => {}
            (CellValue::Empty, Some(format)) => {
                worksheet.write_blank(xl_row, xl_col, &format)?;
            }
            (CellValue::Text(text), None) => {
                worksheet.write_string(xl_row, xl_col, text)?;
            }
            (CellValue::Text(text), Some(format)) => {
                worksheet.write_string_with_format(xl_row, xl_col, text, &format)?;
            }
            (CellValue::Integer(n), format) => {
                write_number(worksheet, xl_row, xl_col, n as f64, format.as_ref())?;
            }
            (CellValue::Number(d), format) => {
                let number = d.to_f64().ok_or_else(|| {
                    ExportError::serialization(format!("decimal {} does not fit a cell", d))
                })?;
                write_number(worksheet, xl_row, xl_col, number, format.as_ref())?;
            }
        }
        Ok(())
    }

    fn into_bytes(mut self) -> Result<Vec<u8>> {
        if self.sheet_names.is_empty() {
            return Err(ExportError::serialization("workbook has no sheets"));
        }

        let data = self.workbook.save_to_buffer()?;
        tracing::debug!(
            "Serialized workbook with {} sheet(s), {} bytes",
            self.sheet_names.len(),
            data.len()
        );
        Ok(data)
    }
}

fn write_number(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    col: u16,
    number: f64,
    format: Option<&Format>,
) -> Result<()> {
    match format {
        Some(format) => worksheet.write_number_with_format(row, col, number, format)?,
        None => worksheet.write_number(row, col, number)?,
    };
    Ok(())
}
