use crate::domain::model::Employee;
use crate::utils::error::Result;
use rust_decimal::Decimal;

pub trait Storage: Send + Sync {
    /// 寫入資料並回傳實際寫入的位置
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
}

/// 員工匯出的兩種輸出，呼叫端只拿到位元組。
pub trait EmployeeExporter: Send + Sync {
    fn generate_employees_excel(&self, employees: &[Employee]) -> Result<Vec<u8>>;
    fn generate_employees_csv(&self, employees: &[Employee]) -> Result<Vec<u8>>;
}

/// Value stored in a single spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Integer(i64),
    Number(Decimal),
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Integer(i64::from(value))
    }
}

impl From<Decimal> for CellValue {
    fn from(value: Decimal) -> Self {
        CellValue::Number(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Empty, Into::into)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellStyle {
    #[default]
    Plain,
    Header,
    Amount,
}

/// Index of a sheet inside a [`SpreadsheetDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SheetId(pub usize);

/// Minimal capability set a spreadsheet backend has to offer.
///
/// Rows and columns are 1-based, matching spreadsheet addressing (`A1` is row 1, column 1).
/// The document is created by the implementor's constructor and consumed by
/// [`SpreadsheetDocument::into_bytes`], so it is released on every return path.
pub trait SpreadsheetDocument {
    fn add_sheet(&mut self, name: &str) -> Result<SheetId>;

    fn set_styled_cell(
        &mut self,
        sheet: SheetId,
        row: u32,
        col: u32,
        value: CellValue,
        style: CellStyle,
    ) -> Result<()>;

    fn into_bytes(self) -> Result<Vec<u8>>;

    fn set_cell(&mut self, sheet: SheetId, row: u32, col: u32, value: CellValue) -> Result<()> {
        self.set_styled_cell(sheet, row, col, value, CellStyle::Plain)
    }

    fn set_cell_at(&mut self, sheet: SheetId, address: &str, value: CellValue) -> Result<()> {
        let (row, col) = crate::core::cell_ref::parse_cell_ref(address).ok_or_else(|| {
            crate::utils::error::ExportError::invalid_input(format!(
                "invalid cell address '{}'",
                address
            ))
        })?;
        self.set_cell(sheet, row, col, value)
    }
}
