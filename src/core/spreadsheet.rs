//! Employee report as a single-sheet workbook.
//!
//! Columns are written by explicit index. The order (salary and hire date before the
//! address) is the report layout and is independent of [`FlatExportRow`] used by the
//! delimited export.
//!
//! [`FlatExportRow`]: crate::domain::model::FlatExportRow

use crate::config::{ExportOptions, HeaderLocale};
use crate::core::flattener::format_datetime;
use crate::domain::model::Employee;
use crate::domain::ports::{CellStyle, CellValue, SheetId, SpreadsheetDocument};
use crate::utils::error::{ExportError, Result};

pub const COLUMN_COUNT: usize = 13;

pub const HEADERS_EN: [&str; COLUMN_COUNT] = [
    "Id",
    "First Name",
    "Last Name",
    "National ID",
    "Email",
    "Phone",
    "Salary",
    "Hire Date",
    "City",
    "Street",
    "House Number",
    "Apartment Number",
    "Postal Code",
];

pub const HEADERS_PL: [&str; COLUMN_COUNT] = [
    "Id",
    "Imię",
    "Nazwisko",
    "Pesel",
    "Email",
    "Numer telefonu",
    "Pensja",
    "Data zatrudnienia",
    "Miasto",
    "Ulica",
    "Numer domu",
    "Numer mieszkania",
    "Kod pocztowy",
];

const HEADER_ROW: u32 = 1;
const FIRST_DATA_ROW: u32 = 2;
const SALARY_COL: u32 = 7;

pub fn headers(locale: HeaderLocale) -> &'static [&'static str; COLUMN_COUNT] {
    match locale {
        HeaderLocale::English => &HEADERS_EN,
        HeaderLocale::Polish => &HEADERS_PL,
    }
}

fn employee_cells(employee: &Employee, datetime_format: &str) -> Result<[CellValue; COLUMN_COUNT]> {
    let address = &employee.address;
    let hire_date = format_datetime(employee.hire_date.format(datetime_format), datetime_format)?;

    Ok([
        employee.id.into(),
        employee.first_name.as_str().into(),
        employee.last_name.as_str().into(),
        employee.national_id.as_str().into(),
        employee.email.as_str().into(),
        employee.phone.as_str().into(),
        employee.salary.into(),
        hire_date.into(),
        address.city.as_str().into(),
        address.street_name.as_str().into(),
        address.house_number.as_str().into(),
        address.apartment_number.as_deref().into(),
        address.postal_code.as_str().into(),
    ])
}

/// Writes the header row and one row per employee into a new sheet of `doc`.
pub fn write_employee_sheet<D: SpreadsheetDocument>(
    doc: &mut D,
    employees: &[Employee],
    options: &ExportOptions,
) -> Result<SheetId> {
    let sheet = doc.add_sheet(&options.sheet_name)?;

    for (col, title) in (1u32..).zip(headers(options.header_locale).iter()) {
        doc.set_styled_cell(sheet, HEADER_ROW, col, (*title).into(), CellStyle::Header)?;
    }

    for (idx, employee) in employees.iter().enumerate() {
        let row = u32::try_from(idx)
            .ok()
            .and_then(|i| i.checked_add(FIRST_DATA_ROW))
            .ok_or_else(|| ExportError::serialization("too many employees for one sheet"))?;

        for (col, value) in (1u32..).zip(employee_cells(employee, &options.datetime_format)?) {
            let style = if col == SALARY_COL {
                CellStyle::Amount
            } else {
                CellStyle::Plain
            };
            doc.set_styled_cell(sheet, row, col, value, style)?;
        }
    }

    tracing::debug!(
        "Wrote {} employee rows to sheet '{}'",
        employees.len(),
        options.sheet_name
    );
    Ok(sheet)
}

/// Builds the document with `doc`, then serializes it.
pub fn generate_with<D: SpreadsheetDocument>(
    mut doc: D,
    employees: &[Employee],
    options: &ExportOptions,
) -> Result<Vec<u8>> {
    write_employee_sheet(&mut doc, employees, options)?;
    doc.into_bytes()
}
