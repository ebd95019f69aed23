use crate::domain::model::{Employee, FlatExportRow};
use crate::utils::error::{ExportError, Result};
use std::fmt::{Display, Write};

/// 依 strftime 格式輸出時間；格式無效時回傳設定錯誤而不是 panic
pub(crate) fn format_datetime<D: Display>(value: D, datetime_format: &str) -> Result<String> {
    let mut out = String::new();
    write!(out, "{}", value).map_err(|_| ExportError::InvalidConfigValueError {
        field: "export.datetime_format".to_string(),
        value: datetime_format.to_string(),
        reason: "Invalid strftime format".to_string(),
    })?;
    Ok(out)
}

pub fn flatten_employee(employee: &Employee, datetime_format: &str) -> Result<FlatExportRow> {
    let address = &employee.address;

    let updated_at = match employee.updated_at {
        Some(ts) => format_datetime(ts.format(datetime_format), datetime_format)?,
        None => String::new(),
    };

    Ok(FlatExportRow {
        id: employee.id,
        first_name: employee.first_name.clone(),
        last_name: employee.last_name.clone(),
        national_id: employee.national_id.clone(),
        email: employee.email.clone(),
        phone: employee.phone.clone(),
        city: address.city.clone(),
        street_name: address.street_name.clone(),
        house_number: address.house_number.clone(),
        apartment_number: address.apartment_number.clone().unwrap_or_default(),
        postal_code: address.postal_code.clone(),
        position: employee.position.clone(),
        salary: employee.salary,
        hire_date: format_datetime(employee.hire_date.format(datetime_format), datetime_format)?,
        created_at: format_datetime(employee.created_at.format(datetime_format), datetime_format)?,
        updated_at,
    })
}

/// One row per employee, same order, nothing filtered or sorted.
pub fn flatten_employees(employees: &[Employee], datetime_format: &str) -> Result<Vec<FlatExportRow>> {
    employees
        .iter()
        .map(|employee| flatten_employee(employee, datetime_format))
        .collect()
}
