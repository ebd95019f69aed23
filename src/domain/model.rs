use crate::utils::error::{ExportError, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub city: String,
    pub street_name: String,
    pub house_number: String,
    #[serde(default)]
    pub apartment_number: Option<String>,
    pub postal_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// PESEL
    pub national_id: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
    pub position: String,
    /// JSON 數字或字串皆可，數字直接以原始文字解析，不經 f64
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub salary: Decimal,
    pub hire_date: NaiveDateTime,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// 單層的匯出列：地址欄位攤平，時間欄位已轉成字串。
///
/// 欄位順序即為文字匯出的欄位順序，必須與 [`FlatExportRow::HEADERS`] 一致。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FlatExportRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub street_name: String,
    pub house_number: String,
    pub apartment_number: String,
    pub postal_code: String,
    pub position: String,
    pub salary: Decimal,
    pub hire_date: String,
    pub created_at: String,
    pub updated_at: String,
}

impl FlatExportRow {
    pub const HEADERS: [&'static str; 16] = [
        "Id",
        "FirstName",
        "LastName",
        "NationalId",
        "Email",
        "Phone",
        "City",
        "StreetName",
        "HouseNumber",
        "ApartmentNumber",
        "PostalCode",
        "Position",
        "Salary",
        "HireDate",
        "CreatedAt",
        "UpdatedAt",
    ];
}

/// 解析外部傳入的員工 JSON 陣列。
///
/// 頂層為 `null` 或陣列中含有 `null` 元素時回傳 `InvalidInputError`，
/// 不會略過或修補。
pub fn parse_employees(data: &[u8]) -> Result<Vec<Employee>> {
    let entries: Option<Vec<Option<Employee>>> = serde_json::from_slice(data)?;
    let entries =
        entries.ok_or_else(|| ExportError::invalid_input("employee sequence is null"))?;

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            entry.ok_or_else(|| {
                ExportError::invalid_input(format!("employee at index {} is null", index))
            })
        })
        .collect()
}
