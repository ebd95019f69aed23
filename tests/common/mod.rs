#![allow(dead_code)]

use chrono::{NaiveDate, TimeZone, Utc};
use employee_export::core::spreadsheet::COLUMN_COUNT;
use employee_export::{Address, Employee};
use quick_xml::events::Event;
use quick_xml::Reader;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet};
use std::io::{Cursor, Read};
use std::str::FromStr;

pub fn employee(id: i32, first_name: &str, last_name: &str, salary: &str) -> Employee {
    Employee {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        national_id: format!("850101{:05}", id),
        email: format!("{}.{}@example.com", first_name, last_name).to_lowercase(),
        phone: "+48 600 100 200".to_string(),
        address: Address {
            city: "Kraków".to_string(),
            street_name: "Floriańska".to_string(),
            house_number: "15".to_string(),
            apartment_number: None,
            postal_code: "31-019".to_string(),
        },
        position: "Specialist".to_string(),
        salary: Decimal::from_str(salary).unwrap(),
        hire_date: NaiveDate::from_ymd_opt(2021, 9, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap(),
        created_at: Utc.with_ymd_and_hms(2021, 8, 25, 12, 0, 0).unwrap(),
        updated_at: None,
    }
}

pub fn read_zip_entry(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    content
}

fn has_zip_entry(bytes: &[u8], name: &str) -> bool {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let found = archive.by_name(name).is_ok();
    found
}

/// Entries of `xl/sharedStrings.xml`, in index order.
pub fn read_shared_strings(xlsx: &[u8]) -> Vec<String> {
    if !has_zip_entry(xlsx, "xl/sharedStrings.xml") {
        return Vec::new();
    }
    let xml = read_zip_entry(xlsx, "xl/sharedStrings.xml");
    let mut reader = Reader::from_str(&xml);
    let mut strings = Vec::new();
    let mut in_text = false;

    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) if e.name().as_ref() == b"si" => strings.push(String::new()),
            Event::Start(e) if e.name().as_ref() == b"t" => in_text = true,
            Event::End(e) if e.name().as_ref() == b"t" => in_text = false,
            Event::Text(t) if in_text => {
                if let Some(last) = strings.last_mut() {
                    last.push_str(&t.unescape().unwrap());
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    strings
}

pub struct Sheet {
    pub rows: BTreeMap<u32, BTreeMap<u32, String>>,
    /// Cells stored as numbers rather than strings.
    pub numeric: BTreeSet<(u32, u32)>,
}

/// Decode the first worksheet, resolving shared-string cells.
pub fn read_sheet(xlsx: &[u8]) -> Sheet {
    let strings = read_shared_strings(xlsx);
    let xml = read_zip_entry(xlsx, "xl/worksheets/sheet1.xml");
    let mut reader = Reader::from_str(&xml);
    let mut sheet = Sheet {
        rows: BTreeMap::new(),
        numeric: BTreeSet::new(),
    };
    let mut current: Option<(u32, u32, Option<String>)> = None;
    let mut in_value = false;

    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) if e.name().as_ref() == b"c" => {
                let (row, col) = cell_position(&e);
                let cell_type = e
                    .try_get_attribute("t")
                    .unwrap()
                    .map(|a| a.unescape_value().unwrap().into_owned());
                sheet.rows.entry(row).or_default().insert(col, String::new());
                current = Some((row, col, cell_type));
            }
            Event::Empty(e) if e.name().as_ref() == b"c" => {
                let (row, col) = cell_position(&e);
                sheet.rows.entry(row).or_default().insert(col, String::new());
            }
            Event::End(e) if e.name().as_ref() == b"c" => current = None,
            Event::Start(e) if e.name().as_ref() == b"v" => in_value = true,
            Event::End(e) if e.name().as_ref() == b"v" => in_value = false,
            Event::Text(t) if in_value => {
                if let Some((row, col, cell_type)) = &current {
                    let raw = t.unescape().unwrap();
                    let text = match cell_type.as_deref() {
                        Some("s") => strings[raw.parse::<usize>().unwrap()].clone(),
                        _ => {
                            sheet.numeric.insert((*row, *col));
                            raw.into_owned()
                        }
                    };
                    sheet.rows.entry(*row).or_default().insert(*col, text);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    sheet
}

/// Decode the first worksheet into `row -> (col -> text)`.
pub fn read_sheet_rows(xlsx: &[u8]) -> BTreeMap<u32, BTreeMap<u32, String>> {
    read_sheet(xlsx).rows
}

fn cell_position(e: &quick_xml::events::BytesStart<'_>) -> (u32, u32) {
    let attr = e.try_get_attribute("r").unwrap().unwrap();
    let reference = attr.unescape_value().unwrap();
    employee_export::core::cell_ref::parse_cell_ref(&reference).unwrap()
}

/// Text of a cell; a cell that was never written reads as empty.
pub fn cell(rows: &BTreeMap<u32, BTreeMap<u32, String>>, row: u32, col: u32) -> String {
    rows.get(&row)
        .and_then(|cells| cells.get(&col))
        .cloned()
        .unwrap_or_default()
}

/// The 13 spreadsheet columns of one row.
pub fn row_values(row: &BTreeMap<u32, String>) -> Vec<String> {
    (1..=COLUMN_COUNT as u32)
        .map(|col| row.get(&col).cloned().unwrap_or_default())
        .collect()
}
