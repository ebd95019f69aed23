use crate::config::ExportOptions;
use crate::core::flattener::flatten_employees;
use crate::domain::model::{Employee, FlatExportRow};
use crate::utils::error::{ExportError, Result};

/// Serializes flattened rows as delimited UTF-8 text.
///
/// The header comes from [`FlatExportRow::HEADERS`] and is written even when `rows`
/// is empty. Values containing the delimiter, a quote or a line break are quoted.
pub fn write_rows(rows: &[FlatExportRow], delimiter: u8) -> Result<Vec<u8>> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(FlatExportRow::HEADERS)?;
    for row in rows {
        wtr.serialize(row)?;
    }

    let data = wtr
        .into_inner()
        .map_err(|e| ExportError::serialization(e.to_string()))?;

    tracing::debug!("Wrote {} delimited rows, {} bytes", rows.len(), data.len());
    Ok(data)
}

pub fn generate(employees: &[Employee], options: &ExportOptions) -> Result<Vec<u8>> {
    let rows = flatten_employees(employees, &options.datetime_format)?;
    write_rows(&rows, options.delimiter)
}
