use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use crate::dimensions::summary_csv_headers;
use crate::error::ExtractError;
use crate::model::{EmploymentTable, PageRecord};

fn summary_row(record: &PageRecord) -> Vec<String> {
    let mut row = vec![
        record.district.clone(),
        record.group_type.clone(),
        record.including_locations.clone(),
        record.total_count.to_string(),
    ];
    for counts in &record.sections {
        row.extend(counts.iter().map(ToString::to_string));
    }
    row
}

fn write_summary<W: Write>(
    mut writer: csv::Writer<W>,
    records: &[PageRecord],
) -> Result<(), ExtractError> {
    writer.write_record(summary_csv_headers())?;
    for record in records {
        writer.write_record(summary_row(record))?;
    }
    writer.flush()?;
    Ok(())
}

pub(crate) fn write_summary_csv(path: &Path, records: &[PageRecord]) -> Result<(), ExtractError> {
    write_summary(WriterBuilder::new().from_path(path)?, records)
}

/// Serializes the summary to a string; handy for determinism checks.
pub fn summary_csv_string(records: &[PageRecord]) -> Result<String, ExtractError> {
    let mut buffer = Vec::new();
    write_summary(WriterBuilder::new().from_writer(&mut buffer), records)?;
    String::from_utf8(buffer)
        .map_err(|error| ExtractError::InvalidConfig(format!("invalid utf-8 csv output: {error}")))
}

fn write_employment<W: Write>(
    mut writer: csv::Writer<W>,
    table: &EmploymentTable,
) -> Result<(), ExtractError> {
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub(crate) fn write_employment_csv(
    path: &Path,
    table: &EmploymentTable,
) -> Result<(), ExtractError> {
    write_employment(WriterBuilder::new().from_path(path)?, table)
}

pub fn employment_csv_string(table: &EmploymentTable) -> Result<String, ExtractError> {
    let mut buffer = Vec::new();
    write_employment(WriterBuilder::new().from_writer(&mut buffer), table)?;
    String::from_utf8(buffer)
        .map_err(|error| ExtractError::InvalidConfig(format!("invalid utf-8 csv output: {error}")))
}
