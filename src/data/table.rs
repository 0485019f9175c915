//! Row-oriented integer tables.
//!
//! The reader turns a delimited text source into rows of integers, the writer
//! emits one value per row.
use super::{dataset::WholeNumber, params::TableParams};
use crate::error::TreeError;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use std::fmt::Display;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Reads every record of `reader` as a row of integers.
///
/// # Errors
///
/// Returns `MalformedInput` when a field isn't an integer or a row's width
/// differs from the first row. Row numbers are the line numbers of the source.
pub fn read_rows<T: WholeNumber, R: Read>(
    reader: R,
    params: &TableParams,
) -> Result<Vec<Vec<T>>, TreeError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(params.has_headers())
        .delimiter(params.delimiter())
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut width = None;
    for (index, result) in reader.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map_or(index + 1, |position| position.line() as usize);

        let row = record
            .iter()
            .enumerate()
            .map(|(column, field)| {
                field.parse::<T>().map_err(|_| TreeError::MalformedInput {
                    row: line,
                    message: format!(
                        "field {:?} in column {} is not an integer",
                        field,
                        column + 1
                    ),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        match width {
            None => width = Some(row.len()),
            Some(expected) if expected != row.len() => {
                return Err(TreeError::MalformedInput {
                    row: line,
                    message: format!("expected {} values, found {}", expected, row.len()),
                });
            }
            Some(_) => {}
        }
        rows.push(row);
    }

    Ok(rows)
}

/// Writes each value on its own row.
pub fn write_column<T: Display, W: Write>(
    writer: W,
    values: impl IntoIterator<Item = T>,
    params: &TableParams,
) -> Result<(), TreeError> {
    let mut writer = WriterBuilder::new()
        .delimiter(params.delimiter())
        .from_writer(writer);
    for value in values {
        writer.write_record([value.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_column_to_path<T: Display>(
    path: impl AsRef<Path>,
    values: impl IntoIterator<Item = T>,
    params: &TableParams,
) -> Result<(), TreeError> {
    write_column(File::create(path)?, values, params)
}
