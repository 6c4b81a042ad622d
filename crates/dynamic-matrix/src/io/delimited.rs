//! Delimited text files holding one grid row per record.
use std::fmt::Display;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};

use crate::config::TextFormat;
use crate::math::Grid;

/// Read a square grid from a delimited file; the order is the number of records.
pub fn read_grid_delimited<T, P>(path: P, format: &TextFormat) -> Result<Grid<T>>
where
    T: FromStr,
    T::Err: Display,
    P: AsRef<Path>,
{
    let file = File::open(&path)
        .with_context(|| format!("Failed to open grid file: {}", path.as_ref().display()))?;
    read_grid_from_reader(file, format)
        .with_context(|| format!("Failed to read grid file: {}", path.as_ref().display()))
}

/// Read a square grid from any reader.
pub fn read_grid_from_reader<T, R>(reader: R, format: &TextFormat) -> Result<Grid<T>>
where
    T: FromStr,
    T::Err: Display,
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter_byte(format)?)
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;
        let mut row = Vec::with_capacity(record.len());
        for (col_idx, field) in record.iter().enumerate() {
            let value = field.parse::<T>().map_err(|err| {
                anyhow!(
                    "Invalid element {:?} at row {}, column {}: {}",
                    field,
                    row_idx + 1,
                    col_idx + 1,
                    err
                )
            })?;
            row.push(value);
        }
        rows.push(row);
    }

    log::debug!("parsed {} delimited rows", rows.len());
    Grid::from_rows(rows).context("Delimited rows do not form a square grid")
}

/// Write a grid as delimited text, one record per row.
pub fn write_grid_delimited<T, P>(path: P, grid: &Grid<T>, format: &TextFormat) -> Result<()>
where
    T: Display,
    P: AsRef<Path>,
{
    let file = File::create(&path)
        .with_context(|| format!("Failed to create grid file: {}", path.as_ref().display()))?;
    write_grid_to_writer(file, grid, format)
}

pub fn write_grid_to_writer<T, W>(writer: W, grid: &Grid<T>, format: &TextFormat) -> Result<()>
where
    T: Display,
    W: Write,
{
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter_byte(format)?)
        .has_headers(false)
        .from_writer(writer);

    for (row_idx, row) in grid.rows().enumerate() {
        writer
            .write_record(row.iter().map(|value| value.to_string()))
            .with_context(|| format!("Failed to write row {}", row_idx + 1))?;
    }
    writer.flush().context("Failed to flush grid writer")?;
    log::debug!("wrote grid of order {}", grid.order());
    Ok(())
}

fn delimiter_byte(format: &TextFormat) -> Result<u8> {
    if !format.delimiter.is_ascii() {
        bail!(
            "Delimiter {:?} is not a single-byte ASCII character",
            format.delimiter
        );
    }
    Ok(format.delimiter as u8)
}
