//! CSV emission.
//!
//! Quoting and escaping belong to the `csv` crate; this module only
//! configures its delimiter and record terminator and feeds it the matrix.

use std::io;

use csv::{Terminator, WriterBuilder};
use serde_json::Value as Json;

use crate::error::Result;
use crate::json::to_table_json;
use crate::options::{TableOptions, WriterOptions};
use crate::table::{to_table, Matrix};
use crate::traits::Record;

fn builder(options: &WriterOptions) -> Result<WriterBuilder> {
    let mut builder = WriterBuilder::new();
    builder.delimiter(options.delimiter_byte()?);
    if options.crlf {
        builder.terminator(Terminator::CRLF);
    }
    Ok(builder)
}

fn terminator(options: &WriterOptions) -> &'static [u8] {
    if options.crlf {
        b"\r\n"
    } else {
        b"\n"
    }
}

/// Writes an already-built matrix.
///
/// A row with no cells (the header of a table whose columns were all
/// filtered out) is written as a bare line terminator.
pub fn write_matrix<W: io::Write>(writer: W, matrix: &Matrix, options: &WriterOptions) -> Result<()> {
    let mut wtr = builder(options)?.from_writer(writer);
    for row in matrix {
        if row.is_empty() {
            // csv writes an empty record as `""`
            wtr.flush()?;
            let mut inner = wtr.into_inner().map_err(|e| e.into_error())?;
            inner.write_all(terminator(options))?;
            wtr = builder(options)?.from_writer(inner);
            continue;
        }
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Converts `records` and writes them as CSV.
pub fn write_to<W, R>(
    writer: W,
    records: &[R],
    table: &TableOptions,
    options: &WriterOptions,
) -> Result<()>
where
    W: io::Write,
    R: Record,
{
    // Reject a bad delimiter before doing any conversion work.
    options.delimiter_byte()?;
    let matrix = to_table(records, table)?;
    write_matrix(writer, &matrix, options)
}

/// Converts a JSON array of objects and writes it as CSV.
pub fn write_json_to<W: io::Write>(
    writer: W,
    value: &Json,
    table: &TableOptions,
    options: &WriterOptions,
) -> Result<()> {
    options.delimiter_byte()?;
    let matrix = to_table_json(value, table)?;
    write_matrix(writer, &matrix, options)
}

/// Converts `records` into a CSV string.
///
/// ```
/// use csvrow::{to_csv_string, Record, TableOptions, WriterOptions};
///
/// #[derive(Record)]
/// struct Person {
///     #[csv(rename = "Name")]
///     name: String,
///     #[csv(rename = "Age")]
///     age: u32,
/// }
///
/// let people = vec![Person { name: "Ann, Jr.".into(), age: 30 }];
/// let csv = to_csv_string(&people, &TableOptions::new(), &WriterOptions::new()).unwrap();
/// assert_eq!(csv, "Name,Age\n\"Ann, Jr.\",30\n");
/// ```
pub fn to_csv_string<R: Record>(
    records: &[R],
    table: &TableOptions,
    options: &WriterOptions,
) -> Result<String> {
    let mut buf = Vec::new();
    write_to(&mut buf, records, table, options)?;
    Ok(String::from_utf8(buf)?)
}
