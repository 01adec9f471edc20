//! Writers for the menu and coin files
//!
//! Records are serialized through `RecordFormat::encode` into a headerless,
//! unquoted delimited file with `\n` line endings.

use crate::io::format::RecordFormat;
use crate::types::TillError;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write records to any output in the given format
///
/// # Errors
///
/// Returns `TillError::IoError` if a line could not be written or flushed.
pub fn write_records<'a, F, W, I>(output: W, records: I) -> Result<(), TillError>
where
    F: RecordFormat,
    F::Record: 'a,
    W: Write,
    I: IntoIterator<Item = &'a F::Record>,
{
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .delimiter(F::DELIMITER)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(output);

    for record in records {
        writer.serialize(F::encode(record))?;
    }

    writer.flush()?;
    Ok(())
}

/// Create (or truncate) a data file and write records to it
///
/// The file handle is dropped on every exit path.
///
/// # Errors
///
/// Returns `TillError::FileOpen` if the file could not be created and
/// `TillError::IoError` if writing failed part way.
pub fn write_file<'a, F, I>(path: &Path, records: I) -> Result<(), TillError>
where
    F: RecordFormat,
    F::Record: 'a,
    I: IntoIterator<Item = &'a F::Record>,
{
    let file = File::create(path).map_err(|e| TillError::file_open(path, &e))?;
    write_records::<F, _, _>(file, records)
}
