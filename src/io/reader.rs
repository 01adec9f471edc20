//! Line reader with iterator interface
//!
//! Provides a streaming iterator over the records of a menu or coin file.
//! Delegates format concerns to the `format` module.
//!
//! # Design
//!
//! `DelimitedReader` uses `csv::Reader` purely as a line splitter: no header,
//! no quoting, a format-specific delimiter and a flexible field count so that
//! short or long lines reach `RecordFormat::decode` and are reported there.
//!
//! ```no_run
//! use food_till::io::{DelimitedReader, MenuFormat};
//! use std::path::Path;
//!
//! let reader = DelimitedReader::<MenuFormat>::open(Path::new("foods.dat")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(item) => println!("Loaded {}", item.id),
//!         Err(e) => eprintln!("Skipped: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Failing to open the file is returned from `open()`
//! - Individual line errors are yielded as `Err` items and iteration continues
//! - A broken read ends the iteration after yielding the error
//! - Blank lines are skipped silently

use crate::io::format::RecordFormat;
use crate::types::TillError;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::marker::PhantomData;
use std::path::Path;

/// Streaming reader over one delimited data file
#[derive(Debug)]
pub struct DelimitedReader<F: RecordFormat, R: Read = File> {
    reader: csv::Reader<R>,
    record: StringRecord,
    finished: bool,
    format: PhantomData<F>,
}

impl<F: RecordFormat> DelimitedReader<F, File> {
    /// Open a data file for reading
    ///
    /// The file is read lazily as the iterator advances and closed when the
    /// reader is dropped.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a menu or coin file
    ///
    /// # Returns
    ///
    /// A reader yielding one `Result` per non-blank line.
    ///
    /// # Errors
    ///
    /// Returns `TillError::FileOpen` if the file could not be opened.
    pub fn open(path: &Path) -> Result<Self, TillError> {
        let file = File::open(path).map_err(|e| TillError::file_open(path, &e))?;
        Ok(Self::from_reader(file))
    }
}

impl<F: RecordFormat, R: Read> DelimitedReader<F, R> {
    /// Wrap any byte source
    ///
    /// # Example
    ///
    /// ```
    /// use food_till::io::{CoinFormat, DelimitedReader};
    ///
    /// let lines: Vec<_> = DelimitedReader::<CoinFormat, _>::from_reader(&b"500,2\n"[..]).collect();
    /// assert_eq!(lines, vec![Ok((500, 2))]);
    /// ```
    pub fn from_reader(source: R) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .delimiter(F::DELIMITER)
            .quoting(false)
            .flexible(true)
            .from_reader(source);

        Self {
            reader,
            record: StringRecord::new(),
            finished: false,
            format: PhantomData,
        }
    }
}

impl<F: RecordFormat, R: Read> Iterator for DelimitedReader<F, R> {
    type Item = Result<F::Record, TillError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.reader.read_record(&mut self.record) {
            Ok(false) => {
                self.finished = true;
                None
            }
            Ok(true) => {
                let line = self.record.position().map_or(0, |pos| pos.line());
                Some(F::decode(&self.record).map_err(|message| TillError::parse_error(line, message)))
            }
            Err(e) => {
                let error = TillError::from(e);
                if matches!(error, TillError::IoError { .. }) {
                    self.finished = true;
                }
                Some(Err(error))
            }
        }
    }
}
