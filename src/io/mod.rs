//! I/O module
//!
//! Handles reading and writing the menu and coin files.
//!
//! # Components
//!
//! - `format` - Line formats (record decoding, row encoding, format versions)
//! - `reader` - Streaming reader with iterator interface
//! - `writer` - Headerless, unquoted file writer

pub mod format;
pub mod reader;
pub mod writer;

pub use format::{CoinFormat, FormatVersion, MenuFormat, RecordFormat};
pub use reader::DelimitedReader;
pub use writer::{write_file, write_records};
