//! Serialization of the converted tag table to `;`-delimited CSV.

pub mod writer;

pub use writer::{
    CsvWriteError, OUTPUT_ENCODING, WriteOptions, write_csv_bytes, write_csv_file,
};
