use encoding_rs::WINDOWS_1251;
use radar_ir::OutputRow;
use std::path::Path;
use thiserror::Error;

/// Name of the fixed output code page.
pub const OUTPUT_ENCODING: &str = "windows-1251";

#[derive(Debug, Error)]
pub enum CsvWriteError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("character '{0}' cannot be encoded as windows-1251")]
    Unencodable(char),
}

#[derive(Debug, Clone)]
pub struct WriteOptions {
    pub delimiter: u8,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self { delimiter: b';' }
    }
}

/// Write the output table as a CSV file.
pub fn write_csv_file(
    rows: &[OutputRow],
    options: &WriteOptions,
    path: &Path,
) -> Result<(), CsvWriteError> {
    let bytes = write_csv_bytes(rows, options)?;
    std::fs::write(path, &bytes)?;
    log::debug!(
        "wrote {} rows ({} bytes, {}) to {}",
        rows.len(),
        bytes.len(),
        OUTPUT_ENCODING,
        path.display()
    );
    Ok(())
}

/// Write the output table as encoded CSV bytes.
///
/// The header row is always present, so an empty table still names its columns.
/// Records end in CRLF and the text is encoded as Windows-1251.
pub fn write_csv_bytes(rows: &[OutputRow], options: &WriteOptions) -> Result<Vec<u8>, CsvWriteError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(options.delimiter)
        .terminator(csv::Terminator::CRLF)
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(OutputRow::COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    let utf8 = writer
        .into_inner()
        .map_err(|e| CsvWriteError::Io(e.into_error()))?;

    encode_cp1251(std::str::from_utf8(&utf8)?)
}

fn encode_cp1251(text: &str) -> Result<Vec<u8>, CsvWriteError> {
    let (bytes, _, had_errors) = WINDOWS_1251.encode(text);
    if had_errors {
        let bad = text
            .chars()
            .find(|c| WINDOWS_1251.encode(c.encode_utf8(&mut [0; 4])).2)
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        return Err(CsvWriteError::Unencodable(bad));
    }
    Ok(bytes.into_owned())
}
