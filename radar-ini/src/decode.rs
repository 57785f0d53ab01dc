use encoding_rs::WINDOWS_1251;
use std::str::FromStr;
use thiserror::Error;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("Unknown input encoding: {0}. Use auto, utf-8, or cp1251")]
    UnknownEncoding(String),
}

/// Character encoding of RADAR ini files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputEncoding {
    /// UTF-8 when the bytes are valid UTF-8, Windows-1251 otherwise.
    #[default]
    Auto,
    Utf8,
    Windows1251,
}

impl FromStr for InputEncoding {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "cp1251" | "windows-1251" => Ok(Self::Windows1251),
            other => Err(DecodeError::UnknownEncoding(other.to_string())),
        }
    }
}

/// Decode raw file contents into text.
pub fn decode_input(bytes: &[u8], encoding: InputEncoding) -> Result<String, DecodeError> {
    match encoding {
        InputEncoding::Utf8 => {
            let text = std::str::from_utf8(bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes))?;
            Ok(text.to_string())
        }
        InputEncoding::Windows1251 => Ok(decode_cp1251(bytes)),
        InputEncoding::Auto => {
            let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
            match std::str::from_utf8(body) {
                Ok(text) => Ok(text.to_string()),
                Err(_) => {
                    log::debug!("input is not UTF-8, decoding as Windows-1251");
                    Ok(decode_cp1251(body))
                }
            }
        }
    }
}

fn decode_cp1251(bytes: &[u8]) -> String {
    let (text, _had_errors) = WINDOWS_1251.decode_without_bom_handling(bytes);
    text.into_owned()
}
