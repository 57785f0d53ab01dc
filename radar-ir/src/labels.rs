//! Human-readable labels for data type and buffer function codes.

/// Tag data type as written in the `Tags` section (case-insensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    Single,
    Byte,
    Integer,
    Long,
    Boolean,
    /// Any other code, lower-cased.
    Other(String),
}

impl DataType {
    pub fn from_code(code: &str) -> Self {
        let code = code.to_lowercase();
        match code.as_str() {
            "single" => Self::Single,
            "byte" => Self::Byte,
            "integer" => Self::Integer,
            "long" => Self::Long,
            "boolean" => Self::Boolean,
            _ => Self::Other(code),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Single => "FLOAT (4 bytes)",
            Self::Byte => "INT (1 byte)",
            Self::Integer => "INT (2 bytes)",
            Self::Long => "INT (4 bytes)",
            Self::Boolean => "BOOL (1 bit)",
            Self::Other(code) => code,
        }
    }
}

/// NetBios buffer function codes known to the controller.
pub mod function_codes {
    /// ИНР read
    pub const READ_INR: &str = "&h40";
    /// Set algorithm block input
    pub const SET_BLOCK_INPUT: &str = "&h00";
    pub const READ_ARCHIVE: &str = "&h10";
    pub const READ_CLOCK: &str = "&h11";
    pub const SET_CLOCK: &str = "&h12";
    /// ДКМ write
    pub const WRITE_DKM: &str = "&h1A";
}

/// Label for a buffer function code. Codes without a label are returned unchanged.
pub fn function_label(code: &str) -> &str {
    use crate::labels::function_codes::*;
    match code {
        READ_INR => "ИНР",
        WRITE_DKM => "ДКМ",
        SET_BLOCK_INPUT => "ANY",
        READ_CLOCK | SET_CLOCK => "TIME",
        _ => code,
    }
}
