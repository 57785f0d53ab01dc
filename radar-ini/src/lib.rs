pub mod decode;
pub mod ini;
pub mod parser;
pub mod sections;

pub use decode::{DecodeError, InputEncoding, decode_input};
pub use ini::IniDocument;
pub use parser::{REQUIRED_SECTIONS, RadarParseError, parse_radar_document, parse_radar_ini};
