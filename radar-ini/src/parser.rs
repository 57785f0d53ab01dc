//! RADAR ini text -> ControllerConfig.

use crate::ini::IniDocument;
use crate::sections::{parse_buffers, parse_selectors, parse_tags};
use radar_ir::ControllerConfig;

pub const NETBIOS_SECTION: &str = "NetBios";
pub const SELECTORS_SECTION: &str = "Selectors";
pub const TAGS_SECTION: &str = "Tags";

/// Sections every controller file must have, in the order they are checked.
pub const REQUIRED_SECTIONS: [&str; 3] = [NETBIOS_SECTION, SELECTORS_SECTION, TAGS_SECTION];

#[derive(Debug, thiserror::Error)]
pub enum RadarParseError {
    #[error("Section {0} is missing")]
    MissingSection(String),
}

/// Parse RADAR ini text into its buffer, selector and tag tables.
pub fn parse_radar_ini(text: &str) -> Result<ControllerConfig, RadarParseError> {
    parse_radar_document(&IniDocument::parse(text))
}

/// Extract the three required sections from an already lexed document.
pub fn parse_radar_document(doc: &IniDocument) -> Result<ControllerConfig, RadarParseError> {
    let section = |name: &str| {
        doc.section(name)
            .ok_or_else(|| RadarParseError::MissingSection(name.to_string()))
    };

    let config = ControllerConfig {
        buffers: parse_buffers(section(NETBIOS_SECTION)?),
        selectors: parse_selectors(section(SELECTORS_SECTION)?),
        tags: parse_tags(section(TAGS_SECTION)?),
    };

    log::debug!(
        "parsed {} buffers, {} selectors, {} tags",
        config.buffers.len(),
        config.selectors.len(),
        config.tags.len()
    );
    Ok(config)
}
