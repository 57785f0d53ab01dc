//! Typed views of the `NetBios`, `Selectors` and `Tags` sections.
//!
//! Entries are comma-separated positional fields. Missing trailing fields
//! are left empty; extra values are kept, comma-joined, in the last field.

use crate::ini::Section;
use radar_ir::{BufferRecord, BufferTable, SelectorRecord, SelectorTable, TagRecord, TagTable};

/// Split `raw` on commas into exactly `N` trimmed fields.
///
/// Fewer values than fields leaves the rest empty. More values than fields
/// puts everything from the last field on, verbatim, into the last field.
pub fn split_positional<const N: usize>(raw: &str) -> [String; N] {
    let mut fields: [String; N] = std::array::from_fn(|_| String::new());
    for (slot, value) in fields.iter_mut().zip(raw.splitn(N, ',')) {
        *slot = value.trim().to_string();
    }
    fields
}

pub fn parse_buffers(section: &Section) -> BufferTable {
    section
        .iter()
        .map(|(key, raw)| {
            let record = BufferRecord::from_fields(key, split_positional(raw));
            (key.clone(), record)
        })
        .collect()
}

pub fn parse_selectors(section: &Section) -> SelectorTable {
    section
        .iter()
        .map(|(key, raw)| {
            let record = SelectorRecord {
                key: key.clone(),
                mask_value: raw.trim().to_string(),
            };
            (key.clone(), record)
        })
        .collect()
}

pub fn parse_tags(section: &Section) -> TagTable {
    section
        .iter()
        .map(|(key, raw)| {
            let record = TagRecord::from_fields(key, split_positional(raw));
            (key.clone(), record)
        })
        .collect()
}
