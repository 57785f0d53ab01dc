//! Minimal ini lexer for RADAR controller files.
//!
//! Follows the configparser conventions the files were written against:
//! `[Section]` headers, `key = value` or `key : value` entries, indented
//! continuation lines and full-line `//` comments. Values are taken
//! literally, with no `%`/`$` interpolation. Keys keep their case.

use indexmap::IndexMap;

pub const COMMENT_PREFIX: &str = "//";

/// Entries of one section, in file order.
pub type Section = IndexMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IniDocument {
    sections: IndexMap<String, Section>,
}

impl IniDocument {
    /// Parse ini text. Malformed lines are skipped with a warning.
    pub fn parse(text: &str) -> Self {
        let mut doc = Self::default();
        let mut current_section: Option<String> = None;
        // Last key read, with the indentation of its line
        let mut current_key: Option<(String, usize)> = None;

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            let indent = raw.len() - raw.trim_start().len();

            if line.is_empty() {
                current_key = None;
                continue;
            }
            if line.starts_with(COMMENT_PREFIX) {
                continue;
            }

            // Only lines indented deeper than their key continue its value
            if let (Some(section), Some((key, key_indent))) = (&current_section, &current_key) {
                if indent > *key_indent {
                    if let Some(value) = doc
                        .sections
                        .get_mut(section)
                        .and_then(|entries| entries.get_mut(key))
                    {
                        value.push('\n');
                        value.push_str(line);
                        continue;
                    }
                }
            }

            if let Some(name) = section_header(line) {
                if doc.sections.contains_key(name) {
                    log::debug!("line {line_no}: section [{name}] repeated, merging");
                }
                doc.sections.entry(name.to_string()).or_default();
                current_section = Some(name.to_string());
                current_key = None;
                continue;
            }

            let Some(section) = &current_section else {
                log::warn!("line {line_no}: entry before any section header, skipped");
                continue;
            };

            let Some((key, value)) = split_entry(line) else {
                log::warn!("line {line_no}: no '=' or ':' in '{line}', skipped");
                continue;
            };

            let entries = doc.sections.entry(section.clone()).or_default();
            if entries.insert(key.to_string(), value.to_string()).is_some() {
                log::debug!("line {line_no}: [{section}] {key} redefined, last value wins");
            }
            current_key = Some((key.to_string(), indent));
        }

        doc
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }
}

/// `[name]` -> `name`. Text after the last `]` is ignored.
fn section_header(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('[')?;
    let end = rest.rfind(']')?;
    let name = &rest[..end];
    if name.is_empty() { None } else { Some(name) }
}

/// Split at the first `=` or `:`.
fn split_entry(line: &str) -> Option<(&str, &str)> {
    let pos = line.find(['=', ':'])?;
    let key = line[..pos].trim();
    if key.is_empty() {
        return None;
    }
    Some((key, line[pos + 1..].trim()))
}
