//! Tag/buffer join: expands every tag into its read and write rows.

use crate::labels::{DataType, function_label};
use crate::types::{BufferRecord, ControllerConfig, OutputRow, SelectorTable, Side, TagRecord};
use std::cmp::Ordering;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JoinError {
    #[error("tag '{key}' has non-numeric input buffer offset '{value}'")]
    InvalidOffset { key: String, value: String },
}

/// Build the output table for one controller.
///
/// Rows are ordered by input buffer key, then numeric input offset. Ties keep
/// the order of the `Tags` section. A tag yields a read row if its input
/// buffer exists and a write row if its output buffer exists.
pub fn build_output_table(config: &ControllerConfig) -> Result<Vec<OutputRow>, JoinError> {
    let mut ordered = config
        .tags
        .values()
        .map(|tag| parse_offset(tag).map(|offset| (tag, offset)))
        .collect::<Result<Vec<_>, _>>()?;
    ordered.sort_by(|(a, a_off), (b, b_off)| {
        a.in_buf
            .cmp(&b.in_buf)
            .then_with(|| compare_offsets(*a_off, *b_off))
    });

    let mut rows = Vec::new();
    for (tag, _) in ordered {
        let input = config.buffers.get(&tag.in_buf);
        let output = config.buffers.get(&tag.out_buf);
        if input.is_none() && output.is_none() {
            log::debug!("tag '{}' references no known buffer", tag.key);
        }
        if let Some(buffer) = input {
            rows.push(read_row(tag, buffer, &config.selectors));
        }
        if let Some(buffer) = output {
            rows.push(write_row(tag, buffer));
        }
    }

    log::debug!(
        "joined {} tags with {} buffers into {} rows",
        config.tags.len(),
        config.buffers.len(),
        rows.len()
    );
    Ok(rows)
}

/// Look a selector up by key, falling back to the literal text.
pub fn resolve_selector<'a>(selectors: &'a SelectorTable, literal: &'a str) -> &'a str {
    match selectors.get(literal) {
        Some(selector) => &selector.mask_value,
        None => literal,
    }
}

/// Empty offsets are allowed (write-only tags); they sort last.
fn parse_offset(tag: &TagRecord) -> Result<Option<f64>, JoinError> {
    if tag.in_buf_off.is_empty() {
        return Ok(None);
    }
    // NaN and infinities are rejected along with text
    match tag.in_buf_off.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(JoinError::InvalidOffset {
            key: tag.key.clone(),
            value: tag.in_buf_off.clone(),
        }),
    }
}

fn compare_offsets(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn read_row(tag: &TagRecord, buffer: &BufferRecord, selectors: &SelectorTable) -> OutputRow {
    OutputRow {
        tag_full_name: tag.full_name(),
        description: tag.description.clone(),
        data_type: DataType::from_code(&tag.data_type).label().to_string(),
        direction: buffer.direction.clone(),
        ab_type: function_label(&buffer.function).to_string(),
        ab_addr: buffer.params.clone(),
        ab_off: tag.in_buf_off.clone(),
        selector: resolve_selector(selectors, &tag.selector).to_string(),
        other: other_column(tag, &tag.in_type),
        side: Side::Read,
    }
}

fn write_row(tag: &TagRecord, buffer: &BufferRecord) -> OutputRow {
    OutputRow {
        tag_full_name: tag.full_name(),
        description: tag.description.clone(),
        data_type: DataType::from_code(&tag.data_type).label().to_string(),
        direction: buffer.direction.clone(),
        ab_type: function_label(&buffer.function).to_string(),
        ab_addr: buffer.params.clone(),
        ab_off: tag.out_buf_off.clone(),
        selector: String::new(),
        other: other_column(tag, &tag.out_type),
        side: Side::Write,
    }
}

/// Scaling and default parameters, skipping the ones left blank.
fn other_column(tag: &TagRecord, io_type: &str) -> String {
    [
        tag.k.as_str(),
        tag.b.as_str(),
        tag.default.as_str(),
        tag.default_min.as_str(),
        tag.default_max.as_str(),
        tag.hysteresis.as_str(),
        io_type,
    ]
    .into_iter()
    .filter(|v| !v.is_empty())
    .collect::<Vec<_>>()
    .join(", ")
}
