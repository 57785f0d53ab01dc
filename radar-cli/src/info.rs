use anyhow::{Context, Result};
use radar_ini::{IniDocument, InputEncoding, REQUIRED_SECTIONS};
use radar_ir::Side;
use std::path::Path;

use crate::convert::read_input;

pub fn run_info(input: &Path, encoding: InputEncoding) -> Result<()> {
    let text = read_input(input, encoding)?;
    let doc = IniDocument::parse(&text);

    let section_names: Vec<&str> = doc.section_names().collect();
    println!("File:        {}", input.display());
    println!("Sections:    {}", section_names.join(", "));

    let missing: Vec<&str> = REQUIRED_SECTIONS
        .into_iter()
        .filter(|name| !doc.has_section(name))
        .collect();
    if !missing.is_empty() {
        println!("Missing:     {}", missing.join(", "));
        return Ok(());
    }

    let config = radar_ini::parse_radar_document(&doc)?;
    println!("Buffers:     {}", config.buffers.len());
    println!("Selectors:   {}", config.selectors.len());
    println!("Tags:        {}", config.tags.len());

    let unmapped = config
        .tags
        .values()
        .filter(|t| {
            !config.buffers.contains_key(&t.in_buf) && !config.buffers.contains_key(&t.out_buf)
        })
        .count();
    if unmapped > 0 {
        println!("Unmapped:    {unmapped}");
    }

    let rows = radar_ir::build_output_table(&config)
        .with_context(|| format!("converting {}", input.display()))?;
    let reads = rows.iter().filter(|r| r.side == Side::Read).count();
    println!(
        "Rows:        {} ({} read, {} write)",
        rows.len(),
        reads,
        rows.len() - reads
    );

    Ok(())
}
