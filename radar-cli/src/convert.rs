use anyhow::{Context, Result, bail};
use radar_csv::WriteOptions;
use radar_ini::{InputEncoding, RadarParseError};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub const INPUT_EXTENSION: &str = "ini";
pub const OUTPUT_EXTENSION: &str = "csv";

#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub input_encoding: InputEncoding,
    pub write: WriteOptions,
}

impl ConvertOptions {
    pub fn parse(input_encoding: &str) -> Result<Self> {
        Ok(Self {
            input_encoding: input_encoding.parse()?,
            write: WriteOptions::default(),
        })
    }
}

/// What happened to one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Converted { rows: usize },
    /// A required section was absent; nothing was written.
    Skipped { section: String },
}

pub fn read_input(input: &Path, encoding: InputEncoding) -> Result<String> {
    let bytes = std::fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    radar_ini::decode_input(&bytes, encoding)
        .with_context(|| format!("decoding {}", input.display()))
}

/// Convert one ini file. A missing section is a skip, not an error.
pub fn convert_file(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
    dry_run: bool,
) -> Result<Outcome> {
    let start = Instant::now();
    let text = read_input(input, options.input_encoding)?;

    let config = match radar_ini::parse_radar_ini(&text) {
        Ok(config) => config,
        Err(RadarParseError::MissingSection(section)) => {
            log::warn!("Section {section} is missing in {}", input.display());
            return Ok(Outcome::Skipped { section });
        }
    };

    let rows = radar_ir::build_output_table(&config)
        .with_context(|| format!("converting {}", input.display()))?;

    log::info!(
        "{}: {} tags -> {} rows",
        input.display(),
        config.tags.len(),
        rows.len()
    );

    if !dry_run {
        radar_csv::write_csv_file(&rows, &options.write, output)
            .with_context(|| format!("writing {}", output.display()))?;
    }

    log::debug!(
        "{}: done in {:.1}ms",
        input.display(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(Outcome::Converted { rows: rows.len() })
}

pub fn run_convert(
    input: &Path,
    output: Option<&Path>,
    options: &ConvertOptions,
    dry_run: bool,
) -> Result<()> {
    let output = output.map_or_else(|| input.with_extension(OUTPUT_EXTENSION), Path::to_path_buf);

    match convert_file(input, &output, options, dry_run)? {
        Outcome::Converted { rows } if dry_run => {
            println!("dry run: would write {rows} rows to {}", output.display());
        }
        Outcome::Converted { rows } => {
            println!(
                "Converted {} -> {} ({rows} rows)",
                input.display(),
                output.display()
            );
        }
        Outcome::Skipped { section } => {
            println!("Skipped {}: section {section} is missing", input.display());
        }
    }
    Ok(())
}

/// `*.ini` files directly inside `dir`, sorted by name.
pub fn find_ini_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("reading directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("reading directory {}", dir.display()))?;
        let path = entry.path();
        let is_ini = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(&format!(".{INPUT_EXTENSION}")));
        if is_ini && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

pub fn run_batch_convert(input_dir: &Path, output_dir: &Path, options: &ConvertOptions) -> Result<()> {
    use rayon::prelude::*;

    let inputs = find_ini_files(input_dir)?;
    if inputs.is_empty() {
        log::warn!("no .{INPUT_EXTENSION} files in {}", input_dir.display());
    }

    if !output_dir.exists() {
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("creating output directory {}", output_dir.display()))?;
    }

    let results: Vec<(PathBuf, Result<Outcome>)> = inputs
        .par_iter()
        .map(|input| {
            let stem = input.file_stem().unwrap_or_default();
            let out_path =
                output_dir.join(format!("{}.{OUTPUT_EXTENSION}", stem.to_string_lossy()));
            let result = convert_file(input, &out_path, options, false);
            (input.clone(), result)
        })
        .collect();

    let mut converted = 0;
    let mut skipped = 0;
    let mut failed = 0;
    for (input, result) in &results {
        match result {
            Ok(Outcome::Converted { .. }) => converted += 1,
            Ok(Outcome::Skipped { section }) => {
                eprintln!("SKIPPED {}: section {section} is missing", input.display());
                skipped += 1;
            }
            Err(e) => {
                eprintln!("FAILED {}: {e:#}", input.display());
                failed += 1;
            }
        }
    }

    println!(
        "Batch complete: {converted} converted, {skipped} skipped, {failed} failed ({} -> {})",
        input_dir.display(),
        output_dir.display()
    );

    if failed > 0 {
        bail!("{failed} of {} files failed to convert", inputs.len());
    }
    Ok(())
}
