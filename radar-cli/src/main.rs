use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod convert;
mod info;

use convert::ConvertOptions;

#[derive(Parser)]
#[command(
    name = "radar2csv",
    version,
    about = "Convert RADAR controller ini files into CSV tag tables"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log level (off, error, warn, info, debug, trace). RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a single ini file
    Convert {
        /// Input file (.ini)
        input: PathBuf,

        /// Output file (defaults to the input path with a .csv extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Input encoding (auto, utf-8, cp1251)
        #[arg(long, default_value = "auto")]
        input_encoding: String,

        /// Parse and join without writing output
        #[arg(long)]
        dry_run: bool,
    },

    /// Convert every .ini file in a directory
    Batch {
        /// Directory scanned (non-recursively) for .ini files
        #[arg(short, long, default_value = "input")]
        input: PathBuf,

        /// Directory receiving one .csv per converted file
        #[arg(short, long, default_value = "output")]
        output: PathBuf,

        /// Input encoding (auto, utf-8, cp1251)
        #[arg(long, default_value = "auto")]
        input_encoding: String,
    },

    /// Display section and row counts for an ini file
    Info {
        /// Input file (.ini)
        input: PathBuf,

        /// Input encoding (auto, utf-8, cp1251)
        #[arg(long, default_value = "auto")]
        input_encoding: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.log_level.as_str()),
    )
    .init();

    match cli.command {
        Command::Convert {
            input,
            output,
            input_encoding,
            dry_run,
        } => {
            let options = ConvertOptions::parse(&input_encoding)?;
            convert::run_convert(&input, output.as_deref(), &options, dry_run)
        }

        Command::Batch {
            input,
            output,
            input_encoding,
        } => {
            let options = ConvertOptions::parse(&input_encoding)?;
            convert::run_batch_convert(&input, &output, &options)
        }

        Command::Info {
            input,
            input_encoding,
        } => info::run_info(&input, input_encoding.parse()?),
    }
}
