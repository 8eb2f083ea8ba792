use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fwtools::Decomposer;

/// Splits a firmware image around its vector table.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of 4-byte vector-table entries
    element_count: u64,

    /// Byte offset of the vector table in the image
    address: u64,

    /// Firmware image to split
    input: PathBuf,

    /// Output for bytes [address, address + element_count * 4)
    vector_table_out: PathBuf,

    /// Output for bytes [0, address)
    part1_out: PathBuf,

    /// Output for the bytes after the vector table
    part2_out: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    run(&Cli::parse())
}

fn run(args: &Cli) -> Result<()> {
    let fw = Decomposer::open(args.element_count, args.address, &args.input)
        .with_context(|| format!("opening {}", args.input.display()))?;

    fw.save_all(&args.vector_table_out, &args.part1_out, &args.part2_out)
        .with_context(|| format!("decomposing {}", args.input.display()))?;

    Ok(())
}
