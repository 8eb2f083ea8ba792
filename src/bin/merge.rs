use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Concatenates two firmware images byte for byte.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// First input, written at the start of the output
    input1: PathBuf,

    /// Second input, appended after the first
    input2: PathBuf,

    /// Output file, created or overwritten
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Cli::parse();

    fwtools::merge(&args.input1, &args.input2, &args.output).with_context(|| {
        format!(
            "merging {} + {} into {}",
            args.input1.display(),
            args.input2.display(),
            args.output.display()
        )
    })?;

    Ok(())
}
