use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use libisa::instruction::assembler::assemble_source;
use log::{error, info};
use ron::ser::PrettyConfig;

#[cfg(test)]
mod tests;

/// Assembles a source file into a binary program and an assembly log.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Assembly source, one `MNEMONIC OPERAND` per line.
    input_path: PathBuf,

    /// Where the binary program is written.
    output_path: PathBuf,

    /// Where the per-instruction assembly log is written (RON).
    log_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    run(&Args::parse())
}

fn run(args: &Args) -> anyhow::Result<()> {
    let source = fs::read_to_string(&args.input_path)
        .with_context(|| format!("Reading source file {}", args.input_path.display()))?;

    // Nothing is written unless the whole file assembles.
    let output = assemble_source(&source).map_err(|failure| {
        error!(
            "Assembly stopped after {} instruction(s)",
            failure.partial.instruction_count()
        );
        failure.error
    })?;

    fs::write(&args.output_path, &output.machine_code)
        .with_context(|| format!("Writing binary file {}", args.output_path.display()))?;

    let log = ron::ser::to_string_pretty(&output.trace, PrettyConfig::default())
        .context("Serializing assembly log")?;
    fs::write(&args.log_path, log)
        .with_context(|| format!("Writing log file {}", args.log_path.display()))?;

    info!(
        "Assembled {} instruction(s) into {}",
        output.instruction_count(),
        args.output_path.display()
    );

    Ok(())
}
