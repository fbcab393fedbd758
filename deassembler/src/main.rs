use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use libdeassembler::Deassembler;
use log::info;

/// Prints a binary program back as assembly text.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Binary program produced by the assembler.
    program_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let program = fs::read(&args.program_path)
        .with_context(|| format!("Reading program file {}", args.program_path.display()))?;
    info!("Read {} byte(s) from {}", program.len(), args.program_path.display());

    let deassembler = Deassembler::new(program.iter());
    print!("{}", deassembler.deassemble_text());

    Ok(())
}
