use std::fs;

use anyhow::{anyhow, Context};
use clap::Parser;
use config::Args;
use libemulator::{
    interpret_with, tracing::snapshot::SnapshotTraceData, tracing::StepTrace, Emulator,
    InterpretFailure, InterpretOutput, Value,
};
use log::{error, info};
use ron::ser::PrettyConfig;
use serde::Serialize;

mod config;


#[derive(Serialize)]
struct ResultLog<'a> {
    log: &'a [StepTrace],
    #[serde(skip_serializing_if = "Option::is_none")]
    memory: Option<&'a [Value]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> ResultLog<'a> {
    /// A failed run keeps its trace and reports the fault in place of the final memory.
    fn new(result: &'a Result<InterpretOutput, InterpretFailure>) -> Self {
        match result {
            Ok(output) => Self {
                log: &output.trace,
                memory: Some(output.memory.as_slice()),
                error: None,
            },
            Err(failure) => Self {
                log: &failure.trace,
                memory: None,
                error: Some(failure.error.to_string()),
            },
        }
    }

    fn to_ron(&self) -> anyhow::Result<String> {
        ron::ser::to_string_pretty(self, PrettyConfig::default())
            .context("Serializing execution log")
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    run(&Args::parse())
}

/// The result file is written whether or not the program faults.
fn run(args: &Args) -> anyhow::Result<()> {
    let memory_size = args.memory_size()?;

    let program = fs::read(&args.binary_path)
        .with_context(|| format!("Reading binary file {}", args.binary_path.display()))?;
    info!(
        "Loaded {} byte(s) from {}, memory size {}",
        program.len(),
        args.binary_path.display(),
        memory_size
    );

    let emulator = Emulator::new(program, memory_size);
    let result = interpret_with(emulator, SnapshotTraceData::with_limit(args.snapshot_len));

    let result_log = ResultLog::new(&result);
    fs::write(&args.result_path, result_log.to_ron()?)
        .with_context(|| format!("Writing result file {}", args.result_path.display()))?;

    info!(
        "Executed {} instruction(s), result written to {}",
        result_log.log.len(),
        args.result_path.display()
    );

    if let Err(failure) = &result {
        error!("{}", failure.error);
        return Err(anyhow!("Interpretation failed: {}", failure.error));
    }

    Ok(())
}
