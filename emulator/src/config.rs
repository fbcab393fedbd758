use std::path::PathBuf;

use clap::Parser;
use libemulator::tracing::snapshot::DEFAULT_SNAPSHOT_LIMIT;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Memory range end ({end}) must be greater than its start ({start})")]
    EmptyMemoryRange { start: usize, end: usize },
}

/// Runs an assembled program and writes its execution log and final memory.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Binary program produced by the assembler.
    pub binary_path: PathBuf,

    /// Where the execution log and final memory are written (RON).
    pub result_path: PathBuf,

    /// First address of the memory range.
    pub range_start: usize,

    /// One past the last address of the memory range.
    pub range_end: usize,

    /// Number of stack and memory elements recorded per executed instruction.
    #[arg(long, default_value_t = DEFAULT_SNAPSHOT_LIMIT)]
    pub snapshot_len: usize,
}

impl Args {
    pub fn memory_size(&self) -> Result<usize, ConfigError> {
        if self.range_end <= self.range_start {
            return Err(ConfigError::EmptyMemoryRange {
                start: self.range_start,
                end: self.range_end,
            });
        }

        Ok(self.range_end - self.range_start)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Args, ConfigError};

    #[test]
    fn memory_size_from_range() {
        let args = Args::parse_from(["emulator", "in.bin", "out.ron", "0", "1024"]);

        assert_eq!(args.memory_size(), Ok(1024));
        assert_eq!(args.snapshot_len, 10);
    }

    #[test]
    fn empty_range_is_rejected() {
        let args = Args::parse_from(["emulator", "in.bin", "out.ron", "5", "5"]);

        assert_eq!(
            args.memory_size(),
            Err(ConfigError::EmptyMemoryRange { start: 5, end: 5 })
        );
    }

    #[test]
    fn snapshot_len_flag() {
        let args = Args::parse_from([
            "emulator",
            "in.bin",
            "out.ron",
            "0",
            "8",
            "--snapshot-len",
            "3",
        ]);

        assert_eq!(args.snapshot_len, 3);
    }
}
