use execute::ExecuteErr;
use log::debug;
use memory::Memory;
use stack::Stack;
use thiserror::Error;
use tracing::{snapshot::SnapshotTraceData, StepTrace};

pub mod execute;
pub mod memory;
pub mod stack;
pub mod tracing;

#[cfg(test)]
mod tests;

/// Stack and memory cells are signed, even though nothing in the instruction set can produce a
/// negative value by itself.
pub type Value = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmulatorState {
    Ready,
    Running,
    Halted(Halt),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halt {
    /// The program counter ran past the last instruction.
    Success,
    Error(ExecuteErr),
}

/// Machine state of a single run. Not meant to be reused once halted.
pub struct Emulator {
    pub memory: Memory,
    pub stack: Stack,
    pub pc: usize,

    program: Vec<u8>,
    state: EmulatorState,
}

impl Emulator {
    pub fn new(program: Vec<u8>, memory_size: usize) -> Self {
        Self {
            memory: Memory::new(memory_size),
            stack: Stack::new(),
            pc: 0,
            program,
            state: EmulatorState::Ready,
        }
    }

    pub fn program(&self) -> &[u8] {
        &self.program
    }

    pub fn state(&self) -> EmulatorState {
        self.state
    }

    pub fn is_halted(&self) -> bool {
        matches!(self.state, EmulatorState::Halted(_))
    }

    pub(crate) fn set_state(&mut self, state: EmulatorState) {
        if let EmulatorState::Halted(halt) = state {
            debug!("Halted at pc {}: {:?}", self.pc, halt);
        }

        self.state = state;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpretOutput {
    /// Every memory cell, not just the snapshot window used in the trace.
    pub memory: Vec<Value>,
    pub stack: Vec<Value>,
    pub trace: Vec<StepTrace>,
}

/// A fatal fault together with the trace of every instruction that completed before it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{error}")]
pub struct InterpretFailure {
    #[source]
    pub error: ExecuteErr,
    pub trace: Vec<StepTrace>,
}

pub fn interpret(program: Vec<u8>, memory_size: usize) -> Result<InterpretOutput, InterpretFailure> {
    interpret_with(Emulator::new(program, memory_size), SnapshotTraceData::default())
}

/// Runs an already set up emulator to completion, so callers can pre-seed memory or the stack.
pub fn interpret_with(
    mut emulator: Emulator,
    mut trace_data: SnapshotTraceData,
) -> Result<InterpretOutput, InterpretFailure> {
    match emulator.execute_to_halt(&mut trace_data) {
        Ok(()) => Ok(InterpretOutput {
            memory: emulator.memory.into_vec(),
            stack: emulator.stack.into_vec(),
            trace: trace_data.into_traces(),
        }),
        Err(error) => Err(InterpretFailure {
            error,
            trace: trace_data.into_traces(),
        }),
    }
}
