use libisa::{instruction::Instruction, Operand, Word};
use serde::Serialize;

use crate::{Emulator, Value};

pub mod none;
pub mod pc;
pub mod snapshot;


/// What the emulator knows about an instruction it just finished executing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutedInstruction {
    /// Byte offset the instruction was fetched from.
    pub pc: usize,
    pub word: Word,
    pub instruction: Instruction,
}

/// Trace collector handed to the emulator by reference for every executed instruction.
pub trait TraceData {
    type Trace;

    fn trace_from_state(&self, emulator: &Emulator, executed: &ExecutedInstruction) -> Self::Trace;

    fn add_trace(&mut self, trace: Self::Trace);
}

/// Per-instruction diagnostic record. Never read back by the emulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepTrace {
    #[serde(skip)]
    pub pc: usize,
    #[serde(serialize_with = "libisa::serialize_byte_strings")]
    pub instruction: [u8; libisa::BYTES_PER_WORD],
    #[serde(rename = "A")]
    pub opcode: Word,
    #[serde(rename = "B")]
    pub operand: Operand,
    pub stack_snapshot: Vec<Value>,
    pub memory_snapshot: Vec<Value>,
}
