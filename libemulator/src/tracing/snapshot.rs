use crate::Emulator;

use super::{ExecutedInstruction, StepTrace, TraceData};

pub const DEFAULT_SNAPSHOT_LIMIT: usize = 10;

/// Collects a [`StepTrace`] per instruction, with the stack and memory cut down to `limit`
/// elements.
#[derive(Debug, Clone)]
pub struct SnapshotTraceData {
    pub limit: usize,
    pub traces: Vec<StepTrace>,
}

impl SnapshotTraceData {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            traces: Vec::new(),
        }
    }

    pub fn into_traces(self) -> Vec<StepTrace> {
        self.traces
    }
}

impl Default for SnapshotTraceData {
    fn default() -> Self {
        Self::with_limit(DEFAULT_SNAPSHOT_LIMIT)
    }
}

impl TraceData for SnapshotTraceData {
    type Trace = StepTrace;

    fn trace_from_state(&self, emulator: &Emulator, executed: &ExecutedInstruction) -> Self::Trace {
        StepTrace {
            pc: executed.pc,
            instruction: libisa::word_to_bytes(executed.word),
            opcode: executed.instruction.opcode(),
            operand: executed.instruction.operand,
            stack_snapshot: emulator.stack.snapshot(self.limit),
            memory_snapshot: emulator.memory.snapshot(self.limit),
        }
    }

    fn add_trace(&mut self, trace: Self::Trace) {
        self.traces.push(trace);
    }
}
