use crate::Emulator;

use super::{ExecutedInstruction, TraceData};

/// Records the fetch address of every executed instruction.
#[derive(Debug, Clone, Default)]
pub struct PCTraceData {
    pub traces: Vec<usize>,
}

impl TraceData for PCTraceData {
    type Trace = usize;

    fn trace_from_state(&self, _: &Emulator, executed: &ExecutedInstruction) -> Self::Trace {
        executed.pc
    }

    fn add_trace(&mut self, trace: Self::Trace) {
        self.traces.push(trace);
    }
}
