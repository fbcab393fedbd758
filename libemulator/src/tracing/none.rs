use crate::Emulator;

use super::{ExecutedInstruction, TraceData};

#[derive(Debug, Clone, Copy, Default)]
pub struct NoTraceData;

impl TraceData for NoTraceData {
    type Trace = ();

    fn trace_from_state(&self, _: &Emulator, _: &ExecutedInstruction) -> Self::Trace {}

    fn add_trace(&mut self, _: Self::Trace) {}
}
