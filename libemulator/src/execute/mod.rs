use libisa::{
    instruction::{Instruction, InstructionDeassemblyError},
    Word,
};
use log::{trace, warn};
use thiserror::Error;

use crate::{
    tracing::{ExecutedInstruction, TraceData},
    Emulator, EmulatorState, Halt, Value,
};

mod parsed;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteOk {
    /// An instruction was executed.
    Normal,
    /// Nothing left to execute.
    Halted,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteErr {
    #[error("Invalid bytecode at pc {pc}: {source}")]
    IllegalInstruction {
        pc: usize,
        #[source]
        source: InstructionDeassemblyError,
    },

    #[error("Memory access violation: address {address} is outside memory of size {memory_size}")]
    MemoryAccessViolation { address: Value, memory_size: usize },

    #[error("Stack underflow at pc {pc}")]
    StackUnderflow { pc: usize },

    #[error("Malformed program: {trailing} trailing byte(s) at pc {pc}, program length must be a multiple of {}", libisa::BYTES_PER_WORD)]
    MalformedProgram { pc: usize, trailing: usize },
}

impl Emulator {
    /// Runs one fetch-decode-execute cycle. Once halted, every further call reports the same
    /// outcome without touching the machine state.
    pub fn execute_instruction<T>(&mut self, trace_data: &mut T) -> Result<ExecuteOk, ExecuteErr>
    where
        T: TraceData,
    {
        match self.state() {
            EmulatorState::Halted(Halt::Success) => return Ok(ExecuteOk::Halted),
            EmulatorState::Halted(Halt::Error(e)) => return Err(e),
            EmulatorState::Ready | EmulatorState::Running => {}
        }

        if self.pc >= self.program().len() {
            self.set_state(EmulatorState::Halted(Halt::Success));
            return Ok(ExecuteOk::Halted);
        }

        self.set_state(EmulatorState::Running);

        let executed = match self.step() {
            Ok(executed) => executed,
            Err(e) => {
                warn!("{}", e);
                self.set_state(EmulatorState::Halted(Halt::Error(e)));
                return Err(e);
            }
        };

        let trace = trace_data.trace_from_state(self, &executed);
        trace_data.add_trace(trace);

        if self.pc >= self.program().len() {
            self.set_state(EmulatorState::Halted(Halt::Success));
        }

        Ok(ExecuteOk::Normal)
    }

    pub fn execute_to_halt<T>(&mut self, trace_data: &mut T) -> Result<(), ExecuteErr>
    where
        T: TraceData,
    {
        while self.execute_instruction(trace_data)? == ExecuteOk::Normal {}

        Ok(())
    }

    fn step(&mut self) -> Result<ExecutedInstruction, ExecuteErr> {
        let pc = self.pc;
        let word = self.pc_next_word()?;

        let instruction = Instruction::deassemble_word(word)
            .map_err(|source| ExecuteErr::IllegalInstruction { pc, source })?;

        trace!("{:>8}: {}", pc, instruction);
        self.execute_parsed_instruction(pc, instruction)?;

        Ok(ExecutedInstruction {
            pc,
            word,
            instruction,
        })
    }

    fn pc_next_word(&mut self) -> Result<Word, ExecuteErr> {
        let end = self.pc + libisa::BYTES_PER_WORD;

        let bytes = self
            .program()
            .get(self.pc..end)
            .ok_or(ExecuteErr::MalformedProgram {
                pc: self.pc,
                trailing: self.program().len() - self.pc,
            })?;

        let mut word_bytes = [0; libisa::BYTES_PER_WORD];
        word_bytes.copy_from_slice(bytes);

        self.pc = end;
        Ok(libisa::bytes_to_word(word_bytes))
    }

    fn mem_cell(&self, addr: Value) -> Result<Value, ExecuteErr> {
        self.memory
            .cell(addr)
            .ok_or(ExecuteErr::MemoryAccessViolation {
                address: addr,
                memory_size: self.memory.len(),
            })
    }

    fn mem_cell_mut(&mut self, addr: Value) -> Result<&mut Value, ExecuteErr> {
        let memory_size = self.memory.len();

        self.memory
            .cell_mut(addr)
            .ok_or(ExecuteErr::MemoryAccessViolation {
                address: addr,
                memory_size,
            })
    }

    fn pop(&mut self, pc: usize) -> Result<Value, ExecuteErr> {
        self.stack.pop().ok_or(ExecuteErr::StackUnderflow { pc })
    }
}
