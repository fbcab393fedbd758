use libisa::instruction::{kind::InstructionKind, Instruction};

use crate::{Emulator, Value};

use super::ExecuteErr;

impl Emulator {
    pub fn execute_parsed_instruction(
        &mut self,
        pc: usize,
        instruction: Instruction,
    ) -> Result<(), ExecuteErr> {
        let operand = Value::from(instruction.operand);

        match instruction.kind {
            InstructionKind::LoadConst => {
                self.stack.push(operand);
            }

            InstructionKind::ReadFromMemory => {
                let value = self.mem_cell(operand)?;
                self.stack.push(value);
            }

            InstructionKind::WriteToMemory => {
                let value = self.pop(pc)?;

                let dest = self.mem_cell_mut(operand)?;
                *dest = value;
            }

            InstructionKind::NotEqual => {
                let value = self.pop(pc)?;

                // An overflowing offset can't land inside memory anyway.
                let addr = operand.checked_add(value).unwrap_or(Value::MAX);
                let cell = self.mem_cell(addr)?;

                self.stack.push(if cell != value { 1 } else { 0 });
            }
        }

        Ok(())
    }
}
