use std::iter::Peekable;

use libisa::{
    instruction::{Instruction, InstructionDeassemblyError},
    Word,
};
use thiserror::Error;

#[cfg(test)]
mod tests;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DeassemblyError {
    #[error("{source} at byte offset {offset}")]
    Instruction {
        offset: usize,
        #[source]
        source: InstructionDeassemblyError,
    },

    #[error("Incomplete instruction: {trailing} trailing byte(s) at byte offset {offset}")]
    IncompleteInstruction { offset: usize, trailing: usize },
}

pub struct Deassembler<'a, I>
where
    I: Iterator<Item = &'a u8>,
{
    code_iter: Peekable<I>,
    offset: usize,
}

impl<'a, I> Deassembler<'a, I>
where
    I: Iterator<Item = &'a u8>,
{
    pub fn new(code_iter: I) -> Self {
        Self {
            code_iter: code_iter.peekable(),
            offset: 0,
        }
    }

    pub fn deassemble(mut self) -> Result<Vec<Instruction>, DeassemblyError> {
        let mut output = Vec::new();

        while self.code_iter.peek().is_some() {
            output.push(self.deassemble_instruction()?);
        }

        Ok(output)
    }

    /// One `MNEMONIC OPERAND` line per instruction, in the form the assembler reads back. Stops at
    /// the first bad word and leaves an `<error>` marker in its place.
    pub fn deassemble_text(mut self) -> String {
        let mut text = String::new();

        while self.code_iter.peek().is_some() {
            match self.deassemble_instruction() {
                Ok(instruction) => text.push_str(&format!("{}\n", instruction)),
                Err(e) => {
                    text.push_str(&format!("<{}>\n", e));
                    break;
                }
            }
        }

        text
    }

    pub fn deassemble_instruction(&mut self) -> Result<Instruction, DeassemblyError> {
        let offset = self.offset;
        let instruction_word = self.next_word()?;

        Instruction::deassemble_word(instruction_word)
            .map_err(|source| DeassemblyError::Instruction { offset, source })
    }

    fn next_word(&mut self) -> Result<Word, DeassemblyError> {
        let mut bytes = [0; libisa::BYTES_PER_WORD];

        for (index, byte) in bytes.iter_mut().enumerate() {
            *byte = *self
                .code_iter
                .next()
                .ok_or(DeassemblyError::IncompleteInstruction {
                    offset: self.offset,
                    trailing: index,
                })?;
        }

        self.offset += libisa::BYTES_PER_WORD;
        Ok(libisa::bytes_to_word(bytes))
    }
}
