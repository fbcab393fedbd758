use std::fmt::Display;

use kind::InstructionKind;
use thiserror::Error;

use crate::{Operand, Word};

pub mod assembler;
pub mod kind;


#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Operand {operand} of {kind} must be in range 0..={max}")]
    OperandOutOfRange {
        kind: InstructionKind,
        operand: Operand,
        max: Operand,
    },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InstructionDeassemblyError {
    #[error("Unrecognized opcode {0}")]
    UnrecognizedOpcode(Word),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    pub kind: InstructionKind,
    pub operand: Operand,
}

impl Instruction {
    pub const fn new(kind: InstructionKind, operand: Operand) -> Self {
        Self { kind, operand }
    }

    pub fn opcode(&self) -> Word {
        self.kind.opcode()
    }

    /// Packs the opcode into the low bits and the operand right above it. Everything past the
    /// operand's width stays zero.
    pub fn assemble(self) -> Result<Word, EncodeError> {
        let max = self.kind.max_operand();

        if self.operand > max {
            return Err(EncodeError::OperandOutOfRange {
                kind: self.kind,
                operand: self.operand,
                max,
            });
        }

        Ok(self.kind.opcode() | (self.operand << crate::OPCODE_BITS))
    }

    pub fn assemble_bytes(self) -> Result<[u8; crate::BYTES_PER_WORD], EncodeError> {
        self.assemble().map(crate::word_to_bytes)
    }

    pub fn deassemble_word(instruction: Word) -> Result<Self, InstructionDeassemblyError> {
        let opcode = instruction & crate::OPCODE_MASK;

        let kind = InstructionKind::from_opcode(opcode)
            .ok_or(InstructionDeassemblyError::UnrecognizedOpcode(opcode))?;

        // Bits past the operand width are ignored, not rejected.
        let operand = (instruction >> crate::OPCODE_BITS) & kind.operand_mask();

        Ok(Self { kind, operand })
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.operand)
    }
}
