use std::{fmt::Display, str::FromStr};

use bimap::BiMap;
use lazy_static::lazy_static;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::{Operand, Word};

lazy_static! {
    static ref KIND_OPCODE_BIMAP: BiMap<InstructionKind, Word> = BiMap::from_iter([
        (InstructionKind::LoadConst, 26),
        (InstructionKind::ReadFromMemory, 18),
        (InstructionKind::WriteToMemory, 23),
        (InstructionKind::NotEqual, 17),
    ]);
    static ref KIND_MNEMONIC_BIMAP: BiMap<InstructionKind, &'static str> = BiMap::from_iter([
        (InstructionKind::LoadConst, "LOAD_CONST"),
        (InstructionKind::ReadFromMemory, "READ_FROM_MEMORY"),
        (InstructionKind::WriteToMemory, "WRITE_TO_MEMORY"),
        (InstructionKind::NotEqual, "NOT_EQUAL"),
    ]);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionKind {
    LoadConst,

    ReadFromMemory,
    WriteToMemory,

    NotEqual,
}

impl InstructionKind {
    pub const ALL: [InstructionKind; 4] = [
        Self::LoadConst,
        Self::ReadFromMemory,
        Self::WriteToMemory,
        Self::NotEqual,
    ];

    pub fn from_opcode(opcode: Word) -> Option<Self> {
        KIND_OPCODE_BIMAP.get_by_right(&opcode).copied()
    }

    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        KIND_MNEMONIC_BIMAP.get_by_right(mnemonic).copied()
    }

    pub fn opcode(&self) -> Word {
        *KIND_OPCODE_BIMAP
            .get_by_left(self)
            .expect("No opcode mapping for instruction kind")
    }

    pub fn mnemonic(&self) -> &'static str {
        KIND_MNEMONIC_BIMAP
            .get_by_left(self)
            .expect("No mnemonic mapping for instruction kind")
    }

    /// Number of operand bits following the opcode field.
    pub fn operand_bits(&self) -> u32 {
        match self {
            Self::LoadConst => 13,
            Self::ReadFromMemory | Self::WriteToMemory => 23,
            Self::NotEqual => 11,
        }
    }

    pub fn operand_mask(&self) -> Word {
        (1 << self.operand_bits()) - 1
    }

    pub fn max_operand(&self) -> Operand {
        self.operand_mask()
    }
}

impl Serialize for InstructionKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.mnemonic())
    }
}

impl Display for InstructionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown mnemonic {0:?}")]
pub struct UnknownMnemonic(pub String);

impl FromStr for InstructionKind {
    type Err = UnknownMnemonic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_mnemonic(s).ok_or_else(|| UnknownMnemonic(s.to_string()))
    }
}
