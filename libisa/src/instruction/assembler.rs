use log::{debug, trace};
use serde::Serialize;
use thiserror::Error;

use crate::{Operand, Word};

use super::{kind::InstructionKind, Instruction};


/// Errors are tagged with the 1-based line number and the offending source line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("Syntax error on line {line_number}: expected `MNEMONIC OPERAND`, got {token_count} token(s) in {line:?}")]
    WrongTokenCount {
        line_number: usize,
        line: String,
        token_count: usize,
    },

    #[error("Syntax error on line {line_number}: unknown mnemonic {mnemonic:?} in {line:?}")]
    UnknownMnemonic {
        line_number: usize,
        line: String,
        mnemonic: String,
    },

    #[error("Syntax error on line {line_number}: operand {operand:?} is not a non-negative decimal integer in {line:?}")]
    InvalidOperand {
        line_number: usize,
        line: String,
        operand: String,
    },

    /// `operand` is the token exactly as written, so negative and oversized values are reported
    /// verbatim.
    #[error("Range error on line {line_number}: operand {operand} of {kind} must be in range 0..={max}")]
    OperandOutOfRange {
        line_number: usize,
        line: String,
        kind: InstructionKind,
        operand: String,
        max: Operand,
    },
}

impl AssemblyError {
    pub fn line_number(&self) -> usize {
        match self {
            Self::WrongTokenCount { line_number, .. }
            | Self::UnknownMnemonic { line_number, .. }
            | Self::InvalidOperand { line_number, .. }
            | Self::OperandOutOfRange { line_number, .. } => *line_number,
        }
    }

    pub fn is_syntax_error(&self) -> bool {
        !self.is_range_error()
    }

    pub fn is_range_error(&self) -> bool {
        matches!(self, Self::OperandOutOfRange { .. })
    }
}

/// One record per assembled instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssemblyTrace {
    pub command: InstructionKind,
    #[serde(rename = "A")]
    pub opcode: Word,
    #[serde(rename = "B")]
    pub operand: Operand,
    #[serde(serialize_with = "crate::serialize_byte_strings")]
    pub bytes: [u8; crate::BYTES_PER_WORD],
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblyOutput {
    pub machine_code: Vec<u8>,
    pub trace: Vec<AssemblyTrace>,
}

impl AssemblyOutput {
    pub fn instruction_count(&self) -> usize {
        self.trace.len()
    }
}

/// A failed assembly still hands back whatever the earlier lines produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{error}")]
pub struct AssemblyFailure {
    #[source]
    pub error: AssemblyError,
    pub partial: AssemblyOutput,
}

/// Line-at-a-time assembler. Each successful line is committed to the output immediately.
#[derive(Debug, Default)]
pub struct Assembler {
    output: AssemblyOutput,
    line_number: usize,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assemble_line(&mut self, line: &str) -> Result<(), AssemblyError> {
        self.line_number += 1;

        let Some((instruction, word)) = parse_line(self.line_number, line)? else {
            return Ok(());
        };
        let bytes = crate::word_to_bytes(word);

        trace!(
            "line {}: {} -> {:?}",
            self.line_number,
            instruction,
            crate::byte_strings(&bytes)
        );

        self.output.machine_code.extend(bytes);
        self.output.trace.push(AssemblyTrace {
            command: instruction.kind,
            opcode: instruction.opcode(),
            operand: instruction.operand,
            bytes,
        });

        Ok(())
    }

    pub fn output(&self) -> &AssemblyOutput {
        &self.output
    }

    pub fn finish(self) -> AssemblyOutput {
        self.output
    }
}

pub fn assemble<I, S>(lines: I) -> Result<AssemblyOutput, AssemblyFailure>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut assembler = Assembler::new();

    for line in lines {
        if let Err(error) = assembler.assemble_line(line.as_ref()) {
            return Err(AssemblyFailure {
                error,
                partial: assembler.finish(),
            });
        }
    }

    let output = assembler.finish();
    debug!(
        "Assembled {} instruction(s) into {} byte(s)",
        output.instruction_count(),
        output.machine_code.len()
    );

    Ok(output)
}

/// Convenience over [`assemble`] for a whole source text.
pub fn assemble_source(source: &str) -> Result<AssemblyOutput, AssemblyFailure> {
    assemble(source.lines())
}

/// Returns `None` for blank lines. The instruction comes back already encoded.
fn parse_line(
    line_number: usize,
    line: &str,
) -> Result<Option<(Instruction, Word)>, AssemblyError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let (mnemonic, token) = match tokens.as_slice() {
        [] => return Ok(None),
        [mnemonic, operand] => (*mnemonic, *operand),
        _ => {
            return Err(AssemblyError::WrongTokenCount {
                line_number,
                line: line.to_string(),
                token_count: tokens.len(),
            })
        }
    };

    let kind = InstructionKind::from_mnemonic(mnemonic).ok_or_else(|| {
        AssemblyError::UnknownMnemonic {
            line_number,
            line: line.to_string(),
            mnemonic: mnemonic.to_string(),
        }
    })?;

    let out_of_range = || AssemblyError::OperandOutOfRange {
        line_number,
        line: line.to_string(),
        kind,
        operand: token.to_string(),
        max: kind.max_operand(),
    };

    let operand = match parse_operand(token) {
        Some(ParsedOperand::Value(operand)) => operand,
        Some(ParsedOperand::OutOfRange) => return Err(out_of_range()),
        None => {
            return Err(AssemblyError::InvalidOperand {
                line_number,
                line: line.to_string(),
                operand: token.to_string(),
            })
        }
    };

    let instruction = Instruction::new(kind, operand);
    let word = instruction.assemble().map_err(|_| out_of_range())?;

    Ok(Some((instruction, word)))
}

enum ParsedOperand {
    Value(Operand),
    /// Negative, or too large for any operand field.
    OutOfRange,
}

/// Accepts decimal digits with an optional leading `-`. Anything else is not a number.
fn parse_operand(token: &str) -> Option<ParsedOperand> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    let negative = digits.len() != token.len();
    if negative && digits.bytes().any(|byte| byte != b'0') {
        return Some(ParsedOperand::OutOfRange);
    }

    Some(
        digits
            .parse::<Operand>()
            .map_or(ParsedOperand::OutOfRange, ParsedOperand::Value),
    )
}
