use libisa::instruction::{
    assembler::assemble_source, kind::InstructionKind, Instruction, InstructionDeassemblyError,
};

use crate::{Deassembler, DeassemblyError};

const SOURCE: &str = "LOAD_CONST 100
WRITE_TO_MEMORY 3
READ_FROM_MEMORY 3
NOT_EQUAL 2047
";

#[test]
fn deassembles_assembled_program() -> anyhow::Result<()> {
    let program = assemble_source(SOURCE)?.machine_code;

    let instructions = Deassembler::new(program.iter()).deassemble()?;

    assert_eq!(
        instructions,
        [
            Instruction::new(InstructionKind::LoadConst, 100),
            Instruction::new(InstructionKind::WriteToMemory, 3),
            Instruction::new(InstructionKind::ReadFromMemory, 3),
            Instruction::new(InstructionKind::NotEqual, 2047),
        ]
    );

    Ok(())
}

#[test]
fn text_reassembles_to_same_binary() -> anyhow::Result<()> {
    let program = assemble_source(SOURCE)?.machine_code;

    let text = Deassembler::new(program.iter()).deassemble_text();
    assert_eq!(text, SOURCE);

    let reassembled = assemble_source(&text)?.machine_code;
    assert_eq!(reassembled, program);

    Ok(())
}

#[test]
fn empty_program() {
    let program: Vec<u8> = Vec::new();

    assert_eq!(Deassembler::new(program.iter()).deassemble(), Ok(vec![]));
}

#[test]
fn unrecognized_opcode_reports_offset() -> anyhow::Result<()> {
    let mut program = assemble_source("LOAD_CONST 1\n")?.machine_code;
    program.extend([0xFF; 4]);

    assert_eq!(
        Deassembler::new(program.iter()).deassemble(),
        Err(DeassemblyError::Instruction {
            offset: 4,
            source: InstructionDeassemblyError::UnrecognizedOpcode(31),
        })
    );

    let text = Deassembler::new(program.iter()).deassemble_text();
    assert!(text.starts_with("LOAD_CONST 1\n<"), "{:?}", text);

    Ok(())
}

#[test]
fn trailing_partial_word() -> anyhow::Result<()> {
    let mut program = assemble_source("LOAD_CONST 1\n")?.machine_code;
    program.extend([0x9A, 0x0C]);

    assert_eq!(
        Deassembler::new(program.iter()).deassemble(),
        Err(DeassemblyError::IncompleteInstruction {
            offset: 4,
            trailing: 2,
        })
    );

    Ok(())
}
