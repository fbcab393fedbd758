use libisa::instruction::assembler::assemble_source;

use crate::{
    execute::ExecuteErr,
    interpret, interpret_with,
    tracing::snapshot::SnapshotTraceData,
    Emulator,
};

#[test]
fn assembled_program_runs() -> anyhow::Result<()> {
    let source = "
LOAD_CONST 100
WRITE_TO_MEMORY 2
LOAD_CONST 2
NOT_EQUAL 0
READ_FROM_MEMORY 2
";
    let program = assemble_source(source)?.machine_code;

    let output = interpret(program, 16)?;

    // memory[0 + 2] is 100, which differs from the popped 2.
    assert_eq!(output.stack, [1, 100]);
    assert_eq!(output.memory.len(), 16);
    assert_eq!(output.memory[2], 100);
    assert_eq!(output.trace.len(), 5);

    let write = &output.trace[1];
    assert_eq!(write.opcode, 23);
    assert_eq!(write.operand, 2);
    assert!(write.stack_snapshot.is_empty());
    assert_eq!(write.memory_snapshot, [0, 0, 100, 0, 0, 0, 0, 0, 0, 0]);

    Ok(())
}

#[test]
fn final_memory_is_not_truncated() -> anyhow::Result<()> {
    let program = assemble_source("LOAD_CONST 7\nWRITE_TO_MEMORY 30\n")?.machine_code;

    let output = interpret(program, 32)?;

    assert_eq!(output.memory.len(), 32);
    assert_eq!(output.memory[30], 7);
    assert!(output.trace.iter().all(|step| step.memory_snapshot.len() == 10));

    Ok(())
}

#[test]
fn failure_keeps_trace() -> anyhow::Result<()> {
    let program = assemble_source("LOAD_CONST 1\nLOAD_CONST 2\nREAD_FROM_MEMORY 8\n")?.machine_code;

    let failure = interpret(program, 8).unwrap_err();

    assert_eq!(
        failure.error,
        ExecuteErr::MemoryAccessViolation {
            address: 8,
            memory_size: 8
        }
    );
    assert_eq!(failure.trace.len(), 2);
    assert_eq!(failure.trace[1].stack_snapshot, [1, 2]);

    Ok(())
}

#[test]
fn pre_seeded_state() -> anyhow::Result<()> {
    let program = assemble_source("NOT_EQUAL 0")?.machine_code;

    let mut emulator = Emulator::new(program, 1024);
    *emulator.memory.cell_mut(154).unwrap() = 154;
    emulator.stack.push(154);

    let output = interpret_with(emulator, SnapshotTraceData::default())?;
    assert_eq!(output.stack, [0]);

    Ok(())
}

#[test]
fn runs_are_independent() -> anyhow::Result<()> {
    let program = assemble_source("LOAD_CONST 5\nWRITE_TO_MEMORY 0\n")?.machine_code;

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let program = program.clone();
            std::thread::spawn(move || interpret(program, 4))
        })
        .collect();

    for handle in handles {
        let output = handle.join().expect("Interpreter thread panicked")?;
        assert_eq!(output.memory, [5, 0, 0, 0]);
    }

    Ok(())
}
