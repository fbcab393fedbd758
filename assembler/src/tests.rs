use std::{fs, path::Path};

use crate::{run, Args};

fn args(dir: &Path) -> Args {
    Args {
        input_path: dir.join("program.asm"),
        output_path: dir.join("program.bin"),
        log_path: dir.join("program.ron"),
    }
}

#[test]
fn writes_binary_and_log() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let args = args(dir.path());
    fs::write(&args.input_path, "LOAD_CONST 100\nWRITE_TO_MEMORY 2\n")?;

    run(&args)?;

    assert_eq!(
        fs::read(&args.output_path)?,
        [0x9A, 0x0C, 0x00, 0x00, 0x57, 0x00, 0x00, 0x00]
    );

    let log = fs::read_to_string(&args.log_path)?;
    assert!(log.contains("\"LOAD_CONST\""), "{}", log);
    assert!(log.contains("\"WRITE_TO_MEMORY\""), "{}", log);
    assert!(log.contains("\"0x9A\""), "{}", log);

    Ok(())
}

#[test]
fn failure_writes_nothing() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let args = args(dir.path());
    fs::write(&args.input_path, "LOAD_CONST 1\nLOAD_CONST -1\n")?;

    let error = run(&args).unwrap_err();
    assert!(error.to_string().contains("line 2"), "{}", error);

    assert!(!args.output_path.exists());
    assert!(!args.log_path.exists());

    Ok(())
}
