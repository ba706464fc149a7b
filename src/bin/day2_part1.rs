use anyhow::{Context, Result};
use clap::Parser;
use int_code_procs::{gravity, int_code, CLIArgs};

fn main() -> Result<()> {
    int_code_procs::init_tracing();
    let args = CLIArgs::parse();
    let int_code = int_code::read_int_code(&args.input_path).with_context(|| {
        format!(
            "Failed to read intcode program from given file({}).",
            args.input_path.display()
        )
    })?;

    let (noun, verb) = (12, 2);
    let value = gravity::run_with_patch(&int_code, noun, verb)
        .with_context(|| format!("Failed to run program with noun({}), verb({}).", noun, verb))?;
    println!(
        "After restoring the 1202 program alarm state, program halts with {} at position 0.",
        value
    );

    Ok(())
}
