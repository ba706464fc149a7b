use anyhow::{Context, Result};
use clap::Parser;
use int_code_procs::{amp, int_code, CLIArgs};

fn main() -> Result<()> {
    int_code_procs::init_tracing();
    let args = CLIArgs::parse();
    let int_code = int_code::read_int_code(&args.input_path).with_context(|| {
        format!(
            "Failed to read intcode program from given file({}).",
            args.input_path.display()
        )
    })?;

    let phases = (5..10).collect::<Vec<i64>>();
    let (signal, setting) = amp::max_loop_signal(&int_code, &phases)?;
    println!(
        "The maximum output signal({}) of amplifier loop can be achieved by setting({:?})",
        signal, setting
    );

    Ok(())
}
