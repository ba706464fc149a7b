use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use int_code_procs::int_code::{self, IntCodeComputer};

#[derive(Debug, Parser)]
struct Args {
    input_path: PathBuf,
    /// 1 for test mode, 2 for sensor boost mode
    #[arg(long, default_value_t = 1)]
    mode: i64,
}

fn main() -> Result<()> {
    int_code_procs::init_tracing();
    let args = Args::parse();
    let int_code = int_code::read_int_code(&args.input_path).with_context(|| {
        format!(
            "Failed to read intcode program from given file({}).",
            args.input_path.display()
        )
    })?;

    let mut computer = IntCodeComputer::new(&int_code);
    let outputs = computer
        .finish(&[args.mode])
        .with_context(|| format!("Failed to run BOOST program in mode({}).", args.mode))?;
    println!(
        "BOOST program in mode({}) takes {} steps to finish, get outputs({:?})",
        args.mode,
        computer.step_count(),
        outputs
    );

    Ok(())
}
