use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use int_code_procs::{gravity, int_code};

#[derive(Debug, Parser)]
struct Args {
    input_path: PathBuf,
    /// Value expected at position 0 after the program halts
    #[arg(long, default_value_t = 19690720)]
    goal: i64,
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

    let found = gravity::find_noun_verb(&int_code, args.goal)
        .with_context(|| format!("Failed to search noun and verb for output {}.", args.goal))?;
    match found {
        Some((noun, verb)) => println!(
            "Noun({}) and verb({}) produce output {}, answer is {}.",
            noun,
            verb,
            args.goal,
            100 * noun + verb
        ),
        None => anyhow::bail!("No noun and verb produce output {}.", args.goal),
    }

    Ok(())
}
