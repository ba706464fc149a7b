use anyhow::{Context, Result};
use clap::Parser;
use int_code_procs::{
    int_code,
    spring::{self, HullReport, SpringScript},
    CLIArgs,
};

// (!A || !B || (!C && (H || !F))) && D
const SCRIPT: &str = "\
NOT F J
OR H J
NOT C T
AND T J
NOT B T
OR T J
NOT A T
OR T J
AND D J
RUN
";

fn main() -> Result<()> {
    int_code_procs::init_tracing();
    let args = CLIArgs::parse();
    let int_code = int_code::read_int_code(&args.input_path).with_context(|| {
        format!(
            "Failed to read intcode program from given file({}).",
            args.input_path.display()
        )
    })?;

    let script = SCRIPT.parse::<SpringScript>()?;
    match spring::survey_hull(&int_code, &script)
        .context("Failed to execute hull detection program.")?
    {
        HullReport::Damage(d) => println!(
            "The springdroid went across the hull using given script, and found total {} unit(s) of damage.",
            d
        ),
        HullReport::Fell(log) => {
            anyhow::bail!("Failed to make springdroid going across hull, get log:\n{}", log)
        }
    }

    Ok(())
}
