use anyhow::{Context, Result};
use clap::Parser;
use int_code_procs::{ascii, int_code, CLIArgs};

fn main() -> Result<()> {
    int_code_procs::init_tracing();
    let args = CLIArgs::parse();
    let int_code = int_code::read_int_code(&args.input_path).with_context(|| {
        format!(
            "Failed to read intcode program from given file({}).",
            args.input_path.display()
        )
    })?;

    let scaffold_map =
        ascii::scan_scaffold(&int_code).context("Failed to read scaffold map from camera.")?;
    println!(
        "There are {} intersections, the sum of the alignment parameters is {}.",
        scaffold_map.intersections().len(),
        scaffold_map.alignment_sum()
    );

    Ok(())
}
