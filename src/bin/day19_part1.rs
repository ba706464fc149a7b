use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use int_code_procs::{beam, int_code};

#[derive(Debug, Parser)]
struct Args {
    input_path: PathBuf,
    #[arg(long, default_value_t = 50)]
    width: i64,
    #[arg(long, default_value_t = 50)]
    height: i64,
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

    let count = beam::count_affected_points(&int_code, 0..args.width, 0..args.height)
        .context("Failed to scan area with drones.")?;
    println!(
        "There are {} point(s) been affected by tractor beam in area({} x {}).",
        count, args.width, args.height
    );

    Ok(())
}
