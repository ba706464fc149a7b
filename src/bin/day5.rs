use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use int_code_procs::{diag, int_code};

#[derive(Debug, Parser)]
struct Args {
    input_path: PathBuf,
    /// ID of the system to test, 1 for air conditioner, 5 for thermal radiator controller
    #[arg(long, default_value_t = 1)]
    system_id: i64,
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

    let code = diag::run_diagnostic(&int_code, args.system_id)
        .with_context(|| format!("Diagnostic for system({}) failed.", args.system_id))?;
    println!(
        "Diagnostic program for system({}) gives code {}.",
        args.system_id, code
    );

    Ok(())
}
