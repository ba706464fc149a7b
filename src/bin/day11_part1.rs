use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use int_code_procs::{
    int_code,
    paint::{self, Color, PaintRobot},
};

#[derive(Debug, Parser)]
struct Args {
    input_path: PathBuf,
    /// Start on a white panel instead of a black one
    #[arg(long)]
    start_white: bool,
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

    let mut robot = if args.start_white {
        PaintRobot::with_start_color(Color::White)
    } else {
        PaintRobot::new()
    };
    paint::run_robot(&int_code, &mut robot, paint::MAX_ROBOT_TURNS)
        .context("Failed to run painting program.")?;
    println!(
        "In whole painting process, robot has painted {} times and {} panels",
        robot.paint_count(),
        robot.painted_panels()
    );

    Ok(())
}
