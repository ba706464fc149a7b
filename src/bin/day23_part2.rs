use anyhow::{Context, Result};
use clap::Parser;
use int_code_procs::{
    int_code,
    nic::{Network, NAT_SEND_ADDR},
    NetworkArgs,
};

fn main() -> Result<()> {
    int_code_procs::init_tracing();
    let args = NetworkArgs::parse();
    let int_code = int_code::read_int_code(&args.input_path).with_context(|| {
        format!(
            "Failed to read intcode program from given file({}).",
            args.input_path.display()
        )
    })?;

    let mut network = Network::new(&int_code, args.config())?;
    let y = network
        .first_repeated_nat_y()
        .context("Failed to run the whole network to end.")?;
    println!(
        "NAT has sent y({}) to address {} twice after {} ticks.",
        y,
        NAT_SEND_ADDR,
        network.ticks()
    );

    Ok(())
}
