use anyhow::{Context, Result};
use clap::Parser;
use int_code_procs::{int_code, nic::Network, NetworkArgs};

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
    let packet = network
        .first_packet_to_monitor()
        .context("Failed to run the whole network to end.")?;
    println!(
        "The first packet sent to address({}) is {}, its y is {}.",
        args.monitor_addr,
        packet,
        packet.y()
    );

    Ok(())
}
