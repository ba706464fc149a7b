use std::{error, fmt::Display, path::PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use nic::NetworkConfig;

pub mod amp;
pub mod ascii;
pub mod beam;
pub mod diag;
pub mod gravity;
pub mod int_code;
pub mod nic;
pub mod paint;
pub mod spring;

#[derive(Debug)]
pub enum Error {
    IOError(std::io::Error),
    EmptyError,
    ParseIntError(String),
    OutOfBounds { inst_p: usize, addr: i64 },
    InvalidMode { inst_p: usize, mode: i64 },
    ImmediateDestination { inst_p: usize, param: i64 },
    UnsupportedOpcode { inst_p: usize, opcode: i64, image: Vec<i64> },
    /// Raised by an input instruction on an empty queue. The run loop turns it
    /// into a blocked process, so `resume` never returns it.
    NotEnoughInput,
    StarvedInput { inst_p: usize },
    ResumeHaltedProcess,
    ExpectMoreInput { inst_p: usize },
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IOError(ioe) => write!(f, "I/O Error: {}", ioe),
            Error::EmptyError => write!(f, "Get empty code in file"),
            Error::ParseIntError(s) => write!(f, "Failed to parse integer from string({})", s),
            Error::OutOfBounds { inst_p, addr } => write!(
                f,
                "Negative address({}) resolved by instruction @ {}",
                addr, inst_p
            ),
            Error::InvalidMode { inst_p, mode } => write!(
                f,
                "Unknown parameter mode({}) found in instruction @ {}",
                mode, inst_p
            ),
            Error::ImmediateDestination { inst_p, param } => write!(
                f,
                "Instruction @ {} tries to write into immediate parameter({})",
                inst_p, param
            ),
            Error::UnsupportedOpcode {
                inst_p,
                opcode,
                image,
            } => write!(
                f,
                "Unsupported operation code({}) found @ {}, memory has {} cells",
                opcode,
                inst_p,
                image.len()
            ),
            Error::NotEnoughInput => write!(f, "Not enough input in execution, inputs exhausted"),
            Error::StarvedInput { inst_p } => write!(
                f,
                "Process blocked by input instruction @ {} is resumed without input",
                inst_p
            ),
            Error::ResumeHaltedProcess => write!(f, "Try to resume a halted process"),
            Error::ExpectMoreInput { inst_p } => write!(
                f,
                "Machine expects additional inputs, blocked by input instruction @ {}",
                inst_p
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Parser)]
pub struct NetworkArgs {
    pub input_path: PathBuf,
    /// Number of hosts, addressed from 0
    #[arg(long, default_value_t = 50)]
    pub host_n: usize,
    /// Address whose packets are reported instead of delivered
    #[arg(long, default_value_t = 255)]
    pub monitor_addr: usize,
    #[arg(long, default_value_t = 2000)]
    pub max_ticks: usize,
}

impl NetworkArgs {
    pub fn config(&self) -> NetworkConfig {
        NetworkConfig {
            host_n: self.host_n,
            monitor_addr: self.monitor_addr,
            max_ticks: self.max_ticks,
        }
    }
}

/// Install a formatting subscriber, filtered by `RUST_LOG` (`warn` if unset).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
