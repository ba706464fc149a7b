use std::{error, fmt::Display, str::FromStr};

use tracing::debug;

use crate::{
    ascii::{self, decode_ascii, encode_ascii},
    int_code::run_to_completion,
};

// Springdroid memory holds at most this many instructions
pub const MAX_INSTRUCTIONS: usize = 15;

#[derive(Debug)]
pub enum Error {
    ExecutionError(crate::Error),
    AsciiError(ascii::Error),
    InvalidInstruction(String),
    ReadOnlyRegister(Register),
    SensorOutOfRange(Register),
    MissingMode,
    TooManyInstructions(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ExecutionError(e) => {
                write!(f, "Error({}) in execution of hull detection program", e)
            }
            Error::AsciiError(e) => write!(f, "{}", e),
            Error::InvalidInstruction(s) => write!(f, "Invalid springscript instruction({})", s),
            Error::ReadOnlyRegister(r) => write!(f, "Register {} can't be written", r),
            Error::SensorOutOfRange(r) => {
                write!(f, "Sensor {} is only available in RUN mode", r)
            }
            Error::MissingMode => write!(f, "Springscript doesn't end with WALK or RUN"),
            Error::TooManyInstructions(n) => write!(
                f,
                "Springscript has {} instructions, at most {} fit",
                n, MAX_INSTRUCTIONS
            ),
        }
    }
}

impl error::Error for Error {}

/// Ground sensors `A` to `I` (1 to 9 tiles ahead), temporary `T` and jump `J`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    T,
    J,
}

impl Register {
    const ALL: [Register; 11] = [
        Register::A,
        Register::B,
        Register::C,
        Register::D,
        Register::E,
        Register::F,
        Register::G,
        Register::H,
        Register::I,
        Register::T,
        Register::J,
    ];

    fn name(self) -> char {
        b"ABCDEFGHITJ"[self as usize] as char
    }

    fn is_writable(self) -> bool {
        matches!(self, Register::T | Register::J)
    }

    fn is_far_sensor(self) -> bool {
        matches!(
            self,
            Register::E | Register::F | Register::G | Register::H | Register::I
        )
    }
}

impl Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Register {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Register::ALL
            .iter()
            .copied()
            .find(|r| s.len() == 1 && s.starts_with(r.name()))
            .ok_or_else(|| Error::InvalidInstruction(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    And,
    Or,
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpringInstruction {
    op: Op,
    src: Register,
    dst: Register,
}

impl Display for SpringInstruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let op = match self.op {
            Op::And => "AND",
            Op::Or => "OR",
            Op::Not => "NOT",
        };
        write!(f, "{} {} {}", op, self.src, self.dst)
    }
}

impl FromStr for SpringInstruction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidInstruction(s.to_string());
        let words = s.split_whitespace().collect::<Vec<_>>();
        let &[op, src, dst] = words.as_slice() else {
            return Err(invalid());
        };
        let op = match op {
            "AND" => Op::And,
            "OR" => Op::Or,
            "NOT" => Op::Not,
            _ => return Err(invalid()),
        };

        Self::new(op, src.parse()?, dst.parse()?)
    }
}

impl SpringInstruction {
    pub fn new(op: Op, src: Register, dst: Register) -> Result<Self, Error> {
        if !dst.is_writable() {
            return Err(Error::ReadOnlyRegister(dst));
        }

        Ok(Self { op, src, dst })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectMode {
    Walk,
    Run,
}

impl Display for DetectMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetectMode::Walk => write!(f, "WALK"),
            DetectMode::Run => write!(f, "RUN"),
        }
    }
}

/// Springscript program: instructions, then the mode which starts the droid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpringScript {
    insts: Vec<SpringInstruction>,
    mode: DetectMode,
}

impl FromStr for SpringScript {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>();
        let mode = match lines.pop() {
            Some("WALK") => DetectMode::Walk,
            Some("RUN") => DetectMode::Run,
            _ => return Err(Error::MissingMode),
        };
        let insts = lines
            .into_iter()
            .map(str::parse::<SpringInstruction>)
            .collect::<Result<Vec<_>, Error>>()?;

        Self::new(insts, mode)
    }
}

impl Display for SpringScript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for inst in &self.insts {
            writeln!(f, "{}", inst)?;
        }
        writeln!(f, "{}", self.mode)
    }
}

impl SpringScript {
    pub fn new(insts: Vec<SpringInstruction>, mode: DetectMode) -> Result<Self, Error> {
        if insts.len() > MAX_INSTRUCTIONS {
            return Err(Error::TooManyInstructions(insts.len()));
        }
        if mode == DetectMode::Walk {
            if let Some(inst) = insts.iter().find(|i| i.src.is_far_sensor()) {
                return Err(Error::SensorOutOfRange(inst.src));
            }
        }

        Ok(Self { insts, mode })
    }

    pub fn mode(&self) -> DetectMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.insts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.insts.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HullReport {
    /// The droid made it across, reporting this much hull damage.
    Damage(i64),
    /// The droid fell; the program's ASCII log shows where.
    Fell(String),
}

/// Feed `script` to the hull detection program. A final output above the
/// ASCII range is the damage; otherwise the whole output is the failure log.
pub fn survey_hull(int_code: &[i64], script: &SpringScript) -> Result<HullReport, Error> {
    let inputs = encode_ascii(&script.to_string()).map_err(Error::AsciiError)?;
    let outputs = run_to_completion(int_code, &inputs).map_err(Error::ExecutionError)?;
    match outputs.last() {
        Some(&damage) if damage > 255 => {
            debug!(damage, mode = %script.mode(), "droid crossed the hull");
            Ok(HullReport::Damage(damage))
        }
        _ => Ok(HullReport::Fell(
            decode_ascii(&outputs).map_err(Error::AsciiError)?,
        )),
    }
}
