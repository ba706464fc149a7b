use std::{error, fmt::Display, str::FromStr};

use crate::int_code::run_to_completion;

#[derive(Debug)]
pub enum Error {
    ExecutionError(crate::Error),
    NonAsciiInput(char),
    InvalidAscii(i64),
    EmptyMap,
    InconsistentMapRow(usize, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ExecutionError(e) => write!(f, "Error({}) in execution of ASCII program", e),
            Error::NonAsciiInput(c) => write!(f, "Can't feed non-ASCII character({:?})", c),
            Error::InvalidAscii(v) => write!(f, "Output value({}) is not an ASCII code", v),
            Error::EmptyMap => write!(f, "Scaffold map has no row"),
            Error::InconsistentMapRow(this_col_n, last_col_n) => write!(
                f,
                "Found inconsistent row in scaffold map, this row has {} columns, the last one has {} columns",
                this_col_n, last_col_n
            ),
        }
    }
}

impl error::Error for Error {}

pub fn encode_ascii(text: &str) -> Result<Vec<i64>, Error> {
    text.chars()
        .map(|c| {
            if c.is_ascii() {
                Ok(i64::from(u32::from(c)))
            } else {
                Err(Error::NonAsciiInput(c))
            }
        })
        .collect()
}

pub fn decode_ascii(values: &[i64]) -> Result<String, Error> {
    values
        .iter()
        .map(|&v| {
            u8::try_from(v)
                .ok()
                .filter(u8::is_ascii)
                .map(char::from)
                .ok_or(Error::InvalidAscii(v))
        })
        .collect()
}

/// Camera view of the scaffold, `#` marking scaffold.
#[derive(Debug, Clone)]
pub struct ScaffoldMap {
    width: usize,
    height: usize,
    scaffold: Vec<bool>,
}

impl FromStr for ScaffoldMap {
    type Err = Error;

    // Blank lines, like the trailing ones after the camera picture, are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut width = None;
        let mut height = 0;
        let mut scaffold = Vec::new();
        for line in s.lines().filter(|l| !l.is_empty()) {
            let col_n = line.chars().count();
            match width {
                None => width = Some(col_n),
                Some(w) if w != col_n => return Err(Error::InconsistentMapRow(col_n, w)),
                _ => (),
            }
            scaffold.extend(line.chars().map(|c| c == '#'));
            height += 1;
        }

        Ok(Self {
            width: width.ok_or(Error::EmptyMap)?,
            height,
            scaffold,
        })
    }
}

impl ScaffoldMap {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_scaffold(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.scaffold[y * self.width + x]
    }

    /// Scaffold cells whose four neighbours are all scaffold, as `(x, y)`.
    pub fn intersections(&self) -> Vec<(usize, usize)> {
        let mut found = Vec::new();
        for y in 1..self.height.saturating_sub(1) {
            for x in 1..self.width.saturating_sub(1) {
                if self.is_scaffold(x, y)
                    && self.is_scaffold(x, y - 1)
                    && self.is_scaffold(x, y + 1)
                    && self.is_scaffold(x - 1, y)
                    && self.is_scaffold(x + 1, y)
                {
                    found.push((x, y));
                }
            }
        }

        found
    }

    pub fn alignment_sum(&self) -> usize {
        self.intersections().iter().map(|&(x, y)| x * y).sum()
    }
}

/// Run the camera program without input and read its picture.
pub fn scan_scaffold(int_code: &[i64]) -> Result<ScaffoldMap, Error> {
    let outputs = run_to_completion(int_code, &[]).map_err(Error::ExecutionError)?;
    decode_ascii(&outputs)?.parse()
}
