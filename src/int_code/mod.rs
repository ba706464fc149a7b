pub mod com;
mod inst;
pub mod mem;

use std::{fs, path::Path};

use crate::Error;

pub use com::{run_to_completion, IntCodeComputer, ProcessState, ResumeResult};

pub fn read_int_code<P>(path: P) -> Result<Vec<i64>, Error>
where
    P: AsRef<Path>,
{
    let text = fs::read_to_string(path).map_err(Error::IOError)?;
    parse_int_code(&text)
}

pub fn parse_int_code(text: &str) -> Result<Vec<i64>, Error> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::EmptyError);
    }

    text.split(',')
        .map(|s| {
            let s = s.trim();
            str::parse::<i64>(s).map_err(|_| Error::ParseIntError(s.to_string()))
        })
        .collect::<Result<Vec<_>, Error>>()
}
