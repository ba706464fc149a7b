use std::{error, fmt::Display};

use crate::int_code::run_to_completion;

#[derive(Debug)]
pub enum Error {
    ExecutionError(crate::Error),
    NoOutput,
    FailedCheck { ind: usize, value: i64 },
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ExecutionError(e) => write!(f, "Error({}) in execution of diagnostic program", e),
            Error::NoOutput => write!(f, "Diagnostic program gives no output"),
            Error::FailedCheck { ind, value } => write!(
                f,
                "Diagnostic check #{} failed, reports {} instead of 0",
                ind, value
            ),
        }
    }
}

impl error::Error for Error {}

/// Run the diagnostic program for `system_id`. All outputs except the last
/// are check results which must be 0; the last one is the diagnostic code.
pub fn run_diagnostic(int_code: &[i64], system_id: i64) -> Result<i64, Error> {
    let outputs = run_to_completion(int_code, &[system_id]).map_err(Error::ExecutionError)?;
    let (&code, checks) = outputs.split_last().ok_or(Error::NoOutput)?;
    if let Some((ind, &value)) = checks.iter().enumerate().find(|&(_, &v)| v != 0) {
        return Err(Error::FailedCheck { ind, value });
    }

    Ok(code)
}
