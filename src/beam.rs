use std::{error, fmt::Display, ops::Range};

use rayon::prelude::*;

use crate::int_code::run_to_completion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

#[derive(Debug)]
pub enum Error {
    ExecutionError(crate::Error, Point),
    EmptyDroneResult(Point),
    InvalidDroneResult(Point, i64),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ExecutionError(e, p) => write!(
                f,
                "Get error({}) in execution of drone program for point({:?})",
                e, p
            ),
            Error::EmptyDroneResult(p) => write!(f, "Get empty drone result for point({:?})", p),
            Error::InvalidDroneResult(p, v) => write!(
                f,
                "Get invalid drone result({}) for point({:?}), expect 0 or 1",
                v, p
            ),
        }
    }
}

impl error::Error for Error {}

/// Send a drone to `p` with a fresh run of the program, and report whether
/// the beam pulls it.
pub fn is_pulled(int_code: &[i64], p: Point) -> Result<bool, Error> {
    let outputs =
        run_to_completion(int_code, &[p.x, p.y]).map_err(|e| Error::ExecutionError(e, p))?;
    match outputs.first() {
        Some(0) => Ok(false),
        Some(1) => Ok(true),
        Some(&v) => Err(Error::InvalidDroneResult(p, v)),
        None => Err(Error::EmptyDroneResult(p)),
    }
}

/// Number of points in the area pulled by the beam. Points are checked in
/// parallel, each with its own computer.
pub fn count_affected_points(
    int_code: &[i64],
    x_range: Range<i64>,
    y_range: Range<i64>,
) -> Result<usize, Error> {
    let points = y_range
        .flat_map(|y| x_range.clone().map(move |x| Point { x, y }))
        .collect::<Vec<_>>();
    let pulled = points
        .par_iter()
        .map(|&p| is_pulled(int_code, p))
        .collect::<Result<Vec<_>, Error>>()?;

    Ok(pulled.into_iter().filter(|&b| b).count())
}
