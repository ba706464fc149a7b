use std::{error, fmt::Display};

use rayon::prelude::*;
use tracing::debug;

use crate::int_code::{run_to_completion, IntCodeComputer};

// Ceiling on passes around the feedback loop
pub const MAX_LOOP_PASSES: usize = 100_000;

pub struct AmpSettings {
    settings: Vec<Vec<i64>>,
}

impl From<&[i64]> for AmpSettings {
    fn from(init_setting: &[i64]) -> Self {
        AmpSettings {
            settings: Self::gen_permutation(init_setting),
        }
    }
}

impl AmpSettings {
    pub fn new(amp_count: usize) -> AmpSettings {
        let init_setting = (0..amp_count as i64).collect::<Vec<_>>();
        Self::from(init_setting.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &[i64]> {
        self.settings.iter().map(|v| v.as_slice())
    }

    pub fn as_slice(&self) -> &[Vec<i64>] {
        &self.settings
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    // Heap's algorithm, with a counter per position instead of recursion.
    fn gen_permutation(init_numbers: &[i64]) -> Vec<Vec<i64>> {
        let mut numbers = Vec::from(init_numbers);
        let mut counters = vec![0; numbers.len()];
        let mut permutations = vec![numbers.clone()];
        let mut pos = 1;
        while pos < numbers.len() {
            if counters[pos] < pos {
                let other = if pos % 2 == 0 { 0 } else { counters[pos] };
                numbers.swap(other, pos);
                permutations.push(numbers.clone());
                counters[pos] += 1;
                pos = 1;
            } else {
                counters[pos] = 0;
                pos += 1;
            }
        }

        permutations
    }
}

#[derive(Debug)]
pub enum Error {
    EmptySettings,
    ExecutionError(crate::Error, Vec<i64>),
    EmptyAmplifierOutput(usize, Vec<i64>),
    HaltedBeforeSignal(usize, Vec<i64>),
    LoopRanTooLong(usize, Vec<i64>),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptySettings => write!(f, "No phase setting given for amplifiers"),
            Error::ExecutionError(e, s) => write!(
                f,
                "Error({}) in execution of amplifiers with settings({:?})",
                e, s
            ),
            Error::EmptyAmplifierOutput(ind, s) => write!(
                f,
                "Amplifier #{} gives no output signal with settings({:?})",
                ind, s
            ),
            Error::HaltedBeforeSignal(ind, s) => write!(
                f,
                "Amplifier #{} halted before receiving any signal with settings({:?})",
                ind, s
            ),
            Error::LoopRanTooLong(passes, s) => write!(
                f,
                "Amplifier loop is still running after {} passes with settings({:?})",
                passes, s
            ),
        }
    }
}

impl error::Error for Error {}

/// Run amplifiers one after another, each to completion with input
/// `[phase, signal]`. The first amplifier gets signal 0.
pub fn amp_chain(int_code: &[i64], settings: &[i64]) -> Result<i64, Error> {
    if settings.is_empty() {
        return Err(Error::EmptySettings);
    }

    let mut signal = 0;
    for (i, &phase) in settings.iter().enumerate() {
        let outputs = run_to_completion(int_code, &[phase, signal])
            .map_err(|e| Error::ExecutionError(e, Vec::from(settings)))?;
        signal = outputs
            .first()
            .copied()
            .ok_or_else(|| Error::EmptyAmplifierOutput(i, Vec::from(settings)))?;
    }

    Ok(signal)
}

/// Run amplifiers in a feedback loop.
///
/// Every amplifier is primed with its phase. Then signal 0 goes into the
/// first amplifier, and each amplifier's first output goes into the next one,
/// the last feeding back to the first. It ends after a pass in which the last
/// amplifier halts, and its output is the result.
pub fn amp_loop(int_code: &[i64], settings: &[i64]) -> Result<i64, Error> {
    amp_loop_with_limit(int_code, settings, MAX_LOOP_PASSES)
}

/// [`amp_loop`] giving up after `max_passes` passes around the loop.
pub fn amp_loop_with_limit(
    int_code: &[i64],
    settings: &[i64],
    max_passes: usize,
) -> Result<i64, Error> {
    if settings.is_empty() {
        return Err(Error::EmptySettings);
    }

    let exe_err = |e: crate::Error| Error::ExecutionError(e, Vec::from(settings));
    let mut amps = Vec::with_capacity(settings.len());
    for (i, &phase) in settings.iter().enumerate() {
        let mut amp = IntCodeComputer::new(int_code);
        if amp.resume(&[phase]).map_err(exe_err)?.halted {
            return Err(Error::HaltedBeforeSignal(i, Vec::from(settings)));
        }
        amps.push(amp);
    }

    let mut signal = 0;
    for pass in 0..max_passes {
        let mut last_halted = false;
        for (i, amp) in amps.iter_mut().enumerate() {
            let res = amp.resume(&[signal]).map_err(exe_err)?;
            signal = res
                .outputs
                .first()
                .copied()
                .ok_or_else(|| Error::EmptyAmplifierOutput(i, Vec::from(settings)))?;
            last_halted = res.halted;
        }

        if last_halted {
            debug!(?settings, pass, signal, "amplifier loop halted");
            return Ok(signal);
        }
    }

    Err(Error::LoopRanTooLong(max_passes, Vec::from(settings)))
}

/// Try every permutation of `phases` with `run` and keep the one giving the
/// largest signal. Permutations run in parallel; each owns its computers.
pub fn max_signal<F>(int_code: &[i64], phases: &[i64], run: F) -> Result<(i64, Vec<i64>), Error>
where
    F: Fn(&[i64], &[i64]) -> Result<i64, Error> + Sync,
{
    let settings = AmpSettings::from(phases);
    let results = settings
        .as_slice()
        .par_iter()
        .map(|setting| run(int_code, setting.as_slice()).map(|signal| (signal, setting.clone())))
        .collect::<Result<Vec<_>, Error>>()?;

    // Ties go to the earliest permutation.
    results
        .into_iter()
        .fold(None, |best: Option<(i64, Vec<i64>)>, cur| match best {
            Some(b) if b.0 >= cur.0 => Some(b),
            _ => Some(cur),
        })
        .ok_or(Error::EmptySettings)
}

pub fn max_chain_signal(int_code: &[i64], phases: &[i64]) -> Result<(i64, Vec<i64>), Error> {
    max_signal(int_code, phases, amp_chain)
}

pub fn max_loop_signal(int_code: &[i64], phases: &[i64]) -> Result<(i64, Vec<i64>), Error> {
    max_signal(int_code, phases, amp_loop)
}
