use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::Error;

use super::{
    inst::{parse_cur_inst, ExecutionState},
    mem::Memory,
};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ProcessState {
    // Created, hasn't executed any instruction yet
    Ready,
    // Waiting on an input instruction with an empty input queue
    Block,
    Halt,
}

/// Outputs produced by one `resume` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeResult {
    pub outputs: Vec<i64>,
    pub halted: bool,
}

#[derive(Debug, Clone)]
struct Process {
    state: ProcessState,
    inst_p: usize,
    rel_base: i64,
    mem: Memory,
    input: VecDeque<i64>,
    output: Vec<i64>,
    step_count: usize,
}

impl Process {
    fn new(image: &[i64]) -> Self {
        Process {
            state: ProcessState::Ready,
            inst_p: 0,
            rel_base: 0,
            mem: Memory::from(image),
            input: VecDeque::new(),
            output: Vec::new(),
            step_count: 0,
        }
    }

    // Run until the process halts or blocks on input.
    fn run(&mut self) -> Result<(), Error> {
        loop {
            let inst = parse_cur_inst(self, self.inst_p)?;
            trace!(inst_p = self.inst_p, rel_base = self.rel_base, ?inst, "execute");
            match inst.execute(self) {
                Ok(()) => {
                    self.step_count += 1;
                    if self.state == ProcessState::Halt {
                        debug!(step_count = self.step_count, "process halt");
                        return Ok(());
                    }
                }
                Err(Error::NotEnoughInput) => {
                    self.state = ProcessState::Block;
                    debug!(
                        inst_p = self.inst_p,
                        outputs = self.output.len(),
                        "process blocked by requiring input"
                    );
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl ExecutionState for Process {
    fn read_mem(&self, ind: usize) -> i64 {
        self.mem.read(ind)
    }

    fn write_mem(&mut self, ind: usize, value: i64) {
        self.mem.write(ind, value)
    }

    fn snapshot(&self) -> Vec<i64> {
        self.mem.snapshot()
    }

    fn input(&mut self) -> Option<i64> {
        self.input.pop_front()
    }

    fn output(&mut self, value: i64) {
        self.output.push(value)
    }

    fn inst_p_mut(&mut self) -> &mut usize {
        &mut self.inst_p
    }

    fn rel_base(&self) -> i64 {
        self.rel_base
    }

    fn rel_base_mut(&mut self) -> &mut i64 {
        &mut self.rel_base
    }

    fn halt(&mut self) {
        self.state = ProcessState::Halt;
    }
}

/// Intcode computer running one process, which can be suspended and resumed.
///
/// Every call to [`resume`](IntCodeComputer::resume) runs the process until
/// it either halts or reaches an input instruction with no input left. In the
/// latter case the instruction pointer stays on that input instruction, so the
/// next call continues exactly there with the new inputs.
///
/// ```
/// use int_code_procs::int_code::IntCodeComputer;
///
/// // Echo two inputs, one at a time.
/// let mut computer = IntCodeComputer::new(&[3, 0, 4, 0, 3, 0, 4, 0, 99]);
/// let res = computer.resume(&[7]).unwrap();
/// assert_eq!((res.outputs, res.halted), (vec![7], false));
/// let res = computer.resume(&[8]).unwrap();
/// assert_eq!((res.outputs, res.halted), (vec![8], true));
/// ```
#[derive(Debug, Clone)]
pub struct IntCodeComputer {
    proc: Process,
}

impl IntCodeComputer {
    pub fn new(int_code: &[i64]) -> Self {
        Self {
            proc: Process::new(int_code),
        }
    }

    pub fn resume(&mut self, inputs: &[i64]) -> Result<ResumeResult, Error> {
        match self.proc.state {
            ProcessState::Halt => return Err(Error::ResumeHaltedProcess),
            ProcessState::Block if inputs.is_empty() => {
                return Err(Error::StarvedInput {
                    inst_p: self.proc.inst_p,
                })
            }
            _ => (),
        }

        self.proc.input.extend(inputs.iter().copied());
        self.proc.output.clear();
        self.proc.run()?;

        Ok(ResumeResult {
            outputs: std::mem::take(&mut self.proc.output),
            halted: self.is_halt(),
        })
    }

    /// Resume with all remaining inputs and require the process to halt.
    pub fn finish(&mut self, inputs: &[i64]) -> Result<Vec<i64>, Error> {
        let res = self.resume(inputs)?;
        if res.halted {
            Ok(res.outputs)
        } else {
            Err(Error::ExpectMoreInput {
                inst_p: self.proc.inst_p,
            })
        }
    }

    pub fn state(&self) -> ProcessState {
        self.proc.state
    }

    pub fn is_halt(&self) -> bool {
        self.proc.state == ProcessState::Halt
    }

    pub fn inst_p(&self) -> usize {
        self.proc.inst_p
    }

    pub fn rel_base(&self) -> i64 {
        self.proc.rel_base
    }

    pub fn step_count(&self) -> usize {
        self.proc.step_count
    }

    pub fn image(&self) -> &[i64] {
        self.proc.mem.image()
    }

    pub fn read_mem(&self, addr: usize) -> i64 {
        self.proc.mem.read(addr)
    }
}

/// Run `int_code` on a fresh computer with all inputs known up front.
pub fn run_to_completion(int_code: &[i64], inputs: &[i64]) -> Result<Vec<i64>, Error> {
    IntCodeComputer::new(int_code).finish(inputs)
}
