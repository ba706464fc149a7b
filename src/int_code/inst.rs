use int_enum::IntEnum;

use crate::Error;

// Seen by instructions while they execute
pub trait ExecutionState {
    fn read_mem(&self, ind: usize) -> i64;
    fn write_mem(&mut self, ind: usize, value: i64);
    fn snapshot(&self) -> Vec<i64>;
    fn input(&mut self) -> Option<i64>;
    fn output(&mut self, value: i64);
    fn inst_p_mut(&mut self) -> &mut usize;
    fn rel_base(&self) -> i64;
    fn rel_base_mut(&mut self) -> &mut i64;
    fn halt(&mut self);
}

#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, IntEnum, PartialEq, Eq)]
pub enum ParameterMode {
    #[default]
    Position = 0,
    Immediate = 1,
    Relative = 2,
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntEnum, Hash)]
pub enum Opcode {
    Add = 1,
    Multiply = 2,
    Input = 3,
    Output = 4,
    JumpIfTrue = 5,
    JumpIfFalse = 6,
    LessThan = 7,
    Equals = 8,
    AdjustRelativeBase = 9,
    Halt = 99,
}

impl Opcode {
    pub fn param_count(self) -> usize {
        match self {
            Opcode::Add | Opcode::Multiply | Opcode::LessThan | Opcode::Equals => 3,
            Opcode::JumpIfTrue | Opcode::JumpIfFalse => 2,
            Opcode::Input | Opcode::Output | Opcode::AdjustRelativeBase => 1,
            Opcode::Halt => 0,
        }
    }

    pub fn length(self) -> usize {
        self.param_count() + 1
    }
}

pub const MAX_PARAM_COUNT: usize = 3;

#[derive(Debug, Clone)]
pub struct Instruction {
    inst_p: usize,
    opcode: Opcode,
    params: [i64; MAX_PARAM_COUNT],
    param_modes: [ParameterMode; MAX_PARAM_COUNT],
}

/// Decode the instruction starting at `inst_p`.
///
/// Only the mode digits of parameter slots the opcode actually uses are
/// checked, so stray high digits on short instructions are ignored.
pub fn parse_cur_inst(exe_state: &dyn ExecutionState, inst_p: usize) -> Result<Instruction, Error> {
    let value = exe_state.read_mem(inst_p);
    let opcode = u8::try_from(value % 100)
        .ok()
        .and_then(|n| Opcode::try_from(n).ok())
        .ok_or_else(|| Error::UnsupportedOpcode {
            inst_p,
            opcode: value,
            image: exe_state.snapshot(),
        })?;

    let mut inst = Instruction {
        inst_p,
        opcode,
        params: [0; MAX_PARAM_COUNT],
        param_modes: [ParameterMode::default(); MAX_PARAM_COUNT],
    };
    let mut mode_digits = value / 100;
    for i in 0..opcode.param_count() {
        let digit = mode_digits % 10;
        inst.param_modes[i] = u8::try_from(digit)
            .ok()
            .and_then(|d| ParameterMode::try_from(d).ok())
            .ok_or(Error::InvalidMode {
                inst_p,
                mode: digit,
            })?;
        // Skip operation code
        inst.params[i] = exe_state.read_mem(inst_p + 1 + i);
        mode_digits /= 10;
    }

    Ok(inst)
}

impl Instruction {
    pub fn execute(&self, exe_state: &mut dyn ExecutionState) -> Result<(), Error> {
        match self.opcode {
            Opcode::Add => {
                let input0 = self.read_param(exe_state, 0)?;
                let input1 = self.read_param(exe_state, 1)?;
                self.write_param(exe_state, 2, input0.wrapping_add(input1))?;
            }
            Opcode::Multiply => {
                let input0 = self.read_param(exe_state, 0)?;
                let input1 = self.read_param(exe_state, 1)?;
                self.write_param(exe_state, 2, input0.wrapping_mul(input1))?;
            }
            Opcode::Input => {
                let dst = self.address(exe_state, 0)?;
                // Leave inst_p on this instruction, it runs again on resume.
                let input = exe_state.input().ok_or(Error::NotEnoughInput)?;
                exe_state.write_mem(dst, input);
            }
            Opcode::Output => {
                let value = self.read_param(exe_state, 0)?;
                exe_state.output(value);
            }
            Opcode::JumpIfTrue | Opcode::JumpIfFalse => {
                let condition = self.read_param(exe_state, 0)?;
                if (condition != 0) == (self.opcode == Opcode::JumpIfTrue) {
                    let target = self.read_param(exe_state, 1)?;
                    *exe_state.inst_p_mut() =
                        usize::try_from(target).map_err(|_| Error::OutOfBounds {
                            inst_p: self.inst_p,
                            addr: target,
                        })?;
                    return Ok(());
                }
            }
            Opcode::LessThan => {
                let input0 = self.read_param(exe_state, 0)?;
                let input1 = self.read_param(exe_state, 1)?;
                self.write_param(exe_state, 2, if input0 < input1 { 1 } else { 0 })?;
            }
            Opcode::Equals => {
                let input0 = self.read_param(exe_state, 0)?;
                let input1 = self.read_param(exe_state, 1)?;
                self.write_param(exe_state, 2, if input0 == input1 { 1 } else { 0 })?;
            }
            Opcode::AdjustRelativeBase => {
                let offset = self.read_param(exe_state, 0)?;
                let rel_base = exe_state.rel_base_mut();
                *rel_base = rel_base.wrapping_add(offset);
            }
            Opcode::Halt => {
                exe_state.halt();
                return Ok(());
            }
        }

        self.forward_inst_p(exe_state);
        Ok(())
    }

    fn forward_inst_p(&self, exe_state: &mut dyn ExecutionState) {
        *exe_state.inst_p_mut() += self.opcode.length();
    }

    fn address(&self, exe_state: &dyn ExecutionState, ind: usize) -> Result<usize, Error> {
        let param = self.params[ind];
        let addr = match self.param_modes[ind] {
            ParameterMode::Position => param,
            ParameterMode::Relative => exe_state.rel_base().saturating_add(param),
            ParameterMode::Immediate => {
                return Err(Error::ImmediateDestination {
                    inst_p: self.inst_p,
                    param,
                })
            }
        };

        usize::try_from(addr).map_err(|_| Error::OutOfBounds {
            inst_p: self.inst_p,
            addr,
        })
    }

    fn read_param(&self, exe_state: &dyn ExecutionState, ind: usize) -> Result<i64, Error> {
        match self.param_modes[ind] {
            ParameterMode::Immediate => Ok(self.params[ind]),
            _ => Ok(exe_state.read_mem(self.address(exe_state, ind)?)),
        }
    }

    fn write_param(
        &self,
        exe_state: &mut dyn ExecutionState,
        ind: usize,
        value: i64,
    ) -> Result<(), Error> {
        let dst = self.address(exe_state, ind)?;
        exe_state.write_mem(dst, value);
        Ok(())
    }
}
