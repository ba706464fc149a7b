use std::{collections::HashMap, error, fmt::Display};

use int_enum::IntEnum;
use tracing::debug;

use crate::int_code::IntCodeComputer;

// Ceiling on turns a robot program may take, one turn per color reading
pub const MAX_ROBOT_TURNS: usize = 1_000_000;

#[derive(Debug)]
pub enum Error {
    ExecutionError(crate::Error),
    InvalidCommand(Vec<i64>),
    InvalidPaintColor(i64),
    InvalidTurnDirection(i64),
    RanTooLong(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ExecutionError(e) => write!(f, "Error({}) in execution of paint program", e),
            Error::InvalidCommand(c) => {
                write!(f, "Invalid command from outputs({:?}) of paint program", c)
            }
            Error::InvalidPaintColor(n) => write!(
                f,
                "Invalid paint color number({}) found in output of paint program",
                n
            ),
            Error::InvalidTurnDirection(n) => write!(
                f,
                "Invalid turn direction number({}) found in output of paint program",
                n
            ),
            Error::RanTooLong(n) => write!(
                f,
                "Paint program is still running after {} turns, aborting",
                n
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Panel {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    const CLOCKWISE: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    fn turn(self, clockwise: bool) -> Self {
        let quarters = if clockwise { 1 } else { 3 };
        Self::CLOCKWISE[(self as usize + quarters) % 4]
    }

    fn unit_vec(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Right => (1, 0),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
        }
    }
}

#[repr(u8)]
#[derive(IntEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    #[default]
    Black = 0,
    White = 1,
}

/// Hull painting robot. It starts at `(0, 0)` facing up, on an all-black
/// hull unless told otherwise.
#[derive(Debug, Clone)]
pub struct PaintRobot {
    dir: Direction,
    panel: Panel,
    paint_count: usize,
    panels: HashMap<Panel, Color>,
}

impl Default for PaintRobot {
    fn default() -> Self {
        Self::new()
    }
}

impl PaintRobot {
    pub fn new() -> Self {
        Self {
            dir: Direction::Up,
            panel: Panel { x: 0, y: 0 },
            paint_count: 0,
            panels: HashMap::new(),
        }
    }

    /// A robot whose starting panel is already painted `color`. That panel
    /// counts as painted.
    pub fn with_start_color(color: Color) -> Self {
        let mut robot = Self::new();
        robot.panels.insert(robot.panel, color);
        robot
    }

    /// Number of paint commands executed.
    pub fn paint_count(&self) -> usize {
        self.paint_count
    }

    /// Number of distinct panels painted at least once.
    pub fn painted_panels(&self) -> usize {
        self.panels.len()
    }

    pub fn color(&self, panel: Panel) -> Color {
        self.panels.get(&panel).copied().unwrap_or_default()
    }

    pub fn position(&self) -> Panel {
        self.panel
    }

    fn cur_color(&self) -> Color {
        self.color(self.panel)
    }

    // Paint the current panel, turn, then move forward one panel.
    fn exec(&mut self, command: &[i64]) -> Result<(), Error> {
        let &[color, turn] = command else {
            return Err(Error::InvalidCommand(Vec::from(command)));
        };
        let color = u8::try_from(color)
            .ok()
            .and_then(|n| Color::try_from(n).ok())
            .ok_or(Error::InvalidPaintColor(color))?;
        let clockwise = match turn {
            0 => false,
            1 => true,
            _ => return Err(Error::InvalidTurnDirection(turn)),
        };

        self.panels.insert(self.panel, color);
        self.paint_count += 1;
        self.dir = self.dir.turn(clockwise);
        let (dx, dy) = self.dir.unit_vec();
        self.panel.x += dx;
        self.panel.y += dy;
        Ok(())
    }
}

/// Drive `robot` with the painting program until it halts.
///
/// Each time the program waits, it gets the color under the robot. Every
/// output pair is `(color, turn)`, 0 turning left and 1 turning right.
/// Gives up after `max_turns` readings.
pub fn run_robot(
    int_code: &[i64],
    robot: &mut PaintRobot,
    max_turns: usize,
) -> Result<(), Error> {
    let mut computer = IntCodeComputer::new(int_code);
    for _ in 0..max_turns {
        let color = i64::from(u8::from(robot.cur_color()));
        let res = computer.resume(&[color]).map_err(Error::ExecutionError)?;
        if res.outputs.len() % 2 != 0 {
            return Err(Error::InvalidCommand(res.outputs));
        }
        for command in res.outputs.chunks_exact(2) {
            robot.exec(command)?;
        }

        if res.halted {
            debug!(
                paint_count = robot.paint_count,
                panels = robot.painted_panels(),
                "paint program halt"
            );
            return Ok(());
        }
    }

    Err(Error::RanTooLong(max_turns))
}

/// Number of panels the program paints at least once, starting on a panel of
/// `start_color`.
pub fn count_painted_panels(int_code: &[i64], start_color: Color) -> Result<usize, Error> {
    let mut robot = match start_color {
        Color::Black => PaintRobot::new(),
        Color::White => PaintRobot::with_start_color(Color::White),
    };
    run_robot(int_code, &mut robot, MAX_ROBOT_TURNS)?;
    Ok(robot.painted_panels())
}
