//! Start-up sequence contract shared with the board support code.
//!
//! Steps run in declaration order. Any failing step aborts start-up before the
//! power-mode loop is entered.

use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitStep {
    Board,
    Console,
    Button1,
    Button2,
    Indicator,
    Interrupts,
    SecondaryCore(u8),
}

impl fmt::Display for InitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitStep::Board => f.write_str("board"),
            InitStep::Console => f.write_str("console"),
            InitStep::Button1 => f.write_str("button 1"),
            InitStep::Button2 => f.write_str("button 2"),
            InitStep::Indicator => f.write_str("indicator"),
            InitStep::Interrupts => f.write_str("interrupts"),
            InitStep::SecondaryCore(n) => write!(f, "secondary core {}", n),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InitError {
    pub step: InitStep,
    /// Raw status reported by the failing step.
    pub code: u32,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} init failed with {:#010x}", self.step, self.code)
    }
}

/// Tracks progress through the start-up steps and enforces their order.
#[derive(Debug, Default)]
pub struct Startup {
    last: Option<InitStep>,
}

impl Startup {
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Records the outcome of `step`.
    ///
    /// A step that reports an error, or that runs before a step it depends on,
    /// fails the whole sequence.
    pub fn check<T, E>(&mut self, step: InitStep, result: Result<T, E>) -> Result<T, InitError>
    where
        E: Into<u32>,
    {
        if let Some(last) = self.last {
            if step <= last {
                error!("start-up step {} ran out of order", step);
                return Err(InitError {
                    step,
                    code: ORDER_VIOLATION,
                });
            }
        }
        match result {
            Ok(value) => {
                debug!("start-up step {} done", step);
                self.last = Some(step);
                Ok(value)
            }
            Err(e) => {
                let code = e.into();
                error!("start-up step {} failed: {}", step, code);
                Err(InitError { step, code })
            }
        }
    }

    pub fn last_step(&self) -> Option<InitStep> {
        self.last
    }
}

/// Code reported when a step runs after a later one.
pub const ORDER_VIOLATION: u32 = 0xF000_00FF;
