//! Debug console: the user-facing text printed over the board's UART.

use core::fmt;

/// Baud rate of the debug UART.
pub const BAUD_RATE: u32 = 115_200;

/// ANSI sequence clearing the terminal and homing the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[;H";

pub const BANNER: &str = "***********************************************************\r\n\
                          REGHC Pass Transistor Configuration\r\n\
                          ***********************************************************\r\n";

pub const LDO_PROMPT: &str = "\r\n## Internal Regulator (LDO) mode ##\r\n\
                              operation:\r\n\
                              - push USER_BTN1 to switch to Pass Transistor mode\r\n";

pub const PASS_TR_PROMPT: &str = "\r\n## Pass Transistor mode ##\r\n\
                                  operation:\r\n\
                                  - push USER_BTN1 to switch to Internal Regulator (LDO) mode\r\n\
                                  - push USER_BTN2 to transit to/from DeepSleep\r\n";

pub const GOING_TO_SLEEP: &str = "going to DeepSleep...\r\n";

pub const WOKE_UP: &str = "Woke up from DeepSleep mode!\r\n";

/// The console transport could not be brought up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConsoleError;

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("console initialization failed")
    }
}

/// Text output that can be torn down around DeepSleep.
///
/// Writes while the console is down are dropped.
pub trait Console: fmt::Write {
    fn init(&mut self) -> Result<(), ConsoleError>;

    /// Releases the transport so it does not hold the core out of DeepSleep.
    fn deinit(&mut self);
}
