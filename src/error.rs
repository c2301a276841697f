use core::fmt;

use crate::console::ConsoleError;
use crate::indicator::IndicatorError;
use crate::startup::InitError;
use crate::status::SromStatus;

/// Privileged request issued during a power-mode transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegulatorCall {
    Configure,
    SwitchToExternal,
    SwitchToInternal,
}

impl RegulatorCall {
    /// Name printed on the console when the call fails.
    pub fn name(self) -> &'static str {
        match self {
            RegulatorCall::Configure => "configure_regulator",
            RegulatorCall::SwitchToExternal | RegulatorCall::SwitchToInternal => {
                "switch_over_regulators"
            }
        }
    }
}

/// Conditions that stop the demo. None of them is recoverable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    Init(InitError),
    Regulator {
        call: RegulatorCall,
        status: SromStatus,
    },
    Console(ConsoleError),
    Indicator(IndicatorError),
}

impl From<InitError> for Error {
    fn from(e: InitError) -> Self {
        Error::Init(e)
    }
}

impl From<ConsoleError> for Error {
    fn from(e: ConsoleError) -> Self {
        Error::Console(e)
    }
}

impl From<IndicatorError> for Error {
    fn from(e: IndicatorError) -> Self {
        Error::Indicator(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Init(e) => fmt::Display::fmt(e, f),
            Error::Regulator { call, status } => write!(f, "{}() returns {}", call.name(), status),
            Error::Console(e) => fmt::Display::fmt(e, f),
            Error::Indicator(e) => fmt::Display::fmt(e, f),
        }
    }
}
