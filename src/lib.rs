//! REGHC pass transistor handover
//!
//! Board independent half of a demo that moves the supply of the protected core
//! domain from the internal linear regulator (LDO) to an external pass
//! transistor and back, and parks the core in DeepSleep, all under control of
//! two push buttons:
//! - button events latched from interrupt context
//! - power-mode state machine and its console prompts
//! - regulator requests for the privileged call gate
//! - start-up sequence contract for the board support code

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod command;
pub mod config;
pub mod console;
pub mod error;
pub mod gate;
pub mod indicator;
pub mod latch;
pub mod machine;
pub mod sleep;
pub mod startup;
pub mod status;

#[cfg(test)]
mod mock;

pub use config::Timing;
pub use error::{Error, RegulatorCall};
pub use gate::CallGate;
pub use latch::{ButtonEvents, ButtonLatch, EventSlot};
pub use machine::{PowerModeMachine, PowerState};
pub use sleep::{sleep_until_pressed, DeepSleep};
pub use status::{SleepError, SromStatus};
