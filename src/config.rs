/// Delays used by the power-mode loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Pause at the end of every loop pass. Also sets the LDO blink rate.
    pub loop_period_ms: u32,
    /// Settling time between configuring the external regulator and switching
    /// over to it.
    pub handover_settle_us: u32,
    /// Pause before retrying a refused DeepSleep entry.
    pub sleep_retry_ms: u32,
}

impl Timing {
    pub const DEFAULT: Self = Self {
        loop_period_ms: 1000,
        handover_settle_us: 1000,
        sleep_retry_ms: 100,
    };
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Priority of the button interrupts. Lowest level on an 8-level NVIC.
pub const BUTTON_INTERRUPT_PRIORITY: u8 = 7;
