//! Button events posted from interrupt context and consumed by the main loop.

use core::sync::atomic::{AtomicBool, Ordering};

/// Single-consumer slot with a capacity of one event.
///
/// Posting while an event is still pending is a no-op, so presses between two
/// loop passes coalesce into one.
#[derive(Debug)]
pub struct EventSlot {
    pending: AtomicBool,
}

impl EventSlot {
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
        }
    }

    /// Producer side. Safe to call from an interrupt handler.
    pub fn post(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Consumer side. Returns whether an event was pending and clears it.
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::Acquire)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Relaxed)
    }
}

impl Default for EventSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Events observed during one loop pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvents {
    pub button1: bool,
    pub button2: bool,
}

impl ButtonEvents {
    pub const NONE: Self = Self {
        button1: false,
        button2: false,
    };
    pub const BUTTON1: Self = Self {
        button1: true,
        button2: false,
    };
    pub const BUTTON2: Self = Self {
        button1: false,
        button2: true,
    };

    pub fn any(self) -> bool {
        self.button1 || self.button2
    }
}

/// The two user buttons of the board.
#[derive(Debug)]
pub struct ButtonLatch {
    button1: EventSlot,
    button2: EventSlot,
}

impl ButtonLatch {
    pub const fn new() -> Self {
        Self {
            button1: EventSlot::new(),
            button2: EventSlot::new(),
        }
    }

    pub fn button1(&self) -> &EventSlot {
        &self.button1
    }

    pub fn button2(&self) -> &EventSlot {
        &self.button2
    }

    /// Whether either button has an event waiting. Does not consume it.
    pub fn is_pending(&self) -> bool {
        self.button1.is_pending() || self.button2.is_pending()
    }

    /// Consumes whatever was posted since the previous call.
    pub fn take_and_clear(&self) -> ButtonEvents {
        ButtonEvents {
            button1: self.button1.take(),
            button2: self.button2.take(),
        }
    }
}

impl Default for ButtonLatch {
    fn default() -> Self {
        Self::new()
    }
}
