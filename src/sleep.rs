use crate::latch::ButtonLatch;
use crate::status::SleepError;

pub trait DeepSleep {
    fn enter_deep_sleep(&mut self) -> Result<(), SleepError>;
}

impl<T: DeepSleep + ?Sized> DeepSleep for &mut T {
    fn enter_deep_sleep(&mut self) -> Result<(), SleepError> {
        T::enter_deep_sleep(self)
    }
}

/// Keeps the core asleep until a button event is latched.
///
/// `wait` performs one sleep. It gets the wake condition and must evaluate it
/// with interrupts masked, returning `true` without sleeping if it holds.
/// Otherwise it sleeps until the next interrupt and returns `false`. Wake-ups
/// by other interrupts (timers, UART) send the core straight back to sleep.
///
/// Refuses with [`SleepError::WAKE_PENDING`] if a press is already latched.
/// The latched press is left in place for the caller.
pub fn sleep_until_pressed<W>(latch: &ButtonLatch, mut wait: W) -> Result<(), SleepError>
where
    W: FnMut(&dyn Fn() -> bool) -> bool,
{
    if latch.is_pending() {
        return Err(SleepError::WAKE_PENDING);
    }
    let pressed = || latch.is_pending();
    let mut other_wakeups: u32 = 0;
    while !wait(&pressed) {
        other_wakeups += 1;
    }
    // The last sleep, if any, was ended by the press itself.
    trace!(
        "woken by a button after {} other wake-up(s)",
        other_wakeups.saturating_sub(1)
    );
    Ok(())
}
