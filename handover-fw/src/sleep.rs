use cortex_m::peripheral::SCB;
use reghc_handover::{sleep_until_pressed, ButtonLatch, DeepSleep, SleepError};

/// System ON sleep with SLEEPDEEP set, held until a button edge is latched.
///
/// RTC1 keeps waking the core for the embassy time driver. Those wake-ups are
/// serviced and the core goes back to sleep.
pub struct CortexDeepSleep {
    scb: SCB,
    latch: &'static ButtonLatch,
}

impl CortexDeepSleep {
    pub fn new(scb: SCB, latch: &'static ButtonLatch) -> Self {
        Self { scb, latch }
    }
}

impl DeepSleep for CortexDeepSleep {
    fn enter_deep_sleep(&mut self) -> Result<(), SleepError> {
        self.scb.set_sleepdeep();
        let result = sleep_until_pressed(self.latch, |pressed| {
            // With PRIMASK set a pending interrupt still ends WFI, and its
            // handler runs once the critical section is left.
            cortex_m::interrupt::free(|_| {
                if pressed() {
                    return true;
                }
                cortex_m::asm::dsb();
                cortex_m::asm::wfi();
                false
            })
        });
        self.scb.clear_sleepdeep();
        result
    }
}
