//! Network core image. The demo has no work for the secondary core, it only
//! has to be released from reset and idle.

#![no_std]
#![no_main]

// Interrupt vector table for the network core.
use nrf_pac as _;
use panic_probe as _;

#[cortex_m_rt::entry]
fn main() -> ! {
    loop {
        cortex_m::asm::wfi();
    }
}
