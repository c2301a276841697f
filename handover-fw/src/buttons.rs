//! User buttons on raw GPIOTE IN channels.
//!
//! The edge events are latched straight from the GPIOTE interrupt, so a press
//! that wakes the core is already posted when the sleeping code resumes.

use embassy_nrf::gpio::{AnyPin, Input, Pin as _, Port, Pull};
use embassy_nrf::interrupt;
use embassy_nrf::interrupt::{InterruptExt, Priority};
use embassy_nrf::pac::{self, gpiote::vals};
use reghc_handover::ButtonLatch;

pub static LATCH: ButtonLatch = ButtonLatch::new();

pub const BUTTON1_CHANNEL: usize = 0;
pub const BUTTON2_CHANNEL: usize = 1;

/// GPIOTE0 stayed disabled after enabling it in the NVIC.
const IRQ_NOT_ENABLED: u32 = 0xF000_0103;

/// Routes falling edges of `pin` to GPIOTE IN `channel`.
///
/// The returned input holds the pull-up and has to live as long as the button
/// is in use.
pub fn init_button(pin: AnyPin, channel: usize) -> Input<'static> {
    let port1 = matches!(pin.port(), Port::Port1);
    let psel = pin.pin();
    let input = Input::new(pin, Pull::Up);

    let gpiote = pac::GPIOTE0;
    gpiote.config(channel).write(|w| {
        w.set_mode(vals::Mode::EVENT);
        w.set_polarity(vals::Polarity::HI_TO_LO);
        w.set_port(port1);
        w.set_psel(psel);
    });
    gpiote.events_in(channel).write_value(0);
    gpiote.intenset().write(|w| w.set_in(channel, true));
    defmt::debug!("button on P{=u8}.{=u8} -> IN[{=usize}]", port1 as u8, psel, channel);
    input
}

pub fn enable_interrupts(priority: Priority) -> Result<(), u32> {
    interrupt::GPIOTE0.set_priority(priority);
    interrupt::GPIOTE0.unpend();
    unsafe { interrupt::GPIOTE0.enable() };
    if interrupt::GPIOTE0.is_enabled() {
        Ok(())
    } else {
        Err(IRQ_NOT_ENABLED)
    }
}

#[interrupt]
fn GPIOTE0() {
    let gpiote = pac::GPIOTE0;
    for (channel, slot) in [
        (BUTTON1_CHANNEL, LATCH.button1()),
        (BUTTON2_CHANNEL, LATCH.button2()),
    ] {
        let event = gpiote.events_in(channel);
        if event.read() != 0 {
            event.write_value(0);
            slot.post();
        }
    }
}
