use core::fmt;

use embassy_nrf::gpio::AnyPin;
use embassy_nrf::peripherals::SERIAL0;
use embassy_nrf::uarte::{self, Baudrate, UarteTx};
use embassy_nrf::{bind_interrupts, Peripheral};
use reghc_handover::console::{self, Console, ConsoleError};

bind_interrupts!(struct Irqs {
    SERIAL0 => uarte::InterruptHandler<SERIAL0>;
});

/// Transmit-only UARTE console.
///
/// The driver is dropped on `deinit`, which disables the peripheral and lets
/// the core reach DeepSleep, and rebuilt on `init`.
pub struct UartConsole {
    uarte: SERIAL0,
    txd: AnyPin,
    tx: Option<UarteTx<'static, SERIAL0>>,
}

impl UartConsole {
    pub fn new(uarte: SERIAL0, txd: AnyPin) -> Self {
        Self {
            uarte,
            txd,
            tx: None,
        }
    }
}

fn baudrate(rate: u32) -> Option<Baudrate> {
    Some(match rate {
        9_600 => Baudrate::BAUD9600,
        38_400 => Baudrate::BAUD38400,
        115_200 => Baudrate::BAUD115200,
        1_000_000 => Baudrate::BAUD1M,
        _ => return None,
    })
}

impl Console for UartConsole {
    fn init(&mut self) -> Result<(), ConsoleError> {
        if self.tx.is_some() {
            return Ok(());
        }
        let mut config = uarte::Config::default();
        config.baudrate = baudrate(console::BAUD_RATE).ok_or(ConsoleError)?;
        // SAFETY: `tx` is None here, so no other driver owns the peripheral or the pin.
        let (uarte, txd) = unsafe { (self.uarte.clone_unchecked(), self.txd.clone_unchecked()) };
        self.tx = Some(UarteTx::new(uarte, Irqs, txd, config));
        Ok(())
    }

    fn deinit(&mut self) {
        self.tx = None;
    }
}

impl fmt::Write for UartConsole {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let tx = self.tx.as_mut().ok_or(fmt::Error)?;
        if s.is_empty() {
            return Ok(());
        }
        tx.blocking_write(s.as_bytes()).map_err(|_| fmt::Error)
    }
}
