use embassy_nrf::config::Config;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pin as _};
use embassy_nrf::interrupt::Priority;
use embassy_nrf::pac;
use embassy_nrf::pac::reset::vals::Forceoff;
use reghc_handover::config::BUTTON_INTERRUPT_PRIORITY;
use reghc_handover::console::Console as _;
use reghc_handover::startup::{InitError, InitStep, Startup};

use crate::buttons;
use crate::console::UartConsole;

/// HCLK after reset, the clock tree is left alone.
const HCLK_HZ: u32 = 64_000_000;

const PERIPHERALS_TAKEN: u32 = 0xF000_0101;
const CONSOLE_DOWN: u32 = 0xF000_0102;
const NETWORK_CORE_HELD: u32 = 0xF000_0104;

pub struct Board {
    pub core: cortex_m::Peripherals,
    pub console: UartConsole,
    /// Keep the pull-ups of the buttons alive.
    pub buttons: [Input<'static>; 2],
    pub led: Output<'static>,
}

fn button_priority() -> Priority {
    match BUTTON_INTERRUPT_PRIORITY {
        0 => Priority::P0,
        1 => Priority::P1,
        2 => Priority::P2,
        3 => Priority::P3,
        4 => Priority::P4,
        5 => Priority::P5,
        6 => Priority::P6,
        _ => Priority::P7,
    }
}

/// nRF5340 erratum 161 latch, held while RESET.NETWORK.FORCEOFF is toggled.
const ERRATUM_161: *mut u32 = 0x5000_5618 as *mut u32;

/// FORCEOFF levels applied to the network core, each followed by a settle time
/// in microseconds. The release-hold-release pulse brings the core up cleanly.
const NETWORK_RELEASE_SEQUENCE: [(Forceoff, u32); 3] = [
    (Forceoff::RELEASE, 5),
    (Forceoff::HOLD, 1),
    (Forceoff::RELEASE, 0),
];

fn release_network_core(delay: &mut cortex_m::delay::Delay) -> Result<(), u32> {
    let forceoff = pac::RESET.network().forceoff();
    unsafe { ERRATUM_161.write_volatile(1) };
    for (level, settle_us) in NETWORK_RELEASE_SEQUENCE {
        forceoff.write(|w| w.set_forceoff(level));
        delay.delay_us(settle_us);
    }
    unsafe { ERRATUM_161.write_volatile(0) };

    match forceoff.read().forceoff() {
        Forceoff::RELEASE => Ok(()),
        _ => Err(NETWORK_CORE_HELD),
    }
}

/// Brings the board up in the order the power-mode loop relies on.
pub fn init() -> Result<Board, InitError> {
    let mut startup = Startup::new();

    let mut config = Config::default();
    // The core domain starts on the LDO, the handover enables the DC/DC.
    config.dcdc.regmain = false;
    let p = embassy_nrf::init(config);
    let mut core = startup.check(
        InitStep::Board,
        cortex_m::Peripherals::take().ok_or(PERIPHERALS_TAKEN),
    )?;

    let mut console = UartConsole::new(pinout!(p.console_uarte), pinout!(p.console_txd).degrade());
    startup.check(InitStep::Console, console.init().map_err(|_| CONSOLE_DOWN))?;

    let button1 = startup.check(
        InitStep::Button1,
        Ok::<_, u32>(buttons::init_button(
            pinout!(p.btn1).degrade(),
            buttons::BUTTON1_CHANNEL,
        )),
    )?;
    let button2 = startup.check(
        InitStep::Button2,
        Ok::<_, u32>(buttons::init_button(
            pinout!(p.btn2).degrade(),
            buttons::BUTTON2_CHANNEL,
        )),
    )?;

    // LED1 is active low, start dark
    let led = startup.check(
        InitStep::Indicator,
        Ok::<_, u32>(Output::new(pinout!(p.led1), Level::High, OutputDrive::Standard)),
    )?;

    startup.check(InitStep::Interrupts, buttons::enable_interrupts(button_priority()))?;

    let mut delay = cortex_m::delay::Delay::new(core.SYST, HCLK_HZ);
    let released = release_network_core(&mut delay);
    core.SYST = delay.free();
    startup.check(InitStep::SecondaryCore(0), released)?;

    Ok(Board {
        core,
        console,
        buttons: [button1, button2],
        led,
    })
}
