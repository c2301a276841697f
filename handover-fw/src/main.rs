#![no_std]
#![no_main]

#[macro_use]
mod pinout;

mod board;
mod buttons;
mod console;
mod gate;
mod sleep;

use defmt_rtt as _;
use embassy_executor::Spawner;
use panic_probe as _;
use reghc_handover::indicator::{ActiveLevel, Indicator};
use reghc_handover::{PowerModeMachine, Timing};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let board = match board::init() {
        Ok(board) => board,
        Err(e) => defmt::panic!("start-up failed: {}", e),
    };
    let _buttons = board.buttons;

    let mut machine = PowerModeMachine::new(
        gate::SecureRegulators::new(),
        Indicator::new(board.led, ActiveLevel::Low),
        sleep::CortexDeepSleep::new(board.core.SCB, &buttons::LATCH),
        board.console,
        embassy_time::Delay,
        Timing::DEFAULT,
    );
    machine.start();
    match machine.run(&buttons::LATCH).await {
        Ok(never) => match never {},
        Err(e) => defmt::panic!("{}", e),
    }
}
