//! Power-mode state machine driven by the two user buttons.
//!
//! ```text
//!            BTN1: configure + switch(ext)
//!   +-----+ ------------------------------> +--------+
//!   | LDO |                                 | PassTr | --BTN2--> DeepSleep and back
//!   +-----+ <------------------------------ +--------+
//!             BTN1: switch(int)
//! ```
//!
//! The indicator blinks at the loop period while the LDO supplies the core
//! domain and stays lit while the pass transistor does. It is off for the whole
//! DeepSleep episode.

use core::convert::Infallible;

use embedded_hal::digital::StatefulOutputPin;
use embedded_hal_async::delay::DelayNs;

use crate::command::{
    CONFIGURE_REGULATOR_ARG1, CONFIGURE_REGULATOR_ARG2, SWITCH_REGULATOR_ARG_TARGET_EXT,
    SWITCH_REGULATOR_ARG_TARGET_INT,
};
use crate::config::Timing;
use crate::console::{self, Console};
use crate::error::{Error, RegulatorCall};
use crate::gate::{configure_regulator, switch_over_regulators, CallGate};
use crate::indicator::Indicator;
use crate::latch::{ButtonEvents, ButtonLatch};
use crate::sleep::DeepSleep;
use crate::status::SromStatus;

/// Regulator currently supplying the protected core domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    InternalRegulator,
    PassTransistor,
}

impl PowerState {
    pub fn other(self) -> Self {
        match self {
            PowerState::InternalRegulator => PowerState::PassTransistor,
            PowerState::PassTransistor => PowerState::InternalRegulator,
        }
    }

    fn prompt(self) -> &'static str {
        match self {
            PowerState::InternalRegulator => console::LDO_PROMPT,
            PowerState::PassTransistor => console::PASS_TR_PROMPT,
        }
    }
}

pub struct PowerModeMachine<G, P, S, C, D> {
    gate: G,
    indicator: Indicator<P>,
    sleep: S,
    console: C,
    delay: D,
    timing: Timing,
    state: PowerState,
    /// State whose prompt was printed last.
    announced: Option<PowerState>,
    /// Set when the core came back from DeepSleep during the current pass.
    woke: bool,
}

impl<G, P, S, C, D> PowerModeMachine<G, P, S, C, D>
where
    G: CallGate,
    P: StatefulOutputPin,
    S: DeepSleep,
    C: Console,
    D: DelayNs,
{
    /// The core domain must be supplied by the LDO when this is called.
    pub fn new(
        gate: G,
        indicator: Indicator<P>,
        sleep: S,
        console: C,
        delay: D,
        timing: Timing,
    ) -> Self {
        Self {
            gate,
            indicator,
            sleep,
            console,
            delay,
            timing,
            state: PowerState::InternalRegulator,
            announced: None,
            woke: false,
        }
    }

    pub fn state(&self) -> PowerState {
        self.state
    }

    /// Clears the terminal and prints the demo banner.
    pub fn start(&mut self) {
        self.print(console::CLEAR_SCREEN);
        self.print(console::BANNER);
    }

    /// Polls the buttons forever. Only returns if a transition fails.
    pub async fn run(&mut self, latch: &ButtonLatch) -> Result<Infallible, Error> {
        loop {
            self.poll(latch).await?;
            self.delay.delay_ms(self.timing.loop_period_ms).await;
        }
    }

    /// Consumes the latched events and runs one pass on them.
    ///
    /// The press that woke the core from DeepSleep is latched while the pass
    /// is still running and must not start another sleep, so it is dropped.
    pub async fn poll(&mut self, latch: &ButtonLatch) -> Result<(), Error> {
        let events = latch.take_and_clear();
        self.step(events).await?;
        if core::mem::take(&mut self.woke) {
            let dropped = latch.take_and_clear();
            debug!("dropping events latched across DeepSleep: {:?}", dropped);
        }
        Ok(())
    }

    /// One pass of the loop. Button 1 wins if both buttons were pressed.
    pub async fn step(&mut self, events: ButtonEvents) -> Result<(), Error> {
        trace!("step in {:?}: {:?}", self.state, events);
        if self.announced != Some(self.state) {
            self.print(self.state.prompt());
            self.announced = Some(self.state);
        }

        match self.state {
            PowerState::InternalRegulator => {
                if events.button1 {
                    self.hand_over_to_pass_transistor().await?;
                } else {
                    self.indicator.toggle()?;
                }
            }
            PowerState::PassTransistor => {
                if events.button1 {
                    self.hand_back_to_ldo()?;
                } else if events.button2 {
                    self.deep_sleep_cycle().await?;
                }
            }
        }
        Ok(())
    }

    async fn hand_over_to_pass_transistor(&mut self) -> Result<(), Error> {
        info!("handing core supply over to the pass transistor");
        let status = configure_regulator(
            &mut self.gate,
            &CONFIGURE_REGULATOR_ARG1,
            &CONFIGURE_REGULATOR_ARG2,
        );
        self.check(RegulatorCall::Configure, status)?;

        self.delay.delay_us(self.timing.handover_settle_us).await;

        let status = switch_over_regulators(&mut self.gate, &SWITCH_REGULATOR_ARG_TARGET_EXT);
        self.check(RegulatorCall::SwitchToExternal, status)?;

        self.indicator.on()?;
        self.state = PowerState::PassTransistor;
        Ok(())
    }

    fn hand_back_to_ldo(&mut self) -> Result<(), Error> {
        info!("handing core supply back to the LDO");
        let status = switch_over_regulators(&mut self.gate, &SWITCH_REGULATOR_ARG_TARGET_INT);
        self.check(RegulatorCall::SwitchToInternal, status)?;
        // The indicator keeps its last level; blinking resumes on the next pass.
        self.state = PowerState::InternalRegulator;
        Ok(())
    }

    async fn deep_sleep_cycle(&mut self) -> Result<(), Error> {
        self.print(console::GOING_TO_SLEEP);
        self.indicator.off()?;

        let mut attempts: u32 = 0;
        loop {
            attempts += 1;
            // A live UART keeps the core out of DeepSleep
            self.console.deinit();
            match self.sleep.enter_deep_sleep() {
                Ok(()) => break,
                Err(e) => {
                    self.console.init()?;
                    warn!("DeepSleep entry refused ({}), attempt {}", e, attempts);
                    let _ = write!(self.console, "enter_deep_sleep() returns {}\r\n", e);
                    self.delay.delay_ms(self.timing.sleep_retry_ms).await;
                }
            }
        }

        self.console.init()?;
        info!("woke up after {} DeepSleep attempt(s)", attempts);
        self.print(console::WOKE_UP);
        self.indicator.on()?;
        self.woke = true;
        Ok(())
    }

    fn check(&mut self, call: RegulatorCall, status: SromStatus) -> Result<(), Error> {
        if status.is_success() {
            return Ok(());
        }
        error!("{:?} failed: {}", call, status);
        let _ = write!(self.console, "{}() returns {}\r\n", call.name(), status);
        Err(Error::Regulator { call, status })
    }

    fn print(&mut self, s: &str) {
        let _ = self.console.write_str(s);
    }
}
