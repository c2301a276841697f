//! Secure-world regulator service behind the call gate.
//!
//! On the nRF5340 the external regulation path is the VREGMAIN DC/DC
//! converter. Selecting it hands the core supply over from the LDO, clearing
//! it hands it back.

use embassy_nrf::pac;
use reghc_handover::command::{RegulatorMode, SromRequest, SwitchTarget};
use reghc_handover::{CallGate, SromStatus};

/// HCLK cycles per microsecond at the reset clock of 64 MHz.
const CYCLES_PER_US: u32 = 64;
/// Duration of one `wait_count` step.
const WAIT_STEP_US: u32 = 4;

#[derive(Default)]
pub struct SecureRegulators {
    /// `wait_count` of the last accepted configure request.
    wait_count: Option<u16>,
}

impl SecureRegulators {
    pub const fn new() -> Self {
        Self { wait_count: None }
    }

    fn dispatch(&mut self, data0: u32, data1: Option<u32>) -> SromStatus {
        let request = match SromRequest::decode(data0, data1) {
            Ok(request) => request,
            Err(status) => {
                defmt::warn!("rejected request {=u32:#x}: {}", data0, status);
                return status;
            }
        };
        match request {
            SromRequest::ConfigureRegulator { args, args2 } => {
                if args.mode() != RegulatorMode::Transistor {
                    return SromStatus::INVALID_ARGUMENT;
                }
                self.wait_count = Some(args2.wait_count().value());
                defmt::debug!("regulator configured, wait_count = {=u16}", args2.wait_count().value());
                SromStatus::SUCCEEDED
            }
            SromRequest::SwitchRegulator(args) => {
                if args.mode() != RegulatorMode::Transistor {
                    return SromStatus::INVALID_ARGUMENT;
                }
                let Some(wait_count) = self.wait_count else {
                    return SromStatus::NOT_CONFIGURED;
                };
                let external = args.target() == SwitchTarget::External;
                let dcdcen = pac::REGULATORS.vregmain().dcdcen();
                dcdcen.write(|w| w.set_dcdcen(external));
                if args.blocking() {
                    cortex_m::asm::delay(u32::from(wait_count) * WAIT_STEP_US * CYCLES_PER_US);
                }
                if dcdcen.read().dcdcen() != external {
                    return SromStatus::TRANSITION_TIMEOUT;
                }
                defmt::debug!("VREGMAIN DC/DC enabled = {=bool}", external);
                SromStatus::SUCCEEDED
            }
        }
    }
}

impl CallGate for SecureRegulators {
    fn call(&mut self, data0: u32) -> SromStatus {
        self.dispatch(data0, None)
    }

    fn call_2(&mut self, data0: u32, data1: u32) -> SromStatus {
        self.dispatch(data0, Some(data1))
    }
}
