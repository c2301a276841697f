//! Argument blocks for the regulator requests of the privileged call gate.
//!
//! Every request is one or two packed 32-bit words. The opcode always sits in
//! the top byte of the first word, the remaining fields are request specific.

use arbitrary_int::{u10, u3, u5};
use bitbybit::{bitenum, bitfield};

use crate::status::SromStatus;

#[bitenum(u8, exhaustive = false)]
#[derive(Debug, PartialEq, Eq)]
pub enum Opcode {
    ConfigureRegulator = 0x15,
    SwitchRegulator = 0x16,
}

/// Which external regulation scheme is attached to the REGHC controller.
#[bitenum(u1, exhaustive = true)]
#[derive(Debug, PartialEq, Eq)]
pub enum RegulatorMode {
    Pmic = 0,
    Transistor = 1,
}

#[bitenum(u1, exhaustive = true)]
#[derive(Debug, PartialEq, Eq)]
pub enum Polarity {
    ActiveLow = 0,
    ActiveHigh = 1,
}

#[bitenum(u1, exhaustive = true)]
#[derive(Debug, PartialEq, Eq)]
pub enum SwitchTarget {
    /// Internal linear regulator (LDO).
    Internal = 0,
    /// External pass transistor or PMIC.
    External = 1,
}

/// First word of every request. Only used to dispatch on the opcode.
#[bitfield(u32, default = 0)]
#[derive(Debug, PartialEq, Eq)]
pub struct RequestHeader {
    #[bits(24..=31, rw)]
    pub opcode: Option<Opcode>,
}

#[bitfield(u32, default = 0)]
#[derive(Debug, PartialEq, Eq)]
pub struct ConfigureRegulatorArgs {
    #[bits(0..=0, rw)]
    pub mode: RegulatorMode,
    #[bits(1..=1, rw)]
    pub enable_polarity: Polarity,
    #[bits(2..=2, rw)]
    pub status_abnormal_polarity: Polarity,
    /// Keep the external regulator in normal mode during DeepSleep.
    #[bit(3, rw)]
    pub deep_sleep: bool,
    /// Keep the internal active linear regulator enabled once the external
    /// one is up.
    #[bit(4, rw)]
    pub use_lin_reg: bool,
    #[bit(5, rw)]
    pub use_radj: bool,
    /// Set when the device does not generate VADJ for the feedback loop.
    #[bit(6, rw)]
    pub vadj_disabled: bool,
    #[bits(8..=12, rw)]
    pub voltage_adjust: u5,
    #[bits(16..=18, rw)]
    pub radjust: u3,
    #[bits(24..=31, rw)]
    pub opcode: Option<Opcode>,
}

#[bitfield(u32, default = 0)]
#[derive(Debug, PartialEq, Eq)]
pub struct ConfigureRegulatorArgs2 {
    /// Extra settling time, in 4 us steps, after the external regulator
    /// reports OK and before the internal one is disabled.
    #[bits(0..=9, rw)]
    pub wait_count: u10,
}

#[bitfield(u32, default = 0)]
#[derive(Debug, PartialEq, Eq)]
pub struct SwitchRegulatorArgs {
    #[bits(0..=0, rw)]
    pub mode: RegulatorMode,
    #[bits(1..=1, rw)]
    pub target: SwitchTarget,
    /// Block the caller until the transition completes.
    #[bit(2, rw)]
    pub blocking: bool,
    #[bits(24..=31, rw)]
    pub opcode: Option<Opcode>,
}

pub const CONFIGURE_REGULATOR_ARG1: ConfigureRegulatorArgs = ConfigureRegulatorArgs::DEFAULT
    .with_mode(RegulatorMode::Transistor)
    .with_enable_polarity(Polarity::ActiveHigh)
    .with_status_abnormal_polarity(Polarity::ActiveLow)
    .with_deep_sleep(false)
    .with_use_lin_reg(false)
    .with_use_radj(false)
    .with_vadj_disabled(true)
    // VADJ trim is fixed to 0x10 when VADJ is not generated
    .with_voltage_adjust(u5::new(0x10))
    .with_radjust(u3::new(0))
    .with_opcode(Opcode::ConfigureRegulator);

pub const CONFIGURE_REGULATOR_ARG2: ConfigureRegulatorArgs2 =
    ConfigureRegulatorArgs2::DEFAULT.with_wait_count(u10::new(0x1FF));

pub const SWITCH_REGULATOR_ARG_TARGET_EXT: SwitchRegulatorArgs = SwitchRegulatorArgs::DEFAULT
    .with_mode(RegulatorMode::Transistor)
    .with_target(SwitchTarget::External)
    .with_blocking(true)
    .with_opcode(Opcode::SwitchRegulator);

pub const SWITCH_REGULATOR_ARG_TARGET_INT: SwitchRegulatorArgs = SwitchRegulatorArgs::DEFAULT
    .with_mode(RegulatorMode::Transistor)
    .with_target(SwitchTarget::Internal)
    .with_blocking(true)
    .with_opcode(Opcode::SwitchRegulator);

/// A request as seen by a call gate implementation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SromRequest {
    ConfigureRegulator {
        args: ConfigureRegulatorArgs,
        args2: ConfigureRegulatorArgs2,
    },
    SwitchRegulator(SwitchRegulatorArgs),
}

impl SromRequest {
    /// Rebuilds a typed request from the raw words handed to the gate.
    ///
    /// Unknown opcodes and missing second words are reported with the status
    /// the gate should return to its caller.
    pub fn decode(data0: u32, data1: Option<u32>) -> Result<Self, SromStatus> {
        match RequestHeader::new_with_raw_value(data0).opcode() {
            Ok(Opcode::ConfigureRegulator) => {
                let data1 = data1.ok_or(SromStatus::INVALID_ARGUMENT)?;
                Ok(Self::ConfigureRegulator {
                    args: ConfigureRegulatorArgs::new_with_raw_value(data0),
                    args2: ConfigureRegulatorArgs2::new_with_raw_value(data1),
                })
            }
            Ok(Opcode::SwitchRegulator) => Ok(Self::SwitchRegulator(
                SwitchRegulatorArgs::new_with_raw_value(data0),
            )),
            Err(_) => Err(SromStatus::INVALID_OPCODE),
        }
    }

    pub fn opcode(&self) -> Opcode {
        match self {
            Self::ConfigureRegulator { .. } => Opcode::ConfigureRegulator,
            Self::SwitchRegulator(_) => Opcode::SwitchRegulator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configure_block_packs_demo_values() {
        let raw = CONFIGURE_REGULATOR_ARG1.raw_value();
        assert_eq!(raw >> 24, 0x15);
        assert_eq!(raw & 0b1, 1, "transistor mode");
        assert_eq!((raw >> 1) & 0b1, 1, "enable polarity high");
        assert_eq!((raw >> 2) & 0b1, 0, "status abnormal polarity low");
        assert_eq!((raw >> 3) & 0b111, 0);
        assert_eq!((raw >> 6) & 0b1, 1, "vadj disabled");
        assert_eq!((raw >> 8) & 0x1F, 0x10);
        assert_eq!((raw >> 16) & 0b111, 0);
        assert_eq!(CONFIGURE_REGULATOR_ARG2.raw_value(), 0x1FF);
    }

    #[test]
    fn switch_blocks_differ_only_in_target() {
        let ext = SWITCH_REGULATOR_ARG_TARGET_EXT;
        let int = SWITCH_REGULATOR_ARG_TARGET_INT;
        assert_eq!(ext.target(), SwitchTarget::External);
        assert_eq!(int.target(), SwitchTarget::Internal);
        assert_eq!(ext.raw_value() ^ int.raw_value(), 1 << 1);
        assert!(ext.blocking());
        assert_eq!(ext.mode(), RegulatorMode::Transistor);
    }

    #[test]
    fn decode_recovers_configure_request() {
        let request = SromRequest::decode(
            CONFIGURE_REGULATOR_ARG1.raw_value(),
            Some(CONFIGURE_REGULATOR_ARG2.raw_value()),
        )
        .unwrap();
        match request {
            SromRequest::ConfigureRegulator { args, args2 } => {
                assert_eq!(args.mode(), RegulatorMode::Transistor);
                assert_eq!(args.voltage_adjust().value(), 0x10);
                assert_eq!(args2.wait_count().value(), 0x1FF);
            }
            other => panic!("unexpected request {:?}", other),
        }
        assert_eq!(request.opcode(), Opcode::ConfigureRegulator);
    }

    #[test]
    fn decode_recovers_switch_request() {
        let request = SromRequest::decode(SWITCH_REGULATOR_ARG_TARGET_INT.raw_value(), None);
        assert_eq!(
            request,
            Ok(SromRequest::SwitchRegulator(SWITCH_REGULATOR_ARG_TARGET_INT))
        );
    }

    #[test]
    fn decode_rejects_bad_words() {
        assert_eq!(
            SromRequest::decode(0x7F00_0000, None),
            Err(SromStatus::INVALID_OPCODE)
        );
        assert_eq!(
            SromRequest::decode(CONFIGURE_REGULATOR_ARG1.raw_value(), None),
            Err(SromStatus::INVALID_ARGUMENT)
        );
    }
}
