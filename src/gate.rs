//! Privileged call gate and the two regulator requests issued through it.

use crate::command::{ConfigureRegulatorArgs, ConfigureRegulatorArgs2, SwitchRegulatorArgs};
use crate::status::SromStatus;

/// Restricted entry point into the firmware that owns the regulators.
///
/// Requests are raw argument words; the gate blocks until the request has been
/// serviced and returns its status word.
pub trait CallGate {
    fn call(&mut self, data0: u32) -> SromStatus;

    fn call_2(&mut self, data0: u32, data1: u32) -> SromStatus;
}

impl<T: CallGate + ?Sized> CallGate for &mut T {
    fn call(&mut self, data0: u32) -> SromStatus {
        T::call(self, data0)
    }

    fn call_2(&mut self, data0: u32, data1: u32) -> SromStatus {
        T::call_2(self, data0, data1)
    }
}

/// Configures the high current regulator (REGHC) controller.
///
/// Must be issued once before the first switch over to the external regulator.
pub fn configure_regulator<G: CallGate>(
    gate: &mut G,
    arg1: &ConfigureRegulatorArgs,
    arg2: &ConfigureRegulatorArgs2,
) -> SromStatus {
    gate.call_2(arg1.raw_value(), arg2.raw_value())
}

/// Switches the core domain supply between the LDO and the external regulator.
pub fn switch_over_regulators<G: CallGate>(gate: &mut G, arg: &SwitchRegulatorArgs) -> SromStatus {
    gate.call(arg.raw_value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::*;

    #[derive(Default)]
    struct LastCall {
        words: Option<(u32, Option<u32>)>,
    }

    impl CallGate for LastCall {
        fn call(&mut self, data0: u32) -> SromStatus {
            self.words = Some((data0, None));
            SromStatus::SUCCEEDED
        }

        fn call_2(&mut self, data0: u32, data1: u32) -> SromStatus {
            self.words = Some((data0, Some(data1)));
            SromStatus::NOT_CONFIGURED
        }
    }

    #[test]
    fn configure_forwards_both_words() {
        let mut gate = LastCall::default();
        let status = configure_regulator(
            &mut gate,
            &CONFIGURE_REGULATOR_ARG1,
            &CONFIGURE_REGULATOR_ARG2,
        );
        assert_eq!(status, SromStatus::NOT_CONFIGURED);
        assert_eq!(
            gate.words,
            Some((
                CONFIGURE_REGULATOR_ARG1.raw_value(),
                Some(CONFIGURE_REGULATOR_ARG2.raw_value())
            ))
        );
    }

    #[test]
    fn switch_forwards_single_word_through_reference() {
        let mut gate = LastCall::default();
        let status = switch_over_regulators(&mut &mut gate, &SWITCH_REGULATOR_ARG_TARGET_EXT);
        assert!(status.is_success());
        assert_eq!(
            gate.words,
            Some((SWITCH_REGULATOR_ARG_TARGET_EXT.raw_value(), None))
        );
    }
}
