use core::fmt;

/// Status word returned by the privileged call gate.
///
/// The gate reports raw 32-bit codes. Success is a single value, everything
/// else is a failure that the caller is expected to print verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SromStatus(u32);

impl SromStatus {
    pub const SUCCEEDED: Self = Self(0xA000_0000);
    pub const INVALID_OPCODE: Self = Self(0xF000_0001);
    pub const INVALID_ARGUMENT: Self = Self(0xF000_0002);
    /// Switch requested before the external regulator was configured.
    pub const NOT_CONFIGURED: Self = Self(0xF000_0003);
    pub const TRANSITION_TIMEOUT: Self = Self(0xF000_0004);

    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn is_success(self) -> bool {
        self.0 == Self::SUCCEEDED.0
    }
}

impl fmt::Display for SromStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SromStatus {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=u32:#x}", self.0)
    }
}

/// Non-success result of a deep-sleep attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SleepError(u32);

impl SleepError {
    /// A wake source was already pending, so the core would not have slept.
    pub const WAKE_PENDING: Self = Self(0xF000_0010);

    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SleepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SleepError {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=u32:#x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_succeeded_is_success() {
        assert!(SromStatus::SUCCEEDED.is_success());
        assert!(!SromStatus::INVALID_OPCODE.is_success());
        assert!(!SromStatus::from_raw(0).is_success());
    }

    #[test]
    fn prints_as_padded_hex() {
        assert_eq!(SromStatus::SUCCEEDED.to_string(), "0xa0000000");
        assert_eq!(SromStatus::from_raw(0x12).to_string(), "0x00000012");
        assert_eq!(SleepError::WAKE_PENDING.to_string(), "0xf0000010");
    }
}
