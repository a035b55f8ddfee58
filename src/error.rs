use crate::crc::CrcMismatch;

/// Errors returned by the SPS30 and HDC1050 drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "thiserror", derive(thiserror::Error))]
pub enum Error<E> {
    /// I2C bus error: no ACK, timeout or controller fault.
    #[cfg_attr(feature = "thiserror", error("I2C bus error"))]
    I2c(E),
    /// The SPS30 has no fresh measurement yet.
    #[cfg_attr(feature = "thiserror", error("measurement not ready"))]
    NotReady,
    /// A response word failed its CRC check.
    #[cfg_attr(feature = "thiserror", error("CRC mismatch in sensor response"))]
    Crc,
    /// `sense` was called on an SPS30 that was never started.
    #[cfg_attr(feature = "thiserror", error("measurement not started"))]
    NotStarted,
}

impl<E> Error<E> {
    /// `true` for conditions that clear up by themselves; the caller should skip
    /// this sampling interval and try again on the next one.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::NotReady | Error::Crc)
    }
}

impl<E> From<CrcMismatch> for Error<E> {
    fn from(mismatch: CrcMismatch) -> Self {
        #[cfg(feature = "log")]
        log::warn!(
            "CRC mismatch (expected {:#04x}, received {:#04x})",
            mismatch.expected,
            mismatch.actual
        );
        #[cfg(not(feature = "log"))]
        let _ = mismatch;
        Error::Crc
    }
}
