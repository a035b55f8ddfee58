/// Recommended per-transaction timeout for the platform's I2C controller [ms].
///
/// The drivers never read this value; embedded-hal has no timeout setting, so it
/// is up to the HAL setup code to apply it (e.g. `i2c_set_timeout` on ESP-IDF).
pub const BUS_TIMEOUT_MS: u32 = 1000;

/// Settle time after the SPS30 start-measurement command [ms].
pub const SPS30_START_SETTLE_MS: u32 = 100;

/// Conversion time the HDC1050 needs after its register pointer is written [ms].
pub const HDC1050_CONVERSION_MS: u32 = 50;

/// SPS30 measurement output format argument: big-endian IEEE-754 floats.
pub(crate) const SPS30_OUTPUT_FORMAT_FLOAT: [u8; 2] = [0x03, 0x00];

/// HDC1050 temperature register; the humidity register follows it on read-back.
pub(crate) const HDC1050_REG_TEMPERATURE: u8 = 0x00;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    /// Enter measurement mode. Takes the output format word.
    StartMeasurement,
    /// Query whether a new measurement can be read.
    ReadDataReadyFlag,
    /// Fetch the latest measurement record.
    ReadMeasuredValues,
}

impl Command {
    /// Opcode and the time to wait after sending it, in milliseconds.
    pub(crate) fn as_tuple(self) -> (u16, u32) {
        match self {
            Self::StartMeasurement => (0x0010, SPS30_START_SETTLE_MS),
            Self::ReadDataReadyFlag => (0x0202, 0),
            Self::ReadMeasuredValues => (0x0300, 0),
        }
    }
}
