use embedded_hal::{delay::DelayNs, i2c::I2c};
use sensirion_i2c::i2c;

use crate::{
    commands::{Command, SPS30_OUTPUT_FORMAT_FLOAT},
    crc::{self, MAX_COMMAND_FRAME},
    error::Error,
    types::{Sps30Data, SPS30_RECORD_LEN},
};

/// SPS30 7-bit I2C address (write address 0xD2).
pub const SPS30_I2C_ADDRESS: u8 = 0x69;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Measuring,
}

/// Sensirion SPS30 particulate matter sensor.
///
/// [`start`](Self::start) must succeed once before [`sense`](Self::sense) is
/// called; the sensor then stays in measurement mode for as long as it is
/// powered.
#[derive(Debug)]
pub struct Sps30<I2C, D> {
    i2c: I2C,
    delay: D,
    state: State,
}

impl<I2C, D, E> Sps30<I2C, D>
where
    I2C: I2c<Error = E>,
    D: DelayNs,
{
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self {
            i2c,
            delay,
            state: State::Idle,
        }
    }

    /// Gives the bus handle back.
    pub fn release(self) -> I2C {
        self.i2c
    }

    pub fn is_measuring(&self) -> bool {
        self.state == State::Measuring
    }

    /// Puts the sensor in measurement mode with float output.
    pub fn start(&mut self) -> Result<(), Error<E>> {
        self.write_command(Command::StartMeasurement, &SPS30_OUTPUT_FORMAT_FLOAT)?;
        self.state = State::Measuring;
        #[cfg(feature = "log")]
        log::debug!("SPS30 measurement started");
        Ok(())
    }

    /// Checks whether a new measurement is available.
    pub fn data_ready(&mut self) -> Result<bool, Error<E>> {
        self.ensure_measuring()?;
        let mut flag = [0u8; 2];
        self.read_command(Command::ReadDataReadyFlag, &mut [0u8; 3], &mut flag)?;
        Ok(flag[1] == 1)
    }

    /// Reads one measurement.
    ///
    /// Fails with [`Error::NotReady`] when the sensor has not produced a new
    /// sample since the last read; the sensor refreshes about once a second.
    pub fn sense(&mut self) -> Result<Sps30Data, Error<E>> {
        if !self.data_ready()? {
            #[cfg(feature = "log")]
            log::warn!("SPS30 data is not ready");
            return Err(Error::NotReady);
        }

        let mut record = [0u8; SPS30_RECORD_LEN];
        self.read_command(
            Command::ReadMeasuredValues,
            &mut [0u8; SPS30_RECORD_LEN / 2 * 3],
            &mut record,
        )?;
        let data = Sps30Data::from_be_bytes(&record);

        #[cfg(feature = "log")]
        log::debug!("SPS30 {:?}", data);
        Ok(data)
    }

    fn ensure_measuring(&self) -> Result<(), Error<E>> {
        match self.state {
            State::Measuring => Ok(()),
            State::Idle => Err(Error::NotStarted),
        }
    }

    fn write_command(&mut self, command: Command, payload: &[u8]) -> Result<(), Error<E>> {
        let (opcode, delay) = command.as_tuple();
        if payload.is_empty() {
            i2c::write_command_u16(&mut self.i2c, SPS30_I2C_ADDRESS, opcode)
                .map_err(Error::I2c)?;
        } else {
            let mut buf = [0u8; MAX_COMMAND_FRAME];
            let frame = crc::frame_command(opcode, payload, &mut buf);
            self.i2c
                .write(SPS30_I2C_ADDRESS, frame)
                .map_err(Error::I2c)?;
        }
        if delay > 0 {
            self.delay.delay_ms(delay);
        }
        Ok(())
    }

    /// Sends `command`, reads `frames` back and leaves the verified data in `data`.
    fn read_command(
        &mut self,
        command: Command,
        frames: &mut [u8],
        data: &mut [u8],
    ) -> Result<(), Error<E>> {
        self.write_command(command, &[])?;
        self.i2c
            .read(SPS30_I2C_ADDRESS, frames)
            .map_err(Error::I2c)?;
        crc::unpack_words(frames, data)?;
        Ok(())
    }
}
