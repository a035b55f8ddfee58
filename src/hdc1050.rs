use embedded_hal::{delay::DelayNs, i2c::I2c};
use sensirion_i2c::i2c;

use crate::{
    commands::{HDC1050_CONVERSION_MS, HDC1050_REG_TEMPERATURE},
    error::Error,
    types::{Hdc1050Data, Hdc1050DataRaw},
};

/// HDC1050 7-bit I2C address (write address 0x80).
pub const HDC1050_I2C_ADDRESS: u8 = 0x40;

/// TI HDC1050 temperature and humidity sensor.
#[derive(Debug)]
pub struct Hdc1050<I2C, D> {
    i2c: I2C,
    delay: D,
}

impl<I2C, D, E> Hdc1050<I2C, D>
where
    I2C: I2c<Error = E>,
    D: DelayNs,
{
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self { i2c, delay }
    }

    /// Gives the bus handle back.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Triggers a temperature and humidity conversion and returns the raw registers.
    pub fn sense_raw(&mut self) -> Result<Hdc1050DataRaw, Error<E>> {
        i2c::write_command_u8(&mut self.i2c, HDC1050_I2C_ADDRESS, HDC1050_REG_TEMPERATURE)
            .map_err(Error::I2c)?;
        self.delay.delay_ms(HDC1050_CONVERSION_MS);

        let mut buf = [0u8; 4];
        self.i2c
            .read(HDC1050_I2C_ADDRESS, &mut buf)
            .map_err(Error::I2c)?;
        Ok(Hdc1050DataRaw::from_be_bytes(buf))
    }

    /// Measures temperature [°C] and relative humidity [%RH].
    pub fn sense(&mut self) -> Result<Hdc1050Data, Error<E>> {
        let data = Hdc1050Data::from(self.sense_raw()?);
        #[cfg(feature = "log")]
        log::debug!("HDC1050 {:?}", data);
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction};

    use crate::test_util::{Event, EventLog, LoggedBus, LoggedDelay, MS};

    #[test]
    fn sense_writes_pointer_then_reads_back() {
        let expectations = [
            Transaction::write(HDC1050_I2C_ADDRESS, vec![0x00]),
            Transaction::read(HDC1050_I2C_ADDRESS, vec![0x60, 0x00, 0x80, 0x00]),
        ];
        let mut sensor = Hdc1050::new(I2cMock::new(&expectations), NoopDelay);

        let data = sensor.sense().unwrap();
        // 0x6000 / 65536 * 165 - 40 = 21.875
        assert_eq!(data.temperature_celsius, 21.875);
        assert_eq!(data.relative_humidity_percent, 50.0);
        sensor.release().done();
    }

    #[test]
    fn conversion_wait_sits_between_write_and_read() {
        let expectations = [
            Transaction::write(HDC1050_I2C_ADDRESS, vec![0x00]),
            Transaction::read(HDC1050_I2C_ADDRESS, vec![0x60, 0x00, 0x80, 0x00]),
        ];
        let log = EventLog::default();
        let bus = LoggedBus::new(I2cMock::new(&expectations), log.clone());
        let mut sensor = Hdc1050::new(bus, LoggedDelay(log.clone()));

        sensor.sense().unwrap();
        assert_eq!(
            *log.borrow(),
            [Event::Write, Event::DelayNs(50 * MS), Event::Read]
        );
        sensor.release().mock.done();
    }

    #[test]
    fn sense_raw_keeps_register_values() {
        let expectations = [
            Transaction::write(HDC1050_I2C_ADDRESS, vec![0x00]),
            Transaction::read(HDC1050_I2C_ADDRESS, vec![0xff, 0xff, 0x00, 0x00]),
        ];
        let mut sensor = Hdc1050::new(I2cMock::new(&expectations), NoopDelay);

        assert_eq!(
            sensor.sense_raw(),
            Ok(Hdc1050DataRaw {
                temperature: 0xffff,
                humidity: 0x0000,
            })
        );
        sensor.release().done();
    }

    #[test]
    fn write_error_skips_read() {
        let expectations =
            [Transaction::write(HDC1050_I2C_ADDRESS, vec![0x00]).with_error(ErrorKind::Other)];
        let mut sensor = Hdc1050::new(I2cMock::new(&expectations), NoopDelay);

        assert_eq!(sensor.sense(), Err(Error::I2c(ErrorKind::Other)));
        sensor.release().done();
    }

    #[test]
    fn read_error_is_propagated() {
        let expectations = [
            Transaction::write(HDC1050_I2C_ADDRESS, vec![0x00]),
            Transaction::read(HDC1050_I2C_ADDRESS, vec![0; 4]).with_error(ErrorKind::Other),
        ];
        let mut sensor = Hdc1050::new(I2cMock::new(&expectations), NoopDelay);

        assert_eq!(sensor.sense(), Err(Error::I2c(ErrorKind::Other)));
        sensor.release().done();
    }
}
