//! Bus and delay doubles that log every call in order, for checking settle times.

use std::{cell::RefCell, rc::Rc};

use embedded_hal::{
    delay::DelayNs,
    i2c::{ErrorKind, ErrorType, I2c, Operation},
};
use embedded_hal_mock::eh1::i2c::Mock as I2cMock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Event {
    Write,
    Read,
    DelayNs(u32),
}

pub(crate) type EventLog = Rc<RefCell<Vec<Event>>>;

pub(crate) const MS: u32 = 1_000_000;

/// Forwards to an [`I2cMock`] and logs each write and read.
pub(crate) struct LoggedBus {
    pub mock: I2cMock,
    log: EventLog,
}

impl LoggedBus {
    pub fn new(mock: I2cMock, log: EventLog) -> Self {
        Self { mock, log }
    }
}

impl ErrorType for LoggedBus {
    type Error = ErrorKind;
}

impl I2c for LoggedBus {
    fn read(&mut self, address: u8, read: &mut [u8]) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Read);
        self.mock.read(address, read)
    }

    fn write(&mut self, address: u8, write: &[u8]) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Write);
        self.mock.write(address, write)
    }

    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.mock.transaction(address, operations)
    }
}

/// Logs every requested wait in nanoseconds.
pub(crate) struct LoggedDelay(pub EventLog);

impl DelayNs for LoggedDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.borrow_mut().push(Event::DelayNs(ns));
    }
}
