//! Register-oriented access to an I²C device.
//!
//! The MCP9808 speaks plain SMBus: a liveness probe is a "receive byte" and a
//! register read is a "read word data". SMBus transfers words low byte first,
//! while the sensor clocks its registers out high byte first, so every word
//! returned by [`RegisterBus::read_word`] arrives byte-swapped. Undoing that
//! is the decoder's job, see [`crate::normalize`].

use embedded_hal_02::blocking::i2c::{Read, WriteRead};
use embedded_hal_1::i2c::I2c;

/// Bus transactions the sensor session relies on.
pub trait RegisterBus {
    type Error;

    /// Minimal liveness transaction: a single-byte read with no register selection.
    fn probe(&mut self, address: u8) -> Result<(), Self::Error>;

    /// Read one 16-bit register, in SMBus word order.
    fn read_word(&mut self, address: u8, register: u8) -> Result<u16, Self::Error>;
}

impl<I: I2c> RegisterBus for I {
    type Error = I::Error;

    fn probe(&mut self, address: u8) -> Result<(), Self::Error> {
        let mut buf = [0u8];
        self.read(address, &mut buf)
    }

    fn read_word(&mut self, address: u8, register: u8) -> Result<u16, Self::Error> {
        let mut buf = [0u8; 2];
        self.write_read(address, &[register], &mut buf)?;
        Ok(u16::from_le_bytes(buf))
    }
}

/// Adapter for HALs still on the `embedded-hal` 0.2 blocking I²C traits.
pub struct Blocking02<I> {
    i2c: I,
}

impl<I> Blocking02<I> {
    pub fn new(i2c: I) -> Self {
        Blocking02 { i2c }
    }

    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I, E> RegisterBus for Blocking02<I>
where
    I: Read<Error = E> + WriteRead<Error = E>,
{
    type Error = E;

    fn probe(&mut self, address: u8) -> Result<(), E> {
        let mut buf = [0u8];
        self.i2c.read(address, &mut buf)
    }

    fn read_word(&mut self, address: u8, register: u8) -> Result<u16, E> {
        let mut buf = [0u8; 2];
        self.i2c.write_read(address, &[register], &mut buf)?;
        Ok(u16::from_le_bytes(buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_1::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation};

    /// Answers at one address with a fixed register file, recording every transfer.
    struct FakeI2c {
        address: u8,
        wire: [u8; 2],
        writes: Vec<Vec<u8>>,
        reads: Vec<usize>,
    }

    impl FakeI2c {
        fn new(address: u8, wire: [u8; 2]) -> Self {
            FakeI2c {
                address,
                wire,
                writes: Vec::new(),
                reads: Vec::new(),
            }
        }
    }

    impl ErrorType for FakeI2c {
        type Error = ErrorKind;
    }

    impl I2c for FakeI2c {
        fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), ErrorKind> {
            if address != self.address {
                return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
            }
            for op in operations {
                match op {
                    Operation::Write(bytes) => self.writes.push(bytes.to_vec()),
                    Operation::Read(buf) => {
                        self.reads.push(buf.len());
                        let n = buf.len().min(2);
                        buf[..n].copy_from_slice(&self.wire[..n]);
                    }
                }
            }
            Ok(())
        }
    }

    #[test]
    fn probe_is_a_single_byte_read() {
        let mut i2c = FakeI2c::new(0x18, [0x01, 0x90]);
        assert_eq!(RegisterBus::probe(&mut i2c, 0x18), Ok(()));
        assert!(i2c.writes.is_empty());
        assert_eq!(i2c.reads, vec![1]);
    }

    #[test]
    fn probe_reports_missing_device() {
        let mut i2c = FakeI2c::new(0x18, [0x01, 0x90]);
        assert_eq!(
            RegisterBus::probe(&mut i2c, 0x19),
            Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address))
        );
    }

    #[test]
    fn read_word_selects_register_and_keeps_smbus_order() {
        let mut i2c = FakeI2c::new(0x18, [0x01, 0x90]);
        assert_eq!(i2c.read_word(0x18, 0x05), Ok(0x9001));
        assert_eq!(i2c.writes, vec![vec![0x05]]);
        assert_eq!(i2c.reads, vec![2]);
    }

    fn temperature_word<B: RegisterBus>(mut bus: B) -> Result<u16, B::Error> {
        bus.read_word(0x18, 0x05)
    }

    #[test]
    fn borrowed_bus_works_too() {
        let mut i2c = FakeI2c::new(0x18, [0x00, 0x00]);
        assert_eq!(temperature_word(&mut i2c), Ok(0x0000));
        assert_eq!(i2c.reads.len(), 1);
    }

    #[derive(Debug, PartialEq)]
    struct Nack;

    struct Legacy {
        wire: [u8; 2],
        last_register: Option<u8>,
        present: bool,
    }

    impl Read for Legacy {
        type Error = Nack;

        fn read(&mut self, _address: u8, buffer: &mut [u8]) -> Result<(), Nack> {
            if !self.present {
                return Err(Nack);
            }
            buffer.fill(0xff);
            Ok(())
        }
    }

    impl WriteRead for Legacy {
        type Error = Nack;

        fn write_read(&mut self, _address: u8, bytes: &[u8], buffer: &mut [u8]) -> Result<(), Nack> {
            if !self.present {
                return Err(Nack);
            }
            self.last_register = bytes.first().copied();
            buffer.copy_from_slice(&self.wire);
            Ok(())
        }
    }

    #[test]
    fn blocking02_adapter() {
        let mut bus = Blocking02::new(Legacy {
            wire: [0x01, 0x90],
            last_register: None,
            present: true,
        });
        assert_eq!(bus.probe(0x18), Ok(()));
        assert_eq!(bus.read_word(0x18, 0x05), Ok(0x9001));
        assert_eq!(bus.release().last_register, Some(0x05));
    }

    #[test]
    fn blocking02_adapter_passes_errors_through() {
        let mut bus = Blocking02::new(Legacy {
            wire: [0; 2],
            last_register: None,
            present: false,
        });
        assert_eq!(bus.probe(0x18), Err(Nack));
        assert_eq!(bus.read_word(0x18, 0x05), Err(Nack));
    }
}
