//! MCP9808 ±0.5°C maximum accuracy digital temperature sensor.
//!
//! - Output: whole degrees, Celsius and Fahrenheit
//! - Range: -40 to +125 C (register range -256 to +255 C)
//! - Address(7bit): 0x18 to 0x1F, selected by A2..A0

use core::fmt;
use core::fmt::Write;

use heapless::String;

mod error;
pub mod session;

pub use error::{Error, ErrorKind, Operation};

/// Factory address, A2..A0 tied low.
pub const MCP9808_I2CADDR: u8 = 0x18;

/// Ambient temperature register.
pub const MCP9808_TEMP: u8 = 0x05;

/// Name the driver logs under.
pub const DRIVER_NAME: &str = "mcp9808_driver";
/// Device id matched against board descriptions, e.g. an I²C device table.
pub const DEVICE_ID: &str = "mcp9808";

const TEMP_SIGN: u16 = 0x1000;
const TEMP_MAGNITUDE_MSK: u16 = 0x0FFF;

/// Capacity of [`Reading::render`], fits `"-256C -428F\n"`.
pub const RENDERED_LEN: usize = 16;

/// One temperature measurement, in whole degrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    celsius: i16,
    fahrenheit: i16,
}

impl Reading {
    pub fn celsius(&self) -> i16 {
        self.celsius
    }

    pub fn fahrenheit(&self) -> i16 {
        self.fahrenheit
    }

    /// Endpoint text, e.g. `"23C 73F\n"`.
    pub fn render(&self) -> String<RENDERED_LEN> {
        let mut text = String::new();
        let _ = writeln!(text, "{}", self);
        text
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}C {}F", self.celsius, self.fahrenheit)
    }
}

/// Recover the native big-endian register value from an SMBus word.
#[inline]
pub const fn normalize(raw: u16) -> u16 {
    raw.swap_bytes()
}

/// Decode a temperature register word as delivered by the bus.
///
/// Bits 0..11 of the register hold the magnitude in 1/16 C, bit 12 is the
/// sign. The fraction is dropped before the sign is applied, so `0x1FF8`
/// decodes to -1 C rather than -0.5 C, and Fahrenheit is derived from the
/// whole-degree Celsius value with truncating division.
pub const fn decode(raw: u16) -> Reading {
    let value = normalize(raw);

    let mut celsius = ((value & TEMP_MAGNITUDE_MSK) / 16) as i16;
    if value & TEMP_SIGN != 0 {
        celsius -= 256;
    }
    let fahrenheit = celsius * 9 / 5 + 32;

    Reading { celsius, fahrenheit }
}
