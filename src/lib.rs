//! Platform-agnostic driver exposing an MCP9808 digital temperature sensor
//! as a read-only text endpoint.
//!
//! The sensor is reached through [`RegisterBus`], implemented for every
//! `embedded-hal` 1.0 I²C bus and, through [`Blocking02`], for the blocking
//! traits of `embedded-hal` 0.2. Where the rendered reading ends up (a sysfs
//! attribute, an HTTP handler, a serial console) is decided by a
//! [`Presentation`] implementation.
//!
//! ```ignore
//! let mut session = SensorSession::new(sysfs);
//! session.attach(i2c, MCP9808_I2CADDR)?;
//! assert_eq!(session.show()?.as_str(), "23C 73F\n");
//! let i2c = session.detach();
//! ```

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod bus;
pub mod endpoint;
pub mod mcp9808;

pub use bus::{Blocking02, RegisterBus};
pub use endpoint::{Endpoint, Presentation};
pub use mcp9808::session::{SensorHandle, SensorSession, SessionError};
pub use mcp9808::{decode, normalize, Error, ErrorKind, Operation, Reading, MCP9808_I2CADDR};
