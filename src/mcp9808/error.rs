use core::fmt;

/// Bus transaction that failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Operation {
    /// Liveness probe during attach.
    Probe,
    /// Read of the ambient temperature register.
    ReadTemperature,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Probe => f.write_str("probe"),
            Operation::ReadTemperature => f.write_str("temperature read"),
        }
    }
}

/// MCP9808 session errors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<BE, PE> {
    /// I²C bus error, as reported by the bus
    Transport {
        operation: Operation,
        address: u8,
        source: BE,
    },
    /// No sensor is attached
    NotAttached,
    /// A sensor is attached already, detach it first
    AlreadyAttached,
    /// The presentation layer refused the endpoint
    EndpointCreationFailed(PE),
}

impl<BE, PE> Error<BE, PE> {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Transport {
                operation: Operation::Probe,
                ..
            } => ErrorKind::DeviceNotFound,
            Error::Transport {
                operation: Operation::ReadTemperature,
                ..
            } => ErrorKind::ReadFailed,
            Error::NotAttached => ErrorKind::DeviceUnavailable,
            Error::AlreadyAttached => ErrorKind::Busy,
            Error::EndpointCreationFailed(_) => ErrorKind::OutOfResources,
        }
    }

    /// The bus error, if the failure came from the bus.
    pub fn transport(&self) -> Option<&BE> {
        match self {
            Error::Transport { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl<BE: fmt::Debug, PE: fmt::Debug> fmt::Display for Error<BE, PE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport {
                operation,
                address,
                source,
            } => write!(f, "{} failed at I2C address {:#04x}: {:?}", operation, address, source),
            Error::EndpointCreationFailed(err) => write!(f, "failed to create endpoint: {:?}", err),
            _ => f.write_str(self.kind().as_str()),
        }
    }
}

impl<BE: fmt::Debug, PE: fmt::Debug> core::error::Error for Error<BE, PE> {}

/// What an endpoint reader gets to see of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    DeviceNotFound,
    DeviceUnavailable,
    ReadFailed,
    Busy,
    OutOfResources,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::DeviceNotFound => "device not found",
            ErrorKind::DeviceUnavailable => "device unavailable",
            ErrorKind::ReadFailed => "read failed",
            ErrorKind::Busy => "device already attached",
            ErrorKind::OutOfResources => "out of resources",
        }
    }
}
