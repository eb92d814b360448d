//! Attach/detach lifecycle of a single MCP9808.

use heapless::String;

use super::{decode, Error, Operation, Reading, DRIVER_NAME, MCP9808_TEMP, RENDERED_LEN};
use crate::bus::RegisterBus;
use crate::endpoint::{Endpoint, Presentation};

/// Error returned by a [`SensorSession`] over bus `B` and presentation `P`.
pub type SessionError<B, P> = Error<<B as RegisterBus>::Error, <P as Presentation>::Error>;

/// One probed sensor: the bus it sits on and its 7-bit address.
pub struct SensorHandle<B> {
    bus: B,
    address: u8,
}

impl<B: RegisterBus> SensorHandle<B> {
    pub fn address(&self) -> u8 {
        self.address
    }

    fn read_temperature(&mut self) -> Result<u16, B::Error> {
        self.bus.read_word(self.address, MCP9808_TEMP)
    }

    fn release(self) -> B {
        self.bus
    }
}

/// Exposes at most one attached sensor through a [`Presentation`].
///
/// Pass the bus by value to hand it over, or as `&mut` to keep it.
///
/// Dropping an attached session does not unregister its endpoint: call
/// [`detach`](Self::detach) or [`release`](Self::release) first.
pub struct SensorSession<B, P> {
    presentation: P,
    endpoint: Endpoint,
    handle: Option<SensorHandle<B>>,
}

impl<B, P> SensorSession<B, P>
where
    B: RegisterBus,
    P: Presentation,
{
    /// Create a detached session publishing at [`Endpoint::TEMPERATURE`].
    pub fn new(presentation: P) -> Self {
        Self::with_endpoint(presentation, Endpoint::TEMPERATURE)
    }

    pub fn with_endpoint(presentation: P, endpoint: Endpoint) -> Self {
        SensorSession {
            presentation,
            endpoint,
            handle: None,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.handle.is_some()
    }

    /// Address of the attached sensor.
    pub fn address(&self) -> Option<u8> {
        self.handle.as_ref().map(SensorHandle::address)
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    /// Probe the sensor at `address` and publish the endpoint.
    ///
    /// The session stays detached on any error; the endpoint is only
    /// registered once the probe succeeded.
    pub fn attach(&mut self, mut bus: B, address: u8) -> Result<(), SessionError<B, P>> {
        if self.handle.is_some() {
            return Err(Error::AlreadyAttached);
        }

        if let Err(source) = bus.probe(address) {
            error!("{=str}: sensor not detected at I2C address: {=u8:#x}", DRIVER_NAME, address);
            return Err(Error::Transport {
                operation: Operation::Probe,
                address,
                source,
            });
        }
        info!("{=str}: temperature sensor probed: I2C address = {=u8:#x}", DRIVER_NAME, address);

        if let Err(err) = self.presentation.register_endpoint(&self.endpoint) {
            error!("failed to create endpoint {=str}/{=str}", self.endpoint.directory, self.endpoint.name);
            return Err(Error::EndpointCreationFailed(err));
        }
        info!("endpoint {=str}/{=str} created", self.endpoint.directory, self.endpoint.name);

        self.handle = Some(SensorHandle { bus, address });
        Ok(())
    }

    /// Read the sensor once. Bus failures are returned as-is, never retried.
    pub fn query(&mut self) -> Result<Reading, SessionError<B, P>> {
        let Some(handle) = self.handle.as_mut() else {
            return Err(Error::NotAttached);
        };

        match handle.read_temperature() {
            Ok(raw) => {
                debug!("raw temperature word: {=u16:#x}", raw);
                Ok(decode(raw))
            }
            Err(source) => {
                error!("failed to read temperature data");
                Err(Error::Transport {
                    operation: Operation::ReadTemperature,
                    address: handle.address,
                    source,
                })
            }
        }
    }

    /// Endpoint read: the current reading as `"<celsius>C <fahrenheit>F\n"`.
    pub fn show(&mut self) -> Result<String<RENDERED_LEN>, SessionError<B, P>> {
        self.query().map(|reading| reading.render())
    }

    /// Unpublish the endpoint, then hand the bus back.
    ///
    /// Returns `None` without touching the presentation when already detached.
    pub fn detach(&mut self) -> Option<B> {
        let address = self.handle.as_ref()?.address;
        info!("{=str}: temperature sensor removed: I2C address = {=u8:#x}", DRIVER_NAME, address);

        self.presentation.unregister_endpoint(&self.endpoint);
        self.handle.take().map(SensorHandle::release)
    }

    /// Detach and give back the presentation.
    pub fn release(mut self) -> P {
        self.detach();
        self.presentation
    }
}
