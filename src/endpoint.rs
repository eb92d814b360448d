//! Where readings are exposed.

/// A read-only, parameterless text endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Endpoint {
    /// Directory (or route prefix) grouping the endpoint.
    pub directory: &'static str,
    /// Name of the endpoint inside `directory`.
    pub name: &'static str,
}

impl Endpoint {
    /// The classic sysfs layout: `temperature_sensor/temp`.
    pub const TEMPERATURE: Endpoint = Endpoint {
        directory: "temperature_sensor",
        name: "temp",
    };
}

impl Default for Endpoint {
    fn default() -> Self {
        Endpoint::TEMPERATURE
    }
}

/// Owner of the outer transport (sysfs, HTTP, serial console, ...).
///
/// The implementation routes external reads of a registered endpoint to
/// [`SensorSession::show`](crate::SensorSession::show) and surfaces its text
/// or [`ErrorKind`](crate::ErrorKind) the way its transport requires.
pub trait Presentation {
    type Error;

    /// Make `endpoint` visible. On error nothing may stay registered.
    fn register_endpoint(&mut self, endpoint: &Endpoint) -> Result<(), Self::Error>;

    /// Remove `endpoint`. Called once for every successful registration.
    fn unregister_endpoint(&mut self, endpoint: &Endpoint);
}
