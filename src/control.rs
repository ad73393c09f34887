//! Power-down and reset control lines
//!
//! The OV2640 has two active control inputs:
//!
//! - **PWDN**: high puts the sensor into power-down, low powers it up
//! - **RESETB**: active-low hardware reset
//!
//! Both are modelled as [`ControlLine`]s so boards can drive them from a GPIO
//! ([`GpioLine`]), an I/O expander, or tie them off ([`NoLine`]).

use embedded_hal::digital::{OutputPin, PinState};

/// A resource with an explicit acquire/release lifecycle
///
/// The driver acquires its bus and control lines in [`init`] and releases
/// them in [`deinit`], undoing partial acquisition on failure.
///
/// [`init`]: crate::Ov2640Driver::init
/// [`deinit`]: crate::Ov2640Driver::deinit
pub trait Resource {
    /// Error type for lifecycle operations
    type Error: core::fmt::Debug;

    /// Prepare the resource for use
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying peripheral cannot be configured.
    fn acquire(&mut self) -> Result<(), Self::Error>;

    /// Return the resource to its idle state
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying peripheral cannot be released.
    fn release(&mut self) -> Result<(), Self::Error>;
}

/// A digital control line driven by the driver
pub trait ControlLine: Resource {
    /// Drive the line to `state`
    ///
    /// # Errors
    ///
    /// Returns an error if the line cannot be driven.
    fn set_state(&mut self, state: PinState) -> Result<(), Self::Error>;
}

/// [`ControlLine`] backed by an [`OutputPin`]
///
/// On acquire the pin is driven to its idle level so the sensor starts from
/// a known state.
pub struct GpioLine<P> {
    pin: P,
    idle: PinState,
}

impl<P> GpioLine<P>
where
    P: OutputPin,
{
    /// Wrap a pin that idles at `idle`
    pub const fn new(pin: P, idle: PinState) -> Self {
        Self { pin, idle }
    }

    /// Wrap a power-down pin (idles high, sensor powered down)
    pub const fn power_down(pin: P) -> Self {
        Self::new(pin, PinState::High)
    }

    /// Wrap a reset pin (idles high, reset released)
    pub const fn reset(pin: P) -> Self {
        Self::new(pin, PinState::High)
    }

    /// Consume the line and return the pin
    pub fn release_pin(self) -> P {
        self.pin
    }
}

impl<P> Resource for GpioLine<P>
where
    P: OutputPin,
{
    type Error = P::Error;

    fn acquire(&mut self) -> Result<(), Self::Error> {
        self.pin.set_state(self.idle)
    }

    fn release(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<P> ControlLine for GpioLine<P>
where
    P: OutputPin,
{
    fn set_state(&mut self, state: PinState) -> Result<(), Self::Error> {
        self.pin.set_state(state)
    }
}

/// Placeholder for a control line that is hard-wired on the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoLine;

impl Resource for NoLine {
    type Error = core::convert::Infallible;

    fn acquire(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn release(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl ControlLine for NoLine {
    fn set_state(&mut self, _state: PinState) -> Result<(), Self::Error> {
        Ok(())
    }
}
