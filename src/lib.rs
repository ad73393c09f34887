#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod basic;
pub mod control;
pub mod device;
pub mod dsp;
pub mod interface;
pub mod jpeg;
pub mod presets;
pub mod registers;
pub mod sensor;
pub mod storage;
pub mod tables;

// Re-export main types
pub use basic::ImageResolution;
pub use control::{ControlLine, GpioLine, NoLine, Resource};
pub use device::{Info, Ov2640Driver};
pub use dsp::{Bist, ByteSwap, DvpOutputFormat, HrefTiming, ResetTarget};
pub use interface::SccbInterface;
pub use presets::{Brightness, ColorSaturation, Contrast, LightMode, SpecialEffect};
pub use sensor::{
    AgcGain, Band, Control, DummyFrame, Edge, Mode, OutputDrive, Pclk, PinStatus, Polarity,
    Resolution,
};

/// OV2640 SCCB address (7-bit form of the 0x60/0x61 write/read addresses)
pub const SCCB_ADDRESS: u8 = 0x30;

/// Expected value of the `MIDH`/`MIDL` register pair
pub const MANUFACTURER_ID: u16 = 0x7FA2;

/// Expected value of the `PIDH`/`PIDL` register pair
pub const PRODUCT_ID: u16 = 0x2642;

/// Address of the bank selector register, shared by both banks
pub const BANK_SELECT_REGISTER: u8 = 0xFF;

/// Register bank identifiers
///
/// The value is the state of bit 0 of [`BANK_SELECT_REGISTER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bank {
    /// DSP (image pipeline) registers
    Dsp = 0,
    /// Sensor (array control) registers
    Sensor = 1,
}

impl Bank {
    /// Decode the bank from a raw selector register value
    #[must_use]
    pub const fn from_selector(value: u8) -> Self {
        if value & 0x01 == 0 {
            Self::Dsp
        } else {
            Self::Sensor
        }
    }
}

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// The driver has not been initialized with [`Ov2640Driver::init`]
    NotInitialized,
    /// A parameter exceeded the width of its register field
    ///
    /// `argument` is the zero-based index of the offending parameter.
    OutOfRange {
        /// Index of the rejected argument
        argument: u8,
    },
    /// A register field holds a reserved encoding
    UnknownValue(u8),
    /// The bus could not be acquired
    BusInit,
    /// The bus could not be released
    BusDeinit,
    /// A power-down or reset line could not be acquired or driven
    Gpio,
    /// A power-down or reset line could not be released during deinit
    LineRelease,
    /// The hardware reset pulse failed
    HardwareReset,
    /// The soft reset write failed during init
    SoftReset(E),
    /// The soft reset write failed during deinit
    ShutdownSoftReset(E),
    /// The power-down line could not be asserted
    PowerDown,
    /// Manufacturer ID mismatch (contains the value read)
    InvalidManufacturerId(u16),
    /// Product ID mismatch (contains the value read)
    InvalidProductId(u16),
}

impl<E> Error<E> {
    /// Numeric status code used by C-style callers and log sinks
    ///
    /// Setter and getter failures map to `1` (bus), `3` (not initialized) and
    /// `4 + argument` (out of range). Lifecycle failures use the codes of the
    /// sequence that failed: a soft reset failure is `6` in init and `4` in
    /// deinit, and a release failure in deinit is `1`.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Bus(_)
            | Self::UnknownValue(_)
            | Self::BusInit
            | Self::BusDeinit
            | Self::LineRelease => 1,
            Self::NotInitialized => 3,
            Self::OutOfRange { argument } => 4 + *argument,
            Self::Gpio | Self::ShutdownSoftReset(_) => 4,
            Self::HardwareReset | Self::PowerDown => 5,
            Self::SoftReset(_) => 6,
            Self::InvalidManufacturerId(_) => 7,
            Self::InvalidProductId(_) => 8,
        }
    }
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "bus error: {e:?}"),
            Self::NotInitialized => f.write_str("driver not initialized"),
            Self::OutOfRange { argument } => write!(f, "argument {argument} out of range"),
            Self::UnknownValue(v) => write!(f, "reserved field encoding {v:#x}"),
            Self::BusInit => f.write_str("bus init failed"),
            Self::BusDeinit => f.write_str("bus deinit failed"),
            Self::Gpio => f.write_str("control line failed"),
            Self::LineRelease => f.write_str("control line release failed"),
            Self::HardwareReset => f.write_str("hardware reset failed"),
            Self::SoftReset(e) | Self::ShutdownSoftReset(e) => {
                write!(f, "soft reset failed: {e:?}")
            }
            Self::PowerDown => f.write_str("power down failed"),
            Self::InvalidManufacturerId(id) => write!(f, "manufacturer id {id:#06x} is invalid"),
            Self::InvalidProductId(id) => write!(f, "product id {id:#06x} is invalid"),
        }
    }
}
