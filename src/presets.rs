//! Image tuning presets
//!
//! Each preset is a short register script applied through the bulk table
//! loader. Scripts start by selecting the DSP bank, and most of them drive
//! the SDE indirect registers (BPADDR/BPDATA at 0x7C/0x7D). The sensor has
//! no readback for these settings, so presets are write-only.

use crate::control::{ControlLine, Resource};
use crate::device::{DriverResult, Ov2640Driver};
use device_driver::RegisterInterface;

/// White balance preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightMode {
    /// Automatic white balance
    Auto,
    /// Sunny
    Sunny,
    /// Cloudy
    Cloudy,
    /// Office lighting
    Office,
    /// Home lighting
    Home,
}

/// Color saturation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorSaturation {
    /// +2
    Plus2,
    /// +1
    Plus1,
    /// Neutral
    Zero,
    /// -1
    Minus1,
    /// -2
    Minus2,
}

/// Brightness step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Brightness {
    /// +2
    Plus2,
    /// +1
    Plus1,
    /// Neutral
    Zero,
    /// -1
    Minus1,
    /// -2
    Minus2,
}

/// Contrast step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Contrast {
    /// +2
    Plus2,
    /// +1
    Plus1,
    /// Neutral
    Zero,
    /// -1
    Minus1,
    /// -2
    Minus2,
}

/// Special digital effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpecialEffect {
    /// Antique (sepia)
    Antique,
    /// Bluish tint
    Bluish,
    /// Greenish tint
    Greenish,
    /// Reddish tint
    Reddish,
    /// Black and white
    BlackWhite,
    /// Color negative
    Negative,
    /// Black and white negative
    BlackWhiteNegative,
    /// No effect
    Normal,
}

impl LightMode {
    /// Register script for this preset
    #[must_use]
    #[rustfmt::skip]
    pub const fn table(self) -> &'static [(u8, u8)] {
        match self {
            Self::Auto => &[(0xFF, 0x00), (0xC7, 0x10)],
            Self::Sunny => &[(0xFF, 0x00), (0xC7, 0x40), (0xCC, 0x5E), (0xCD, 0x41), (0xCE, 0x54)],
            Self::Cloudy => &[(0xFF, 0x00), (0xC7, 0x40), (0xCC, 0x65), (0xCD, 0x41), (0xCE, 0x4F)],
            Self::Office => &[(0xFF, 0x00), (0xC7, 0x40), (0xCC, 0x52), (0xCD, 0x41), (0xCE, 0x66)],
            Self::Home => &[(0xFF, 0x00), (0xC7, 0x40), (0xCC, 0x42), (0xCD, 0x3F), (0xCE, 0x71)],
        }
    }
}

impl ColorSaturation {
    /// Register script for this preset
    #[must_use]
    #[rustfmt::skip]
    pub const fn table(self) -> &'static [(u8, u8)] {
        match self {
            Self::Plus2 => &[(0xFF, 0x00), (0x7C, 0x00), (0x7D, 0x02), (0x7C, 0x03), (0x7D, 0x68), (0x7D, 0x68)],
            Self::Plus1 => &[(0xFF, 0x00), (0x7C, 0x00), (0x7D, 0x02), (0x7C, 0x03), (0x7D, 0x58), (0x7D, 0x58)],
            Self::Zero => &[(0xFF, 0x00), (0x7C, 0x00), (0x7D, 0x02), (0x7C, 0x03), (0x7D, 0x48), (0x7D, 0x48)],
            Self::Minus1 => &[(0xFF, 0x00), (0x7C, 0x00), (0x7D, 0x02), (0x7C, 0x03), (0x7D, 0x38), (0x7D, 0x38)],
            Self::Minus2 => &[(0xFF, 0x00), (0x7C, 0x00), (0x7D, 0x02), (0x7C, 0x03), (0x7D, 0x28), (0x7D, 0x28)],
        }
    }
}

impl Brightness {
    /// Register script for this preset
    #[must_use]
    #[rustfmt::skip]
    pub const fn table(self) -> &'static [(u8, u8)] {
        match self {
            Self::Plus2 => &[(0xFF, 0x00), (0x7C, 0x00), (0x7D, 0x04), (0x7C, 0x09), (0x7D, 0x40), (0x7D, 0x00)],
            Self::Plus1 => &[(0xFF, 0x00), (0x7C, 0x00), (0x7D, 0x04), (0x7C, 0x09), (0x7D, 0x30), (0x7D, 0x00)],
            Self::Zero => &[(0xFF, 0x00), (0x7C, 0x00), (0x7D, 0x04), (0x7C, 0x09), (0x7D, 0x20), (0x7D, 0x00)],
            Self::Minus1 => &[(0xFF, 0x00), (0x7C, 0x00), (0x7D, 0x04), (0x7C, 0x09), (0x7D, 0x10), (0x7D, 0x00)],
            Self::Minus2 => &[(0xFF, 0x00), (0x7C, 0x00), (0x7D, 0x04), (0x7C, 0x09), (0x7D, 0x00), (0x7D, 0x00)],
        }
    }
}

impl Contrast {
    /// Register script for this preset
    #[must_use]
    #[rustfmt::skip]
    pub const fn table(self) -> &'static [(u8, u8)] {
        match self {
            Self::Plus2 => &[
                (0xFF, 0x00), (0x7C, 0x00), (0x7D, 0x04), (0x7C, 0x07), (0x7D, 0x20),
                (0x7D, 0x28), (0x7D, 0x0C), (0x7D, 0x06),
            ],
            Self::Plus1 => &[
                (0xFF, 0x00), (0x7C, 0x00), (0x7D, 0x04), (0x7C, 0x07), (0x7D, 0x20),
                (0x7D, 0x24), (0x7D, 0x16), (0x7D, 0x06),
            ],
            Self::Zero => &[
                (0xFF, 0x00), (0x7C, 0x00), (0x7D, 0x04), (0x7C, 0x07), (0x7D, 0x20),
                (0x7D, 0x20), (0x7D, 0x20), (0x7D, 0x06),
            ],
            Self::Minus1 => &[
                (0xFF, 0x00), (0x7C, 0x00), (0x7D, 0x04), (0x7C, 0x07), (0x7D, 0x20),
                (0x7D, 0x1C), (0x7D, 0x2A), (0x7D, 0x06),
            ],
            Self::Minus2 => &[
                (0xFF, 0x00), (0x7C, 0x00), (0x7D, 0x04), (0x7C, 0x07), (0x7D, 0x20),
                (0x7D, 0x18), (0x7D, 0x34), (0x7D, 0x06),
            ],
        }
    }
}

impl SpecialEffect {
    /// Register script for this preset
    #[must_use]
    #[rustfmt::skip]
    pub const fn table(self) -> &'static [(u8, u8)] {
        match self {
            Self::Antique => &[(0xFF, 0x00), (0x7C, 0x00), (0x7D, 0x18), (0x7C, 0x05), (0x7D, 0x40), (0x7D, 0xA6)],
            Self::Bluish => &[(0xFF, 0x00), (0x7C, 0x00), (0x7D, 0x18), (0x7C, 0x05), (0x7D, 0xA0), (0x7D, 0x40)],
            Self::Greenish => &[(0xFF, 0x00), (0x7C, 0x00), (0x7D, 0x18), (0x7C, 0x05), (0x7D, 0x40), (0x7D, 0x40)],
            Self::Reddish => &[(0xFF, 0x00), (0x7C, 0x00), (0x7D, 0x18), (0x7C, 0x05), (0x7D, 0x40), (0x7D, 0xC0)],
            Self::BlackWhite => &[(0xFF, 0x00), (0x7C, 0x00), (0x7D, 0x18), (0x7C, 0x05), (0x7D, 0x80), (0x7D, 0x80)],
            Self::Negative => &[(0xFF, 0x00), (0x7C, 0x00), (0x7D, 0x40), (0x7C, 0x05), (0x7D, 0x80), (0x7D, 0x80)],
            Self::BlackWhiteNegative => &[(0xFF, 0x00), (0x7C, 0x00), (0x7D, 0x58), (0x7C, 0x05), (0x7D, 0x80), (0x7D, 0x80)],
            Self::Normal => &[(0xFF, 0x00), (0x7C, 0x00), (0x7D, 0x00), (0x7C, 0x05), (0x7D, 0x80), (0x7D, 0x80)],
        }
    }
}

impl<I, PD, RST> Ov2640Driver<I, PD, RST>
where
    I: RegisterInterface<AddressType = u8> + Resource,
    PD: ControlLine,
    RST: ControlLine,
{
    /// Apply a white balance preset
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or a write fails.
    /// Writes before the failure are not rolled back.
    pub fn set_light_mode(&mut self, mode: LightMode) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.apply_table(mode.table())
    }

    /// Apply a color saturation preset
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or a write fails.
    pub fn set_color_saturation(&mut self, saturation: ColorSaturation) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.apply_table(saturation.table())
    }

    /// Apply a brightness preset
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or a write fails.
    pub fn set_brightness(&mut self, brightness: Brightness) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.apply_table(brightness.table())
    }

    /// Apply a contrast preset
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or a write fails.
    pub fn set_contrast(&mut self, contrast: Contrast) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.apply_table(contrast.table())
    }

    /// Apply a special effect preset
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or a write fails.
    pub fn set_special_effect(&mut self, effect: SpecialEffect) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.apply_table(effect.table())
    }
}
