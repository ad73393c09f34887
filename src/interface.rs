//! Bus interface implementation for the OV2640
//!
//! The OV2640 is programmed over SCCB, which is electrically compatible with
//! I2C but has no burst mode and expects a stop condition between the
//! register address phase and the data phase of a read. This module adapts
//! any [`embedded_hal::i2c::I2c`] bus to the `device-driver` register traits
//! with those constraints applied.

use crate::SCCB_ADDRESS;
use crate::control::Resource;
use device_driver::RegisterInterface;

/// SCCB interface for the OV2640
pub struct SccbInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> SccbInterface<I2C> {
    /// Create a new SCCB interface with the default address (0x30)
    ///
    /// # Example
    /// ```ignore
    /// let interface = SccbInterface::default(i2c);
    /// let mut camera = Ov2640Driver::new(interface, pwdn, reset);
    /// ```
    pub const fn default(i2c: I2C) -> Self {
        Self {
            i2c,
            address: SCCB_ADDRESS,
        }
    }

    /// Create a new SCCB interface with a custom 7-bit device address
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Consume the interface and return the I2C peripheral
    pub fn into_inner(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> RegisterInterface for SccbInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: u8,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), E> {
        let _ = size_bits; // Size is implicit in read_data.len()
        // One register per transaction, lowest address first
        for (offset, byte) in read_data.iter_mut().enumerate() {
            let register = address.wrapping_add(offset as u8);
            self.i2c.write(self.address, &[register])?;
            self.i2c
                .read(self.address, core::slice::from_mut(byte))?;
        }
        Ok(())
    }

    fn write_register(
        &mut self,
        address: u8,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), E> {
        let _ = size_bits; // Size is implicit in write_data.len()
        for (offset, byte) in write_data.iter().enumerate() {
            let register = address.wrapping_add(offset as u8);
            self.i2c.write(self.address, &[register, *byte])?;
        }
        Ok(())
    }
}

/// The I2C peripheral is configured by the HAL before it is handed to the
/// driver, so acquiring and releasing the bus needs no transactions.
impl<I2C, E> Resource for SccbInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
    E: core::fmt::Debug,
{
    type Error = E;

    fn acquire(&mut self) -> Result<(), E> {
        Ok(())
    }

    fn release(&mut self) -> Result<(), E> {
        Ok(())
    }
}
