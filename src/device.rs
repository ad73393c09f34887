//! High-level driver API for the OV2640
//!
//! This module owns the device handle: lifecycle sequencing (power, reset,
//! identity check), bank-gated register access and the bulk table loader.
//! Typed field accessors live in [`sensor`](crate::sensor) and
//! [`dsp`](crate::dsp) as further `impl` blocks on [`Ov2640Driver`].

use crate::control::{ControlLine, Resource};
use crate::registers::Ov2640 as RegisterDevice;
use crate::{BANK_SELECT_REGISTER, Bank, Error, MANUFACTURER_ID, PRODUCT_ID, tables};
use device_driver::RegisterInterface;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::PinState;

/// Bus error type of an interface
pub(crate) type BusError<I> = <I as RegisterInterface>::Error;

/// Result type returned by every driver operation
pub(crate) type DriverResult<T, I> = Result<T, Error<BusError<I>>>;

/// Settle time after releasing power-down
const POWER_UP_DELAY_MS: u32 = 10;

/// Width of each phase of the hardware reset pulse
const RESET_PULSE_MS: u32 = 10;

/// Time the sensor needs after a soft reset before it accepts commands
const SOFT_RESET_DELAY_MS: u32 = 50;

/// Selector bit choosing between the DSP and sensor banks
const BANK_SELECT_MASK: u8 = 0x01;

/// Static chip description
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Info {
    /// Chip name
    pub chip_name: &'static str,
    /// Manufacturer name
    pub manufacturer_name: &'static str,
    /// Control interface
    pub interface: &'static str,
    /// Minimum supply voltage in volts
    pub supply_voltage_min_v: f32,
    /// Maximum supply voltage in volts
    pub supply_voltage_max_v: f32,
    /// Maximum active current in milliamps
    pub max_current_ma: f32,
    /// Minimum operating temperature in degrees Celsius
    pub temperature_min: f32,
    /// Maximum operating temperature in degrees Celsius
    pub temperature_max: f32,
    /// Driver version, `major * 1000 + minor * 100 + patch`
    pub driver_version: u32,
}

/// Main driver for the OV2640
///
/// `I` is the register bus (usually [`SccbInterface`](crate::SccbInterface)),
/// `PD` and `RST` are the power-down and reset lines.
pub struct Ov2640Driver<I, PD, RST> {
    pub(crate) device: RegisterDevice<I>,
    power_down: PD,
    reset: RST,
    initialized: bool,
}

impl<I, PD, RST> Ov2640Driver<I, PD, RST>
where
    I: RegisterInterface<AddressType = u8> + Resource,
    PD: ControlLine,
    RST: ControlLine,
{
    /// Create a new OV2640 driver instance
    ///
    /// No bus traffic happens here. Call [`init`](Self::init) to power the
    /// sensor up and verify its identity.
    pub fn new(interface: I, power_down: PD, reset: RST) -> Self {
        Self {
            device: RegisterDevice::new(interface),
            power_down,
            reset,
            initialized: false,
        }
    }

    /// Chip information
    #[must_use]
    pub const fn info() -> Info {
        Info {
            chip_name: "OmniVision OV2640",
            manufacturer_name: "OmniVision",
            interface: "SCCB",
            supply_voltage_min_v: 1.7,
            supply_voltage_max_v: 3.3,
            max_current_ma: 60.0,
            temperature_min: -30.0,
            temperature_max: 70.0,
            driver_version: 1000,
        }
    }

    /// Whether [`init`](Self::init) has completed successfully
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Consume the driver and return the bus interface and control lines
    pub fn release(self) -> (I, PD, RST) {
        (self.device.interface, self.power_down, self.reset)
    }

    /// Power up, reset and identify the sensor
    ///
    /// Sequence:
    /// 1. acquire the power-down line, the reset line and the bus
    /// 2. release power-down and wait 10 ms
    /// 3. pulse reset low for 10 ms, then wait another 10 ms
    /// 4. soft reset through COM7 and wait 50 ms
    /// 5. check the manufacturer ID, then the product ID
    ///
    /// Any failure after step 1 releases every acquired resource.
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay provider implementing `embedded_hal::delay::DelayNs`
    ///
    /// # Errors
    ///
    /// - [`Error::Gpio`] if a control line cannot be acquired
    /// - [`Error::BusInit`] if the bus cannot be acquired
    /// - [`Error::HardwareReset`] if a control line cannot be driven
    /// - [`Error::SoftReset`] if the soft reset write fails
    /// - [`Error::InvalidManufacturerId`] / [`Error::InvalidProductId`] on an
    ///   identity mismatch
    /// - [`Error::Bus`] if an identity read fails
    pub fn init<D>(&mut self, delay: &mut D) -> DriverResult<(), I>
    where
        D: DelayNs,
    {
        self.acquire_resources()?;

        if let Err(e) = self.power_up(delay) {
            self.release_resources();
            return Err(e);
        }

        if let Err(e) = self.check_identity() {
            self.release_resources();
            return Err(e);
        }

        self.initialized = true;

        #[cfg(feature = "defmt")]
        defmt::debug!("ov2640: initialized");

        Ok(())
    }

    /// Soft reset, power down and release every resource
    ///
    /// The handle is marked uninitialized as soon as the release phase is
    /// reached. A release failure is still reported, but the resources that
    /// failed to release are no longer tracked.
    ///
    /// # Errors
    ///
    /// - [`Error::NotInitialized`] if the driver is not initialized
    /// - [`Error::ShutdownSoftReset`] if the soft reset write fails
    /// - [`Error::PowerDown`] if the power-down line cannot be asserted
    /// - [`Error::LineRelease`] / [`Error::BusDeinit`] if a release fails
    pub fn deinit<D>(&mut self, delay: &mut D) -> DriverResult<(), I>
    where
        D: DelayNs,
    {
        self.check_initialized()?;

        self.write_soft_reset().map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("ov2640: soft reset failed during deinit");
            Error::ShutdownSoftReset(e)
        })?;
        delay.delay_ms(SOFT_RESET_DELAY_MS);

        self.power_down.set_state(PinState::High).map_err(|_| {
            #[cfg(feature = "defmt")]
            defmt::warn!("ov2640: power down failed");
            Error::PowerDown
        })?;
        delay.delay_ms(POWER_UP_DELAY_MS);

        self.initialized = false;

        let reset = self.reset.release();
        let power_down = self.power_down.release();
        let bus = self.device.interface.release();

        if reset.is_err() || power_down.is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("ov2640: control line release failed");
            return Err(Error::LineRelease);
        }
        if bus.is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("ov2640: bus release failed");
            return Err(Error::BusDeinit);
        }

        Ok(())
    }

    /// Trigger a soft reset of all registers (COM7 SRST)
    ///
    /// The bit self-clears; allow 50 ms before the next access.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn soft_reset(&mut self) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.write_soft_reset()?;
        Ok(())
    }

    /// Read a DSP-bank register that has no typed accessor
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_dsp_reg(&mut self, register: u8) -> DriverResult<u8, I> {
        self.check_initialized()?;
        self.select_bank(Bank::Dsp)?;
        Ok(self.read_raw(register)?)
    }

    /// Write a DSP-bank register that has no typed accessor
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_dsp_reg(&mut self, register: u8, value: u8) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.select_bank(Bank::Dsp)?;
        self.write_raw(register, value)?;
        Ok(())
    }

    /// Read a sensor-bank register that has no typed accessor
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_sensor_reg(&mut self, register: u8) -> DriverResult<u8, I> {
        self.check_initialized()?;
        self.select_bank(Bank::Sensor)?;
        Ok(self.read_raw(register)?)
    }

    /// Write a sensor-bank register that has no typed accessor
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_sensor_reg(&mut self, register: u8, value: u8) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.select_bank(Bank::Sensor)?;
        self.write_raw(register, value)?;
        Ok(())
    }

    /// Load the UXGA baseline register table
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or any write fails.
    /// Entries written before the failure are not rolled back.
    pub fn table_init(&mut self) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.apply_table(tables::UXGA_INIT)
    }

    /// Switch the output to JPEG (YUV422 pipeline plus JPEG encoder)
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or any write fails.
    pub fn table_jpeg_init(&mut self) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.apply_table(tables::YUV422)?;
        self.apply_table(tables::JPEG)
    }

    /// Switch the output to RGB565
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or any write fails.
    pub fn table_rgb565_init(&mut self) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.apply_table(tables::RGB565)
    }

    /// Get a reference to the underlying register device (for advanced usage)
    ///
    /// Accesses through it bypass bank selection and the initialized check.
    pub const fn device(&self) -> &RegisterDevice<I> {
        &self.device
    }

    pub(crate) fn check_initialized(&self) -> DriverResult<(), I> {
        if self.initialized {
            Ok(())
        } else {
            #[cfg(feature = "defmt")]
            defmt::warn!("ov2640: handle is not initialized");
            Err(Error::NotInitialized)
        }
    }

    /// Reject `value` if it does not fit a field whose largest encoding is `max`
    pub(crate) fn check_range(&self, value: u32, max: u32, argument: u8) -> DriverResult<(), I> {
        if value > max {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "ov2640: argument {} = 0x{:X} exceeds 0x{:X}",
                argument,
                value,
                max
            );
            return Err(Error::OutOfRange { argument });
        }
        Ok(())
    }

    /// Gate to the sensor bank and hand out the register device
    pub(crate) fn sensor(&mut self) -> DriverResult<&mut RegisterDevice<I>, I> {
        self.check_initialized()?;
        self.select_bank(Bank::Sensor)?;
        Ok(&mut self.device)
    }

    /// Gate to the DSP bank and hand out the register device
    pub(crate) fn dsp(&mut self) -> DriverResult<&mut RegisterDevice<I>, I> {
        self.check_initialized()?;
        self.select_bank(Bank::Dsp)?;
        Ok(&mut self.device)
    }

    /// Write `(register, value)` pairs in order, stopping at the first failure
    ///
    /// Tables select their own bank by writing [`BANK_SELECT_REGISTER`].
    pub(crate) fn apply_table(&mut self, table: &[(u8, u8)]) -> DriverResult<(), I> {
        for &(register, value) in table {
            self.write_raw(register, value).inspect_err(|_| {
                #[cfg(feature = "defmt")]
                defmt::warn!("ov2640: table write to 0x{:02X} failed", register);
            })?;
        }
        Ok(())
    }

    /// Make `bank` the active bank
    ///
    /// The selector is read back on every call so that a bank change made
    /// elsewhere (including by a register table) is never missed.
    fn select_bank(&mut self, bank: Bank) -> Result<(), BusError<I>> {
        let selector = self.read_raw(BANK_SELECT_REGISTER)?;
        let wanted = bank as u8;
        if selector & BANK_SELECT_MASK != wanted {
            self.write_raw(BANK_SELECT_REGISTER, (selector & !BANK_SELECT_MASK) | wanted)?;
        }
        Ok(())
    }

    fn read_raw(&mut self, register: u8) -> Result<u8, BusError<I>> {
        let mut buffer = [0u8; 1];
        self.device.interface.read_register(register, 8, &mut buffer)?;
        Ok(buffer[0])
    }

    fn write_raw(&mut self, register: u8, value: u8) -> Result<(), BusError<I>> {
        self.device.interface.write_register(register, 8, &[value])
    }

    fn write_soft_reset(&mut self) -> Result<(), BusError<I>> {
        self.select_bank(Bank::Sensor)?;
        self.device.com_7().modify(|w| {
            w.set_srst(true);
        })
    }

    fn acquire_resources(&mut self) -> DriverResult<(), I> {
        if self.power_down.acquire().is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("ov2640: power down line init failed");
            return Err(Error::Gpio);
        }

        if self.reset.acquire().is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("ov2640: reset line init failed");
            let _ = self.power_down.release();
            return Err(Error::Gpio);
        }

        if self.device.interface.acquire().is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("ov2640: bus init failed");
            let _ = self.reset.release();
            let _ = self.power_down.release();
            return Err(Error::BusInit);
        }

        Ok(())
    }

    /// Best-effort release after a failed init, in reverse acquisition order
    fn release_resources(&mut self) {
        let _ = self.device.interface.release();
        let _ = self.reset.release();
        let _ = self.power_down.release();
    }

    fn power_up<D>(&mut self, delay: &mut D) -> DriverResult<(), I>
    where
        D: DelayNs,
    {
        self.power_down
            .set_state(PinState::Low)
            .map_err(|_| Error::HardwareReset)?;
        delay.delay_ms(POWER_UP_DELAY_MS);

        self.reset
            .set_state(PinState::Low)
            .map_err(|_| Error::HardwareReset)?;
        delay.delay_ms(RESET_PULSE_MS);
        self.reset
            .set_state(PinState::High)
            .map_err(|_| Error::HardwareReset)?;
        delay.delay_ms(RESET_PULSE_MS);

        self.write_soft_reset().map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("ov2640: soft reset failed");
            Error::SoftReset(e)
        })?;
        delay.delay_ms(SOFT_RESET_DELAY_MS);

        Ok(())
    }

    fn check_identity(&mut self) -> DriverResult<(), I> {
        self.select_bank(Bank::Sensor)?;

        let manufacturer = self.device.manufacturer_id().read()?.id();
        if manufacturer != MANUFACTURER_ID {
            #[cfg(feature = "defmt")]
            defmt::warn!("ov2640: manufacturer id 0x{:04X} is invalid", manufacturer);
            return Err(Error::InvalidManufacturerId(manufacturer));
        }

        let product = self.device.product_id().read()?.id();
        if product != PRODUCT_ID {
            #[cfg(feature = "defmt")]
            defmt::warn!("ov2640: product id 0x{:04X} is invalid", product);
            return Err(Error::InvalidProductId(product));
        }

        Ok(())
    }
}
