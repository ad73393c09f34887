//! Sensor bank field accessors
//!
//! Every accessor selects the sensor bank before touching a register and
//! fails with [`Error::NotInitialized`] until [`Ov2640Driver::init`] has
//! succeeded. Fields spread over several registers are written one register
//! at a time; the first failing write aborts the call without rolling back
//! the registers already written.

use crate::Error;
use crate::control::{ControlLine, Resource};
use crate::device::{DriverResult, Ov2640Driver};
use device_driver::RegisterInterface;

/// Dummy frames inserted around a mode change (COM1[7:6])
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DummyFrame {
    /// No dummy frame
    None = 0,
    /// One dummy frame
    One = 1,
    /// Three dummy frames
    Three = 2,
    /// Seven dummy frames
    Seven = 3,
}

impl DummyFrame {
    /// Decode the two-bit field value
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Self::None,
            1 => Self::One,
            2 => Self::Three,
            _ => Self::Seven,
        }
    }
}

/// Operating mode (COM2 bit 4)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Normal streaming operation
    Normal = 0,
    /// Standby, sensor array stopped
    Standby = 1,
}

/// Output pad drive strength (COM2[1:0])
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputDrive {
    /// 1x drive
    Capability1x = 0,
    /// 3x drive
    Capability3x = 1,
    /// 2x drive
    Capability2x = 2,
    /// 4x drive
    Capability4x = 3,
}

impl OutputDrive {
    /// Decode the two-bit field value
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Self::Capability1x,
            1 => Self::Capability3x,
            2 => Self::Capability2x,
            _ => Self::Capability4x,
        }
    }
}

/// Manual banding filter frequency (COM3 bit 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Band {
    /// 60 Hz mains
    Hz60 = 0,
    /// 50 Hz mains
    Hz50 = 1,
}

/// State of the clock output pins in power-down (COM4 bit 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinStatus {
    /// Pins float
    TriState = 0,
    /// Pins hold their last driven level
    LastState = 1,
}

/// Sensor readout resolution (COM7[6:4])
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    /// 1600x1200
    Uxga = 0,
    /// 400x296
    Cif = 1,
    /// 800x600
    Svga = 4,
}

impl Resolution {
    /// Decode the three-bit field value, `None` for reserved encodings
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::Uxga),
            1 => Some(Self::Cif),
            4 => Some(Self::Svga),
            _ => None,
        }
    }
}

/// Automatic or manual control of a loop (COM8)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Control {
    /// Manual value from the gain/exposure registers
    Manual = 0,
    /// Automatic control
    Auto = 1,
}

impl Control {
    const fn from_bit(bit: bool) -> Self {
        if bit { Self::Auto } else { Self::Manual }
    }
}

/// AGC gain ceiling (COM9[7:5])
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AgcGain {
    /// 2x
    Gain2x = 0,
    /// 4x
    Gain4x = 1,
    /// 8x
    Gain8x = 2,
    /// 16x
    Gain16x = 3,
    /// 32x
    Gain32x = 4,
    /// 64x
    Gain64x = 5,
    /// 128x
    Gain128x = 6,
}

impl AgcGain {
    /// Decode the three-bit field value, `None` for the reserved encoding
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::Gain2x),
            1 => Some(Self::Gain4x),
            2 => Some(Self::Gain8x),
            3 => Some(Self::Gain16x),
            4 => Some(Self::Gain32x),
            5 => Some(Self::Gain64x),
            6 => Some(Self::Gain128x),
            _ => None,
        }
    }

    /// Ceiling as a gain multiplier
    pub const fn multiplier(&self) -> u8 {
        1 << (*self as u8 + 1)
    }
}

/// PCLK edge on which data is launched (COM10 bit 4)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Falling edge
    Falling = 0,
    /// Rising edge
    Rising = 1,
}

/// Sync signal polarity (COM10)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Active high
    Positive = 0,
    /// Active low
    Negative = 1,
}

impl Polarity {
    const fn from_bit(bit: bool) -> Self {
        if bit { Self::Negative } else { Self::Positive }
    }

    const fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }
}

/// Pixel clock divider (REG32[7:6])
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pclk {
    /// PCLK follows the internal clock
    NoEffect = 0,
    /// PCLK divided by 2
    Div2 = 2,
    /// PCLK divided by 4
    Div4 = 3,
}

impl Pclk {
    /// Decode the two-bit field value (`0b01` also means no division)
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            2 => Self::Div2,
            3 => Self::Div4,
            _ => Self::NoEffect,
        }
    }
}

impl<I, PD, RST> Ov2640Driver<I, PD, RST>
where
    I: RegisterInterface<AddressType = u8> + Resource,
    PD: ControlLine,
    RST: ControlLine,
{
    /// Set the 10-bit AGC gain (GAIN + REG45[7:6])
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `gain > 0x3FF`, otherwise an error if
    /// the driver is not initialized or communication fails.
    pub fn set_agc_gain(&mut self, gain: u16) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.check_range(u32::from(gain), 0x3FF, 0)?;
        self.sensor()?.gain().write(|w| {
            w.set_gain_low((gain & 0xFF) as u8);
        })?;
        self.sensor()?.reg_45().modify(|w| {
            w.set_gain_high((gain >> 8) as u8);
        })?;
        Ok(())
    }

    /// Get the 10-bit AGC gain
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_agc_gain(&mut self) -> DriverResult<u16, I> {
        let low = self.sensor()?.gain().read()?.gain_low();
        let high = self.sensor()?.reg_45().read()?.gain_high();
        Ok(u16::from(high) << 8 | u16::from(low))
    }

    /// Set the number of dummy frames
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_dummy_frame(&mut self, frame: DummyFrame) -> DriverResult<(), I> {
        self.sensor()?.com_1().modify(|w| {
            w.set_dummy_frame(frame as u8);
        })?;
        Ok(())
    }

    /// Get the number of dummy frames
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_dummy_frame(&mut self) -> DriverResult<DummyFrame, I> {
        let bits = self.sensor()?.com_1().read()?.dummy_frame();
        Ok(DummyFrame::from_bits(bits))
    }

    /// Set the 10-bit vertical window start line (VSTRT + COM1[1:0])
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `start > 0x3FF`, otherwise an error if
    /// the driver is not initialized or communication fails.
    pub fn set_vertical_window_line_start(&mut self, start: u16) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.check_range(u32::from(start), 0x3FF, 0)?;
        self.sensor()?.com_1().modify(|w| {
            w.set_vstrt_low((start & 0x03) as u8);
        })?;
        self.sensor()?.vstrt().write(|w| {
            w.set_start_high((start >> 2) as u8);
        })?;
        Ok(())
    }

    /// Get the 10-bit vertical window start line
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_vertical_window_line_start(&mut self) -> DriverResult<u16, I> {
        let low = self.sensor()?.com_1().read()?.vstrt_low();
        let high = self.sensor()?.vstrt().read()?.start_high();
        Ok(u16::from(high) << 2 | u16::from(low))
    }

    /// Set the 10-bit vertical window end line (VEND + COM1[3:2])
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `end > 0x3FF`, otherwise an error if
    /// the driver is not initialized or communication fails.
    pub fn set_vertical_window_line_end(&mut self, end: u16) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.check_range(u32::from(end), 0x3FF, 0)?;
        self.sensor()?.com_1().modify(|w| {
            w.set_vend_low((end & 0x03) as u8);
        })?;
        self.sensor()?.vend().write(|w| {
            w.set_end_high((end >> 2) as u8);
        })?;
        Ok(())
    }

    /// Get the 10-bit vertical window end line
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_vertical_window_line_end(&mut self) -> DriverResult<u16, I> {
        let low = self.sensor()?.com_1().read()?.vend_low();
        let high = self.sensor()?.vend().read()?.end_high();
        Ok(u16::from(high) << 2 | u16::from(low))
    }

    /// Enable or disable horizontal mirroring
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_horizontal_mirror(&mut self, enable: bool) -> DriverResult<(), I> {
        self.sensor()?.reg_04().modify(|w| {
            w.set_hmirror(enable);
        })?;
        Ok(())
    }

    /// Whether horizontal mirroring is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_horizontal_mirror(&mut self) -> DriverResult<bool, I> {
        Ok(self.sensor()?.reg_04().read()?.hmirror())
    }

    /// Enable or disable vertical flip
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_vertical_flip(&mut self, enable: bool) -> DriverResult<(), I> {
        self.sensor()?.reg_04().modify(|w| {
            w.set_vflip(enable);
        })?;
        Ok(())
    }

    /// Whether vertical flip is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_vertical_flip(&mut self) -> DriverResult<bool, I> {
        Ok(self.sensor()?.reg_04().read()?.vflip())
    }

    /// Set the 16-bit exposure value
    ///
    /// The value is spread over REG04[1:0] (bits 1:0), AEC (bits 9:2) and
    /// REG45[5:0] (bits 15:10).
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_aec(&mut self, aec: u16) -> DriverResult<(), I> {
        self.sensor()?.reg_04().modify(|w| {
            w.set_aec_low((aec & 0x03) as u8);
        })?;
        self.sensor()?.aec().write(|w| {
            w.set_aec_mid(((aec >> 2) & 0xFF) as u8);
        })?;
        self.sensor()?.reg_45().modify(|w| {
            w.set_aec_high((aec >> 10) as u8);
        })?;
        Ok(())
    }

    /// Get the 16-bit exposure value
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_aec(&mut self) -> DriverResult<u16, I> {
        let low = self.sensor()?.reg_04().read()?.aec_low();
        let mid = self.sensor()?.aec().read()?.aec_mid();
        let high = self.sensor()?.reg_45().read()?.aec_high();
        Ok(u16::from(high) << 10 | u16::from(mid) << 2 | u16::from(low))
    }

    /// Set the frame exposure pre-charge row number (REG08)
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_frame_exposure_pre_charge_row_number(&mut self, rows: u8) -> DriverResult<(), I> {
        self.sensor()?.reg_08().write(|w| {
            w.set_pre_charge_rows(rows);
        })?;
        Ok(())
    }

    /// Get the frame exposure pre-charge row number
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_frame_exposure_pre_charge_row_number(&mut self) -> DriverResult<u8, I> {
        Ok(self.sensor()?.reg_08().read()?.pre_charge_rows())
    }

    /// Set normal or standby mode
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_mode(&mut self, mode: Mode) -> DriverResult<(), I> {
        self.sensor()?.com_2().modify(|w| {
            w.set_standby(matches!(mode, Mode::Standby));
        })?;
        Ok(())
    }

    /// Get the operating mode
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_mode(&mut self) -> DriverResult<Mode, I> {
        let standby = self.sensor()?.com_2().read()?.standby();
        Ok(if standby { Mode::Standby } else { Mode::Normal })
    }

    /// Remap the PWDN/RESETB pins to SLVS/SLHS
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_power_reset_pin_remap(&mut self, enable: bool) -> DriverResult<(), I> {
        self.sensor()?.com_2().modify(|w| {
            w.set_pin_remap(enable);
        })?;
        Ok(())
    }

    /// Whether the PWDN/RESETB pins are remapped
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_power_reset_pin_remap(&mut self) -> DriverResult<bool, I> {
        Ok(self.sensor()?.com_2().read()?.pin_remap())
    }

    /// Set the output pad drive strength
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_output_drive(&mut self, drive: OutputDrive) -> DriverResult<(), I> {
        self.sensor()?.com_2().modify(|w| {
            w.set_output_drive(drive as u8);
        })?;
        Ok(())
    }

    /// Get the output pad drive strength
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_output_drive(&mut self) -> DriverResult<OutputDrive, I> {
        let bits = self.sensor()?.com_2().read()?.output_drive();
        Ok(OutputDrive::from_bits(bits))
    }

    /// Set the manual banding frequency
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_band(&mut self, band: Band) -> DriverResult<(), I> {
        self.sensor()?.com_3().modify(|w| {
            w.set_fifty_hz(matches!(band, Band::Hz50));
        })?;
        Ok(())
    }

    /// Get the manual banding frequency
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_band(&mut self) -> DriverResult<Band, I> {
        let fifty = self.sensor()?.com_3().read()?.fifty_hz();
        Ok(if fifty { Band::Hz50 } else { Band::Hz60 })
    }

    /// Enable or disable automatic banding detection
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_auto_band(&mut self, enable: bool) -> DriverResult<(), I> {
        self.sensor()?.com_3().modify(|w| {
            w.set_auto_band(enable);
        })?;
        Ok(())
    }

    /// Whether automatic banding detection is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_auto_band(&mut self) -> DriverResult<bool, I> {
        Ok(self.sensor()?.com_3().read()?.auto_band())
    }

    /// Resume live video after a snapshot (`true`) or stop after one frame
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_live_video_after_snapshot(&mut self, enable: bool) -> DriverResult<(), I> {
        self.sensor()?.com_3().modify(|w| {
            w.set_single_frame(!enable);
        })?;
        Ok(())
    }

    /// Whether live video resumes after a snapshot
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_live_video_after_snapshot(&mut self) -> DriverResult<bool, I> {
        Ok(!self.sensor()?.com_3().read()?.single_frame())
    }

    /// Set the clock output pin state while powered down
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_clock_output_power_down_pin_status(
        &mut self,
        status: PinStatus,
    ) -> DriverResult<(), I> {
        self.sensor()?.com_4().modify(|w| {
            w.set_clock_pin_last_state(matches!(status, PinStatus::LastState));
        })?;
        Ok(())
    }

    /// Get the clock output pin state while powered down
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_clock_output_power_down_pin_status(&mut self) -> DriverResult<PinStatus, I> {
        let last = self.sensor()?.com_4().read()?.clock_pin_last_state();
        Ok(if last {
            PinStatus::LastState
        } else {
            PinStatus::TriState
        })
    }

    /// Enable or disable the internal clock doubler
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_clock_rate_double(&mut self, enable: bool) -> DriverResult<(), I> {
        self.sensor()?.clkrc().modify(|w| {
            w.set_double(enable);
        })?;
        Ok(())
    }

    /// Whether the internal clock doubler is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_clock_rate_double(&mut self) -> DriverResult<bool, I> {
        Ok(self.sensor()?.clkrc().read()?.double())
    }

    /// Set the internal clock divider (CLKRC[5:0])
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `divider > 0x3F`, otherwise an error if
    /// the driver is not initialized or communication fails.
    pub fn set_clock_divider(&mut self, divider: u8) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.check_range(u32::from(divider), 0x3F, 0)?;
        self.sensor()?.clkrc().modify(|w| {
            w.set_divider(divider);
        })?;
        Ok(())
    }

    /// Get the internal clock divider
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_clock_divider(&mut self) -> DriverResult<u8, I> {
        Ok(self.sensor()?.clkrc().read()?.divider())
    }

    /// Set the sensor readout resolution
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_resolution(&mut self, resolution: Resolution) -> DriverResult<(), I> {
        self.sensor()?.com_7().modify(|w| {
            w.set_resolution(resolution as u8);
        })?;
        Ok(())
    }

    /// Get the sensor readout resolution
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownValue`] if COM7 holds a reserved resolution,
    /// otherwise an error if the driver is not initialized or communication
    /// fails.
    pub fn get_resolution(&mut self) -> DriverResult<Resolution, I> {
        let bits = self.sensor()?.com_7().read()?.resolution();
        Resolution::from_bits(bits).ok_or(Error::UnknownValue(bits))
    }

    /// Enable or disable zoom mode
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_zoom(&mut self, enable: bool) -> DriverResult<(), I> {
        self.sensor()?.com_7().modify(|w| {
            w.set_zoom(enable);
        })?;
        Ok(())
    }

    /// Whether zoom mode is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_zoom(&mut self) -> DriverResult<bool, I> {
        Ok(self.sensor()?.com_7().read()?.zoom())
    }

    /// Enable or disable the color bar test pattern
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_color_bar_test(&mut self, enable: bool) -> DriverResult<(), I> {
        self.sensor()?.com_7().modify(|w| {
            w.set_color_bar(enable);
        })?;
        Ok(())
    }

    /// Whether the color bar test pattern is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_color_bar_test(&mut self) -> DriverResult<bool, I> {
        Ok(self.sensor()?.com_7().read()?.color_bar())
    }

    /// Enable or disable the banding filter
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_band_filter(&mut self, enable: bool) -> DriverResult<(), I> {
        self.sensor()?.com_8().modify(|w| {
            w.set_band_filter(enable);
        })?;
        Ok(())
    }

    /// Whether the banding filter is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_band_filter(&mut self) -> DriverResult<bool, I> {
        Ok(self.sensor()?.com_8().read()?.band_filter())
    }

    /// Select automatic or manual gain control
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_agc_control(&mut self, control: Control) -> DriverResult<(), I> {
        self.sensor()?.com_8().modify(|w| {
            w.set_agc_auto(matches!(control, Control::Auto));
        })?;
        Ok(())
    }

    /// Get the gain control mode
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_agc_control(&mut self) -> DriverResult<Control, I> {
        Ok(Control::from_bit(self.sensor()?.com_8().read()?.agc_auto()))
    }

    /// Select automatic or manual exposure control
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_exposure_control(&mut self, control: Control) -> DriverResult<(), I> {
        self.sensor()?.com_8().modify(|w| {
            w.set_aec_auto(matches!(control, Control::Auto));
        })?;
        Ok(())
    }

    /// Get the exposure control mode
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_exposure_control(&mut self) -> DriverResult<Control, I> {
        Ok(Control::from_bit(self.sensor()?.com_8().read()?.aec_auto()))
    }

    /// Set the AGC gain ceiling
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_agc_gain_ceiling(&mut self, ceiling: AgcGain) -> DriverResult<(), I> {
        self.sensor()?.com_9().modify(|w| {
            w.set_agc_ceiling(ceiling as u8);
        })?;
        Ok(())
    }

    /// Get the AGC gain ceiling
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownValue`] if COM9 holds the reserved encoding,
    /// otherwise an error if the driver is not initialized or communication
    /// fails.
    pub fn get_agc_gain_ceiling(&mut self) -> DriverResult<AgcGain, I> {
        let bits = self.sensor()?.com_9().read()?.agc_ceiling();
        AgcGain::from_bits(bits).ok_or(Error::UnknownValue(bits))
    }

    /// Swap the CHSYNC pin output to HREF
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_chsync_href_swap(&mut self, enable: bool) -> DriverResult<(), I> {
        self.sensor()?.com_10().modify(|w| {
            w.set_chsync_to_href(enable);
        })?;
        Ok(())
    }

    /// Whether the CHSYNC pin outputs HREF
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_chsync_href_swap(&mut self) -> DriverResult<bool, I> {
        Ok(self.sensor()?.com_10().read()?.chsync_to_href())
    }

    /// Output CHSYNC on the HREF pin
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_href_chsync_swap(&mut self, enable: bool) -> DriverResult<(), I> {
        self.sensor()?.com_10().modify(|w| {
            w.set_href_to_chsync(enable);
        })?;
        Ok(())
    }

    /// Whether the HREF pin outputs CHSYNC
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_href_chsync_swap(&mut self) -> DriverResult<bool, I> {
        Ok(self.sensor()?.com_10().read()?.href_to_chsync())
    }

    /// Gate PCLK with HREF
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_pclk_output_qualified_by_href(&mut self, enable: bool) -> DriverResult<(), I> {
        self.sensor()?.com_10().modify(|w| {
            w.set_pclk_qualified(enable);
        })?;
        Ok(())
    }

    /// Whether PCLK is gated with HREF
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_pclk_output_qualified_by_href(&mut self) -> DriverResult<bool, I> {
        Ok(self.sensor()?.com_10().read()?.pclk_qualified())
    }

    /// Set the PCLK edge data is launched on
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_pclk_edge(&mut self, edge: Edge) -> DriverResult<(), I> {
        self.sensor()?.com_10().modify(|w| {
            w.set_pclk_rising(matches!(edge, Edge::Rising));
        })?;
        Ok(())
    }

    /// Get the PCLK edge data is launched on
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_pclk_edge(&mut self) -> DriverResult<Edge, I> {
        let rising = self.sensor()?.com_10().read()?.pclk_rising();
        Ok(if rising { Edge::Rising } else { Edge::Falling })
    }

    /// Set the HREF polarity
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_href_polarity(&mut self, polarity: Polarity) -> DriverResult<(), I> {
        self.sensor()?.com_10().modify(|w| {
            w.set_href_negative(polarity.is_negative());
        })?;
        Ok(())
    }

    /// Get the HREF polarity
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_href_polarity(&mut self) -> DriverResult<Polarity, I> {
        Ok(Polarity::from_bit(self.sensor()?.com_10().read()?.href_negative()))
    }

    /// Set the VSYNC polarity
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_vsync_polarity(&mut self, polarity: Polarity) -> DriverResult<(), I> {
        self.sensor()?.com_10().modify(|w| {
            w.set_vsync_negative(polarity.is_negative());
        })?;
        Ok(())
    }

    /// Get the VSYNC polarity
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_vsync_polarity(&mut self) -> DriverResult<Polarity, I> {
        Ok(Polarity::from_bit(self.sensor()?.com_10().read()?.vsync_negative()))
    }

    /// Set the HSYNC polarity
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_hsync_polarity(&mut self, polarity: Polarity) -> DriverResult<(), I> {
        self.sensor()?.com_10().modify(|w| {
            w.set_hsync_negative(polarity.is_negative());
        })?;
        Ok(())
    }

    /// Get the HSYNC polarity
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_hsync_polarity(&mut self) -> DriverResult<Polarity, I> {
        Ok(Polarity::from_bit(self.sensor()?.com_10().read()?.hsync_negative()))
    }

    /// Set the AEC/AGC stable operating region upper limit (AEW)
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_luminance_signal_high_range(&mut self, level: u8) -> DriverResult<(), I> {
        self.sensor()?.aew().write(|w| {
            w.set_high_range(level);
        })?;
        Ok(())
    }

    /// Get the AEC/AGC stable operating region upper limit
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_luminance_signal_high_range(&mut self) -> DriverResult<u8, I> {
        Ok(self.sensor()?.aew().read()?.high_range())
    }

    /// Set the AEC/AGC stable operating region lower limit (AEB)
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_luminance_signal_low_range(&mut self, level: u8) -> DriverResult<(), I> {
        self.sensor()?.aeb().write(|w| {
            w.set_low_range(level);
        })?;
        Ok(())
    }

    /// Get the AEC/AGC stable operating region lower limit
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_luminance_signal_low_range(&mut self) -> DriverResult<u8, I> {
        Ok(self.sensor()?.aeb().read()?.low_range())
    }

    /// Set the fast-mode large step thresholds (VV)
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] with `argument` 0 if `high > 0xF` or 1 if
    /// `low > 0xF`, otherwise an error if the driver is not initialized or
    /// communication fails.
    pub fn set_fast_mode_large_step_range(&mut self, high: u8, low: u8) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.check_range(u32::from(high), 0xF, 0)?;
        self.check_range(u32::from(low), 0xF, 1)?;
        self.sensor()?.vv().write(|w| {
            w.set_high(high);
            w.set_low(low);
        })?;
        Ok(())
    }

    /// Get the fast-mode large step thresholds as `(high, low)`
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_fast_mode_large_step_range(&mut self) -> DriverResult<(u8, u8), I> {
        let vv = self.sensor()?.vv().read()?;
        Ok((vv.high(), vv.low()))
    }

    /// Set the 12-bit line interval adjustment (dummy pixels)
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `interval > 0xFFF`, otherwise an error
    /// if the driver is not initialized or communication fails.
    pub fn set_line_interval_adjust(&mut self, interval: u16) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.check_range(u32::from(interval), 0xFFF, 0)?;
        self.sensor()?.frarl().write(|w| {
            w.set_line_interval_low((interval & 0xFF) as u8);
        })?;
        self.sensor()?.frame_rate_msb().modify(|w| {
            w.set_line_interval_high((interval >> 8) as u8);
        })?;
        Ok(())
    }

    /// Get the 12-bit line interval adjustment
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_line_interval_adjust(&mut self) -> DriverResult<u16, I> {
        let low = self.sensor()?.frarl().read()?.line_interval_low();
        let high = self.sensor()?.frame_rate_msb().read()?.line_interval_high();
        Ok(u16::from(high) << 8 | u16::from(low))
    }

    /// Set the 10-bit HSYNC position and width end point
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `end > 0x3FF`, otherwise an error if
    /// the driver is not initialized or communication fails.
    pub fn set_hsync_position_and_width_end_point(&mut self, end: u16) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.check_range(u32::from(end), 0x3FF, 0)?;
        self.sensor()?.hsyen().write(|w| {
            w.set_end_low((end & 0xFF) as u8);
        })?;
        self.sensor()?.frame_rate_msb().modify(|w| {
            w.set_hsync_end_high((end >> 8) as u8);
        })?;
        Ok(())
    }

    /// Get the 10-bit HSYNC position and width end point
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_hsync_position_and_width_end_point(&mut self) -> DriverResult<u16, I> {
        let low = self.sensor()?.hsyen().read()?.end_low();
        let high = self.sensor()?.frame_rate_msb().read()?.hsync_end_high();
        Ok(u16::from(high) << 8 | u16::from(low))
    }

    /// Set the 10-bit HSYNC position and width start point
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `start > 0x3FF`, otherwise an error if
    /// the driver is not initialized or communication fails.
    pub fn set_hsync_position_and_width_start_point(&mut self, start: u16) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.check_range(u32::from(start), 0x3FF, 0)?;
        self.sensor()?.hsyst().write(|w| {
            w.set_start_low((start & 0xFF) as u8);
        })?;
        self.sensor()?.frame_rate_msb().modify(|w| {
            w.set_hsync_start_high((start >> 8) as u8);
        })?;
        Ok(())
    }

    /// Get the 10-bit HSYNC position and width start point
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_hsync_position_and_width_start_point(&mut self) -> DriverResult<u16, I> {
        let low = self.sensor()?.hsyst().read()?.start_low();
        let high = self.sensor()?.frame_rate_msb().read()?.hsync_start_high();
        Ok(u16::from(high) << 8 | u16::from(low))
    }

    /// Set the 16-bit VSYNC pulse width (ADDVSL + ADDVSH)
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_vsync_pulse_width(&mut self, width: u16) -> DriverResult<(), I> {
        self.sensor()?.addvsl().write(|w| {
            w.set_width_low((width & 0xFF) as u8);
        })?;
        self.sensor()?.addvsh().write(|w| {
            w.set_width_high((width >> 8) as u8);
        })?;
        Ok(())
    }

    /// Get the 16-bit VSYNC pulse width
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_vsync_pulse_width(&mut self) -> DriverResult<u16, I> {
        let low = self.sensor()?.addvsl().read()?.width_low();
        let high = self.sensor()?.addvsh().read()?.width_high();
        Ok(u16::from_be_bytes([high, low]))
    }

    /// Set the luminance average (YAVG)
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_luminance_average(&mut self, average: u8) -> DriverResult<(), I> {
        self.sensor()?.yavg().write(|w| {
            w.set_average(average);
        })?;
        Ok(())
    }

    /// Get the luminance average computed by the sensor
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_luminance_average(&mut self) -> DriverResult<u8, I> {
        Ok(self.sensor()?.yavg().read()?.average())
    }

    /// Set the 11-bit horizontal window start (HREFST + REG32[2:0])
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `start > 0x7FF`, otherwise an error if
    /// the driver is not initialized or communication fails.
    pub fn set_horizontal_window_start(&mut self, start: u16) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.check_range(u32::from(start), 0x7FF, 0)?;
        self.sensor()?.reg_32().modify(|w| {
            w.set_href_start_low((start & 0x07) as u8);
        })?;
        self.sensor()?.hrefst().write(|w| {
            w.set_start_high((start >> 3) as u8);
        })?;
        Ok(())
    }

    /// Get the 11-bit horizontal window start
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_horizontal_window_start(&mut self) -> DriverResult<u16, I> {
        let low = self.sensor()?.reg_32().read()?.href_start_low();
        let high = self.sensor()?.hrefst().read()?.start_high();
        Ok(u16::from(high) << 3 | u16::from(low))
    }

    /// Set the 11-bit horizontal window end (HREFEND + REG32[5:3])
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `end > 0x7FF`, otherwise an error if
    /// the driver is not initialized or communication fails.
    pub fn set_horizontal_window_end(&mut self, end: u16) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.check_range(u32::from(end), 0x7FF, 0)?;
        self.sensor()?.reg_32().modify(|w| {
            w.set_href_end_low((end & 0x07) as u8);
        })?;
        self.sensor()?.hrefend().write(|w| {
            w.set_end_high((end >> 3) as u8);
        })?;
        Ok(())
    }

    /// Get the 11-bit horizontal window end
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_horizontal_window_end(&mut self) -> DriverResult<u16, I> {
        let low = self.sensor()?.reg_32().read()?.href_end_low();
        let high = self.sensor()?.hrefend().read()?.end_high();
        Ok(u16::from(high) << 3 | u16::from(low))
    }

    /// Set the pixel clock divider
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_pclk(&mut self, pclk: Pclk) -> DriverResult<(), I> {
        self.sensor()?.reg_32().modify(|w| {
            w.set_pclk(pclk as u8);
        })?;
        Ok(())
    }

    /// Get the pixel clock divider
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_pclk(&mut self) -> DriverResult<Pclk, I> {
        Ok(Pclk::from_bits(self.sensor()?.reg_32().read()?.pclk()))
    }

    /// Enable or disable the zoom window horizontal start point
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_zoom_window_horizontal_start_point(&mut self, enable: bool) -> DriverResult<(), I> {
        self.sensor()?.arcom_2().modify(|w| {
            w.set_zoom_horizontal_start(enable);
        })?;
        Ok(())
    }

    /// Whether the zoom window horizontal start point is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_zoom_window_horizontal_start_point(&mut self) -> DriverResult<bool, I> {
        Ok(self.sensor()?.arcom_2().read()?.zoom_horizontal_start())
    }

    /// Set the 10-bit frame length adjustment (FLL + FLH[1:0])
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `length > 0x3FF`, otherwise an error if
    /// the driver is not initialized or communication fails.
    pub fn set_frame_length_adjustment(&mut self, length: u16) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.check_range(u32::from(length), 0x3FF, 0)?;
        self.sensor()?.fll().write(|w| {
            w.set_length_low((length & 0xFF) as u8);
        })?;
        self.sensor()?.flh().modify(|w| {
            w.set_length_high((length >> 8) as u8);
        })?;
        Ok(())
    }

    /// Get the 10-bit frame length adjustment
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_frame_length_adjustment(&mut self) -> DriverResult<u16, I> {
        let low = self.sensor()?.fll().read()?.length_low();
        let high = self.sensor()?.flh().read()?.length_high();
        Ok(u16::from(high) << 8 | u16::from(low))
    }

    /// Set the 10-bit zoom mode vertical window start point (ZOOMS + COM19[1:0])
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `start > 0x3FF`, otherwise an error if
    /// the driver is not initialized or communication fails.
    pub fn set_zoom_mode_vertical_window_start_point(&mut self, start: u16) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.check_range(u32::from(start), 0x3FF, 0)?;
        self.sensor()?.com_19().modify(|w| {
            w.set_zoom_start_low((start & 0x03) as u8);
        })?;
        self.sensor()?.zooms().write(|w| {
            w.set_zoom_start_high((start >> 2) as u8);
        })?;
        Ok(())
    }

    /// Get the 10-bit zoom mode vertical window start point
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_zoom_mode_vertical_window_start_point(&mut self) -> DriverResult<u16, I> {
        let low = self.sensor()?.com_19().read()?.zoom_start_low();
        let high = self.sensor()?.zooms().read()?.zoom_start_high();
        Ok(u16::from(high) << 2 | u16::from(low))
    }

    /// Set the flash light control register (COM22)
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_flash_light(&mut self, control: u8) -> DriverResult<(), I> {
        self.sensor()?.com_22().write(|w| {
            w.set_flash_light(control);
        })?;
        Ok(())
    }

    /// Get the flash light control register
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_flash_light(&mut self) -> DriverResult<u8, I> {
        Ok(self.sensor()?.com_22().read()?.flash_light())
    }

    /// Set the 10-bit 50 Hz banding AEC step (BD50 + COM25[7:6])
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `aec > 0x3FF`, otherwise an error if
    /// the driver is not initialized or communication fails.
    pub fn set_50hz_banding_aec(&mut self, aec: u16) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.check_range(u32::from(aec), 0x3FF, 0)?;
        self.sensor()?.bd_50().write(|w| {
            w.set_fifty_low((aec & 0xFF) as u8);
        })?;
        self.sensor()?.com_25().modify(|w| {
            w.set_fifty_high((aec >> 8) as u8);
        })?;
        Ok(())
    }

    /// Get the 10-bit 50 Hz banding AEC step
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_50hz_banding_aec(&mut self) -> DriverResult<u16, I> {
        let low = self.sensor()?.bd_50().read()?.fifty_low();
        let high = self.sensor()?.com_25().read()?.fifty_high();
        Ok(u16::from(high) << 8 | u16::from(low))
    }

    /// Set the 10-bit 60 Hz banding AEC step (BD60 + COM25[5:4])
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `aec > 0x3FF`, otherwise an error if
    /// the driver is not initialized or communication fails.
    pub fn set_60hz_banding_aec(&mut self, aec: u16) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.check_range(u32::from(aec), 0x3FF, 0)?;
        self.sensor()?.bd_60().write(|w| {
            w.set_sixty_low((aec & 0xFF) as u8);
        })?;
        self.sensor()?.com_25().modify(|w| {
            w.set_sixty_high((aec >> 8) as u8);
        })?;
        Ok(())
    }

    /// Get the 10-bit 60 Hz banding AEC step
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_60hz_banding_aec(&mut self) -> DriverResult<u16, I> {
        let low = self.sensor()?.bd_60().read()?.sixty_low();
        let high = self.sensor()?.com_25().read()?.sixty_high();
        Ok(u16::from(high) << 8 | u16::from(low))
    }

    /// Set the 16-zone average weights
    ///
    /// Two bits per zone, zone 1 in bits 1:0. The bytes go to REG5D..REG60,
    /// least significant first.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_16_zone_average_weight_option(&mut self, weights: u32) -> DriverResult<(), I> {
        let [b0, b1, b2, b3] = weights.to_le_bytes();
        self.sensor()?.zone_weight_byte_0().write(|w| {
            w.set_weight(b0);
        })?;
        self.sensor()?.zone_weight_byte_1().write(|w| {
            w.set_weight(b1);
        })?;
        self.sensor()?.zone_weight_byte_2().write(|w| {
            w.set_weight(b2);
        })?;
        self.sensor()?.zone_weight_byte_3().write(|w| {
            w.set_weight(b3);
        })?;
        Ok(())
    }

    /// Get the 16-zone average weights
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_16_zone_average_weight_option(&mut self) -> DriverResult<u32, I> {
        let b0 = self.sensor()?.zone_weight_byte_0().read()?.weight();
        let b1 = self.sensor()?.zone_weight_byte_1().read()?.weight();
        let b2 = self.sensor()?.zone_weight_byte_2().read()?.weight();
        let b3 = self.sensor()?.zone_weight_byte_3().read()?.weight();
        Ok(u32::from_le_bytes([b0, b1, b2, b3]))
    }

    /// Set the histogram-based AEC low level
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_histogram_algorithm_low_level(&mut self, level: u8) -> DriverResult<(), I> {
        self.sensor()?.histogram_low().write(|w| {
            w.set_level(level);
        })?;
        Ok(())
    }

    /// Get the histogram-based AEC low level
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_histogram_algorithm_low_level(&mut self) -> DriverResult<u8, I> {
        Ok(self.sensor()?.histogram_low().read()?.level())
    }

    /// Set the histogram-based AEC high level
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_histogram_algorithm_high_level(&mut self, level: u8) -> DriverResult<(), I> {
        self.sensor()?.histogram_high().write(|w| {
            w.set_level(level);
        })?;
        Ok(())
    }

    /// Get the histogram-based AEC high level
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_histogram_algorithm_high_level(&mut self) -> DriverResult<u8, I> {
        Ok(self.sensor()?.histogram_high().read()?.level())
    }
}
