//! DSP bank field accessors
//!
//! The DSP bank controls the image pipeline (scaling, color processing,
//! output format), the SCCB slave and the embedded microcontroller. Most
//! pipeline registers only take effect while [`set_dsp_bypass`] is enabled,
//! which is how the basic profile brackets its writes.
//!
//! [`set_dsp_bypass`]: Ov2640Driver::set_dsp_bypass

use crate::Error;
use crate::control::{ControlLine, Resource};
use crate::device::{DriverResult, Ov2640Driver};
use device_driver::RegisterInterface;

/// DVP output pixel format (IMAGE_MODE[3:2])
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DvpOutputFormat {
    /// YUV422
    Yuv422 = 0,
    /// Raw 10-bit
    Raw10 = 1,
    /// RGB565
    Rgb565 = 2,
}

impl DvpOutputFormat {
    /// Decode the two-bit field value, `None` for the reserved encoding
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::Yuv422),
            1 => Some(Self::Raw10),
            2 => Some(Self::Rgb565),
            _ => None,
        }
    }
}

/// HREF timing in DVP JPEG output mode (IMAGE_MODE bit 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HrefTiming {
    /// HREF follows the sensor
    Sensor = 0,
    /// HREF equals VSYNC
    Vsync = 1,
}

/// YUV422 byte order on the DVP bus (IMAGE_MODE bit 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ByteSwap {
    /// Luma first (YUYV)
    Yuyv = 0,
    /// Chroma first (UYVY)
    Uvuv = 1,
}

/// Module reset lines in the RESET register, by bit position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetTarget {
    /// Embedded microcontroller
    Microcontroller = 6,
    /// SCCB slave
    Sccb = 5,
    /// JPEG encoder
    Jpeg = 4,
    /// DVP interface
    Dvp = 2,
    /// Image processing unit
    Ipu = 1,
    /// CIF scaler
    Cif = 0,
}

/// Microcontroller built-in self test bits in MC_BIST, by bit position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bist {
    /// Microcontroller reset
    MicrocontrollerReset = 7,
    /// Boot ROM select
    BootRomSelect = 6,
    /// R/W 1 error for 12 KB memory
    Rw1Error12kByte = 5,
    /// R/W 0 error for 12 KB memory
    Rw0Error12kByte = 4,
    /// R/W 1 error for 512 byte memory
    Rw1Error512Byte = 3,
    /// R/W 0 error for 512 byte memory
    Rw0Error512Byte = 2,
    /// BIST busy bit on read, one-shot reset on write
    BusyOrOneShotReset = 1,
    /// Launch BIST
    Launch = 0,
}

impl Bist {
    const fn mask(self) -> u8 {
        1 << self as u8
    }
}

impl<I, PD, RST> Ov2640Driver<I, PD, RST>
where
    I: RegisterInterface<AddressType = u8> + Resource,
    PD: ControlLine,
    RST: ControlLine,
{
    /// Bypass the DSP and output sensor data directly
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_dsp_bypass(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.r_bypass().modify(|w| {
            w.set_bypass(enable);
        })?;
        Ok(())
    }

    /// Whether the DSP is bypassed
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_dsp_bypass(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.r_bypass().read()?.bypass())
    }

    /// Let the DSP pick the DVP clock divider automatically
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_auto_mode(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.r_dvp_sp().modify(|w| {
            w.set_auto_mode(enable);
        })?;
        Ok(())
    }

    /// Whether the DVP clock divider is chosen automatically
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_auto_mode(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.r_dvp_sp().read()?.auto_mode())
    }

    /// Set the manual DVP PCLK divider (R_DVP_SP[6:0])
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `pclk > 0x7F`, otherwise an error if
    /// the driver is not initialized or communication fails.
    pub fn set_dvp_pclk(&mut self, pclk: u8) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.check_range(u32::from(pclk), 0x7F, 0)?;
        self.dsp()?.r_dvp_sp().modify(|w| {
            w.set_pclk(pclk);
        })?;
        Ok(())
    }

    /// Get the manual DVP PCLK divider
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_dvp_pclk(&mut self) -> DriverResult<u8, I> {
        Ok(self.dsp()?.r_dvp_sp().read()?.pclk())
    }

    /// Output luma only (Y8) on the DVP bus
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_dvp_y8(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.image_mode().modify(|w| {
            w.set_y_eight(enable);
        })?;
        Ok(())
    }

    /// Whether Y8 output is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_dvp_y8(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.image_mode().read()?.y_eight())
    }

    /// Enable or disable the JPEG encoder output
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_jpeg_output(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.image_mode().modify(|w| {
            w.set_jpeg(enable);
        })?;
        Ok(())
    }

    /// Whether the JPEG encoder output is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_jpeg_output(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.image_mode().read()?.jpeg())
    }

    /// Set the DVP output pixel format
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_dvp_output_format(&mut self, format: DvpOutputFormat) -> DriverResult<(), I> {
        self.dsp()?.image_mode().modify(|w| {
            w.set_output_format(format as u8);
        })?;
        Ok(())
    }

    /// Get the DVP output pixel format
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownValue`] for the reserved encoding, otherwise an
    /// error if the driver is not initialized or communication fails.
    pub fn get_dvp_output_format(&mut self) -> DriverResult<DvpOutputFormat, I> {
        let bits = self.dsp()?.image_mode().read()?.output_format();
        DvpOutputFormat::from_bits(bits).ok_or(Error::UnknownValue(bits))
    }

    /// Set the HREF timing used in DVP JPEG output mode
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_dvp_jpeg_output_href_timing(&mut self, timing: HrefTiming) -> DriverResult<(), I> {
        self.dsp()?.image_mode().modify(|w| {
            w.set_href_timing(matches!(timing, HrefTiming::Vsync));
        })?;
        Ok(())
    }

    /// Get the HREF timing used in DVP JPEG output mode
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_dvp_jpeg_output_href_timing(&mut self) -> DriverResult<HrefTiming, I> {
        let vsync = self.dsp()?.image_mode().read()?.href_timing();
        Ok(if vsync {
            HrefTiming::Vsync
        } else {
            HrefTiming::Sensor
        })
    }

    /// Set the YUV422 byte order on the DVP bus
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_byte_swap(&mut self, swap: ByteSwap) -> DriverResult<(), I> {
        self.dsp()?.image_mode().modify(|w| {
            w.set_byte_swap(matches!(swap, ByteSwap::Uvuv));
        })?;
        Ok(())
    }

    /// Get the YUV422 byte order on the DVP bus
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_byte_swap(&mut self) -> DriverResult<ByteSwap, I> {
        let swapped = self.dsp()?.image_mode().read()?.byte_swap();
        Ok(if swapped { ByteSwap::Uvuv } else { ByteSwap::Yuyv })
    }

    /// Assert (`true`) or release a module reset
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_reset(&mut self, target: ResetTarget, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.dsp_reset().modify(|w| match target {
            ResetTarget::Microcontroller => w.set_microcontroller(enable),
            ResetTarget::Sccb => w.set_sccb(enable),
            ResetTarget::Jpeg => w.set_jpeg(enable),
            ResetTarget::Dvp => w.set_dvp(enable),
            ResetTarget::Ipu => w.set_ipu(enable),
            ResetTarget::Cif => w.set_cif(enable),
        })?;
        Ok(())
    }

    /// Whether a module reset is asserted
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_reset(&mut self, target: ResetTarget) -> DriverResult<bool, I> {
        let reset = self.dsp()?.dsp_reset().read()?;
        Ok(match target {
            ResetTarget::Microcontroller => reset.microcontroller(),
            ResetTarget::Sccb => reset.sccb(),
            ResetTarget::Jpeg => reset.jpeg(),
            ResetTarget::Dvp => reset.dvp(),
            ResetTarget::Ipu => reset.ipu(),
            ResetTarget::Cif => reset.cif(),
        })
    }

    /// Set the SCCB master speed (MS_SP)
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_sccb_master_speed(&mut self, speed: u8) -> DriverResult<(), I> {
        self.dsp()?.ms_sp().write(|w| {
            w.set_speed(speed);
        })?;
        Ok(())
    }

    /// Get the SCCB master speed
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_sccb_master_speed(&mut self) -> DriverResult<u8, I> {
        Ok(self.dsp()?.ms_sp().read()?.speed())
    }

    /// Set the SCCB slave ID (SS_ID)
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_sccb_slave_id(&mut self, id: u8) -> DriverResult<(), I> {
        self.dsp()?.ss_id().write(|w| {
            w.set_id(id);
        })?;
        Ok(())
    }

    /// Get the SCCB slave ID
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_sccb_slave_id(&mut self) -> DriverResult<u8, I> {
        Ok(self.dsp()?.ss_id().read()?.id())
    }

    /// Enable SCCB register address auto-increment
    ///
    /// The driver never issues burst accesses, so this only affects other
    /// SCCB masters.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_address_auto_increase(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.ss_ctrl().modify(|w| {
            w.set_auto_increase(enable);
        })?;
        Ok(())
    }

    /// Whether SCCB address auto-increment is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_address_auto_increase(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.ss_ctrl().read()?.auto_increase())
    }

    /// Enable or disable the SCCB slave
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_sccb(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.ss_ctrl().modify(|w| {
            w.set_sccb(enable);
        })?;
        Ok(())
    }

    /// Whether the SCCB slave is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_sccb(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.ss_ctrl().read()?.sccb())
    }

    /// Delay the SCCB master clock
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_sccb_master_clock_delay(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.ss_ctrl().modify(|w| {
            w.set_master_clock_delay(enable);
        })?;
        Ok(())
    }

    /// Whether the SCCB master clock is delayed
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_sccb_master_clock_delay(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.ss_ctrl().read()?.master_clock_delay())
    }

    /// Enable SCCB master access
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_sccb_master_access(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.ss_ctrl().modify(|w| {
            w.set_master_access(enable);
        })?;
        Ok(())
    }

    /// Whether SCCB master access is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_sccb_master_access(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.ss_ctrl().read()?.master_access())
    }

    /// Enable sensor pass-through access
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_sensor_pass_through_access(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.ss_ctrl().modify(|w| {
            w.set_pass_through(enable);
        })?;
        Ok(())
    }

    /// Whether sensor pass-through access is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_sensor_pass_through_access(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.ss_ctrl().read()?.pass_through())
    }

    /// Set or clear one microcontroller BIST bit
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_bist(&mut self, bist: Bist, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.mc_bist().modify(|w| {
            let bits = w.bist();
            w.set_bist(if enable {
                bits | bist.mask()
            } else {
                bits & !bist.mask()
            });
        })?;
        Ok(())
    }

    /// Read one microcontroller BIST bit
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_bist(&mut self, bist: Bist) -> DriverResult<bool, I> {
        Ok(self.dsp()?.mc_bist().read()?.bist() & bist.mask() != 0)
    }

    /// Set the 16-bit program memory pointer address (MC_AL + MC_AH)
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_program_memory_pointer_address(&mut self, address: u16) -> DriverResult<(), I> {
        let [low, high] = address.to_le_bytes();
        self.dsp()?.mc_al().write(|w| {
            w.set_address_low(low);
        })?;
        self.dsp()?.mc_ah().write(|w| {
            w.set_address_high(high);
        })?;
        Ok(())
    }

    /// Get the 16-bit program memory pointer address
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_program_memory_pointer_address(&mut self) -> DriverResult<u16, I> {
        let low = self.dsp()?.mc_al().read()?.address_low();
        let high = self.dsp()?.mc_ah().read()?.address_high();
        Ok(u16::from_le_bytes([low, high]))
    }

    /// Write the byte at the program memory pointer (MC_D)
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_program_memory_pointer_access_address(&mut self, data: u8) -> DriverResult<(), I> {
        self.dsp()?.mc_d().write(|w| {
            w.set_data(data);
        })?;
        Ok(())
    }

    /// Read the byte at the program memory pointer
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_program_memory_pointer_access_address(&mut self) -> DriverResult<u8, I> {
        Ok(self.dsp()?.mc_d().read()?.data())
    }

    /// Set the SCCB protocol command register (P_CMD)
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_sccb_protocol_command(&mut self, command: u8) -> DriverResult<(), I> {
        self.dsp()?.p_cmd().write(|w| {
            w.set_command(command);
        })?;
        Ok(())
    }

    /// Get the SCCB protocol command register
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_sccb_protocol_command(&mut self) -> DriverResult<u8, I> {
        Ok(self.dsp()?.p_cmd().read()?.command())
    }

    /// Set the SCCB protocol status register (P_STATUS)
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_sccb_protocol_status(&mut self, status: u8) -> DriverResult<(), I> {
        self.dsp()?.p_status().write(|w| {
            w.set_status(status);
        })?;
        Ok(())
    }

    /// Get the SCCB protocol status register
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_sccb_protocol_status(&mut self) -> DriverResult<u8, I> {
        Ok(self.dsp()?.p_status().read()?.status())
    }

    // CTRL1 module enables

    /// Enable color interpolation (CIP)
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_cip(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.ctrl_1().modify(|w| {
            w.set_cip(enable);
        })?;
        Ok(())
    }

    /// Whether color interpolation is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_cip(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.ctrl_1().read()?.cip())
    }

    /// Enable the DMY module
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_dmy(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.ctrl_1().modify(|w| {
            w.set_dmy(enable);
        })?;
        Ok(())
    }

    /// Whether the DMY module is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_dmy(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.ctrl_1().read()?.dmy())
    }

    /// Enable raw gamma
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_raw_gma(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.ctrl_1().modify(|w| {
            w.set_raw_gma(enable);
        })?;
        Ok(())
    }

    /// Whether raw gamma is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_raw_gma(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.ctrl_1().read()?.raw_gma())
    }

    /// Enable digital gain (DG)
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_dg(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.ctrl_1().modify(|w| {
            w.set_dg(enable);
        })?;
        Ok(())
    }

    /// Whether digital gain is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_dg(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.ctrl_1().read()?.dg())
    }

    /// Enable automatic white balance
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_awb(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.ctrl_1().modify(|w| {
            w.set_awb(enable);
        })?;
        Ok(())
    }

    /// Whether automatic white balance is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_awb(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.ctrl_1().read()?.awb())
    }

    /// Enable the AWB gain stage
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_awb_gain(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.ctrl_1().modify(|w| {
            w.set_awb_gain(enable);
        })?;
        Ok(())
    }

    /// Whether the AWB gain stage is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_awb_gain(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.ctrl_1().read()?.awb_gain())
    }

    /// Enable lens correction
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_lenc(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.ctrl_1().modify(|w| {
            w.set_lenc(enable);
        })?;
        Ok(())
    }

    /// Whether lens correction is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_lenc(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.ctrl_1().read()?.lenc())
    }

    /// Enable the PRE module
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_pre(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.ctrl_1().modify(|w| {
            w.set_pre(enable);
        })?;
        Ok(())
    }

    /// Whether the PRE module is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_pre(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.ctrl_1().read()?.pre())
    }

    // CTRL0 module enables

    /// Enable the AEC statistics block
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_aec_enable(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.ctrl_0().modify(|w| {
            w.set_aec_en(enable);
        })?;
        Ok(())
    }

    /// Whether the AEC statistics block is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_aec_enable(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.ctrl_0().read()?.aec_en())
    }

    /// Set AEC_SEL
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_aec_sel(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.ctrl_0().modify(|w| {
            w.set_aec_sel(enable);
        })?;
        Ok(())
    }

    /// Get AEC_SEL
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_aec_sel(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.ctrl_0().read()?.aec_sel())
    }

    /// Set STAT_SEL
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_stat_sel(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.ctrl_0().modify(|w| {
            w.set_stat_sel(enable);
        })?;
        Ok(())
    }

    /// Get STAT_SEL
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_stat_sel(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.ctrl_0().read()?.stat_sel())
    }

    /// Set VFIRST
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_vfirst(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.ctrl_0().modify(|w| {
            w.set_vfirst(enable);
        })?;
        Ok(())
    }

    /// Get VFIRST
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_vfirst(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.ctrl_0().read()?.vfirst())
    }

    /// Enable YUV422 processing
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_yuv422(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.ctrl_0().modify(|w| {
            w.set_yuv_four_two_two(enable);
        })?;
        Ok(())
    }

    /// Whether YUV422 processing is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_yuv422(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.ctrl_0().read()?.yuv_four_two_two())
    }

    /// Enable YUV processing
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_yuv(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.ctrl_0().modify(|w| {
            w.set_yuv(enable);
        })?;
        Ok(())
    }

    /// Whether YUV processing is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_yuv(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.ctrl_0().read()?.yuv())
    }

    /// Enable RGB processing
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_rgb(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.ctrl_0().modify(|w| {
            w.set_rgb(enable);
        })?;
        Ok(())
    }

    /// Whether RGB processing is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_rgb(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.ctrl_0().read()?.rgb())
    }

    /// Enable raw processing
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_raw(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.ctrl_0().modify(|w| {
            w.set_raw(enable);
        })?;
        Ok(())
    }

    /// Whether raw processing is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_raw(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.ctrl_0().read()?.raw())
    }

    // CTRL2 / CTRL3 module enables

    /// Enable down-sizing (DCW)
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_dcw(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.ctrl_2().modify(|w| {
            w.set_dcw(enable);
        })?;
        Ok(())
    }

    /// Whether down-sizing is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_dcw(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.ctrl_2().read()?.dcw())
    }

    /// Enable special digital effects (SDE)
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_sde(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.ctrl_2().modify(|w| {
            w.set_sde(enable);
        })?;
        Ok(())
    }

    /// Whether special digital effects are enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_sde(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.ctrl_2().read()?.sde())
    }

    /// Enable UV adjustment
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_uv_adj(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.ctrl_2().modify(|w| {
            w.set_uv_adj(enable);
        })?;
        Ok(())
    }

    /// Whether UV adjustment is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_uv_adj(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.ctrl_2().read()?.uv_adj())
    }

    /// Enable UV averaging
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_uv_avg(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.ctrl_2().modify(|w| {
            w.set_uv_avg(enable);
        })?;
        Ok(())
    }

    /// Whether UV averaging is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_uv_avg(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.ctrl_2().read()?.uv_avg())
    }

    /// Enable the color matrix
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_cmx(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.ctrl_2().modify(|w| {
            w.set_cmx(enable);
        })?;
        Ok(())
    }

    /// Whether the color matrix is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_cmx(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.ctrl_2().read()?.cmx())
    }

    /// Enable black pixel correction
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_bpc(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.ctrl_3().modify(|w| {
            w.set_bpc(enable);
        })?;
        Ok(())
    }

    /// Whether black pixel correction is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_bpc(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.ctrl_3().read()?.bpc())
    }

    /// Enable white pixel correction
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_wpc(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.ctrl_3().modify(|w| {
            w.set_wpc(enable);
        })?;
        Ok(())
    }

    /// Whether white pixel correction is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_wpc(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.ctrl_3().read()?.wpc())
    }

    /// Set the SDE indirect register address (BPADDR)
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_sde_indirect_register_address(&mut self, address: u8) -> DriverResult<(), I> {
        self.dsp()?.bpaddr().write(|w| {
            w.set_address(address);
        })?;
        Ok(())
    }

    /// Get the SDE indirect register address
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_sde_indirect_register_address(&mut self) -> DriverResult<u8, I> {
        Ok(self.dsp()?.bpaddr().read()?.address())
    }

    /// Write the SDE indirect register data (BPDATA)
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_sde_indirect_register_data(&mut self, data: u8) -> DriverResult<(), I> {
        self.dsp()?.bpdata().write(|w| {
            w.set_data(data);
        })?;
        Ok(())
    }

    /// Read the SDE indirect register data
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_sde_indirect_register_data(&mut self) -> DriverResult<u8, I> {
        Ok(self.dsp()?.bpdata().read()?.data())
    }

    /// Set the 12-bit image horizontal size
    ///
    /// Bits 10:3 go to HSIZE8, bit 11 and bits 2:0 to SIZEL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `size > 0xFFF`, otherwise an error if
    /// the driver is not initialized or communication fails.
    pub fn set_image_horizontal(&mut self, size: u16) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.check_range(u32::from(size), 0xFFF, 0)?;
        self.dsp()?.sizel().modify(|w| {
            w.set_h_size_top(size & 0x800 != 0);
            w.set_h_size_low((size & 0x07) as u8);
        })?;
        self.dsp()?.hsize_8().write(|w| {
            w.set_size_mid(((size >> 3) & 0xFF) as u8);
        })?;
        Ok(())
    }

    /// Get the 12-bit image horizontal size
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_image_horizontal(&mut self) -> DriverResult<u16, I> {
        let sizel = self.dsp()?.sizel().read()?;
        let mid = self.dsp()?.hsize_8().read()?.size_mid();
        Ok(u16::from(sizel.h_size_top()) << 11
            | u16::from(mid) << 3
            | u16::from(sizel.h_size_low()))
    }

    /// Set the 11-bit image vertical size
    ///
    /// Bits 10:3 go to VSIZE8, bits 2:0 to SIZEL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `size > 0x7FF`, otherwise an error if
    /// the driver is not initialized or communication fails.
    pub fn set_image_vertical(&mut self, size: u16) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.check_range(u32::from(size), 0x7FF, 0)?;
        self.dsp()?.sizel().modify(|w| {
            w.set_v_size_low((size & 0x07) as u8);
        })?;
        self.dsp()?.vsize_8().write(|w| {
            w.set_size_mid((size >> 3) as u8);
        })?;
        Ok(())
    }

    /// Get the 11-bit image vertical size
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_image_vertical(&mut self) -> DriverResult<u16, I> {
        let low = self.dsp()?.sizel().read()?.v_size_low();
        let mid = self.dsp()?.vsize_8().read()?.size_mid();
        Ok(u16::from(mid) << 3 | u16::from(low))
    }

    /// Set the JPEG quantization scale factor (QS)
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_quantization_scale_factor(&mut self, scale: u8) -> DriverResult<(), I> {
        self.dsp()?.qs().write(|w| {
            w.set_scale(scale);
        })?;
        Ok(())
    }

    /// Get the JPEG quantization scale factor
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_quantization_scale_factor(&mut self) -> DriverResult<u8, I> {
        Ok(self.dsp()?.qs().read()?.scale())
    }

    /// Set LP_DP
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_lp_dp(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.ctrli().modify(|w| {
            w.set_lp_dp(enable);
        })?;
        Ok(())
    }

    /// Get LP_DP
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_lp_dp(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.ctrli().read()?.lp_dp())
    }

    /// Enable rounding in the down-sampler
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_round(&mut self, enable: bool) -> DriverResult<(), I> {
        self.dsp()?.ctrli().modify(|w| {
            w.set_round(enable);
        })?;
        Ok(())
    }

    /// Whether rounding is enabled in the down-sampler
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_round(&mut self) -> DriverResult<bool, I> {
        Ok(self.dsp()?.ctrli().read()?.round())
    }

    /// Set the vertical down-sampling divider (CTRLI[5:3])
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `divider > 7`, otherwise an error if
    /// the driver is not initialized or communication fails.
    pub fn set_vertical_divider(&mut self, divider: u8) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.check_range(u32::from(divider), 0x7, 0)?;
        self.dsp()?.ctrli().modify(|w| {
            w.set_v_divider(divider);
        })?;
        Ok(())
    }

    /// Get the vertical down-sampling divider
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_vertical_divider(&mut self) -> DriverResult<u8, I> {
        Ok(self.dsp()?.ctrli().read()?.v_divider())
    }

    /// Set the horizontal down-sampling divider (CTRLI[2:0])
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `divider > 7`, otherwise an error if
    /// the driver is not initialized or communication fails.
    pub fn set_horizontal_divider(&mut self, divider: u8) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.check_range(u32::from(divider), 0x7, 0)?;
        self.dsp()?.ctrli().modify(|w| {
            w.set_h_divider(divider);
        })?;
        Ok(())
    }

    /// Get the horizontal down-sampling divider
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_horizontal_divider(&mut self) -> DriverResult<u8, I> {
        Ok(self.dsp()?.ctrli().read()?.h_divider())
    }

    /// Set the 10-bit horizontal size, in units of 4 pixels
    ///
    /// Bits 7:0 go to HSIZE, bit 8 to VHYX and bit 9 to TEST.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `size > 0x3FF`, otherwise an error if
    /// the driver is not initialized or communication fails.
    pub fn set_horizontal_size(&mut self, size: u16) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.check_range(u32::from(size), 0x3FF, 0)?;
        self.dsp()?.hsize().write(|w| {
            w.set_size_low((size & 0xFF) as u8);
        })?;
        self.dsp()?.vhyx().modify(|w| {
            w.set_h_size_bit_eight(size & 0x100 != 0);
        })?;
        self.dsp()?.test().modify(|w| {
            w.set_h_size_bit_nine(size & 0x200 != 0);
        })?;
        Ok(())
    }

    /// Get the 10-bit horizontal size
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_horizontal_size(&mut self) -> DriverResult<u16, I> {
        let low = self.dsp()?.hsize().read()?.size_low();
        let bit_eight = self.dsp()?.vhyx().read()?.h_size_bit_eight();
        let bit_nine = self.dsp()?.test().read()?.h_size_bit_nine();
        Ok(u16::from(bit_nine) << 9 | u16::from(bit_eight) << 8 | u16::from(low))
    }

    /// Set the 9-bit vertical size, in units of 4 lines
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `size > 0x1FF`, otherwise an error if
    /// the driver is not initialized or communication fails.
    pub fn set_vertical_size(&mut self, size: u16) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.check_range(u32::from(size), 0x1FF, 0)?;
        self.dsp()?.vsize().write(|w| {
            w.set_size_low((size & 0xFF) as u8);
        })?;
        self.dsp()?.vhyx().modify(|w| {
            w.set_v_size_bit_eight(size & 0x100 != 0);
        })?;
        Ok(())
    }

    /// Get the 9-bit vertical size
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_vertical_size(&mut self) -> DriverResult<u16, I> {
        let low = self.dsp()?.vsize().read()?.size_low();
        let bit_eight = self.dsp()?.vhyx().read()?.v_size_bit_eight();
        Ok(u16::from(bit_eight) << 8 | u16::from(low))
    }

    /// Set the 11-bit horizontal offset (XOFFL + VHYX[2:0])
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `offset > 0x7FF`, otherwise an error if
    /// the driver is not initialized or communication fails.
    pub fn set_offset_x(&mut self, offset: u16) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.check_range(u32::from(offset), 0x7FF, 0)?;
        self.dsp()?.xoffl().write(|w| {
            w.set_offset_low((offset & 0xFF) as u8);
        })?;
        self.dsp()?.vhyx().modify(|w| {
            w.set_x_offset_high((offset >> 8) as u8);
        })?;
        Ok(())
    }

    /// Get the 11-bit horizontal offset
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_offset_x(&mut self) -> DriverResult<u16, I> {
        let low = self.dsp()?.xoffl().read()?.offset_low();
        let high = self.dsp()?.vhyx().read()?.x_offset_high();
        Ok(u16::from(high) << 8 | u16::from(low))
    }

    /// Set the 11-bit vertical offset (YOFFL + VHYX[6:4])
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `offset > 0x7FF`, otherwise an error if
    /// the driver is not initialized or communication fails.
    pub fn set_offset_y(&mut self, offset: u16) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.check_range(u32::from(offset), 0x7FF, 0)?;
        self.dsp()?.yoffl().write(|w| {
            w.set_offset_low((offset & 0xFF) as u8);
        })?;
        self.dsp()?.vhyx().modify(|w| {
            w.set_y_offset_high((offset >> 8) as u8);
        })?;
        Ok(())
    }

    /// Get the 11-bit vertical offset
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_offset_y(&mut self) -> DriverResult<u16, I> {
        let low = self.dsp()?.yoffl().read()?.offset_low();
        let high = self.dsp()?.vhyx().read()?.y_offset_high();
        Ok(u16::from(high) << 8 | u16::from(low))
    }

    /// Set DP_SELX (DPRP[3:0])
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `selx > 0xF`, otherwise an error if
    /// the driver is not initialized or communication fails.
    pub fn set_dp_selx(&mut self, selx: u8) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.check_range(u32::from(selx), 0xF, 0)?;
        self.dsp()?.dprp().modify(|w| {
            w.set_dp_selx(selx);
        })?;
        Ok(())
    }

    /// Get DP_SELX
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_dp_selx(&mut self) -> DriverResult<u8, I> {
        Ok(self.dsp()?.dprp().read()?.dp_selx())
    }

    /// Set DP_SELY (DPRP[7:4])
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `sely > 0xF`, otherwise an error if
    /// the driver is not initialized or communication fails.
    pub fn set_dp_sely(&mut self, sely: u8) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.check_range(u32::from(sely), 0xF, 0)?;
        self.dsp()?.dprp().modify(|w| {
            w.set_dp_sely(sely);
        })?;
        Ok(())
    }

    /// Get DP_SELY
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_dp_sely(&mut self) -> DriverResult<u8, I> {
        Ok(self.dsp()?.dprp().read()?.dp_sely())
    }

    /// Set the 10-bit output width, in units of 4 pixels (ZMOW + ZMHH[1:0])
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `width > 0x3FF`, otherwise an error if
    /// the driver is not initialized or communication fails.
    pub fn set_output_width(&mut self, width: u16) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.check_range(u32::from(width), 0x3FF, 0)?;
        self.dsp()?.zmow().write(|w| {
            w.set_width_low((width & 0xFF) as u8);
        })?;
        self.dsp()?.zmhh().modify(|w| {
            w.set_width_high((width >> 8) as u8);
        })?;
        Ok(())
    }

    /// Get the 10-bit output width
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_output_width(&mut self) -> DriverResult<u16, I> {
        let low = self.dsp()?.zmow().read()?.width_low();
        let high = self.dsp()?.zmhh().read()?.width_high();
        Ok(u16::from(high) << 8 | u16::from(low))
    }

    /// Set the 9-bit output height, in units of 4 lines (ZMOH + ZMHH bit 2)
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `height > 0x1FF`, otherwise an error if
    /// the driver is not initialized or communication fails.
    pub fn set_output_height(&mut self, height: u16) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.check_range(u32::from(height), 0x1FF, 0)?;
        self.dsp()?.zmoh().write(|w| {
            w.set_height_low((height & 0xFF) as u8);
        })?;
        self.dsp()?.zmhh().modify(|w| {
            w.set_height_high(height & 0x100 != 0);
        })?;
        Ok(())
    }

    /// Get the 9-bit output height
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_output_height(&mut self) -> DriverResult<u16, I> {
        let low = self.dsp()?.zmoh().read()?.height_low();
        let high = self.dsp()?.zmhh().read()?.height_high();
        Ok(u16::from(high) << 8 | u16::from(low))
    }

    /// Set the zoom speed (ZMHH[7:4])
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `speed > 0xF`, otherwise an error if
    /// the driver is not initialized or communication fails.
    pub fn set_zoom_speed(&mut self, speed: u8) -> DriverResult<(), I> {
        self.check_initialized()?;
        self.check_range(u32::from(speed), 0xF, 0)?;
        self.dsp()?.zmhh().modify(|w| {
            w.set_zoom_speed(speed);
        })?;
        Ok(())
    }

    /// Get the zoom speed
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn get_zoom_speed(&mut self) -> DriverResult<u8, I> {
        Ok(self.dsp()?.zmhh().read()?.zoom_speed())
    }
}
